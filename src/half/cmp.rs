use super::*;

impl F16 {
  /// Map a non-NaN number to an integer with the same ordering: positive numbers are ordered like
  /// their bit patterns, negative ones in reverse, and both zeros map to 0.
  const fn order_key(self) -> i32 {
    let mag = (self.0 & !Self::SIGN_MASK) as i32;
    if self.is_sign_negative() {-mag} else {mag}
  }

  /// IEEE `compareQuietLess`: `self < other`, false if either is NaN. `-0` and `+0` are equal.
  pub const fn lt(self, other: Self) -> bool {
    !self.is_nan() && !other.is_nan() && self.order_key() < other.order_key()
  }

  /// IEEE `compareSignalingLess`: as [`Self::lt`], but any NaN operand raises invalid.
  pub fn lt_signaling(self, other: Self, flags: &mut Flags) -> bool {
    if self.is_nan() || other.is_nan() {
      flags.insert(Flags::INVALID);
      return false
    }
    self.lt(other)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn examples() {
    assert!(F16::from_bits(0x03ff).lt(F16::MIN_POSITIVE));
    assert!(!F16::MIN_POSITIVE.lt(F16::MIN_POSITIVE));
    assert!(F16::NEG_INFINITY.lt(F16::MIN));
    assert!(F16::MAX.lt(F16::INFINITY));
    assert!(!F16::NEG_ZERO.lt(F16::ZERO) && !F16::ZERO.lt(F16::NEG_ZERO));
    assert!(F16::from_bits(0x8001).lt(F16::ZERO));
    assert!(!F16::NAN.lt(F16::ONE) && !F16::ONE.lt(F16::NAN));
  }

  #[test]
  fn signaling() {
    let mut flags = Flags::empty();
    assert!(F16::ZERO.lt_signaling(F16::ONE, &mut flags));
    assert!(flags.is_empty());
    assert!(!F16::NAN.lt_signaling(F16::ONE, &mut flags));
    assert_eq!(flags, Flags::INVALID);
  }

  #[test]
  fn exhaustive_against_f32() {
    // Widening is exact and monotonic, so the order must agree with `f32`'s.
    let sample = (0 ..= u16::MAX).step_by(97).map(F16::from_bits).collect::<Vec<_>>();
    for &a in &sample {
      for &b in &sample {
        assert_eq!(a.lt(b), a.to_f32() < b.to_f32(), "{a:?} < {b:?}");
      }
    }
  }
}
