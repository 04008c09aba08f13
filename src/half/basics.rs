use super::*;

impl F16 {
  /// Construct from a raw bit pattern.
  #[inline]
  pub const fn from_bits(bits: u16) -> Self {
    Self(bits)
  }

  /// Return the raw bit pattern.
  #[inline]
  pub const fn to_bits(self) -> u16 {
    self.0
  }

  /// Whether the sign bit is set (this includes `-0` and NaNs with the sign bit set).
  #[inline]
  pub const fn is_sign_negative(self) -> bool {
    self.0 & Self::SIGN_MASK != 0
  }

  #[inline]
  pub const fn is_nan(self) -> bool {
    self.0 & Self::EXP_MASK == Self::EXP_MASK && self.0 & Self::FRAC_MASK != 0
  }

  /// A NaN whose quiet bit (the msb of the fraction) is clear.
  #[inline]
  pub const fn is_signaling_nan(self) -> bool {
    self.is_nan() && self.0 & Self::QUIET_BIT == 0
  }

  #[inline]
  pub const fn is_infinite(self) -> bool {
    self.0 & !Self::SIGN_MASK == Self::EXP_MASK
  }

  #[inline]
  pub const fn is_finite(self) -> bool {
    self.0 & Self::EXP_MASK != Self::EXP_MASK
  }

  #[inline]
  pub const fn is_zero(self) -> bool {
    self.0 & !Self::SIGN_MASK == 0
  }

  /// Nonzero, with an exponent field of 0.
  #[inline]
  pub const fn is_subnormal(self) -> bool {
    self.0 & Self::EXP_MASK == 0 && self.0 & Self::FRAC_MASK != 0
  }

  /// Clear the sign bit. Applies to NaNs too.
  #[inline]
  pub const fn abs(self) -> Self {
    Self(self.0 & !Self::SIGN_MASK)
  }

  /// Flip the sign bit. Applies to NaNs too.
  #[inline]
  pub const fn negate(self) -> Self {
    Self(self.0 ^ Self::SIGN_MASK)
  }

  /// A zero with the given sign.
  #[inline]
  pub(crate) const fn zero(negative: bool) -> Self {
    if negative {Self::NEG_ZERO} else {Self::ZERO}
  }

  /// An infinity with the given sign.
  #[inline]
  pub(crate) const fn infinity(negative: bool) -> Self {
    if negative {Self::NEG_INFINITY} else {Self::INFINITY}
  }
}

impl core::ops::Neg for F16 {
  type Output = F16;

  #[inline]
  fn neg(self) -> Self::Output { self.negate() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nans() {
    assert!(F16::from_bits(0x7c01).is_signaling_nan());
    assert!(F16::from_bits(0xfc01).is_signaling_nan());
    assert!(F16::from_bits(0x7dff).is_signaling_nan());
    assert!(!F16::from_bits(0x7e01).is_signaling_nan());
    assert!(F16::from_bits(0xffff).is_nan());
    assert!(!F16::from_bits(0x7c00).is_nan());
  }

  #[test]
  fn sign() {
    assert!(F16::NEG_ZERO.is_sign_negative());
    assert!(!F16::ZERO.is_sign_negative());
    assert_eq!(F16::NEG_ZERO.abs(), F16::ZERO);
    assert_eq!(F16::ONE.negate().to_bits(), 0xbc00);
    assert_eq!(-(-F16::ONE), F16::ONE);
  }

  #[test]
  fn exhaustive_classification_is_a_partition() {
    for bits in 0 ..= u16::MAX {
      let x = F16::from_bits(bits);
      let normal = x.is_finite() && !x.is_zero() && !x.is_subnormal();
      let classes = [x.is_nan(), x.is_infinite(), x.is_zero(), x.is_subnormal(), normal];
      assert_eq!(classes.iter().filter(|&&c| c).count(), 1, "{x:?}");
    }
  }
}
