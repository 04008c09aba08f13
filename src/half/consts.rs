use super::*;

impl F16 {
  /// Number of explicit fraction bits.
  pub const FRAC_BITS: u32 = 10;

  /// Number of exponent bits.
  pub const EXP_BITS: u32 = 5;

  /// Exponent bias.
  pub const BIAS: i32 = 15;

  /// IEEE exponent of [`Self::MIN_POSITIVE`], the smallest normal number.
  pub const MIN_EXP: i32 = 1 - Self::BIAS;

  /// IEEE exponent of [`Self::MAX`].
  pub const MAX_EXP: i32 = Self::BIAS;

  /// Weight of the lsb of a subnormal, `2^-24`.
  pub(crate) const SUBNORMAL_LSB_EXP: i32 = Self::MIN_EXP - Self::FRAC_BITS as i32;

  pub(crate) const SIGN_MASK: u16 = 0x8000;
  pub(crate) const EXP_MASK: u16 = 0x7c00;
  pub(crate) const FRAC_MASK: u16 = 0x03ff;
  pub(crate) const QUIET_BIT: u16 = 0x0200;

  /// Positive zero.
  pub const ZERO: Self = Self(0x0000);

  /// Negative zero.
  pub const NEG_ZERO: Self = Self(0x8000);

  /// One.
  pub const ONE: Self = Self(0x3c00);

  /// Positive infinity.
  pub const INFINITY: Self = Self(0x7c00);

  /// Negative infinity.
  pub const NEG_INFINITY: Self = Self(0xfc00);

  /// Largest finite number, 65504.
  pub const MAX: Self = Self(0x7bff);

  /// Smallest finite number, -65504.
  pub const MIN: Self = Self(0xfbff);

  /// Smallest positive *normal* number, 2^-14.
  pub const MIN_POSITIVE: Self = Self(0x0400);

  /// Smallest positive subnormal number, 2^-24.
  pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);

  /// The canonical quiet NaN. Every operation that produces a NaN produces exactly this bit
  /// pattern, whatever the NaN operands were.
  pub const NAN: Self = Self(0x7e00);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classification() {
    assert!(F16::ZERO.is_zero() && F16::NEG_ZERO.is_zero());
    assert!(F16::INFINITY.is_infinite() && F16::NEG_INFINITY.is_infinite());
    assert!(F16::NAN.is_nan() && !F16::NAN.is_signaling_nan());
    assert!(F16::MIN_POSITIVE_SUBNORMAL.is_subnormal() && !F16::MIN_POSITIVE.is_subnormal());
    assert!(F16::MAX.is_finite() && !F16::MAX.is_nan());
    assert_eq!(-F16::MAX, F16::MIN);
    assert_eq!(F16::SUBNORMAL_LSB_EXP, -24);
    assert_eq!(F16::MIN_EXP, -14);
  }
}
