use super::*;

impl F16 {
  /// Widen to an `f32`. Every binary16 number is exactly representable as an `f32`, so this never
  /// rounds. NaNs all widen to the canonical `f32` quiet NaN.
  pub const fn to_f32(self) -> f32 {
    const F32_FRAC_BITS: u32 = f32::MANTISSA_DIGITS - 1;
    const F32_BIAS: i32 = f32::MAX_EXP - 1;

    let sign = (self.0 as u32 & Self::SIGN_MASK as u32) << 16;
    if self.is_nan() {
      return f32::from_bits(0x7fc0_0000)
    }
    if self.is_infinite() {
      return f32::from_bits(sign | 0x7f80_0000)
    }
    if self.is_zero() {
      return f32::from_bits(sign)
    }

    // Normalise: put the leading 1 of the significand in the hidden bit position of an `f32`. For
    // normals it's already at bit 10; subnormals need shifting up.
    let Decoded { sig, exp, .. } = self.decode();
    let leading = u32::BITS - 1 - sig.leading_zeros();
    let e = exp + leading as i32;
    let frac = (sig << (F32_FRAC_BITS - leading)) & ((1 << F32_FRAC_BITS) - 1);
    let biased = (e + F32_BIAS) as u32;
    f32::from_bits(sign | biased << F32_FRAC_BITS | frac)
  }
}

impl From<F16> for f32 {
  fn from(value: F16) -> Self {
    value.to_f32()
  }
}
