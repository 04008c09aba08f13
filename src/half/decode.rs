use super::*;

/// A finite binary16 number, split into its components, such that its value is exactly
/// `(-1)^negative × sig × 2^exp`.
///
/// Zeros have `sig == 0`. Subnormals have no hidden bit and the same `exp` as the smallest
/// normals, so in both cases `sig` is just the fraction field.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub(crate) struct Decoded {
  pub negative: bool,
  pub sig: u32,
  pub exp: i32,
}

impl F16 {
  /// Decode a finite number. Must not be called on infinities or NaNs.
  pub(crate) const fn decode(self) -> Decoded {
    debug_assert!(self.is_finite());
    let negative = self.is_sign_negative();
    let frac = (self.0 & Self::FRAC_MASK) as u32;
    let biased = ((self.0 & Self::EXP_MASK) >> Self::FRAC_BITS) as i32;

    // An exponent field of 0 behaves as if it were 1, minus the hidden bit.
    if biased == 0 {
      Decoded { negative, sig: frac, exp: Self::SUBNORMAL_LSB_EXP }
    } else {
      let sig = frac | 1 << Self::FRAC_BITS;
      let exp = biased - Self::BIAS - Self::FRAC_BITS as i32;
      Decoded { negative, sig, exp }
    }
  }
}
