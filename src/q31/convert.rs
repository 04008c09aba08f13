use super::*;

use thiserror::Error;

/// The error returned by [`Q31::round_from_f64`] when the value lies outside [-1, 1[.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("value {value} is outside the Q1.31 range [-1, 1)")]
pub struct RangeError {
  pub value: f64,
}

impl Q31 {
  /// The exact value of `self`, as an `f64` (53 bits of precision are always enough).
  pub fn to_f64(self) -> f64 {
    f64::from(self.0) / (1u64 << Self::FRAC_BITS) as f64
  }

  /// Round an `f64` to the nearest Q1.31 number. Values whose rounded result does not fit in
  /// [-1, 1[, as well as NaN, are rejected.
  pub fn round_from_f64(value: f64) -> Result<Self, RangeError> {
    let scaled = (value * (1u64 << Self::FRAC_BITS) as f64).round();
    if scaled.is_nan() || scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
      return Err(RangeError { value })
    }
    Ok(Self(scaled as i32))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_f64() {
    assert_eq!(Q31::ZERO.to_f64(), 0.);
    assert_eq!(Q31::MIN.to_f64(), -1.);
    assert_eq!(Q31::ONE_QUARTER.to_f64(), 0.25);
    assert_eq!(Q31::from_bits(1).to_f64(), 2f64.powi(-31));
  }

  #[test]
  fn round_from_f64() {
    assert_eq!(Q31::round_from_f64(0.25), Ok(Q31::ONE_QUARTER));
    assert_eq!(Q31::round_from_f64(-1.), Ok(Q31::MIN));
    assert_eq!(Q31::round_from_f64(0.587785252292473), Ok(Q31::from_bits_unsigned(0x4B3C8C12)));
    assert!(Q31::round_from_f64(1.).is_err());
    assert!(Q31::round_from_f64(-1.5).is_err());
    assert!(Q31::round_from_f64(f64::NAN).is_err());
  }
}
