use super::*;

/// Add two Q1.31 numbers into a 64-bit accumulator.
///
/// There is no rounding and no saturation: a sum outside [-1, 1[ is simply carried in the upper
/// bits of the `i64`. Narrowing back to 32 bits is the caller's business.
#[inline]
pub const fn add_q31(a: Q31, b: Q31) -> i64 {
  a.0 as i64 + b.0 as i64
}

/// Multiply two Q1.31 numbers.
///
/// The exact product of two Q1.31 numbers is a Q2.62 number, which always fits in an `i64`. We
/// shift it right by 31 to get back to Q1.31 and keep the low 32 bits. The arithmetic shift
/// rounds towards −∞ (truncation of the two's complement value), and the only product that does
/// not fit, `-1 × -1 = +1`, wraps to `-1`.
#[inline]
pub const fn mul_q31(a: Q31, b: Q31) -> Q31 {
  let wide = a.0 as i64 * b.0 as i64;  // Q2.62
  Q31((wide >> Q31::FRAC_BITS) as i32)  // Q1.31
}

impl Q31 {
  /// Narrow a wide accumulator back to Q1.31, keeping the low 32 bits.
  #[inline]
  pub const fn truncate(wide: i64) -> Self {
    Self(wide as i32)
  }

  /// See [`mul_q31`].
  #[inline]
  pub const fn mul(self, other: Self) -> Self {
    mul_q31(self, other)
  }
}

use core::ops::{Mul, MulAssign};

impl Mul for Q31 {
  type Output = Q31;

  #[inline]
  fn mul(self, rhs: Self) -> Self::Output { mul_q31(self, rhs) }
}

impl Mul<&Q31> for Q31 {
  type Output = Q31;

  #[inline]
  fn mul(self, rhs: &Self) -> Self::Output { mul_q31(self, *rhs) }
}

impl MulAssign for Q31 {
  #[inline]
  fn mul_assign(&mut self, rhs: Self) { *self = mul_q31(*self, rhs) }
}
