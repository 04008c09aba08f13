//! Signed Q1.31 fixed-point numbers, and a direct-form FIR filter built on them.
//!
//! A Q1.31 number is a 32-bit two's complement integer `raw`, read as the rational `raw / 2^31`.
//! It has 1 integer bit (the sign) and 31 fractional bits, so it covers the range [-1, 1[ with a
//! uniform step of 2^-31.
//!
//! Products are *truncated* (floor, via an arithmetic shift), and nothing saturates. Sums are
//! returned in a wider `i64` and the caller decides when and how to narrow. This is what a small
//! RISC-V core does with `mul`/`mulh` and plain integer adds.

/// A Q1.31 fixed-point number.
///
/// ```
/// # use fir_fma16::Q31;
/// let half = Q31::from_bits(0x4000_0000);
/// assert_eq!((half * half).to_bits(), 0x2000_0000);
/// ```
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]  // Same as for the underlying i32
pub struct Q31(i32);

/// Construction, constants, raw bits.
mod basics;

/// `add_q31`, `mul_q31`, operators.
mod ops;

/// Conversions to and from `f64`.
mod convert;

/// Debug formatting.
mod fmt;

/// The FIR filter and its verification.
pub mod fir;

/// The hand-written sine table test vector.
pub mod reference;

pub use convert::RangeError;
pub use fir::{fir, verify, Mismatch};
pub use ops::{add_q31, mul_q31};
