//! A software implementation of IEEE-754 binary16 ("half precision") arithmetic, just wide enough
//! to act as the golden reference for a hardware fused multiply-add unit.
//!
//! Unlike a C soft-float library, there is no global state here. The rounding mode and the
//! tininess detection rule travel with every call in an [`Env`], and the exception flags raised by
//! an operation are *returned* as a [`Flags`] value. Two computations with different
//! environments can therefore be freely interleaved.
//!
//! Layout of a binary16 number, msb to lsb:
//!
//!   - 1 sign bit;
//!   - 5 exponent bits, biased by 15; 0 marks zeros and subnormals, 31 marks infinities and NaNs;
//!   - 10 fraction bits, with an implicit leading 1 for normal numbers.
//!
//! Some notation used in the comments:
//!
//!   - **sig**: the significand as an integer, hidden bit included (11 bits for normals).
//!   - **exp**: the exponent *of the least significant bit* of `sig`, so that the value is exactly
//!     `sig × 2^exp`. This is not the IEEE exponent: for normals, `exp = e - 15 - 10`.

/// An IEEE-754 binary16 floating point number, stored as its raw bit pattern.
///
/// `Eq` and `Hash` compare bit patterns, *not* IEEE values: `+0 != -0` and `NaN == NaN` for the
/// same payload. For the IEEE comparison, see [`F16::lt`].
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct F16(u16);

/// Basics: raw bits and classification.
mod basics;

/// Constants.
mod consts;

/// The floating point environment (rounding, tininess) and the exception flags.
mod env;

/// Splitting a finite number into sign, significand, and exponent.
mod decode;

/// Rounding an exact result and packing it into a bit pattern.
mod round;

/// Arithmetic.
mod ops;

/// Comparisons.
mod cmp;

/// Widening to `f32`.
mod convert;

/// Debug formatting.
mod fmt;

/// Exact rational values, used as an oracle in tests.
#[cfg(test)]
pub(crate) mod rational;


pub use env::{Env, Flags, RoundingMode, Tininess};
pub(crate) use decode::Decoded;
pub(crate) use round::Exact;
