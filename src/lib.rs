//! This crate provides the software side of two small hardware verification exercises: a Q1.31
//! fixed-point FIR filter checked against a known-good output, and a generator of golden test
//! vectors for a half-precision fused multiply-add unit.
//!
//! # Introduction
//!
//! Both pieces are references for a hardware design. The FIR filter is the program a small
//! RISC-V core runs, with exactly the truncating arithmetic that core performs, so that its
//! output can be compared bit for bit. The test vector generator enumerates operands for an
//! `x × y + z` datapath on IEEE-754 binary16 numbers and writes, for each combination, the
//! correctly rounded result and the exception flags the hardware is expected to raise.
//!
//! The expected results come from [`F16`], a small software binary16 implementation with an
//! explicit floating point environment ([`Env`]) and returned exception [`Flags`], checked in
//! tests against exact rational arithmetic.
//!
//! # Usage
//!
//! ```
//! use fir_fma16::{F16, Env, Flags, RoundingMode, Tininess, Q31};
//!
//! // Q1.31: truncating multiply, wide accumulate.
//! let half = Q31::from_bits(0x4000_0000);
//! assert_eq!(fir_fma16::mul_q31(half, half).to_bits(), 0x2000_0000);
//! assert_eq!(fir_fma16::q31::reference::run(), Ok(()));
//!
//! // binary16: one rounding, flags as a value.
//! let x = F16::from_bits(0x43ec);
//! let env = Env::new(RoundingMode::MinMag, Tininess::BeforeRounding);
//! let (r, flags) = x.mul_add(x, x, env);
//! assert_eq!((r.to_bits(), flags), (0x4ce9, Flags::INEXACT));
//!
//! // A golden test vector line.
//! use fir_fma16::testgen::{gen_case, Allowed, CaseParams};
//! let params = CaseParams {
//!   mul: true, add: true, negate_product: false, negate_z: false,
//!   rounding: RoundingMode::MinMag, tininess: Tininess::BeforeRounding, allowed: Allowed::ALL,
//! };
//! assert_eq!(
//!   gen_case(x, x, x, params).to_string(),
//!   "43ec_43ec_43ec_0c_4ce9_1 // 3.960938 * 3.960938 + 3.960938 = 19.640625 NV: 0 OF: 0 UF: 0 NX: 1",
//! );
//! ```
//!
//! Both are also available as binaries: `fir` runs the filter on the reference vector and exits
//! with a nonzero status on mismatch, and `fma16-testgen` writes `.tv` files into a directory.

pub mod q31;
pub mod half;
pub mod testgen;

pub use q31::{add_q31, fir, mul_q31, verify, Mismatch, Q31};
pub use half::{Env, Flags, RoundingMode, Tininess, F16};

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x8000} else {0x8_0000};
