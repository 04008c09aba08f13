//! Golden test vectors for a hardware half-precision fused multiply-add unit.
//!
//! A test file (`<name>.tv`) starts with a free-text description line, followed by one line per
//! test case:
//!
//! ```text
//! 43ec_43ec_43ec_0c_4ce9_1 // 3.960938 * 3.960938 + 3.960938 = 19.640625 NV: 0 OF: 0 UF: 0 NX: 1
//! ```
//!
//! That is the operands `x`, `y`, `z`, the [operation byte](OpCode), the expected result and the
//! expected flags nibble (invalid, overflow, underflow, inexact, from high to low), then a
//! human-readable rendering. Cases the hardware is not expected to handle are kept in the file,
//! but prefixed with one or more `// skip ...:` comments (see [`Skip`]).
//!
//! Operands are built from a [`Sweep`] of exponent and fraction fields, and combined pairwise
//! (multiplication, addition) or three-way (fused multiply-add), optionally also with the sign
//! toggled. Expected results come from [`F16::mul_add`](crate::F16::mul_add).

/// One test case, and its rendering as a line.
mod case;

/// Operand sweeps.
mod sweep;

/// Writing whole files.
mod generator;

/// Named sets of files.
mod suite;

mod error;

pub use case::{decimal, gen_case, Allowed, Case, CaseParams, OpCode, Skip};
pub use error::{Error, Result};
pub use generator::{cases, write_tests, Generator, Kind, Summary, TestFile};
pub use suite::{Job, Suite};
pub use sweep::{prep_tests, Sweep};
