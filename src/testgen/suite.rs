use super::{Allowed, Generator, Kind, Result, Summary, Sweep, TestFile};
use crate::half::RoundingMode;

/// One file to generate.
#[derive(Debug, Clone)]
#[derive(Eq, PartialEq, Hash)]
pub struct Job {
  pub kind: Kind,
  pub file: TestFile,
}

/// A named set of test files.
#[derive(Debug, Clone, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct Suite {
  pub jobs: Vec<Job>,
}

impl Suite {
  /// The names accepted by [`Suite::by_name`].
  pub const NAMES: [&'static str; 6] = ["basic", "med", "special", "nan", "torture", "all"];

  pub fn by_name(name: &str) -> Option<Self> {
    Some(match name {
      "basic" => Self::basic(),
      "med" => Self::med(),
      "special" => Self::special(),
      "nan" => Self::nan(),
      "torture" => Self::torture(),
      "all" => Self::all(),
      _ => return None,
    })
  }

  /// Each operation on 1.0 and 1.5, round toward zero.
  pub fn basic() -> Self {
    use Kind::*;
    let desc = "with exponent of 0, significand of 1.0 and 1.1, RZ";
    let file = |name: &str, op: &str| TestFile::new(name, &format!("// {op} {desc}"), Sweep::easy(), false, RoundingMode::MinMag, Allowed::NONE);
    Self { jobs: vec![
      Job { kind: Mul, file: file("fmul_0", "Multiply") },
      Job { kind: Add, file: file("fadd_0", "Add") },
      Job { kind: MulAdd, file: file("fadd_mul_0", "Multiply + Add") },
    ] }
  }

  /// Each operation on the medium sweep, unsigned and then signed, round toward zero.
  pub fn med() -> Self {
    use Kind::*;
    let file = |name: &str, signed: bool, desc: &str| TestFile::new(name, desc, Sweep::med(), signed, RoundingMode::MinMag, Allowed::NONE);
    Self { jobs: vec![
      Job { kind: Mul, file: file("fmul_1", false, "// Multiply with all positive values") },
      Job { kind: Add, file: file("fadd_1", false, "// Add with a positive") },
      Job { kind: MulAdd, file: file("fadd_mul_1", false, "// Multiply + Add with exponent of 0, significand of 1.0 and 1.1, RZ") },
      Job { kind: Mul, file: file("fmul_2", true, "// Multiply with all negative values (signal = 1)") },
      Job { kind: Add, file: file("fadd_2", true, "// Add with a negative (signal = 1)") },
      Job { kind: MulAdd, file: file("fadd_mul_2", true, "// Multiply + Add with a negative (signal = 1)") },
    ] }
  }

  /// Signed fused operations on the medium sweep with specials allowed, once per directed or
  /// nearest-even rounding mode.
  pub fn special() -> Self {
    Self { jobs: HARDWARE_MODES.iter().map(|&rounding| {
      let name = format!("fma_special_{}", rounding.short_name());
      let desc = format!(
        "// Multiply + Add with a negative (signal = 1) and {} Rounding",
        rounding.short_name().to_uppercase(),
      );
      Job { kind: Kind::MulAdd, file: TestFile::new(&name, &desc, Sweep::med(), true, rounding, Allowed::ALL) }
    }).collect() }
  }

  /// Fused operations on zeros, subnormals and negative values, per rounding mode, unsigned
  /// (`_p`) and signed (`_n`).
  pub fn nan() -> Self {
    let mut jobs = Vec::new();
    for (signed, suffix) in [(false, "p"), (true, "n")] {
      for &rounding in &HARDWARE_MODES {
        let name = format!("fma_nan_{}_{suffix}", rounding.short_name());
        let desc = format!("// NaN with {} Rounding (signal = {})", rounding.short_name().to_uppercase(), u8::from(signed));
        jobs.push(Job { kind: Kind::MulAdd, file: TestFile::new(&name, &desc, Sweep::nan(), signed, rounding, Allowed::ALL) });
      }
    }
    Self { jobs }
  }

  /// `0x43ec × ±0x43ec + ±0x43ec`, round toward zero.
  pub fn torture() -> Self {
    let file = TestFile::new(
      "zoe_torture_rz",
      "// Multiply + Add torture case with a negative (signal = 1) and RZ Rounding",
      Sweep::torture(),
      true,
      RoundingMode::MinMag,
      Allowed::ALL,
    );
    Self { jobs: vec![Job { kind: Kind::MulAdd, file }] }
  }

  /// Every suite above.
  pub fn all() -> Self {
    let jobs = [Self::basic(), Self::med(), Self::special(), Self::nan(), Self::torture()]
      .into_iter()
      .flat_map(|suite| suite.jobs)
      .collect();
    Self { jobs }
  }
}

/// The rounding modes the hardware under test implements (it has no round-to-nearest-max-mag).
const HARDWARE_MODES: [RoundingMode; 4] = [
  RoundingMode::MinMag,
  RoundingMode::NearEven,
  RoundingMode::Min,
  RoundingMode::Max,
];

impl Generator {
  /// Generate every file of `suite` in order, stopping at the first error.
  pub fn run_suite(&self, suite: &Suite) -> Result<Vec<Summary>> {
    suite.jobs.iter().map(|job| self.generate(job.kind, &job.file)).collect()
  }
}
