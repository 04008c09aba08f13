use super::{gen_case, prep_tests, Allowed, Case, CaseParams, Error, Result, Sweep};
use crate::half::{RoundingMode, Tininess, F16};

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Which operation a test file exercises.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub enum Kind {
  Mul,
  Add,
  MulAdd,
}

/// The description of one `.tv` file: its name (without extension), the free-text first line,
/// the operand sweep, whether the sign toggle is swept, the rounding mode, and which special
/// results are valid tests.
#[derive(Debug, Clone)]
#[derive(Eq, PartialEq, Hash)]
pub struct TestFile {
  pub name: String,
  pub desc: String,
  pub sweep: Sweep,
  pub signed: bool,
  pub rounding: RoundingMode,
  pub allowed: Allowed,
}

impl TestFile {
  pub fn new(name: &str, desc: &str, sweep: Sweep, signed: bool, rounding: RoundingMode, allowed: Allowed) -> Self {
    Self { name: name.to_owned(), desc: desc.to_owned(), sweep, signed, rounding, allowed }
  }
}

/// What a finished test file contains.
#[derive(Debug, Clone)]
#[derive(Eq, PartialEq, Hash)]
pub struct Summary {
  pub path: PathBuf,
  pub cases: usize,
  pub skipped: usize,
}

/// Writes golden test-vector files into a directory.
#[derive(Debug, Clone)]
pub struct Generator {
  out_dir: PathBuf,
  tininess: Tininess,
}

impl Generator {
  /// A generator writing into `out_dir`, which is created if it doesn't exist yet.
  pub fn new(out_dir: impl Into<PathBuf>, tininess: Tininess) -> Result<Self> {
    let out_dir = out_dir.into();
    fs::create_dir_all(&out_dir)
      .map_err(|source| Error::CreateDir { path: out_dir.clone(), source })?;
    Ok(Self { out_dir, tininess })
  }

  pub fn out_dir(&self) -> &Path {
    &self.out_dir
  }

  pub fn tininess(&self) -> Tininess {
    self.tininess
  }

  /// Multiplications `x × y` over every pair of candidates (and, if signed, also `x × -y`).
  pub fn gen_mul_tests(&self, file: &TestFile) -> Result<Summary> {
    self.generate(Kind::Mul, file)
  }

  /// Additions `x + z` over every pair of candidates (and, if signed, also `x + -z`).
  pub fn gen_add_tests(&self, file: &TestFile) -> Result<Summary> {
    self.generate(Kind::Add, file)
  }

  /// Fused `x × y + z` over every triple of candidates (and, if signed, also `x × -y + -z`).
  pub fn gen_mul_add_tests(&self, file: &TestFile) -> Result<Summary> {
    self.generate(Kind::MulAdd, file)
  }

  /// Generate the file for `kind`, as [`gen_mul_tests`](Self::gen_mul_tests) and friends.
  pub fn generate(&self, kind: Kind, file: &TestFile) -> Result<Summary> {
    let path = self.out_dir.join(format!("{}.tv", file.name));
    let handle = File::create(&path)
      .map_err(|source| Error::Create { path: path.clone(), source })?;
    tracing::debug!(path = %path.display(), ?kind, rounding = file.rounding.short_name(), "generating");

    let mut out = BufWriter::new(handle);
    let written = write_tests(kind, file, self.tininess, &mut out).and_then(|counts| {
      out.flush()?;
      Ok(counts)
    });
    let (cases, skipped) = written.map_err(|source| Error::Write { path: path.clone(), source })?;

    tracing::info!(path = %path.display(), cases, skipped, "wrote test vectors");
    Ok(Summary { path, cases, skipped })
  }
}

/// Every case of `file` for the operation `kind`, in file order.
pub fn cases(kind: Kind, file: &TestFile, tininess: Tininess) -> Vec<Case> {
  let candidates = file.sweep.candidates();
  let mut out = Vec::new();
  for_each_case(kind, file, tininess, &candidates, |case| out.push(case));
  out
}

/// Write the description line and all cases of `file` to `out`, returning the number of case
/// lines and how many of them are commented out.
pub fn write_tests<W: Write>(kind: Kind, file: &TestFile, tininess: Tininess, out: &mut W) -> io::Result<(usize, usize)> {
  let candidates = prep_tests(&file.sweep, &file.desc, out)?;
  let (mut cases, mut skipped) = (0, 0);
  let mut result = Ok(());
  for_each_case(kind, file, tininess, &candidates, |case| {
    if result.is_err() {
      return
    }
    cases += 1;
    skipped += usize::from(case.is_skipped());
    result = writeln!(out, "{case}");
  });
  result.map(|()| (cases, skipped))
}

fn for_each_case(kind: Kind, file: &TestFile, tininess: Tininess, candidates: &[F16], mut f: impl FnMut(Case)) {
  let params = CaseParams {
    mul: kind != Kind::Add,
    add: kind != Kind::Mul,
    negate_product: false,
    negate_z: false,
    rounding: file.rounding,
    tininess,
    allowed: file.allowed,
  };
  let signs: &[bool] = if file.signed {&[false, true]} else {&[false]};
  let flip = |v: F16, negate: bool| if negate {v.negate()} else {v};

  match kind {
    Kind::Mul => {
      for &x in candidates {
        for &y in candidates {
          for &s in signs {
            f(gen_case(x, flip(y, s), F16::ZERO, params))
          }
        }
      }
    },
    Kind::Add => {
      for &x in candidates {
        for &z in candidates {
          for &s in signs {
            f(gen_case(x, F16::ZERO, flip(z, s), params))
          }
        }
      }
    },
    Kind::MulAdd => {
      for &x in candidates {
        for &y in candidates {
          for &z in candidates {
            for &s in signs {
              f(gen_case(x, flip(y, s), flip(z, s), params))
            }
          }
        }
      }
    },
  }
}
