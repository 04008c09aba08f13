use crate::half::{Env, Flags, RoundingMode, Tininess, F16};

use core::fmt::{self, Display};

/// The operation byte sent to the hardware along with the operands: rounding mode in bits 7:4,
/// then one bit each for multiply, add, negate product, and negate addend.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct OpCode(u8);

impl OpCode {
  pub const fn new(rounding: RoundingMode, mul: bool, add: bool, negate_product: bool, negate_z: bool) -> Self {
    Self(
      rounding.encoding() << 4
      | (mul as u8) << 3
      | (add as u8) << 2
      | (negate_product as u8) << 1
      | negate_z as u8
    )
  }

  pub const fn bits(self) -> u8 {
    self.0
  }

  pub const fn mul(self) -> bool { self.0 & 0b1000 != 0 }
  pub const fn add(self) -> bool { self.0 & 0b0100 != 0 }
  pub const fn negate_product(self) -> bool { self.0 & 0b0010 != 0 }
  pub const fn negate_z(self) -> bool { self.0 & 0b0001 != 0 }
}

/// Which special results count as valid tests for the hardware. Lines with a disallowed result
/// are still written, but commented out.
#[derive(Debug, Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct Allowed {
  pub zero: bool,
  pub inf: bool,
  pub nan: bool,
}

impl Allowed {
  pub const NONE: Self = Self { zero: false, inf: false, nan: false };
  pub const ALL: Self = Self { zero: true, inf: true, nan: true };
}

/// Everything about a test case except its operands.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct CaseParams {
  pub mul: bool,
  pub add: bool,
  pub negate_product: bool,
  pub negate_z: bool,
  pub rounding: RoundingMode,
  pub tininess: Tininess,
  pub allowed: Allowed,
}

impl CaseParams {
  pub const fn env(&self) -> Env {
    Env::new(self.rounding, self.tininess)
  }

  pub const fn opcode(&self) -> OpCode {
    OpCode::new(self.rounding, self.mul, self.add, self.negate_product, self.negate_z)
  }
}

/// Why a line is commented out for the testbench.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub enum Skip {
  /// The result is subnormal, which the hardware does not handle.
  Denorm,
  /// Underflow was raised.
  Underflow,
  /// The result is ±0, and zeros are not allowed.
  Zero,
  /// The result is ±∞, or the ±MAX that an overflow saturates to, and infinities are not allowed.
  Inf,
  /// The result is a NaN, and NaNs are not allowed.
  NaN,
}

impl Skip {
  pub const fn prefix(self) -> &'static str {
    match self {
      Self::Denorm => "// skip denorm: ",
      Self::Underflow => "// skip underflow: ",
      Self::Zero => "// skip zero: ",
      Self::Inf => "// Skip inf: ",
      Self::NaN => "// Skip NaN: ",
    }
  }
}

/// One golden test vector: the effective operands, the operation, and the expected result and
/// flags. Its [`Display`] is one line of a `.tv` file.
#[derive(Debug, Clone)]
#[derive(Eq, PartialEq)]
pub struct Case {
  pub x: F16,
  pub y: F16,
  pub z: F16,
  pub op: OpCode,
  pub result: F16,
  pub flags: Flags,
  pub skips: Vec<Skip>,
}

/// Build the test case for `x × y + z` under `params`.
///
/// If `params.mul` is false, `y` is replaced by 1 so the operation is an addition; if
/// `params.add` is false, `z` is replaced by +0 so it is a multiplication. The negation bits then
/// flip the signs of `x` (negating the product) and `z`. The oracle sees exactly the operands
/// that end up in the record.
pub fn gen_case(x: F16, y: F16, z: F16, params: CaseParams) -> Case {
  let y = if params.mul {y} else {F16::ONE};
  let z = if params.add {z} else {F16::ZERO};
  let x = if params.negate_product {x.negate()} else {x};
  let z = if params.negate_z {z.negate()} else {z};

  let (result, flags) = x.mul_add(y, z, params.env());

  let mag = result.abs();
  let allowed = params.allowed;
  let skips = [
    (mag.lt(F16::MIN_POSITIVE) && !mag.is_zero(), Skip::Denorm),
    (flags.underflow(), Skip::Underflow),
    (mag.is_zero() && !allowed.zero, Skip::Zero),
    ((mag == F16::INFINITY || mag == F16::MAX) && !allowed.inf, Skip::Inf),
    (mag.is_nan() && !allowed.nan, Skip::NaN),
  ].into_iter().filter_map(|(skip, why)| skip.then_some(why)).collect();

  Case { x, y, z, op: params.opcode(), result, flags, skips }
}

impl Case {
  pub fn is_skipped(&self) -> bool {
    !self.skips.is_empty()
  }

  /// The operation in decimal, e.g. `1.000000 * 2.000000 + 0.500000 = 2.500000`.
  pub fn calculation(&self) -> String {
    let (x, y, z, r) = (decimal(self.x), decimal(self.y), decimal(self.z), decimal(self.result));
    match (self.op.mul(), self.op.add()) {
      (true, true) => format!("{x} * {y} + {z} = {r}"),
      (true, false) => format!("{x} * {y} = {r}"),
      (false, _) => format!("{x} + {z} = {r}"),
    }
  }

  /// The flags, spelled out, e.g. `NV: 0 OF: 1 UF: 0 NX: 1`.
  pub fn flag_summary(&self) -> String {
    let f = self.flags;
    format!(
      "NV: {} OF: {} UF: {} NX: {}",
      u8::from(f.invalid()), u8::from(f.overflow()), u8::from(f.underflow()), u8::from(f.inexact()),
    )
  }
}

/// A binary16 value widened to `f32` and printed with six decimals, the way C's `%f` does.
pub fn decimal(x: F16) -> String {
  let v = x.to_f32();
  let sign = if v.is_sign_negative() {"-"} else {""};
  if v.is_nan() {
    format!("{sign}nan")
  } else if v.is_infinite() {
    format!("{sign}inf")
  } else {
    format!("{v:.6}")
  }
}

impl Display for Case {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for skip in &self.skips {
      f.write_str(skip.prefix())?;
    }
    write!(
      f,
      "{:04x}_{:04x}_{:04x}_{:02x}_{:04x}_{:01x} // {} {}",
      self.x, self.y, self.z, self.op.bits(), self.result, self.flags.nibble(),
      self.calculation(), self.flag_summary(),
    )
  }
}
