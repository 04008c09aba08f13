/// How an inexact result is turned into a representable one.
///
/// The discriminants are the 4-bit rounding mode field of the operation byte understood by the
/// hardware under test (`NearMaxMag` is not implemented there, but the oracle supports it).
#[derive(Debug, Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub enum RoundingMode {
  /// Round toward zero (RZ).
  MinMag = 0,
  /// Round to nearest, ties to even (RNE).
  #[default]
  NearEven = 1,
  /// Round toward −∞ (RM).
  Min = 2,
  /// Round toward +∞ (RP).
  Max = 3,
  /// Round to nearest, ties away from zero (RMM).
  NearMaxMag = 4,
}

impl RoundingMode {
  /// All rounding modes, in order of encoding.
  pub const ALL: [Self; 5] = [Self::MinMag, Self::NearEven, Self::Min, Self::Max, Self::NearMaxMag];

  /// The encoding of this mode in the operation byte.
  pub const fn encoding(self) -> u8 {
    self as u8
  }

  /// The short name used in test file names (`rz`, `rne`, `rm`, `rp`, `rmm`).
  pub const fn short_name(self) -> &'static str {
    match self {
      Self::MinMag => "rz",
      Self::NearEven => "rne",
      Self::Min => "rm",
      Self::Max => "rp",
      Self::NearMaxMag => "rmm",
    }
  }

  /// Given the sign of a result, the parity of its truncated significand, and what was cut off,
  /// decide whether the significand has to be incremented by one ulp.
  pub(crate) const fn increments(self, negative: bool, odd: bool, tail: Tail) -> bool {
    match (self, tail) {
      (_, Tail::Zero) => false,
      (Self::MinMag, _) => false,
      (Self::Min, _) => negative,
      (Self::Max, _) => !negative,
      (Self::NearEven, Tail::Half) => odd,
      (Self::NearEven | Self::NearMaxMag, Tail::AboveHalf) => true,
      (Self::NearMaxMag, Tail::Half) => true,
      (Self::NearEven | Self::NearMaxMag, Tail::BelowHalf) => false,
    }
  }

  /// On overflow, whether the result is ±∞ (as opposed to the largest finite number of that
  /// sign).
  pub(crate) const fn overflows_to_infinity(self, negative: bool) -> bool {
    match self {
      Self::NearEven | Self::NearMaxMag => true,
      Self::MinMag => false,
      Self::Min => negative,
      Self::Max => !negative,
    }
  }
}

/// What has been cut off when truncating a significand, relative to half an ulp of what's kept.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub(crate) enum Tail {
  Zero,
  BelowHalf,
  Half,
  AboveHalf,
}

/// When an inexact result is considered *tiny* for the purpose of raising underflow.
#[derive(Debug, Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub enum Tininess {
  /// Tiny if the exact result is below the smallest normal magnitude.
  #[default]
  BeforeRounding,
  /// Tiny if the result, rounded as if the exponent range were unbounded, is below the smallest
  /// normal magnitude.
  AfterRounding,
}

/// The floating point environment in which an operation executes.
#[derive(Debug, Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct Env {
  pub rounding: RoundingMode,
  pub tininess: Tininess,
}

impl Env {
  pub const fn new(rounding: RoundingMode, tininess: Tininess) -> Self {
    Self { rounding, tininess }
  }
}

/// A set of IEEE-754 exception flags.
///
/// The bit layout is that of the common C soft-float register: inexact is bit 0, underflow bit 1,
/// overflow bit 2, divide-by-zero bit 3, invalid bit 4.
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct Flags(u8);

impl Flags {
  pub const INEXACT: Self = Self(0x01);
  pub const UNDERFLOW: Self = Self(0x02);
  pub const OVERFLOW: Self = Self(0x04);
  pub const DIV_BY_ZERO: Self = Self(0x08);
  pub const INVALID: Self = Self(0x10);

  /// No flags raised.
  pub const fn empty() -> Self {
    Self(0)
  }

  pub const fn from_bits(bits: u8) -> Self {
    Self(bits & 0x1f)
  }

  pub const fn bits(self) -> u8 {
    self.0
  }

  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  pub const fn contains(self, other: Self) -> bool {
    self.0 & other.0 == other.0
  }

  pub fn insert(&mut self, other: Self) {
    self.0 |= other.0
  }

  pub fn clear(&mut self) {
    self.0 = 0
  }

  pub const fn invalid(self) -> bool { self.contains(Self::INVALID) }
  pub const fn overflow(self) -> bool { self.contains(Self::OVERFLOW) }
  pub const fn underflow(self) -> bool { self.contains(Self::UNDERFLOW) }
  pub const fn inexact(self) -> bool { self.contains(Self::INEXACT) }

  /// Pack invalid, overflow, underflow, inexact into a nibble (bits 3 to 0), dropping
  /// divide-by-zero, which a multiply-add can never raise.
  pub const fn nibble(self) -> u8 {
    (self.0 & 0x7) | ((self.0 >> 1) & 0x8)
  }
}

impl core::ops::BitOr for Flags {
  type Output = Flags;

  fn bitor(self, rhs: Self) -> Self::Output { Self(self.0 | rhs.0) }
}

impl core::ops::BitOrAssign for Flags {
  fn bitor_assign(&mut self, rhs: Self) { self.0 |= rhs.0 }
}

impl core::fmt::Debug for Flags {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let names = [
      (Self::INVALID, "INVALID"),
      (Self::DIV_BY_ZERO, "DIV_BY_ZERO"),
      (Self::OVERFLOW, "OVERFLOW"),
      (Self::UNDERFLOW, "UNDERFLOW"),
      (Self::INEXACT, "INEXACT"),
    ];
    let mut set = f.debug_set();
    for (flag, name) in names {
      if self.contains(flag) {
        set.entry(&format_args!("{name}"));
      }
    }
    set.finish()
  }
}
