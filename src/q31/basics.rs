use super::*;

impl Q31 {
  /// The number of fractional bits.
  pub const FRAC_BITS: u32 = 31;

  /// Zero.
  pub const ZERO: Self = Self(0);

  /// Largest representable value, `1 - 2^-31`.
  pub const MAX: Self = Self(i32::MAX);

  /// Smallest representable value, exactly `-1`.
  pub const MIN: Self = Self(i32::MIN);

  /// One quarter (`0x2000_0000`), the nominal tap weight of a 4-tap moving average.
  pub const ONE_QUARTER: Self = Self(1 << 29);

  /// Construct a Q1.31 number from its raw bit representation.
  #[inline]
  pub const fn from_bits(bits: i32) -> Self {
    Self(bits)
  }

  /// As [`Self::from_bits`], but from the unsigned bit pattern, which is how hex literals for
  /// negative values are usually written (`0xB4C373EE`).
  #[inline]
  pub const fn from_bits_unsigned(bits: u32) -> Self {
    Self(bits as i32)
  }

  /// Return the raw bit representation.
  #[inline]
  pub const fn to_bits(self) -> i32 {
    self.0
  }

  /// Return the raw bit representation, as an unsigned integer.
  #[inline]
  pub const fn to_bits_unsigned(self) -> u32 {
    self.0 as u32
  }
}
