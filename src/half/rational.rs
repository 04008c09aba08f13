use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};

/// The error type returned when a [F16] cannot be converted to a [Rational] because it is an
/// infinity or a NaN.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct NotFinite;

impl TryFrom<F16> for Rational {
  type Error = NotFinite;

  /// This is a **super-explicit** rendition of the binary16 encoding, independent of
  /// [`F16::decode`], since this is what the arithmetic is checked against.
  fn try_from(value: F16) -> Result<Self, Self::Error> {
    let bits = value.to_bits();
    let sign = bits >> 15;
    let exponent = i64::from((bits >> 10) & 0b11111);
    let fraction = Rational::from(bits & 0b11_1111_1111) / Rational::power_of_2(10i64);

    let magnitude = match exponent {
      31 => return Err(NotFinite),
      0 => fraction * Rational::power_of_2(-14i64),
      _ => (Rational::from(1) + fraction) * Rational::power_of_2(exponent - 15),
    };
    Ok(if sign == 1 {-magnitude} else {magnitude})
  }
}

/// The value of a positive finite bit pattern, except that the pattern just above [`F16::MAX`]
/// (that of ∞) is given the value 2^16, the next number on the grid if the exponent didn't run
/// out.
fn grid_value(bits: u16) -> Rational {
  if bits == F16::INFINITY.to_bits() {
    Rational::power_of_2(16i64)
  } else {
    Rational::try_from(F16::from_bits(bits)).unwrap()
  }
}

/// Round the nonzero rational `exact` to a binary16 according to `env`, the slow and obvious way,
/// returning the result and the flags IEEE-754 prescribes. Only [`Tininess::BeforeRounding`] is
/// supported.
///
/// Positive bit patterns from `0x0000` to `0x7c00` are ordered like their values, so a binary
/// search over them finds the two neighbours `lo ≤ |exact| < hi` of `|exact|`. Treating the
/// pattern of ∞ as 2^16 puts the overflow thresholds of every rounding mode in the right place:
/// a result that picks it has overflowed.
pub fn round(exact: &Rational, env: Env) -> (F16, Flags) {
  assert!(*exact != Rational::from(0), "Exact zero has no sign to round with");
  assert_eq!(env.tininess, Tininess::BeforeRounding);
  let negative = *exact < Rational::from(0);
  let abs = exact.abs();
  let sign_bit = if negative {0x8000} else {0};
  let mut flags = Flags::empty();

  let overflow = |flags: &mut Flags| {
    flags.insert(Flags::OVERFLOW | Flags::INEXACT);
    if env.rounding.overflows_to_infinity(negative) {
      F16::from_bits(sign_bit | 0x7c00)
    } else {
      F16::from_bits(sign_bit | 0x7bff)
    }
  };

  if abs >= Rational::power_of_2(16i64) {
    return (overflow(&mut flags), flags)
  }

  // Largest `lo` with `grid_value(lo) <= abs`.
  let (mut lo, mut hi) = (0u16, 0x7bffu16);
  while lo < hi {
    let mid = lo + (hi - lo + 1) / 2;
    if grid_value(mid) <= abs { lo = mid } else { hi = mid - 1 }
  }
  let hi = lo + 1;

  let lo_value = grid_value(lo);
  if lo_value == abs {
    return (F16::from_bits(sign_bit | lo), flags)
  }
  flags.insert(Flags::INEXACT);
  if abs < Rational::power_of_2(-14i64) {
    flags.insert(Flags::UNDERFLOW);
  }

  let hi_value = grid_value(hi);
  let away = match env.rounding {
    RoundingMode::MinMag => false,
    RoundingMode::Min => negative,
    RoundingMode::Max => !negative,
    RoundingMode::NearEven | RoundingMode::NearMaxMag => {
      let to_lo = &abs - &lo_value;
      let to_hi = &hi_value - &abs;
      if to_lo != to_hi {
        to_hi < to_lo
      } else if env.rounding == RoundingMode::NearMaxMag {
        true
      } else {
        hi & 1 == 0
      }
    },
  };

  let bits = if away {hi} else {lo};
  if bits == 0x7c00 {
    return (overflow(&mut flags), flags)
  }
  (F16::from_bits(sign_bit | bits), flags)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn examples() {
    for (bits, (num, den)) in [
      (0x0000, (0, 1)),
      (0x0001, (1, 1 << 24)),
      (0x03ff, (1023, 1 << 24)),
      (0x0400, (1, 1 << 14)),
      (0x3555, (1365, 4096)),
      (0x3c00, (1, 1)),
      (0x3c01, (1025, 1024)),
      (0x43ec, (507, 128)),
      (0x7bff, (65504, 1)),
    ] {
      assert_eq!(Rational::try_from(F16::from_bits(bits)), Ok(Rational::from_signeds(num, den)));
      assert_eq!(Rational::try_from(F16::from_bits(bits | 0x8000)), Ok(Rational::from_signeds(-num, den)));
    }
    assert_eq!(Rational::try_from(F16::INFINITY), Err(NotFinite));
    assert_eq!(Rational::try_from(F16::NAN), Err(NotFinite));
  }

  #[test]
  fn round_trips_every_finite_value() {
    let env = Env::default();
    for bits in 0x0001 ..= 0x7bff {
      for bits in [bits, bits | 0x8000] {
        let x = F16::from_bits(bits);
        assert_eq!(round(&Rational::try_from(x).unwrap(), env), (x, Flags::empty()));
      }
    }
  }

  #[test]
  fn round_examples() {
    let rne = Env::default();
    let third = Rational::from_signeds(1, 3);
    assert_eq!(round(&third, rne), (F16::from_bits(0x3555), Flags::INEXACT));
    assert_eq!(round(&Rational::from(65520), rne), (F16::INFINITY, Flags::OVERFLOW | Flags::INEXACT));
    assert_eq!(round(&Rational::from(-65519), rne), (F16::MIN, Flags::INEXACT));
    assert_eq!(
      round(&Rational::power_of_2(-25i64), rne),
      (F16::ZERO, Flags::UNDERFLOW | Flags::INEXACT),
    );
    let rz = Env { rounding: RoundingMode::MinMag, ..rne };
    assert_eq!(round(&Rational::from(1 << 20), rz), (F16::MAX, Flags::OVERFLOW | Flags::INEXACT));
  }
}
