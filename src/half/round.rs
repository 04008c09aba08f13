use super::*;
use super::env::Tail;

/// A nonzero real number held exactly, as `(-1)^negative × mag × 2^exp`, waiting to be rounded to
/// the nearest binary16 according to some [`Env`].
///
/// `mag` is not normalised in any way; `round` finds its leading bit itself.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub(crate) struct Exact {
  pub negative: bool,
  pub mag: u128,
  pub exp: i32,
}

/// Truncate `mag` by `shift` bits (shifting left if `shift` is negative, which is always exact),
/// and classify what was lost.
fn truncate(mag: u128, shift: i32) -> (u128, Tail) {
  if shift <= 0 {
    return (mag << shift.unsigned_abs(), Tail::Zero)
  }
  let shift = shift as u32;
  let kept = mag.checked_shr(shift).unwrap_or(0);
  let lost = if shift >= u128::BITS {mag} else {mag & ((1 << shift) - 1)};
  let tail =
    if lost == 0 {
      Tail::Zero
    } else if let Some(half) = 1u128.checked_shl(shift - 1) {
      match lost.cmp(&half) {
        core::cmp::Ordering::Less => Tail::BelowHalf,
        core::cmp::Ordering::Equal => Tail::Half,
        core::cmp::Ordering::Greater => Tail::AboveHalf,
      }
    } else {
      Tail::BelowHalf
    };
  (kept, tail)
}

impl Exact {
  /// Round to a binary16, raising inexact, overflow, and underflow into `flags` as appropriate.
  pub(crate) fn round(self, env: Env, flags: &mut Flags) -> F16 {
    debug_assert!(self.mag != 0, "Exact zero has no sign to round with: {self:?}");
    const FRAC_BITS: i32 = F16::FRAC_BITS as i32;
    const HIDDEN: u128 = 1 << F16::FRAC_BITS;
    let negative = self.negative;
    let sign_bit = if negative {F16::SIGN_MASK} else {0};

    // The IEEE exponent of the leading 1, i.e. the value lies in [2^e, 2^(e+1)[.
    let leading = (u128::BITS - 1 - self.mag.leading_zeros()) as i32;
    let mut e = leading + self.exp;

    // Where the lsb of the result goes: 10 places below the leading bit for a normal result, or
    // pinned at 2^-24 for a subnormal one.
    let is_subnormal = e < F16::MIN_EXP;
    let lsb = if is_subnormal {F16::SUBNORMAL_LSB_EXP} else {e - FRAC_BITS};
    let (mut sig, tail) = truncate(self.mag, lsb - self.exp);

    // Tininess is judged on the value before it's snapped to the subnormal grid.
    //
    //   - Before rounding: tiny iff the exact value is below 2^-14.
    //   - After rounding: tiny iff rounding to 11 significant bits, with no lower limit on the
    //     exponent, still gives something below 2^-14. The only exact values below 2^-14 that are
    //     *not* tiny in this sense are those in [2^-15, 2^-14[ that round up to 2^-14.
    let tiny = is_subnormal && match env.tininess {
      Tininess::BeforeRounding => true,
      Tininess::AfterRounding => {
        let rounds_up_to_normal = e == F16::MIN_EXP - 1 && {
          let (sig, tail) = truncate(self.mag, e - FRAC_BITS - self.exp);
          sig == (HIDDEN << 1) - 1 && env.rounding.increments(negative, true, tail)
        };
        !rounds_up_to_normal
      },
    };

    if tail != Tail::Zero {
      flags.insert(Flags::INEXACT);
      if tiny {
        flags.insert(Flags::UNDERFLOW);
      }
    }

    if env.rounding.increments(negative, sig & 1 != 0, tail) {
      sig += 1;
    }

    if is_subnormal {
      // Rounding up may carry into the hidden bit: `sig == 2^10` is then exactly the encoding of
      // the smallest normal, so no special handling is needed.
      return F16::from_bits(sign_bit | sig as u16)
    }

    // Rounding up may carry out of the significand (`1.111… + ulp = 10.000…`).
    if sig == HIDDEN << 1 {
      sig >>= 1;
      e += 1;
    }

    if e > F16::MAX_EXP {
      flags.insert(Flags::OVERFLOW | Flags::INEXACT);
      return if env.rounding.overflows_to_infinity(negative) {
        F16::infinity(negative)
      } else {
        F16::from_bits(sign_bit | F16::MAX.to_bits())
      }
    }

    let biased = (e + F16::BIAS) as u16;
    F16::from_bits(sign_bit | biased << F16::FRAC_BITS | (sig as u16 & F16::FRAC_MASK))
  }
}
