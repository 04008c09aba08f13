use super::*;

use core::fmt::{Debug, LowerHex};

impl Debug for F16 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    let sign = bits >> 15;
    let exp = (bits & Self::EXP_MASK) >> Self::FRAC_BITS;
    let frac = bits & Self::FRAC_MASK;
    f.debug_tuple("F16")
      .field(&format_args!("0b{sign:b}_{exp:05b}_{frac:010b}"))
      .finish()
  }
}

impl LowerHex for F16 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    LowerHex::fmt(&self.0, f)
  }
}
