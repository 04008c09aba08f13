use super::*;

use core::fmt::{Debug, LowerHex};

impl Debug for Q31 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Q31")
      .field(&format_args!("0x{:08x}", self.to_bits_unsigned()))
      .finish()
  }
}

impl LowerHex for Q31 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    LowerHex::fmt(&self.to_bits_unsigned(), f)
  }
}
