use super::*;

/// Fused multiply-add, and multiplication and addition in terms of it.
mod mul_add;

impl F16 {
  /// `self × other`, correctly rounded. Computed as the fused `self × other + 0`, with the zero
  /// chosen to be an identity of addition: `-0`, except toward −∞, where `-0 + +0 = -0` and so
  /// `+0` is the identity.
  pub fn mul(self, other: Self, env: Env) -> (Self, Flags) {
    let identity = if env.rounding == RoundingMode::Min {Self::ZERO} else {Self::NEG_ZERO};
    self.mul_add(other, identity, env)
  }

  /// `self + other`, correctly rounded. Computed as the fused `self × 1 + other`.
  pub fn add(self, other: Self, env: Env) -> (Self, Flags) {
    self.mul_add(Self::ONE, other, env)
  }
}
