use super::*;

impl F16 {
  /// The fused multiply-add `self × y + z`, computed exactly and rounded **once** according to
  /// `env`. Returns the result and the exception flags raised.
  ///
  /// Special cases follow IEEE-754, with the RISC-V convention for NaNs:
  ///
  ///   - Any NaN result is the canonical [`F16::NAN`], whatever the payloads of the operands.
  ///   - Invalid is raised by a signaling NaN in any operand, by `∞ × 0` (even when `z` is a quiet
  ///     NaN), and by `∞ - ∞` between the product and `z`.
  ///   - An exactly zero result is `-0` only if the product and `z` are both `-0`, or under
  ///     [`RoundingMode::Min`] when they cancel; otherwise `+0`.
  ///
  /// ```
  /// # use fir_fma16::{F16, Env, Flags, RoundingMode, Tininess};
  /// let env = Env::new(RoundingMode::MinMag, Tininess::BeforeRounding);
  /// let x = F16::from_bits(0x43ec);
  /// assert_eq!(x.mul_add(x, x, env), (F16::from_bits(0x4ce9), Flags::INEXACT));
  /// ```
  pub fn mul_add(self, y: Self, z: Self, env: Env) -> (Self, Flags) {
    let mut flags = Flags::empty();
    let result = self.mul_add_kernel(y, z, env, &mut flags);
    (result, flags)
  }

  fn mul_add_kernel(self, y: Self, z: Self, env: Env, flags: &mut Flags) -> Self {
    let x = self;
    let product_negative = x.is_sign_negative() ^ y.is_sign_negative();
    let product_invalid =
      x.is_infinite() && y.is_zero() ||
      x.is_zero() && y.is_infinite();

    // NaNs first. Note that `∞ × 0` is invalid even when `z` is a quiet NaN, but not when `x` or
    // `y` themselves are NaN.
    if x.is_nan() || y.is_nan() || z.is_nan() {
      if x.is_signaling_nan() || y.is_signaling_nan() || z.is_signaling_nan() || product_invalid {
        flags.insert(Flags::INVALID)
      }
      return Self::NAN
    }

    // Infinities. An infinite product wins over any finite `z`; against an infinite `z` it has to
    // agree in sign.
    if product_invalid {
      flags.insert(Flags::INVALID);
      return Self::NAN
    }
    if x.is_infinite() || y.is_infinite() {
      if z.is_infinite() && z.is_sign_negative() != product_negative {
        flags.insert(Flags::INVALID);
        return Self::NAN
      }
      return Self::infinity(product_negative)
    }
    if z.is_infinite() {
      return z
    }

    // Everything is finite from here. The product of two 11-bit significands is exact in 22
    // bits; its exponent is the sum of the exponents. To add `z`, put both terms over the smaller
    // of the two exponents (the other one is shifted left, which is exact).
    //
    // Range check: exponents go from -24 (subnormals) to 5 (the lsb of MAX), so the product's
    // goes from -48 to 10. The biggest left shift is then 5 - (-48) = 53 bits, on an 11-bit
    // significand, or 10 - (-24) = 34 bits on a 22-bit product; either way, well within an i128.
    let a = x.decode();
    let b = y.decode();
    let c = z.decode();
    let product_sig = u128::from(a.sig) * u128::from(b.sig);
    let product_exp = a.exp + b.exp;
    let exp = product_exp.min(c.exp);

    let product = (product_sig << (product_exp - exp)) as i128;
    let addend = (u128::from(c.sig) << (c.exp - exp)) as i128;
    let sum =
      if product_negative {-product} else {product} +
      if c.negative {-addend} else {addend};

    if sum == 0 {
      let both_zero = product_sig == 0 && c.sig == 0;
      let negative =
        if both_zero && product_negative == c.negative {
          product_negative
        } else {
          env.rounding == RoundingMode::Min
        };
      return Self::zero(negative)
    }

    Exact { negative: sum < 0, mag: sum.unsigned_abs(), exp }.round(env, flags)
  }
}
