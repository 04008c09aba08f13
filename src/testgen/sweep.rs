use crate::half::F16;

use std::io::{self, Write};

/// The exponent and fraction field values whose combinations make up the operands of a test
/// file.
///
/// The values are OR-ed into a bit pattern as `fraction | exponent << 10` without any masking,
/// so a "fraction" wider than 10 bits spills into the exponent and sign fields, and
/// an exponent wider than 5 bits into the sign (or off the top).
#[derive(Debug, Clone)]
#[derive(Eq, PartialEq, Hash)]
pub struct Sweep {
  pub exponents: Vec<u16>,
  pub fractions: Vec<u16>,
}

impl Sweep {
  pub fn new(exponents: &[u16], fractions: &[u16]) -> Self {
    Self { exponents: exponents.to_vec(), fractions: fractions.to_vec() }
  }

  /// Exponent 15 (i.e. 2^0), significands 1.0 and 1.1 (binary).
  pub fn easy() -> Self {
    Self::new(&[15], &[0x000, 0x200])
  }

  /// A spread of exponents, and fractions at and around the corners of the field.
  pub fn med() -> Self {
    Self::new(&[0, 4, 10, 19], &[0x0000, 0x4000, 0x1111, 0x1fff, 0x2000, 0x3011, 0x3fff, 0x7fff])
  }

  /// Zeros, subnormals, and (via the oversized exponent) negative numbers.
  pub fn nan() -> Self {
    Self::new(&[0x0000, 0x0ff0], &[0x000, 0x01f])
  }

  /// The single operand `0x43ec` (3.9609375), whose square plus itself stresses the carry and
  /// sticky logic.
  pub fn torture() -> Self {
    Self::new(&[16], &[0x3ec])
  }

  /// The operand bit patterns, exponent-major and fraction-minor.
  pub fn candidates(&self) -> Vec<F16> {
    let mut cases = Vec::with_capacity(self.exponents.len() * self.fractions.len());
    for &e in &self.exponents {
      for &f in &self.fractions {
        cases.push(F16::from_bits(f | e << F16::FRAC_BITS));
      }
    }
    cases
  }
}

/// Write the description line of a test file to `out`, and return the candidate operands of
/// `sweep`. The order of the candidates determines the order of the lines in the file, which
/// must be reproducible.
pub fn prep_tests<W: Write>(sweep: &Sweep, desc: &str, out: &mut W) -> io::Result<Vec<F16>> {
  writeln!(out, "{desc}")?;
  Ok(sweep.candidates())
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn header_and_candidates() {
    let mut out = Vec::new();
    let cases = prep_tests(&Sweep::easy(), "// Multiply 1.0 and 1.5", &mut out).unwrap();
    assert_eq!(out, b"// Multiply 1.0 and 1.5\n");
    assert_eq!(cases, vec![F16::ONE, F16::from_bits(0x3e00)]);
  }

  #[test]
  fn presets() {
    assert_eq!(Sweep::torture().candidates(), vec![F16::from_bits(0x43ec)]);
    assert_eq!(Sweep::med().candidates().len(), 32);
    // 0x0ff0 << 10 keeps only its low 6 bits, 0b110000, of which the top one is the sign.
    assert_eq!(
      Sweep::nan().candidates().iter().map(|c| c.to_bits()).collect::<Vec<_>>(),
      [0x0000, 0x001f, 0xc000, 0xc01f],
    );
    // Fractions wider than the field spill into the exponent.
    assert_eq!(Sweep::med().candidates()[1].to_bits(), 0x4000);
    assert_eq!(Sweep::med().candidates()[31].to_bits(), 0x7fff | 19 << 10);
  }

  proptest!{
    #[test]
    fn cartesian_order(
      exponents in proptest::collection::vec(0u16 ..= 31, 1 .. 8),
      fractions in proptest::collection::vec(0u16 ..= 0x3ff, 1 .. 8),
    ) {
      let sweep = Sweep { exponents: exponents.clone(), fractions: fractions.clone() };
      let cases = sweep.candidates();
      prop_assert_eq!(cases.len(), exponents.len() * fractions.len());
      for (i, case) in cases.iter().enumerate() {
        let expected = fractions[i % fractions.len()] | exponents[i / fractions.len()] << 10;
        prop_assert_eq!(case.to_bits(), expected);
      }
    }
  }
}
