use super::*;

use thiserror::Error;

/// Filter `x` with the taps `c`, returning a fresh output of length `x.len() - c.len() + 1`.
///
/// This is a direct-form convolution over fully materialised inputs, computing only the "valid"
/// part (no padding at either end):
///
///   y[j] = c[0]·x[j+m-1] + c[1]·x[j+m-2] + … + c[m-1]·x[j]
///
/// for `j` in `0 ..= n-m`. Each product is a [`mul_q31`], each partial sum an [`add_q31`] which is
/// narrowed back to 32 bits straight away, exactly as if it were stored into `y[j]` after every
/// tap.
///
/// If there are more taps than samples, the valid range is empty and so is the output. An empty
/// `c` also gives an empty output.
pub fn fir(x: &[Q31], c: &[Q31]) -> Vec<Q31> {
  let (n, m) = (x.len(), c.len());
  if m == 0 || m > n {
    return Vec::new()
  }

  x.windows(m)
    .map(|window| {
      // `window[k]` is `x[j+k]`, so tap `c[i]` meets `window[m-1-i]`: the taps run over the window
      // back to front.
      c.iter()
        .zip(window.iter().rev())
        .fold(Q31::ZERO, |acc, (&tap, &sample)| Q31::truncate(add_q31(acc, mul_q31(tap, sample))))
    })
    .collect()
}

/// The error returned by [`verify`]: the first position where the output differs from the
/// expectation. A length mismatch is reported at the first index past the shorter of the two.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("mismatch at element {index}: expected {}, got {}", Element(.expected), Element(.actual))]
pub struct Mismatch {
  pub index: usize,
  pub expected: Option<Q31>,
  pub actual: Option<Q31>,
}

/// One side of a [`Mismatch`]: the raw bits, or `<missing>` past the end.
struct Element<'a>(&'a Option<Q31>);

impl core::fmt::Display for Element<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.0 {
      Some(x) => write!(f, "{x:#010x}"),
      None => f.write_str("<missing>"),
    }
  }
}

/// Compare `actual` against `expected` element by element, for exact bit equality. Fixed-point
/// arithmetic is deterministic, so there is no tolerance.
pub fn verify(actual: &[Q31], expected: &[Q31]) -> Result<(), Mismatch> {
  let len = actual.len().max(expected.len());
  for index in 0 .. len {
    let a = actual.get(index).copied();
    let e = expected.get(index).copied();
    if a != e {
      return Err(Mismatch { index, expected: e, actual: a })
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn q(v: &[i32]) -> Vec<Q31> {
    v.iter().copied().map(Q31::from_bits).collect()
  }

  /// The formula, written out with indices and 64-bit intermediates.
  fn fir_by_the_book(x: &[i32], c: &[i32]) -> Vec<i32> {
    let (n, m) = (x.len(), c.len());
    let mut y = vec![0i32; n + 1 - m];
    for j in 0 ..= n - m {
      for i in 0 .. m {
        let product = ((i64::from(c[i]) * i64::from(x[j + m - 1 - i])) >> 31) as i32;
        y[j] = (i64::from(y[j]) + i64::from(product)) as i32;
      }
    }
    y
  }

  #[test]
  fn single_tap_is_scaling() {
    let x = q(&[0x4000_0000, -0x4000_0000, 0x1000_0000]);
    let y = fir(&x, &[Q31::from_bits(0x4000_0000)]);
    assert_eq!(y, q(&[0x2000_0000, -0x2000_0000, 0x0800_0000]));
  }

  #[test]
  fn taps_are_reversed_against_samples() {
    // With taps (a, b), y[j] = a·x[j+1] + b·x[j].
    let x = q(&[0x4000_0000, 0]);
    let c = q(&[0, 0x4000_0000]);
    assert_eq!(fir(&x, &c), q(&[0x2000_0000]));
    let c = q(&[0x4000_0000, 0]);
    assert_eq!(fir(&x, &c), q(&[0]));
  }

  #[test]
  fn accumulator_wraps_to_32_bits() {
    let x = q(&[i32::MAX, i32::MAX]);
    let c = q(&[i32::MAX, i32::MAX]);
    let one = ((i64::from(i32::MAX) * i64::from(i32::MAX)) >> 31) as i32;
    assert_eq!(fir(&x, &c), vec![Q31::from_bits(one.wrapping_add(one))]);
  }

  #[test]
  fn degenerate_lengths() {
    let x = q(&[1, 2, 3]);
    assert!(fir(&x, &q(&[1, 2, 3, 4])).is_empty());
    assert!(fir(&x, &[]).is_empty());
    assert!(fir(&[], &[]).is_empty());
    assert_eq!(fir(&x, &q(&[1, 2, 3])).len(), 1);
  }

  #[test]
  fn verify_reports_first_mismatch() {
    let a = q(&[1, 2, 3]);
    assert_eq!(verify(&a, &a), Ok(()));
    assert_eq!(
      verify(&a, &q(&[1, 5, 7])),
      Err(Mismatch { index: 1, expected: Some(Q31::from_bits(5)), actual: Some(Q31::from_bits(2)) }),
    );
    assert_eq!(
      verify(&a, &q(&[1, 2])),
      Err(Mismatch { index: 2, expected: None, actual: Some(Q31::from_bits(3)) }),
    );
    assert_eq!(
      verify(&q(&[-1]), &q(&[-1, 0])),
      Err(Mismatch { index: 1, expected: Some(Q31::ZERO), actual: None }),
    );
  }

  #[test]
  fn mismatch_message() {
    let err = verify(&q(&[0x4fad3f2f]), &q(&[0x4fad3f2e])).unwrap_err();
    assert_eq!(err.to_string(), "mismatch at element 0: expected 0x4fad3f2e, got 0x4fad3f2f");
    let err = verify(&q(&[-1]), &q(&[-1, 0x20])).unwrap_err();
    assert_eq!(err.to_string(), "mismatch at element 1: expected 0x00000020, got <missing>");
    let err = verify(&q(&[-1]), &[]).unwrap_err();
    assert_eq!(err.to_string(), "mismatch at element 0: expected <missing>, got 0xffffffff");
  }

  fn samples_and_taps() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    (1usize ..= 32).prop_flat_map(|n| (
      proptest::collection::vec(any::<i32>(), n),
      proptest::collection::vec(any::<i32>(), 1 ..= n),
    ))
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn matches_formula((x, c) in samples_and_taps()) {
      let y = fir(&q(&x), &q(&c));
      prop_assert_eq!(y.len(), x.len() - c.len() + 1);
      prop_assert_eq!(y, q(&fir_by_the_book(&x, &c)));
    }
  }
}
