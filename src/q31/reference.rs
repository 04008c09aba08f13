//! The canonical test vector: two periods of a 10-sample sine wave through a 4-tap low-pass.

use super::*;

const fn q(bits: u32) -> Q31 {
  Q31::from_bits_unsigned(bits)
}

/// `sin(2πk/10)` for `k` in `0 .. 20`, in Q1.31.
pub const SIN_TABLE: [Q31; 20] = [
  q(0x00000000),
  q(0x4B3C8C12),
  q(0x79BC384D),
  q(0x79BC384D),
  q(0x4B3C8C12),
  q(0x00000000),
  q(0xB4C373EE),
  q(0x8643C7B3),
  q(0x8643C7B3),
  q(0xB4C373EE),
  q(0x00000000),
  q(0x4B3C8C12),
  q(0x79BC384D),
  q(0x79BC384D),
  q(0x4B3C8C12),
  q(0x00000000),
  q(0xB4C373EE),
  q(0x8643C7B3),
  q(0x8643C7B3),
  q(0xB4C373EE),
];

/// Roughly ¼ each; the low bits differ so that a filter that mixes up the tap order is caught.
pub const LOWPASS: [Q31; 4] = [
  q(0x20000001),
  q(0x20000002),
  q(0x20000003),
  q(0x20000004),
];

/// `fir(SIN_TABLE, LOWPASS)`.
pub const EXPECTED: [Q31; 17] = [
  q(0x4fad3f2f),
  q(0x627c6236),
  q(0x4fad3f32),
  q(0x1e6f0e17),
  q(0xe190f1eb),
  q(0xb052c0ce),
  q(0x9d839dc6),
  q(0xb052c0cb),
  q(0xe190f1e6),
  q(0x1e6f0e12),
  q(0x4fad3f2f),
  q(0x627c6236),
  q(0x4fad3f32),
  q(0x1e6f0e17),
  q(0xe190f1eb),
  q(0xb052c0ce),
  q(0x9d839dc6),
];

/// Filter [`SIN_TABLE`] with [`LOWPASS`] and check the result against [`EXPECTED`].
pub fn run() -> Result<(), Mismatch> {
  let y = fir(&SIN_TABLE, &LOWPASS);
  verify(&y, &EXPECTED)
}
