//! Portable fallback engine.
//!
//! Runs the same 8/4/2/1 chunk cascade as the hardware kernels, but folds
//! each word through table lookups instead of a CPU instruction. Keeping the
//! cascade shape identical means the chunking and remainder handling (the
//! part of the fast path that actually goes wrong) is exercised on every
//! platform, with or without the instruction.

// Table indices are masked to 8 bits before use.
#![allow(clippy::indexing_slicing)]

use crate::constants::CRC_TABLE;

/// Fold a single byte into the running checksum.
#[inline]
#[must_use]
pub(crate) const fn fold_u8(crc: u32, x: u8) -> u32 {
  (crc >> 8) ^ CRC_TABLE.0[((crc ^ x as u32) & 0xFF) as usize]
}

/// Fold a little-endian halfword, low byte first.
#[inline]
#[must_use]
pub(crate) const fn fold_u16(crc: u32, x: u16) -> u32 {
  let crc = fold_u8(crc, x as u8);
  fold_u8(crc, (x >> 8) as u8)
}

/// Fold a little-endian word.
#[inline]
#[must_use]
pub(crate) const fn fold_u32(crc: u32, x: u32) -> u32 {
  let crc = fold_u16(crc, x as u16);
  fold_u16(crc, (x >> 16) as u16)
}

/// Fold a little-endian doubleword.
///
/// All eight bytes participate; this mirrors `_mm_crc32_u64` /`__crc32cd`,
/// whose 64-bit form folds the full operand even though the register is 32
/// bits wide.
#[inline]
#[must_use]
pub(crate) const fn fold_u64(crc: u32, x: u64) -> u32 {
  let crc = fold_u32(crc, x as u32);
  fold_u32(crc, (x >> 32) as u32)
}

/// Compute the checksum with the software fold primitives.
///
/// `crc` is the raw register value (no pre/post complement). Consumes exactly
/// `data.len()` bytes: 8-byte words while they last, then at most one each of
/// a 4-, 2- and 1-byte step for the remainder.
#[inline]
#[must_use]
pub fn compute(crc: u32, data: &[u8]) -> u32 {
  let mut crc = crc;
  let mut rest = data;

  while let Some((word, tail)) = rest.split_first_chunk::<8>() {
    crc = fold_u64(crc, u64::from_le_bytes(*word));
    rest = tail;
  }

  if let Some((word, tail)) = rest.split_first_chunk::<4>() {
    crc = fold_u32(crc, u32::from_le_bytes(*word));
    rest = tail;
  }

  if let Some((half, tail)) = rest.split_first_chunk::<2>() {
    crc = fold_u16(crc, u16::from_le_bytes(*half));
    rest = tail;
  }

  if let Some(&byte) = rest.first() {
    crc = fold_u8(crc, byte);
  }

  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{CONVENTIONAL_SEED, DISPATCH_SEED};
  use crate::reference::crc32_reference;

  #[test]
  fn cascade_matches_reference_for_all_remainders() {
    // 0..=32 covers every remainder class of the 8/4/2/1 cascade at least
    // twice, including the empty buffer.
    let data: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(37).wrapping_add(11));
    for len in 0..=data.len() {
      for seed in [0, DISPATCH_SEED, CONVENTIONAL_SEED, 0x0123_4567] {
        assert_eq!(
          compute(seed, &data[..len]),
          crc32_reference(seed, &data[..len]),
          "len {len}, seed {seed:#x}"
        );
      }
    }
  }

  #[test]
  fn fold_primitives_match_byte_steps() {
    let crc = 0x89AB_CDEF;

    let bytes = [0x01, 0x02];
    let stepped = bytes.iter().fold(crc, |c, &b| fold_u8(c, b));
    assert_eq!(fold_u16(crc, u16::from_le_bytes(bytes)), stepped);

    let bytes = [0x01, 0x02, 0x03, 0x04];
    let stepped = bytes.iter().fold(crc, |c, &b| fold_u8(c, b));
    assert_eq!(fold_u32(crc, u32::from_le_bytes(bytes)), stepped);

    let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let stepped = bytes.iter().fold(crc, |c, &b| fold_u8(c, b));
    assert_eq!(fold_u64(crc, u64::from_le_bytes(bytes)), stepped);
  }

  #[test]
  fn empty_is_identity() {
    assert_eq!(compute(DISPATCH_SEED, b""), DISPATCH_SEED);
  }
}
