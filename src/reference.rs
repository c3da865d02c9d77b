//! Table-driven reference engine.
//!
//! This is the canonical definition of the checksum: one byte per step, left
//! to right, no final complement. Every optimized path (hardware kernels, the
//! portable word cascade) must produce results identical to
//! [`crc32_reference`] for all inputs; the randomized verifier and the
//! property tests exist to hold them to that.
//!
//! Both functions here are `const fn`, so the same body serves compile-time
//! hashing (see [`crate::hash::const_hash`]) and run-time verification.

// Indexing is bounded by construction: loop indices stay below `data.len()`
// and table indices are masked to 8 bits.
#![allow(clippy::indexing_slicing)]

use crate::constants::CRC_TABLE;

/// Compute the checksum of `data` starting from the register value `seed`,
/// one table lookup per byte.
///
/// Returns the raw final register. Unlike iSCSI CRC32-C there is no final
/// complement, and the seed is whatever the caller passes; the string-hash
/// convention uses [`DISPATCH_SEED`](crate::constants::DISPATCH_SEED).
///
/// Every `u32` is a valid seed, zero included; zero merely weakens the
/// checksum's sensitivity to leading zero bytes, which does not matter for
/// exact-match dispatch.
#[inline]
#[must_use]
pub const fn crc32_reference(seed: u32, data: &[u8]) -> u32 {
  let mut crc = seed;
  let mut i = 0usize;
  while i < data.len() {
    crc = (crc >> 8) ^ CRC_TABLE.0[((crc ^ data[i] as u32) & 0xFF) as usize];
    i += 1;
  }
  crc
}

/// Bit-at-a-time oracle, no lookup table.
///
/// Intentionally slow; it exists so the table itself can be proven against
/// the mathematical definition of the polynomial division.
#[must_use]
pub const fn crc32_bitwise(seed: u32, data: &[u8]) -> u32 {
  let mut crc = seed;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (crate::constants::POLYNOMIAL & mask);
      bit += 1;
    }
    i += 1;
  }
  crc
}
