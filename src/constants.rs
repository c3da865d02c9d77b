//! Precomputed constants: polynomial, seeds, and the lookup table.
//!
//! The table is computed at compile time by a `const fn`, so there is no
//! lazy-initialization step and nothing to synchronize; every build embeds the
//! identical 256 entries.
//!
//! # Cache Alignment
//!
//! The lookup table is 64-byte (cache line) aligned using [`Aligned64`] to
//! prevent cache line splits during table lookups.

// Indexing in `generate_table` is bounded by the `while i < 256` loop.
#![allow(clippy::indexing_slicing)]

/// CRC32-C (Castagnoli) polynomial in reflected (bit-reversed) form.
///
/// The normal form is 0x1EDC6F41; the reflected form suits LSB-first
/// processing and matches the polynomial implemented by the SSE4.2 `crc32`
/// and ARMv8 `crc32c*` instructions.
pub const POLYNOMIAL: u32 = 0x82F6_3B78;

/// Seed used by this crate's string-hash convention.
///
/// Deliberately `1` rather than the conventional all-ones seed: hash values
/// produced under this seed are the match targets embedded in dispatch code,
/// and changing it would silently re-key every dispatch table. Hash producers
/// and hash consumers must agree on this value.
pub const DISPATCH_SEED: u32 = 1;

/// The conventional CRC32-C seed (all ones).
///
/// Not used by the string-hash convention. Standard CRC32-C additionally
/// complements the final register; this crate never does. To reproduce a
/// published CRC32-C value: `crc32(CONVENTIONAL_SEED, data) ^ CONVENTIONAL_SEED`.
pub const CONVENTIONAL_SEED: u32 = 0xFFFF_FFFF;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner type `T` is accessible via `.0`.
#[repr(align(64))]
pub struct Aligned64<T>(pub T);

/// Byte-indexed CRC lookup table.
///
/// Entry `i` is the CRC contribution of the single byte value `i`: eight
/// reflected division steps starting from a register holding `i`.
pub static CRC_TABLE: Aligned64<[u32; 256]> = Aligned64(generate_table(POLYNOMIAL));

/// Generate the 256-entry lookup table for a reflected polynomial.
///
/// Deterministic and idempotent: recomputing at run time yields the same
/// entries as the compile-time [`CRC_TABLE`].
#[must_use]
pub const fn generate_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;

  while i < 256 {
    let mut crc = i as u32;
    let mut bit = 0;
    while bit < 8 {
      if crc & 1 != 0 {
        crc = (crc >> 1) ^ poly;
      } else {
        crc >>= 1;
      }
      bit += 1;
    }
    table[i] = crc;
    i += 1;
  }

  table
}
