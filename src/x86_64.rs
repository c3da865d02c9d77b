//! x86_64 kernel using the SSE4.2 `crc32` instructions.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

#[cfg(any(target_feature = "sse4.2", feature = "std"))]
use core::arch::x86_64::{_mm_crc32_u8, _mm_crc32_u16, _mm_crc32_u32, _mm_crc32_u64};

/// Compute the checksum with SSE4.2 `crc32` instructions.
///
/// Consumes 8-byte words while they last, then a 4/2/1 tail, so exactly
/// `data.len()` bytes are folded regardless of length or alignment (the word
/// loads are assembled from byte chunks, never aligned loads).
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[cfg(any(target_feature = "sse4.2", feature = "std"))]
#[target_feature(enable = "sse4.2")]
pub(crate) unsafe fn compute_sse42_unchecked(crc: u32, data: &[u8]) -> u32 {
  let mut rest = data;

  // _mm_crc32_u64 works on a 64-bit register; the upper 32 bits stay zero.
  let mut wide = crc as u64;
  while let Some((word, tail)) = rest.split_first_chunk::<8>() {
    wide = _mm_crc32_u64(wide, u64::from_le_bytes(*word));
    rest = tail;
  }
  let mut crc = wide as u32;

  if let Some((word, tail)) = rest.split_first_chunk::<4>() {
    crc = _mm_crc32_u32(crc, u32::from_le_bytes(*word));
    rest = tail;
  }

  if let Some((half, tail)) = rest.split_first_chunk::<2>() {
    crc = _mm_crc32_u16(crc, u16::from_le_bytes(*half));
    rest = tail;
  }

  if let Some(&byte) = rest.first() {
    crc = _mm_crc32_u8(crc, byte);
  }

  crc
}

/// Compute with SSE4.2 when it is enabled at compile time.
#[cfg(target_feature = "sse4.2")]
#[inline]
pub(crate) fn compute_sse42_enabled(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: this function is only compiled when `target_feature="sse4.2"`.
  unsafe { compute_sse42_unchecked(crc, data) }
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn compute_sse42_runtime(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: selected only when `is_x86_feature_detected!("sse4.2")` is true.
  unsafe { compute_sse42_unchecked(crc, data) }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  extern crate std;

  use crate::constants::{CONVENTIONAL_SEED, DISPATCH_SEED};
  use crate::reference::crc32_reference;

  #[test]
  fn sse42_matches_reference() {
    if !std::arch::is_x86_feature_detected!("sse4.2") {
      return;
    }

    let data: [u8; 64] = core::array::from_fn(|i| (i as u8).wrapping_mul(151));
    for len in 0..=data.len() {
      for seed in [0, DISPATCH_SEED, CONVENTIONAL_SEED] {
        assert_eq!(
          super::compute_sse42_runtime(seed, &data[..len]),
          crc32_reference(seed, &data[..len]),
          "len {len}, seed {seed:#x}"
        );
      }
    }
  }
}
