//! aarch64 kernel using the ARMv8 CRC32 extension (`crc32c*` instructions).
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

#[cfg(any(target_feature = "crc", feature = "std"))]
use core::arch::aarch64::{__crc32cb, __crc32cd, __crc32ch, __crc32cw};

/// Compute the checksum with the ARMv8 CRC32 extension.
///
/// Same 8/4/2/1 cascade as the x86_64 kernel; words are assembled from byte
/// chunks so alignment never matters.
///
/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[cfg(any(target_feature = "crc", feature = "std"))]
#[target_feature(enable = "crc")]
pub(crate) unsafe fn compute_crc_unchecked(crc: u32, data: &[u8]) -> u32 {
  let mut crc = crc;
  let mut rest = data;

  while let Some((word, tail)) = rest.split_first_chunk::<8>() {
    crc = __crc32cd(crc, u64::from_le_bytes(*word));
    rest = tail;
  }

  if let Some((word, tail)) = rest.split_first_chunk::<4>() {
    crc = __crc32cw(crc, u32::from_le_bytes(*word));
    rest = tail;
  }

  if let Some((half, tail)) = rest.split_first_chunk::<2>() {
    crc = __crc32ch(crc, u16::from_le_bytes(*half));
    rest = tail;
  }

  if let Some(&byte) = rest.first() {
    crc = __crc32cb(crc, byte);
  }

  crc
}

/// Compute with the `crc` extension when it is enabled at compile time.
#[cfg(target_feature = "crc")]
#[inline]
pub(crate) fn compute_crc_enabled(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: this function is only compiled when `target_feature="crc"`.
  unsafe { compute_crc_unchecked(crc, data) }
}

#[cfg(all(feature = "std", not(target_feature = "crc")))]
#[inline]
pub(crate) fn compute_crc_runtime(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: callers must gate this with `is_aarch64_feature_detected!("crc")`.
  unsafe { compute_crc_unchecked(crc, data) }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  extern crate std;

  use crate::constants::{CONVENTIONAL_SEED, DISPATCH_SEED};
  use crate::reference::crc32_reference;

  #[test]
  fn crc_extension_matches_reference() {
    if !std::arch::is_aarch64_feature_detected!("crc") {
      return;
    }

    let data: [u8; 64] = core::array::from_fn(|i| (i as u8).wrapping_mul(151));
    for len in 0..=data.len() {
      for seed in [0, DISPATCH_SEED, CONVENTIONAL_SEED] {
        #[cfg(target_feature = "crc")]
        let got = super::compute_crc_enabled(seed, &data[..len]);
        #[cfg(not(target_feature = "crc"))]
        let got = super::compute_crc_runtime(seed, &data[..len]);
        assert_eq!(got, crc32_reference(seed, &data[..len]), "len {len}, seed {seed:#x}");
      }
    }
  }
}
