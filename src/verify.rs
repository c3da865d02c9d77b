//! Randomized equivalence verification of the fast engine.
//!
//! A mismatch between [`crc32`](crate::crc32) and
//! [`crc32_reference`](crate::reference::crc32_reference) is never a caller
//! error: it means the fast path mis-chunked, mis-ordered or dropped bytes.
//! This harness sweeps every length from 0 to a bound with fresh random bytes
//! per trial, so every remainder class of the 8/4/2/1 cascade gets hit many
//! times.

// `len < max_len == buf.len()` keeps the slice below in bounds.
#![allow(clippy::indexing_slicing)]

use alloc::vec::Vec;
use core::fmt;

use rand::RngCore;

use crate::constants::DISPATCH_SEED;
use crate::crc32;
use crate::reference::crc32_reference;

/// Length bound matching the historical self-test sweep.
pub const DEFAULT_MAX_LEN: usize = 109;

/// Trials per length matching the historical self-test sweep.
pub const DEFAULT_REPEATS: usize = 5000;

/// The first disagreement found by [`check_equivalence`].
///
/// Carries everything needed to replay the failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
  /// Seed both engines were given.
  pub seed: u32,
  /// The exact input bytes.
  pub data: Vec<u8>,
  /// What the table-driven reference computed.
  pub reference: u32,
  /// What the fast engine computed.
  pub fast: u32,
}

impl fmt::Display for Mismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "fast engine disagreed with reference: len={}, seed={:#010x}, reference={:#010x}, fast={:#010x}, data={:02x?}",
      self.data.len(),
      self.seed,
      self.reference,
      self.fast,
      self.data
    )
  }
}

impl std::error::Error for Mismatch {}

/// Sweep lengths `0..max_len`, `repeats` random buffers each, and return the
/// first disagreement between the reference and fast engines.
///
/// Short-circuits on the first mismatch. Entropy comes from the thread-local
/// generator; no other state is touched.
pub fn check_equivalence(max_len: usize, repeats: usize) -> Result<(), Mismatch> {
  let mut rng = rand::rng();
  let mut buf = alloc::vec![0u8; max_len];

  for len in 0..max_len {
    for _ in 0..repeats {
      let data = &mut buf[..len];
      rng.fill_bytes(data);

      let reference = crc32_reference(DISPATCH_SEED, data);
      let fast = crc32(DISPATCH_SEED, data);

      if reference != fast {
        return Err(Mismatch {
          seed: DISPATCH_SEED,
          data: data.to_vec(),
          reference,
          fast,
        });
      }
    }
  }

  Ok(())
}

/// Boolean form of [`check_equivalence`].
///
/// `true` only if every (length, trial) pair agreed.
#[must_use]
pub fn verify_equivalence(max_len: usize, repeats: usize) -> bool {
  check_equivalence(max_len, repeats).is_ok()
}
