//! CRC32-C string hashing with hardware acceleration and compile-time
//! constants.
//!
//! Three interchangeable expressions of one checksum:
//!
//! - [`crc32_reference`]: table-driven, one byte per step, `const fn`. The
//!   ground truth.
//! - [`crc32`]: the fast engine. SSE4.2 / ARMv8 CRC instructions where
//!   available, a table-driven word cascade otherwise. Contractually equal to
//!   the reference for every input.
//! - [`const_hash`]: compile-time hashing of string literals into `u32`
//!   constants usable as `match` targets; [`str_hash`] is its run-time
//!   counterpart.
//!
//! [`verify_equivalence`] keeps the fast engine honest with a randomized
//! sweep over all small lengths.
//!
//! # Conventions
//!
//! This is *not* standard CRC32-C: the running seed is
//! [`DISPATCH_SEED`](constants::DISPATCH_SEED) (the value 1) and the final
//! register is returned uncomplemented. The polynomial is the Castagnoli one,
//! so standard values are recoverable (see
//! [`CONVENTIONAL_SEED`](constants::CONVENTIONAL_SEED)), but values produced
//! here must only be compared against values produced here.
//!
//! # Example
//!
//! ```
//! use strhash::{const_hash, crc32, crc32_reference, str_hash};
//!
//! const GREETING: u32 = const_hash("hello");
//!
//! assert_eq!(str_hash("hello"), GREETING);
//! assert_eq!(crc32(1, b"hello"), crc32_reference(1, b"hello"));
//! ```
//!
//! # no_std
//!
//! `no_std` compatible. Disabling the default `std` feature drops runtime CPU
//! detection (compile-time target features still apply) and the randomized
//! verifier.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![deny(unsafe_code)]
#![no_std]

#[cfg(feature = "std")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod constants;
pub mod hash;
pub mod portable;
pub mod reference;
#[cfg(feature = "std")]
pub mod verify;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "x86_64")]
mod x86_64;

pub use constants::{CONVENTIONAL_SEED, DISPATCH_SEED, POLYNOMIAL};
pub use hash::{const_hash, str_hash};
pub use reference::{crc32_bitwise, crc32_reference};
#[cfg(feature = "std")]
pub use verify::{check_equivalence, verify_equivalence, Mismatch};

/// Compute the checksum of `data` from the register value `seed` using the
/// fastest available engine.
///
/// Bit-for-bit equal to [`crc32_reference`] for every seed and every input
/// length; the backend only changes how many bytes fold per instruction.
#[inline]
#[must_use]
pub fn crc32(seed: u32, data: &[u8]) -> u32 {
  dispatch(seed, data)
}

/// Returns the checksum backend this build will use on the current machine.
///
/// This is intended for diagnostics and benchmarking.
#[doc(hidden)]
#[must_use]
pub fn selected_backend() -> &'static str {
  #[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
  return "x86_64/sse4.2 (compile-time)";

  #[cfg(all(target_arch = "aarch64", target_feature = "crc"))]
  return "aarch64/crc (compile-time)";

  #[cfg(all(feature = "std", target_arch = "x86_64", not(target_feature = "sse4.2")))]
  {
    if std::arch::is_x86_feature_detected!("sse4.2") {
      return "x86_64/sse4.2 (runtime)";
    }
  }

  #[cfg(all(feature = "std", target_arch = "aarch64", not(target_feature = "crc")))]
  {
    if std::arch::is_aarch64_feature_detected!("crc") {
      return "aarch64/crc (runtime)";
    }
  }

  #[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse4.2"),
    all(target_arch = "aarch64", target_feature = "crc"),
  )))]
  "portable/table"
}

/// Dispatch to the fastest available implementation.
///
/// Tier 1: target features fixed at compile time. Tier 2: runtime CPU
/// detection, resolved once and cached. Tier 3: the portable word cascade.
#[inline]
fn dispatch(crc: u32, data: &[u8]) -> u32 {
  #[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
  return x86_64::compute_sse42_enabled(crc, data);

  #[cfg(all(target_arch = "aarch64", target_feature = "crc"))]
  return aarch64::compute_crc_enabled(crc, data);

  #[cfg(all(feature = "std", target_arch = "x86_64", not(target_feature = "sse4.2")))]
  {
    use std::sync::OnceLock;
    static KERNEL: OnceLock<fn(u32, &[u8]) -> u32> = OnceLock::new();
    let kernel = KERNEL.get_or_init(|| {
      if std::arch::is_x86_feature_detected!("sse4.2") {
        x86_64::compute_sse42_runtime
      } else {
        portable::compute
      }
    });
    return kernel(crc, data);
  }

  #[cfg(all(feature = "std", target_arch = "aarch64", not(target_feature = "crc")))]
  {
    use std::sync::OnceLock;
    static KERNEL: OnceLock<fn(u32, &[u8]) -> u32> = OnceLock::new();
    let kernel = KERNEL.get_or_init(|| {
      if std::arch::is_aarch64_feature_detected!("crc") {
        aarch64::compute_crc_runtime
      } else {
        portable::compute
      }
    });
    return kernel(crc, data);
  }

  #[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse4.2"),
    all(target_arch = "aarch64", target_feature = "crc"),
    all(feature = "std", target_arch = "x86_64", not(target_feature = "sse4.2")),
    all(feature = "std", target_arch = "aarch64", not(target_feature = "crc")),
  )))]
  portable::compute(crc, data)
}
