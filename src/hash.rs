//! String hashing for exact-match dispatch.
//!
//! [`const_hash`] turns a string literal into a `u32` during compilation;
//! [`str_hash`] computes the same value at run time through the fast engine.
//! Together they let dispatch code match a run-time string against constants:
//!
//! ```
//! use strhash::{const_hash, str_hash};
//!
//! const CMD_START: u32 = const_hash("start");
//! const CMD_STOP: u32 = const_hash("stop");
//!
//! fn dispatch(cmd: &str) -> &'static str {
//!   match str_hash(cmd) {
//!     CMD_START => "starting",
//!     CMD_STOP => "stopping",
//!     _ => "unknown command",
//!   }
//! }
//!
//! assert_eq!(dispatch("start"), "starting");
//! assert_eq!(dispatch("reboot"), "unknown command");
//! ```
//!
//! Two distinct literals can collide to the same 32-bit value; nothing
//! prevents that, and a collision silently merges the two dispatch branches.
//! Keep dispatch corpora small or check distinctness in a test.

use crate::constants::DISPATCH_SEED;
use crate::crc32;
use crate::reference::crc32_reference;

/// Hash a string at compile time.
///
/// Evaluates to the same value [`str_hash`] computes at run time, using
/// [`DISPATCH_SEED`]. Intended for `const` contexts: initialize a `const`
/// with it and use that constant as a `match` target. In a const context any
/// non-constant argument is rejected at compile time, which is the point.
///
/// The empty string hashes to the seed itself.
#[inline]
#[must_use]
pub const fn const_hash(s: &str) -> u32 {
  crc32_reference(DISPATCH_SEED, s.as_bytes())
}

/// Hash a string at run time, through the fast engine.
///
/// Produces exactly the values [`const_hash`] bakes into the binary, so the
/// result can be matched against compile-time constants.
#[inline]
#[must_use]
pub fn str_hash(s: &str) -> u32 {
  crc32(DISPATCH_SEED, s.as_bytes())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn const_and_runtime_agree() {
    // Empty, one character, and longer than one 8-byte word.
    for s in ["", "a", "abcd", "longer than eight bytes"] {
      assert_eq!(const_hash(s), crc32_reference(DISPATCH_SEED, s.as_bytes()), "{s:?}");
      assert_eq!(const_hash(s), str_hash(s), "{s:?}");
    }
  }

  #[test]
  fn empty_string_hashes_to_seed() {
    const EMPTY: u32 = const_hash("");
    assert_eq!(EMPTY, DISPATCH_SEED);
  }

  #[test]
  fn usable_as_array_length() {
    // A hash constant is an ordinary integer constant; exercising it in a
    // type-level position proves compile-time evaluation.
    const N: usize = (const_hash("abcd") % 7) as usize + 1;
    let arr = [0u8; N];
    assert_eq!(arr.len(), N);
  }
}
