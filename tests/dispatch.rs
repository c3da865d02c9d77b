//! Dispatch-constant scenario tests.
//!
//! Exercises the intended use of `const_hash`: literal strings baked into
//! `u32` match targets, compared against run-time hashes of incoming strings.

use strhash::{const_hash, crc32, crc32_reference, str_hash, DISPATCH_SEED};

const ABCD: u32 = const_hash("abcd");
const FGH: u32 = const_hash("fgh");
const ABRACADABRA: u32 = const_hash("abracadabra");

fn route(input: &str) -> &'static str {
  match str_hash(input) {
    ABCD => "abcd",
    FGH => "fgh",
    ABRACADABRA => "abracadabra",
    _ => "(no match)",
  }
}

#[test]
fn each_literal_routes_to_its_own_branch() {
  assert_eq!(route("abcd"), "abcd");
  assert_eq!(route("fgh"), "fgh");
  assert_eq!(route("abracadabra"), "abracadabra");
  assert_eq!(route("unknown"), "(no match)");
  assert_eq!(route(""), "(no match)");
}

#[test]
fn trio_is_collision_free() {
  assert_ne!(ABCD, FGH);
  assert_ne!(ABCD, ABRACADABRA);
  assert_ne!(FGH, ABRACADABRA);
}

#[test]
fn const_hash_equals_reference_at_runtime() {
  assert_eq!(ABCD, crc32_reference(DISPATCH_SEED, b"abcd"));
  assert_eq!(FGH, crc32_reference(DISPATCH_SEED, b"fgh"));
  assert_eq!(ABRACADABRA, crc32_reference(DISPATCH_SEED, b"abracadabra"));
}

#[test]
fn const_hash_equals_fast_engine() {
  assert_eq!(ABCD, crc32(DISPATCH_SEED, b"abcd"));
  assert_eq!(FGH, str_hash("fgh"));
}

#[test]
fn alignment_does_not_change_the_hash() {
  // The same bytes placed at every offset within a misaligning window must
  // hash identically under both engines.
  let payload: Vec<u8> = (0u8..=63).collect();
  let reference = crc32_reference(DISPATCH_SEED, &payload);
  let fast = crc32(DISPATCH_SEED, &payload);
  assert_eq!(fast, reference);

  let mut arena = vec![0u8; payload.len() + 16];
  for offset in 0..16 {
    arena[offset..offset + payload.len()].copy_from_slice(&payload);
    let view = &arena[offset..offset + payload.len()];
    assert_eq!(crc32(DISPATCH_SEED, view), reference, "offset {offset}");
    assert_eq!(crc32_reference(DISPATCH_SEED, view), reference, "offset {offset}");
  }
}
