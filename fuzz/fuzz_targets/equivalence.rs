//! Differential fuzzing of the checksum engines.
//!
//! Tests that:
//! - No panics on arbitrary input or seed
//! - Fast, portable and reference engines agree everywhere
//! - Splitting the buffer and reseeding with the intermediate register
//!   matches the one-shot result (chunk-boundary bugs surface here)

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strhash::{crc32, crc32_reference};

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u32,
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let reference = crc32_reference(input.seed, data);

  assert_eq!(crc32(input.seed, data), reference, "fast engine mismatch");
  assert_eq!(
    strhash::portable::compute(input.seed, data),
    reference,
    "portable engine mismatch"
  );

  // A CRC is resumable: the register after the first half is a valid seed
  // for the second half.
  let (a, b) = data.split_at(split);
  let mid = crc32(input.seed, a);
  assert_eq!(crc32(mid, b), reference, "split/resume mismatch at {split}");
});
