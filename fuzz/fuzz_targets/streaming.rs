//! Fuzz target for the streaming hasher.
//!
//! Arbitrary write sequences over a buffer must finish to the same digest as
//! a one-shot text hash of the whole buffer.

#![no_main]

use std::hash::Hasher;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wordhash::{hash_with, Text, WordHasher};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming writes
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = hash_with::<Text, _>(data.as_slice()) as u64;

  let mut hasher = WordHasher::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.write(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finish(), expected, "streaming mismatch, len={}", data.len());
});
