//! Fuzz target for element-sequence folding.
//!
//! Folds a digest per element through a direct model and compares it to the
//! library's sequence strategy.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordhash::{hash_raw, hash_with, Elements, MASK};

fuzz_target!(|values: Vec<u64>| {
  let mut model = 0usize;
  for (index, value) in values.iter().enumerate() {
    model = if index == 0 {
      hash_raw(value)
    } else {
      model ^ hash_raw(value).rotate_left((index % 64) as u32)
    };
  }

  let ours = hash_with::<Elements, _>(values.as_slice());
  assert_eq!(ours, model ^ MASK, "element fold mismatch, len={}", values.len());
});
