//! Differential fuzzing of the text schedules.
//!
//! Compares the library fold against a direct per-byte model and checks that
//! nul-terminated framing digests like length-delimited framing.

#![no_main]

use std::ffi::CString;

use libfuzzer_sys::fuzz_target;
use wordhash::{hash_with, CText, CTextAscii, Text, TextAscii, MASK};

fuzz_target!(|data: &[u8]| {
  check_general_schedule(data);
  check_ascii_schedule(data);
  check_framings_agree(data);
});

fn check_general_schedule(data: &[u8]) {
  let mut model = 0usize;
  for (index, byte) in data.iter().enumerate() {
    let rotation = ((index % 8) * 8 + (index / 4) % 64) as u32;
    model ^= (*byte as usize).rotate_left(rotation);
  }

  let ours = hash_with::<Text, _>(data);
  assert_eq!(
    ours,
    model ^ MASK,
    "general schedule mismatch: ours={:#018x}, len={}",
    ours,
    data.len()
  );
}

fn check_ascii_schedule(data: &[u8]) {
  let mut model = 0usize;
  let mut rotation = 0u32;
  for byte in data {
    model ^= (*byte as usize).rotate_left(rotation);
    rotation = (rotation + 7) % 64;
  }

  let ours = hash_with::<TextAscii, _>(data);
  assert_eq!(
    ours,
    model ^ MASK,
    "ascii schedule mismatch: ours={:#018x}, len={}",
    ours,
    data.len()
  );
}

fn check_framings_agree(data: &[u8]) {
  // Interior nul means the terminated framing cannot represent this input.
  let Ok(terminated) = CString::new(data) else {
    return;
  };

  assert_eq!(
    hash_with::<CText, _>(terminated.as_c_str()),
    hash_with::<Text, _>(data),
    "framing mismatch, len={}",
    data.len()
  );
  assert_eq!(
    hash_with::<CTextAscii, _>(terminated.as_c_str()),
    hash_with::<TextAscii, _>(data),
    "ascii framing mismatch, len={}",
    data.len()
  );
}
