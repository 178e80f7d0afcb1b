//! Property tests for the mixing primitives.
//!
//! These verify the algebra the hashing strategies lean on: rotation composes
//! additively, XOR-rotate combination is self-inverse, wide folding never
//! drops the high half, and the closed-form rotation schedules agree with
//! their running-offset formulations.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;

use super::*;

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn rotl_composes_additively(word in any::<usize>(), a in 0u32..=200, b in 0u32..=200) {
    let stepped = rotl(rotl(word, a), b);
    let joined = rotl(word, (a + b) % WORD_BITS as u32);
    prop_assert_eq!(stepped, joined);
  }

  #[test]
  fn combine_rotated_cancels_itself(a in any::<usize>(), b in any::<usize>(), amount in 0u32..=255) {
    let merged = combine_rotated(a, b, amount);
    prop_assert_eq!(combine_rotated(merged, b, amount), a);
  }

  #[test]
  fn squish_is_low_xor_high(wide in any::<u128>()) {
    let low = wide as usize;
    let high = (wide >> WORD_BITS) as usize;
    prop_assert_eq!(squish_wide(wide), low ^ high);
  }

  #[test]
  fn round_up_lands_on_the_next_boundary(len in 0usize..=usize::MAX - BYTE_INDEX_MASK) {
    let padded = round_up_to_word(len);
    prop_assert_eq!(padded % WORD_BYTES, 0);
    prop_assert!(padded >= len);
    prop_assert!(padded - len < WORD_BYTES);
    prop_assert_eq!(round_up_to_word(padded), padded);
    prop_assert_eq!(word_count(len) * WORD_BYTES, padded);
  }

  #[test]
  fn byte_rotation_decomposes_into_fast_and_slow_terms(index in any::<usize>()) {
    let fast = (index % WORD_BYTES) * 8;
    let slow = (index / 4) % WORD_BITS;
    prop_assert_eq!(byte_rotation(index) as usize, fast + slow);
    prop_assert_eq!(byte_rotation(index), byte_rotation(index & 255));
  }

  #[test]
  fn ascii_rotation_matches_a_running_offset(len in 0usize..=4096) {
    let mut offset = 0u32;
    for index in 0..len {
      prop_assert_eq!(ascii_rotation(index), offset);
      offset = (offset + (WORD_BYTES as u32 - 1)) & ROTATION_MASK as u32;
    }
  }
}
