extern crate std;

use core::hash::Hasher;

use proptest::prelude::*;

use super::*;

fn with_cases(cases: u32) -> ProptestConfig {
  ProptestConfig {
    cases,
    ..ProptestConfig::default()
  }
}

proptest! {
  #![proptest_config(with_cases(256))]

  #[test]
  fn every_digest_is_its_raw_digest_xor_the_mask(value in any::<u64>(), text in ".{0,48}") {
    prop_assert_eq!(hash(&value), hash_raw(&value) ^ MASK);
    prop_assert_eq!(hash(text.as_str()), hash_raw(text.as_str()) ^ MASK);
  }

  #[test]
  fn narrow_unsigned_values_widen_without_aliasing(value in any::<u32>()) {
    prop_assert_eq!(hash(&value), hash(&u64::from(value)));
    prop_assert_eq!(hash(&(value as u16 as u32)), hash(&u64::from(value as u16)));
  }

  #[test]
  fn signed_values_zero_extend_their_bit_pattern(value in any::<i32>()) {
    prop_assert_eq!(hash_raw(&value), value.cast_unsigned() as usize);
    prop_assert!(hash_raw(&value) <= usize::try_from(u32::MAX).unwrap());
  }

  #[test]
  fn double_wide_values_fold_to_low_xor_high(value in any::<u128>()) {
    let low = value as usize;
    let high = (value >> 64) as usize;
    prop_assert_eq!(hash_raw(&value), low ^ high);
    prop_assert_eq!(hash_raw(&(value as i128)), low ^ high);
  }

  #[test]
  fn floats_digest_as_their_bit_pattern(value in any::<f64>()) {
    prop_assert_eq!(hash_raw(&value), value.to_bits() as usize);
  }

  #[test]
  fn terminated_text_digests_like_delimited_text(text in "[^\\x00]{0,64}") {
    let terminated = std::ffi::CString::new(text.clone()).unwrap();
    prop_assert_eq!(hash(terminated.as_c_str()), hash(text.as_str()));
    prop_assert_eq!(
      hash_with::<CTextAscii, _>(terminated.as_c_str()),
      hash_with::<TextAscii, _>(text.as_str())
    );
  }

  #[test]
  fn a_one_word_scalar_and_its_blob_agree(value in any::<u64>()) {
    prop_assert_eq!(hash_with::<Blob, _>(&value), hash(&value));
  }

  #[test]
  fn element_digests_fold_in_sequence_order(values in proptest::collection::vec(any::<u64>(), 0..32)) {
    let mut expected = 0;
    for (index, value) in values.iter().enumerate() {
      expected = if index == 0 {
        hash_raw(value)
      } else {
        mix::combine_rotated(expected, hash_raw(value), mix::word_rotation(index))
      };
    }
    prop_assert_eq!(hash_with::<Elements, _>(values.as_slice()), expected ^ MASK);
  }

  #[test]
  fn streaming_writes_match_the_text_digest(
    bytes in proptest::collection::vec(any::<u8>(), 0..128),
    split in 0usize..=128,
  ) {
    let cut = split.min(bytes.len());
    let mut streamed = WordHasher::new();
    streamed.write(&bytes[..cut]);
    streamed.write(&bytes[cut..]);

    let mut whole = WordHasher::new();
    whole.write(&bytes);

    prop_assert_eq!(streamed.finish(), whole.finish());
    prop_assert_eq!(whole.finish(), hash_with::<Text, _>(bytes.as_slice()) as u64);
  }
}
