//! Byte-view hashing for plain-old-data values.
//!
//! [`Blob`] reads a value as the bytes it occupies in memory and folds them
//! one word at a time. The bound is [`bytemuck::NoUninit`], so only types
//! with no padding and no uninitialized bytes qualify; that keeps the digest
//! a pure function of the value rather than of leftover stack contents.
//! Byte order follows the build target, so blob digests are only comparable
//! between builds of the same endianness.

use bytemuck::NoUninit;
use mix::Digest;

use crate::strategy::HashStrategy;

/// Hashes a value as its in-memory bytes.
///
/// The bytes are split into word-size chunks. The first word seeds the
/// digest and every later word is folded in with a rotation drawn from its
/// word index, so reordered words produce different digests. A trailing
/// partial word is zero-padded before folding, which makes a value of
/// exactly one word digest to itself.
///
/// Zero-sized types have no bytes and are rejected at compile time:
///
/// ```compile_fail
/// let digest = wordhash::hash_with::<wordhash::Blob, _>(&());
/// ```
pub struct Blob;

impl<T: NoUninit> HashStrategy<T> for Blob {
  #[inline]
  fn hash_raw(value: &T) -> Digest {
    const {
      assert!(size_of::<T>() != 0, "zero-sized types have no bytes to hash");
    }
    fold_words(bytemuck::bytes_of(value))
  }
}

fn fold_words(bytes: &[u8]) -> Digest {
  let (words, tail) = bytes.as_chunks::<{ mix::WORD_BYTES }>();
  let mut digest = 0;
  for (index, word) in words.iter().enumerate() {
    digest = fold_in(digest, Digest::from_ne_bytes(*word), index);
  }
  if !tail.is_empty() {
    let mut padded = [0u8; mix::WORD_BYTES];
    for (slot, byte) in padded.iter_mut().zip(tail) {
      *slot = *byte;
    }
    digest = fold_in(digest, Digest::from_ne_bytes(padded), words.len());
  }
  digest
}

#[inline(always)]
fn fold_in(digest: Digest, word: Digest, index: usize) -> Digest {
  if index == 0 {
    word
  } else {
    mix::combine_rotated(digest, word, mix::word_rotation(index))
  }
}

/// Routes a plain-old-data type's [`Hashable`](crate::Hashable) impl through
/// [`Blob`], so `hash(&value)` and table lookups see its in-memory bytes.
///
/// ```
/// use bytemuck::NoUninit;
///
/// #[derive(Clone, Copy, NoUninit)]
/// #[repr(C)]
/// struct Header {
///   magic: u32,
///   version: u32,
/// }
///
/// wordhash::impl_blob_hashable!(Header);
///
/// let header = Header { magic: 0xC0DE, version: 3 };
/// assert_eq!(wordhash::hash(&header), wordhash::hash_with::<wordhash::Blob, _>(&header));
/// ```
#[macro_export]
macro_rules! impl_blob_hashable {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl $crate::Hashable for $ty {
        #[inline]
        fn hash_raw(&self) -> $crate::Digest {
          <$crate::Blob as $crate::HashStrategy<$ty>>::hash_raw(self)
        }
      }
    )+
  };
}
