//! A [`Hasher`] over the general text schedule, for `HashMap` and friends.
//!
//! [`WordHasher`] feeds every written byte through the same position-rotated
//! fold as [`Text`](crate::Text), and its position counter carries across
//! calls, so writing a buffer in chunks finishes to the same digest as
//! writing it whole. Key types drive the hasher through their `Hash` impls,
//! which may add their own framing bytes; a map's bucket hash for a string
//! key is therefore not the digest [`hash`](crate::hash) returns for that
//! string, but it is just as deterministic.

use core::hash::{BuildHasherDefault, Hasher};

use mix::Digest;

use crate::mask;

/// Streaming hasher over the general text schedule.
#[derive(Clone, Default)]
pub struct WordHasher {
  digest: Digest,
  index: usize,
}

impl WordHasher {
  /// A hasher with nothing written yet.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { digest: 0, index: 0 }
  }
}

impl Hasher for WordHasher {
  #[inline]
  fn finish(&self) -> u64 {
    mask::apply(self.digest) as u64
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    for byte in bytes {
      self.digest ^= mix::rotl(*byte as Digest, mix::byte_rotation(self.index));
      self.index += 1;
    }
  }
}

/// Builds [`WordHasher`]s for hash tables; all instances hash identically.
pub type WordBuildHasher = BuildHasherDefault<WordHasher>;

/// A `HashMap` keyed through [`WordHasher`].
#[cfg(feature = "std")]
pub type WordHashMap<K, V> = std::collections::HashMap<K, V, WordBuildHasher>;

/// A `HashSet` keyed through [`WordHasher`].
#[cfg(feature = "std")]
pub type WordHashSet<T> = std::collections::HashSet<T, WordBuildHasher>;
