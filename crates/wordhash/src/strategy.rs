//! Strategy selection: the default category dispatch and explicit overrides.

use mix::Digest;

use crate::{mask, Hashable};

/// A named hashing strategy over values of type `T`.
///
/// The default entry point [`hash`](crate::hash) routes every value through
/// its type's category via [`Auto`]; [`hash_with`](crate::hash_with) lets a
/// call site pin an alternate strategy instead, such as the ASCII text
/// schedules or whole-representation [`Blob`](crate::Blob) hashing. A
/// strategy is a type parameter resolved at compile time, never a runtime
/// tag.
///
/// Implement [`hash_raw`](HashStrategy::hash_raw) only; the provided
/// [`hash`](HashStrategy::hash) applies the build-time mask exactly once.
pub trait HashStrategy<T: ?Sized> {
  /// Digest of `value` before the build-time mask is applied.
  #[must_use]
  fn hash_raw(value: &T) -> Digest;

  /// Digest of `value`, mask applied.
  #[inline]
  #[must_use]
  fn hash(value: &T) -> Digest {
    mask::apply(Self::hash_raw(value))
  }
}

/// The default strategy: dispatch on the value's [`Hashable`] category.
pub struct Auto;

impl<T: Hashable + ?Sized> HashStrategy<T> for Auto {
  #[inline]
  fn hash_raw(value: &T) -> Digest {
    value.hash_raw()
  }
}

/// Element-wise hashing for slices of hashable values.
///
/// The first element's digest seeds the fold; every later element merges in
/// under the cycling word rotation schedule, the same protocol the blob
/// strategy applies to words. The digest depends on element order and count.
/// An empty slice digests to zero (masked).
pub struct Elements;

impl<T: Hashable> HashStrategy<[T]> for Elements {
  fn hash_raw(values: &[T]) -> Digest {
    let mut digest = 0;
    for (index, value) in values.iter().enumerate() {
      let piece = value.hash_raw();
      if index == 0 {
        digest = piece;
      } else {
        digest = mix::combine_rotated(digest, piece, mix::word_rotation(index));
      }
    }
    digest
  }
}

impl<T: Hashable, const N: usize> HashStrategy<[T; N]> for Elements {
  #[inline]
  fn hash_raw(values: &[T; N]) -> Digest {
    <Elements as HashStrategy<[T]>>::hash_raw(values)
  }
}
