//! The default-dispatch hashing trait (**NOT CRYPTO**).

use mix::Digest;

use crate::mask;

/// A value with a default hashing category.
///
/// Each implementation covers exactly one category: scalars widen or fold
/// their bit pattern, floats hash their IEEE-754 bits, text hashes its bytes
/// under a rotation schedule. A type outside every category simply does not
/// implement the trait, so hashing it fails to compile instead of degrading
/// to some runtime fallback.
///
/// [`hash`](Hashable::hash) is the masked entry; [`hash_raw`](Hashable::hash_raw)
/// is the pre-mask digest that strategies and combinators build on. Implement
/// `hash_raw` only, so the build-time mask is applied exactly once.
///
/// Suitable for hash tables, sharding, and fingerprints in non-adversarial
/// settings. **Not** suitable where collision attacks matter.
pub trait Hashable {
  /// Digest of `self` before the build-time mask is applied.
  #[must_use]
  fn hash_raw(&self) -> Digest;

  /// Digest of `self`, mask applied.
  #[inline]
  #[must_use]
  fn hash(&self) -> Digest {
    mask::apply(self.hash_raw())
  }
}

impl<T: Hashable + ?Sized> Hashable for &T {
  #[inline]
  fn hash_raw(&self) -> Digest {
    (**self).hash_raw()
  }
}
