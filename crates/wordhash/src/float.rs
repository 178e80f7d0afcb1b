//! [`Hashable`] for `f32` and `f64`.
//!
//! A float digests as its IEEE 754 bit pattern zero-extended to the word, so
//! the digest is total (NaNs and infinities included) and never depends on
//! float comparison semantics. The flip side is that `0.0` and `-0.0` compare
//! equal yet digest differently, and the same numeric value digests
//! differently at different widths. Callers that want `==`-consistent digests
//! should normalize before hashing.

use mix::Digest;

use crate::hashable::Hashable;

impl Hashable for f32 {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    self.to_bits() as Digest
  }
}

impl Hashable for f64 {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    self.to_bits() as Digest
  }
}
