//! Word-width value hashing with compile-time strategy dispatch.
//!
//! `wordhash` digests values into single [`Digest`] words using fixed folds
//! of XORs and rotations. Digests are **not cryptographic**: use them for
//! hash tables, caches, interning, and fingerprints, never against an
//! adversary. Dispatch is resolved entirely at compile time. [`hash`] picks
//! a strategy from the value's type; [`hash_with`] overrides the choice at
//! the call site; a type with no sensible default simply fails to compile
//! until a strategy is named.
//!
//! | Value | Default strategy |
//! |-------|------------------|
//! | integers, `bool`, `char` | widen to the word, signed bits reinterpreted unsigned |
//! | `f32` / `f64` | IEEE 754 bit pattern |
//! | `str`, `String` | [`Text`] |
//! | `CStr`, `CString` | [`CText`] |
//! | raw pointers | address |
//! | plain-old-data structs | opt in via [`impl_blob_hashable!`] |
//! | slices, arrays, `[u8]`, `Vec<u8>` | none; name [`Elements`], a text strategy, or [`Blob`] |
//!
//! # Example
//!
//! ```
//! use wordhash::{hash, hash_with, Elements, Text, TextAscii};
//!
//! // Dispatch by type: strings take the general text schedule, and a
//! // nul-terminated string digests like its length-delimited content.
//! assert_eq!(hash("status"), hash(c"status"));
//! assert_eq!(hash("status"), hash_with::<Text, _>("status"));
//!
//! // Override the schedule at the call site.
//! let column = hash_with::<TextAscii, _>("created_at");
//!
//! // Sequences digest element-wise under an explicit strategy.
//! let route = hash_with::<Elements, _>(&[80u16, 443, 8080]);
//! # let _ = (column, route);
//! ```
//!
//! # Digest stability
//!
//! Digests are deterministic within one build: same value, same digest, no
//! per-process seeding. They are not a serialization format. A digest
//! depends on the target word width (64-bit only today), on the build-time
//! [`MASK`], and for [`Blob`] on the target's byte order, so persist raw
//! values, not digests.
//!
//! Setting the `WORDHASH_MASK` environment variable at build time XORs every
//! digest with a constant; see [`MASK`].
//!
//! # Cargo features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `std` | yes | [`WordHashMap`] / [`WordHashSet`] table aliases |
//! | `alloc` | implied by `std` | [`Hashable`] for `String` and `CString` |
//!
//! With both disabled the crate is fully `no_std`.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod blob;
mod float;
mod hashable;
mod hasher;
mod mask;
mod scalar;
mod strategy;
mod text;

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;

pub use blob::Blob;
pub use hashable::Hashable;
#[cfg(feature = "std")]
pub use hasher::{WordHashMap, WordHashSet};
pub use hasher::{WordBuildHasher, WordHasher};
pub use mask::MASK;
pub use mix::Digest;
pub use strategy::{Auto, Elements, HashStrategy};
pub use text::{hash_bytes, hash_bytes_ascii, CText, CTextAscii, Text, TextAscii};

/// Digest a value with its type's default strategy.
///
/// Masked with [`MASK`]; see [`hash_raw`] for the unmasked digest. Types
/// without a default strategy do not implement [`Hashable`] and need
/// [`hash_with`] instead.
#[inline]
#[must_use]
pub fn hash<T: Hashable + ?Sized>(value: &T) -> Digest {
  Auto::hash(value)
}

/// Digest a value with its type's default strategy, skipping [`MASK`].
#[inline]
#[must_use]
pub fn hash_raw<T: Hashable + ?Sized>(value: &T) -> Digest {
  Auto::hash_raw(value)
}

/// Digest a value with an explicit strategy instead of its type's default.
///
/// The second type parameter is the value's type and is normally inferred.
///
/// ```
/// use wordhash::{hash_with, Blob, Text, TextAscii};
///
/// // Same value, caller-chosen schedule.
/// let ascii = hash_with::<TextAscii, _>("created_at");
///
/// // Types with no default become hashable once a strategy is named.
/// let padding = hash_with::<Blob, _>(&[7u8; 12]);
///
/// assert_eq!(hash_with::<Text, _>("created_at"), wordhash::hash("created_at"));
/// # let _ = (ascii, padding);
/// ```
#[inline]
#[must_use]
pub fn hash_with<S, T>(value: &T) -> Digest
where
  T: ?Sized,
  S: HashStrategy<T>,
{
  S::hash(value)
}
