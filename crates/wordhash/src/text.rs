//! Byte-sequence hashing for text.
//!
//! Text digests fold one byte at a time, each rotated into a lane chosen by
//! its position, so `"abc"`, `"acb"`, and `"abc\0"` all digest differently.
//! Two rotation schedules are offered:
//!
//! - the general schedule ([`Text`], [`CText`]) places a byte by both its
//!   position within a word and its word index, and is the right default for
//!   arbitrary text;
//! - the ASCII schedule ([`TextAscii`], [`CTextAscii`]) steps a fixed stride
//!   per byte. It trades some spread for a shorter dependency chain and is
//!   tuned for 7-bit input. Bytes with the high bit set still digest fine,
//!   they just waste the lanes the stride was chosen for.
//!
//! The `C`-prefixed strategies take nul-terminated strings and hash the bytes
//! before the terminator, so a [`CStr`] digests exactly like the `str` with
//! the same content. Length is never mixed in; only the bytes are.
//!
//! There is no default category for `[u8]` or `Vec<u8>`. Raw byte buffers
//! are ambiguous between text and blob hashing, so they require an explicit
//! strategy at the call site.
//!
//! [`text_raw`] and the public [`hash_bytes`] wrappers are `const fn`, which
//! makes digests usable as `match` arms and array sizes.

#![allow(clippy::indexing_slicing)] // Byte loops are index-bounded

use core::ffi::CStr;

use mix::Digest;

use crate::hashable::Hashable;
use crate::mask;
use crate::strategy::HashStrategy;

// ─────────────────────────────────────────────────────────────────────────────
// Byte folding
// ─────────────────────────────────────────────────────────────────────────────

const fn text_raw(bytes: &[u8]) -> Digest {
  let mut digest = 0;
  let mut index = 0;
  while index < bytes.len() {
    digest ^= mix::rotl(bytes[index] as Digest, mix::byte_rotation(index));
    index += 1;
  }
  digest
}

const fn ascii_raw(bytes: &[u8]) -> Digest {
  let mut digest = 0;
  let mut index = 0;
  while index < bytes.len() {
    digest ^= mix::rotl(bytes[index] as Digest, mix::ascii_rotation(index));
    index += 1;
  }
  digest
}

/// Hashes bytes with the general text schedule, at compile time if needed.
///
/// The digest matches [`Text`] over the same bytes, mask included.
///
/// ```
/// use wordhash::{hash_bytes, hash_with, Text};
///
/// const CONTENT_TYPE: wordhash::Digest = hash_bytes(b"content-type");
///
/// assert_eq!(CONTENT_TYPE, hash_with::<Text, _>("content-type"));
/// ```
#[inline]
#[must_use]
pub const fn hash_bytes(bytes: &[u8]) -> Digest {
  mask::apply(text_raw(bytes))
}

/// Hashes bytes with the ASCII text schedule, at compile time if needed.
///
/// The digest matches [`TextAscii`] over the same bytes, mask included.
#[inline]
#[must_use]
pub const fn hash_bytes_ascii(bytes: &[u8]) -> Digest {
  mask::apply(ascii_raw(bytes))
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// General text schedule over length-delimited bytes.
pub struct Text;

/// ASCII text schedule over length-delimited bytes.
pub struct TextAscii;

/// General text schedule over nul-terminated strings.
pub struct CText;

/// ASCII text schedule over nul-terminated strings.
pub struct CTextAscii;

impl<T: AsRef<[u8]> + ?Sized> HashStrategy<T> for Text {
  #[inline]
  fn hash_raw(value: &T) -> Digest {
    text_raw(value.as_ref())
  }
}

impl<T: AsRef<[u8]> + ?Sized> HashStrategy<T> for TextAscii {
  #[inline]
  fn hash_raw(value: &T) -> Digest {
    ascii_raw(value.as_ref())
  }
}

impl<T: AsRef<CStr> + ?Sized> HashStrategy<T> for CText {
  #[inline]
  fn hash_raw(value: &T) -> Digest {
    text_raw(value.as_ref().to_bytes())
  }
}

impl<T: AsRef<CStr> + ?Sized> HashStrategy<T> for CTextAscii {
  #[inline]
  fn hash_raw(value: &T) -> Digest {
    ascii_raw(value.as_ref().to_bytes())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Default categories
// ─────────────────────────────────────────────────────────────────────────────

impl Hashable for str {
  #[inline]
  fn hash_raw(&self) -> Digest {
    text_raw(self.as_bytes())
  }
}

impl Hashable for CStr {
  #[inline]
  fn hash_raw(&self) -> Digest {
    text_raw(self.to_bytes())
  }
}

#[cfg(feature = "alloc")]
impl Hashable for alloc::string::String {
  #[inline]
  fn hash_raw(&self) -> Digest {
    text_raw(self.as_bytes())
  }
}

#[cfg(feature = "alloc")]
impl Hashable for alloc::ffi::CString {
  #[inline]
  fn hash_raw(&self) -> Digest {
    text_raw(self.to_bytes())
  }
}
