//! Build-time digest mask.
//!
//! Setting the `WORDHASH_MASK` environment variable when compiling XORs every
//! digest with the given constant before it is returned, for whitening or
//! per-build digest diversification. Unset means digests come back unmasked.
//! The value is parsed at compile time; decimal (`1234`) and hex
//! (`0xDEAD_BEEF`) forms with underscore grouping are accepted, and anything
//! else stops the build.

#![allow(clippy::indexing_slicing)] // Const parsing walks byte slices by index

use mix::Digest;

/// The process-wide digest mask, fixed at build time.
///
/// Zero when `WORDHASH_MASK` is unset. For every input, the masked digest is
/// exactly the unmasked digest XOR this constant.
pub const MASK: Digest = match option_env!("WORDHASH_MASK") {
  Some(text) => parse_mask(text),
  None => 0,
};

/// Apply the build-time mask to a raw digest.
#[inline(always)]
pub(crate) const fn apply(digest: Digest) -> Digest {
  digest ^ MASK
}

const fn parse_mask(text: &str) -> Digest {
  let bytes = text.as_bytes();
  let (digits, radix): (&[u8], Digest) = match bytes {
    [b'0', b'x' | b'X', rest @ ..] => (rest, 16),
    _ => (bytes, 10),
  };

  let mut value: Digest = 0;
  let mut saw_digit = false;
  let mut index = 0;
  while index < digits.len() {
    let byte = digits[index];
    index += 1;
    if byte == b'_' {
      continue;
    }
    let digit = match byte {
      b'0'..=b'9' => (byte - b'0') as Digest,
      b'a'..=b'f' if radix == 16 => (byte - b'a' + 10) as Digest,
      b'A'..=b'F' if radix == 16 => (byte - b'A' + 10) as Digest,
      _ => panic!("WORDHASH_MASK must be a decimal or 0x-prefixed hex integer"),
    };
    value = match value.checked_mul(radix) {
      Some(scaled) => scaled,
      None => panic!("WORDHASH_MASK does not fit in one digest word"),
    };
    value = match value.checked_add(digit) {
      Some(total) => total,
      None => panic!("WORDHASH_MASK does not fit in one digest word"),
    };
    saw_digit = true;
  }
  assert!(saw_digit, "WORDHASH_MASK must contain at least one digit");
  value
}
