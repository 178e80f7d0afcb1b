//! Word-width bit-mixing primitives for `wordhash`.
//!
//! Everything in this crate is a `const fn` over [`Digest`] words: rotation,
//! two-way combination, wide-value folding, and the rotation schedules used by
//! the blob and text hashing strategies. No allocation, no tables, no state.
//!
//! | Primitive | Purpose |
//! |-----------|---------|
//! | [`rotl`] | Circular left rotation, amount reduced modulo the word width |
//! | [`combine`] / [`combine_rotated`] | XOR-rotate merge of two digests |
//! | [`squish_wide`] | Fold a 128-bit value down to one word |
//! | [`round_up_to_word`] / [`word_count`] | Whole-word sizing for byte buffers |
//! | [`word_rotation`] / [`byte_rotation`] / [`ascii_rotation`] | Rotation schedules |
//!
//! Every constant is derived arithmetically from the native word width (via
//! `size_of::<usize>()`), never hard-coded, so the arithmetic stays meaningful
//! across word sizes. Only 64-bit targets are accepted today; the build fails
//! fast anywhere else.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("mix assumes 8-byte digest words; this target's pointer width is unsupported");

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;

/// The fixed-width unsigned digest every hashing strategy produces.
///
/// Digest width equals the native word width and is fixed per build; all
/// mixing operates modulo this width.
pub type Digest = usize;

// ─────────────────────────────────────────────────────────────────────────────
// Word-width constants
// ─────────────────────────────────────────────────────────────────────────────

/// Digest width in bytes.
pub const WORD_BYTES: usize = core::mem::size_of::<Digest>();

/// Digest width in bits.
pub const WORD_BITS: usize = WORD_BYTES * 8;

/// `log2` of the digest byte width, for byte-to-word index conversion.
pub const WORD_BYTES_LOG2: u32 = WORD_BYTES.trailing_zeros();

/// Masks a byte index down to its position within a word (`0..WORD_BYTES`).
pub const BYTE_INDEX_MASK: usize = WORD_BYTES - 1;

/// Masks a rotation amount down to `0..WORD_BITS`.
pub const ROTATION_MASK: usize = WORD_BITS - 1;

/// Default rotation for [`combine`]: half the word width.
pub const HALF_ROTATION: u32 = (WORD_BITS / 2) as u32;

// ─────────────────────────────────────────────────────────────────────────────
// Rotation and combination
// ─────────────────────────────────────────────────────────────────────────────

/// Circular left rotation of a digest word.
///
/// `amount` is reduced modulo [`WORD_BITS`], so `0` and `WORD_BITS` are both
/// the identity.
#[inline(always)]
#[must_use]
pub const fn rotl(word: Digest, amount: u32) -> Digest {
  word.rotate_left(amount)
}

/// Merge two digests with the default half-word rotation.
///
/// Equivalent to [`combine_rotated`] with [`HALF_ROTATION`]. Combination is
/// not commutative; callers folding a sequence must fix an order.
#[inline(always)]
#[must_use]
pub const fn combine(a: Digest, b: Digest) -> Digest {
  combine_rotated(a, b, HALF_ROTATION)
}

/// Merge two digests: `a XOR rotl(b, amount)`.
#[inline(always)]
#[must_use]
pub const fn combine_rotated(a: Digest, b: Digest, amount: u32) -> Digest {
  a ^ rotl(b, amount)
}

/// Fold a value wider than one digest word down to digest width.
///
/// XORs the value's words together, low word first. Total for every bit
/// pattern; the high half always participates, so an all-ones high half never
/// folds to the same digest as an all-zero high half over the same low half.
#[inline]
#[must_use]
pub const fn squish_wide(wide: u128) -> Digest {
  let mut folded = wide as Digest;
  let mut rest = wide >> WORD_BITS;
  while rest != 0 {
    folded ^= rest as Digest;
    rest >>= WORD_BITS;
  }
  folded
}

// ─────────────────────────────────────────────────────────────────────────────
// Word buffer sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Round a byte length up to the next multiple of the digest byte width.
///
/// Lengths already on a word boundary (including zero) come back unchanged.
#[inline]
#[must_use]
pub const fn round_up_to_word(len: usize) -> usize {
  (len + BYTE_INDEX_MASK) & !BYTE_INDEX_MASK
}

/// Number of digest words needed to hold `len` bytes, final partial word
/// included.
#[inline]
#[must_use]
pub const fn word_count(len: usize) -> usize {
  round_up_to_word(len) >> WORD_BYTES_LOG2
}

// ─────────────────────────────────────────────────────────────────────────────
// Rotation schedules
// ─────────────────────────────────────────────────────────────────────────────
//
// A schedule assigns a rotation amount to each word/byte position of a fold.
// The amounts cycle with the position rather than staying constant, so inputs
// whose elements share low bits do not cancel each other systematically.

/// Rotation for the word at `index` when folding a word sequence.
///
/// Cycles through `0..WORD_BITS` with the word index.
#[inline(always)]
#[must_use]
pub const fn word_rotation(index: usize) -> u32 {
  (index & ROTATION_MASK) as u32
}

/// Rotation for the byte at `index` under the general text schedule.
///
/// `(index mod WORD_BYTES) * 8` places each byte at a distinct byte position
/// within the word; `(index / 4) mod WORD_BITS` drifts that alignment slowly
/// across positions. The sum can exceed the word width; [`rotl`] reduces it.
#[inline(always)]
#[must_use]
pub const fn byte_rotation(index: usize) -> u32 {
  (((index & BYTE_INDEX_MASK) * 8) + ((index >> 2) & ROTATION_MASK)) as u32
}

/// Rotation for the byte at `index` under the ASCII text schedule.
///
/// Advances by `WORD_BYTES - 1` bits per byte, modulo the word width. The
/// stride is odd and the width a power of two, so consecutive bytes visit
/// every rotation amount before the schedule repeats.
#[inline(always)]
#[must_use]
pub const fn ascii_rotation(index: usize) -> u32 {
  (index.wrapping_mul(BYTE_INDEX_MASK) & ROTATION_MASK) as u32
}
