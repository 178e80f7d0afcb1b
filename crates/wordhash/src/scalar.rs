//! [`Hashable`] for the scalar primitives.
//!
//! Integers no wider than one word become the digest directly: unsigned values
//! zero-extend, and signed values reinterpret their bits as the same-width
//! unsigned integer first, so `-1i32` digests as `0x0000_0000_FFFF_FFFF`
//! rather than as a sign-extended all-ones word. Double-wide integers fold
//! their high half into their low half with [`mix::squish_wide`]. `bool`
//! digests as 0 or 1, `char` as its code point, and raw pointers as their
//! address (the pointee is never read, so two pointers to equal values hash
//! differently unless the addresses match).

use mix::Digest;

use crate::hashable::Hashable;

macro_rules! impl_unsigned_hashable {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Hashable for $ty {
        #[inline(always)]
        fn hash_raw(&self) -> Digest {
          *self as Digest
        }
      }
    )+
  };
}

macro_rules! impl_signed_hashable {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Hashable for $ty {
        #[inline(always)]
        fn hash_raw(&self) -> Digest {
          self.cast_unsigned() as Digest
        }
      }
    )+
  };
}

impl_unsigned_hashable!(u8, u16, u32, u64);
impl_signed_hashable!(i8, i16, i32, i64);

impl Hashable for usize {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    *self
  }
}

impl Hashable for isize {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    self.cast_unsigned()
  }
}

impl Hashable for u128 {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    mix::squish_wide(*self)
  }
}

impl Hashable for i128 {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    mix::squish_wide(self.cast_unsigned())
  }
}

impl Hashable for bool {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    Digest::from(*self)
  }
}

impl Hashable for char {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    *self as Digest
  }
}

impl<T: ?Sized> Hashable for *const T {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    self.addr()
  }
}

impl<T: ?Sized> Hashable for *mut T {
  #[inline(always)]
  fn hash_raw(&self) -> Digest {
    self.addr()
  }
}

#[cfg(test)]
mod tests {
  use crate::mask::MASK;
  use crate::{hash, hash_raw};

  #[test]
  fn unsigned_values_widen_to_the_word() {
    assert_eq!(hash_raw(&0x7Bu8), 0x7B);
    assert_eq!(hash_raw(&0xABCDu16), 0xABCD);
    assert_eq!(hash_raw(&0xDEAD_BEEFu32), 0xDEAD_BEEF);
    assert_eq!(hash_raw(&0x0123_4567_89AB_CDEFu64), 0x0123_4567_89AB_CDEF);
    assert_eq!(hash_raw(&usize::MAX), usize::MAX);
  }

  #[test]
  fn equal_values_of_different_widths_agree() {
    assert_eq!(hash_raw(&200u8), hash_raw(&200u64));
    assert_eq!(hash_raw(&54321u16), hash_raw(&54321u32));
  }

  #[test]
  fn signed_values_reinterpret_then_widen() {
    assert_eq!(hash_raw(&-1i8), 0xFF);
    assert_eq!(hash_raw(&-1i16), 0xFFFF);
    assert_eq!(hash_raw(&-1i32), 0xFFFF_FFFF);
    assert_eq!(hash_raw(&-1i64), usize::MAX);
    assert_eq!(hash_raw(&-1isize), usize::MAX);
    assert_eq!(hash_raw(&i32::MIN), 0x8000_0000);
  }

  #[test]
  fn nonnegative_signed_values_match_their_unsigned_twins() {
    assert_eq!(hash_raw(&123i8), hash_raw(&123u8));
    assert_eq!(hash_raw(&i64::MAX), hash_raw(&(i64::MAX as u64)));
  }

  #[test]
  fn double_wide_integers_fold_their_halves_together() {
    assert_eq!(hash_raw(&0u128), 0);
    assert_eq!(hash_raw(&1u128), 1);
    assert_eq!(hash_raw(&(1u128 << 64)), 1);
    let wide = ((0xAAAA_AAAA_AAAA_AAAAu128) << 64) | 0x5555_5555_5555_5555;
    assert_eq!(hash_raw(&wide), 0xFFFF_FFFF_FFFF_FFFF);
    assert_eq!(hash_raw(&-1i128), 0);
  }

  #[test]
  fn bools_and_chars_digest_as_their_values() {
    assert_eq!(hash_raw(&false), 0);
    assert_eq!(hash_raw(&true), 1);
    assert_eq!(hash_raw(&'A'), 65);
    assert_eq!(hash_raw(&'🙃'), 0x1F643);
  }

  #[test]
  fn pointers_digest_by_address() {
    let values = [1u32, 2];
    let first: *const u32 = &values[0];
    let second: *const u32 = &values[1];
    assert_eq!(hash_raw(&first), first.addr());
    assert_ne!(hash_raw(&first), hash_raw(&second));
    assert_eq!(hash_raw(&first.cast_mut()), hash_raw(&first));
  }

  #[test]
  fn references_forward_to_the_pointee() {
    let value = 99u32;
    assert_eq!(hash(&&value), hash(&value));
    assert_eq!(hash(&&&value), hash(&value));
  }

  #[test]
  fn masked_digests_are_raw_digests_xor_the_mask() {
    assert_eq!(hash(&7u32), hash_raw(&7u32) ^ MASK);
    assert_eq!(hash(&-7i64), hash_raw(&-7i64) ^ MASK);
  }
}
