//! KeyHash: the 32-bit value hash a key type supplies to `ChainHashMap`.
//!
//! Bucket placement is a pure function of this hash, so it is deterministic
//! across runs and processes (no random seeding). Implementations must
//! agree with `Eq`: equal keys produce equal hashes. The map relies on this
//! but does not check it.

use std::rc::Rc;

/// Value-based 32-bit signed hash.
pub trait KeyHash {
    fn key_hash(&self) -> i32;
}

macro_rules! identity_key_hash {
    ($($t:ty),*) => {
        $(
            impl KeyHash for $t {
                #[inline]
                fn key_hash(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

// Sign-extending (or bit-casting, for u32) the value keeps small integers
// in bucket `n % capacity`, which callers can reason about.
identity_key_hash!(i8, i16, i32, u8, u16, u32);

macro_rules! folded_key_hash {
    ($($t:ty),*) => {
        $(
            impl KeyHash for $t {
                #[inline]
                fn key_hash(&self) -> i32 {
                    let v = *self as u64;
                    (v ^ (v >> 32)) as i32
                }
            }
        )*
    };
}

folded_key_hash!(i64, u64, isize, usize);

impl KeyHash for bool {
    #[inline]
    fn key_hash(&self) -> i32 {
        i32::from(*self)
    }
}

impl KeyHash for char {
    #[inline]
    fn key_hash(&self) -> i32 {
        *self as i32
    }
}

impl KeyHash for str {
    /// Polynomial hash `h = 31*h + unit` over UTF-16 code units.
    fn key_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl KeyHash for String {
    #[inline]
    fn key_hash(&self) -> i32 {
        self.as_str().key_hash()
    }
}

impl<T: KeyHash> KeyHash for [T] {
    fn key_hash(&self) -> i32 {
        self.iter()
            .fold(1i32, |h, e| h.wrapping_mul(31).wrapping_add(e.key_hash()))
    }
}

impl<T: KeyHash> KeyHash for Vec<T> {
    #[inline]
    fn key_hash(&self) -> i32 {
        self.as_slice().key_hash()
    }
}

/// The "no key" sentinel: `None` always hashes to 0.
impl<T: KeyHash> KeyHash for Option<T> {
    #[inline]
    fn key_hash(&self) -> i32 {
        match self {
            None => 0,
            Some(k) => k.key_hash(),
        }
    }
}

impl<T: KeyHash + ?Sized> KeyHash for &T {
    #[inline]
    fn key_hash(&self) -> i32 {
        (**self).key_hash()
    }
}

impl<T: KeyHash + ?Sized> KeyHash for Box<T> {
    #[inline]
    fn key_hash(&self) -> i32 {
        (**self).key_hash()
    }
}

impl<T: KeyHash + ?Sized> KeyHash for Rc<T> {
    #[inline]
    fn key_hash(&self) -> i32 {
        (**self).key_hash()
    }
}

impl KeyHash for () {
    #[inline]
    fn key_hash(&self) -> i32 {
        0
    }
}

macro_rules! tuple_key_hash {
    ($($name:ident)+) => {
        impl<$($name: KeyHash),+> KeyHash for ($($name,)+) {
            #[allow(non_snake_case)]
            fn key_hash(&self) -> i32 {
                let ($($name,)+) = self;
                let mut h = 1i32;
                $(h = h.wrapping_mul(31).wrapping_add($name.key_hash());)+
                h
            }
        }
    };
}

tuple_key_hash!(A);
tuple_key_hash!(A B);
tuple_key_hash!(A B C);
tuple_key_hash!(A B C D);
