//! KeyValueMap: the four-operation map contract.
//!
//! Collaborators that only need `get`/`put`/`remove`/`size` can be written
//! against this trait and handed either a `ChainHashMap` or a
//! `std::collections::HashMap`.

use crate::chain_hash_map::ChainHashMap;
use crate::key_hash::KeyHash;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

pub trait KeyValueMap<K, V> {
    /// Value mapped to `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Maps `key` to `value`, returning the value it replaced.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Unmaps `key`, returning the value it was mapped to.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of mapped keys.
    fn size(&self) -> usize;
}

impl<K, V> KeyValueMap<K, V> for ChainHashMap<K, V>
where
    K: KeyHash + Eq,
{
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        ChainHashMap::get(self, key)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        ChainHashMap::put(self, key, value)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        ChainHashMap::remove(self, key)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> KeyValueMap<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
