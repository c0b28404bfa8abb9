//! ChainHashMap: bucket array of FIFO collision chains over a slot arena.

use crate::key_hash::KeyHash;
use crate::policy::{self, DEFAULT_CAPACITY};
use core::borrow::Borrow;
use core::fmt;
use core::mem;
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: i32,
    next: Option<DefaultKey>, // successor in the same chain
}

/// Separately chained hash map with insertion-ordered buckets.
///
/// Entries are stored in a `SlotMap`; each bucket holds the arena key of
/// its chain head and each entry links to its successor. An entry is
/// reachable from exactly one bucket, so `len()` is the arena length.
pub struct ChainHashMap<K, V> {
    buckets: Vec<Option<DefaultKey>>,
    entries: SlotMap<DefaultKey, Entry<K, V>>,
}

impl<K, V> ChainHashMap<K, V>
where
    K: KeyHash + Eq,
{
    pub fn new() -> Self {
        Self {
            buckets: vec![None; DEFAULT_CAPACITY],
            entries: SlotMap::with_key(),
        }
    }
}

impl<K, V> Default for ChainHashMap<K, V>
where
    K: KeyHash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one bucket's chain, front to back.
pub(crate) struct Chain<'a, K, V> {
    entries: &'a SlotMap<DefaultKey, Entry<K, V>>,
    cursor: Option<DefaultKey>,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.entries.get(self.cursor?)?;
        self.cursor = e.next;
        Some((&e.key, &e.value))
    }
}

impl<K, V> ChainHashMap<K, V>
where
    K: KeyHash + Eq,
{
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current number of buckets. Exposed for tests and diagnostics; callers
    /// should not depend on particular values.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn index_of(&self, hash: i32) -> usize {
        policy::bucket_index(hash, self.buckets.len())
    }

    /// Arena key of the entry matching `q`, together with its predecessor
    /// in the chain (`None` when it is the bucket head).
    fn find<Q>(&self, q: &Q) -> Option<(Option<DefaultKey>, DefaultKey)>
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + Eq,
    {
        let hash = q.key_hash();
        let mut prev = None;
        let mut cursor = self.buckets[self.index_of(hash)];
        while let Some(k) = cursor {
            let e = self.entries.get(k)?;
            if e.hash == hash && e.key.borrow() == q {
                return Some((prev, k));
            }
            prev = Some(k);
            cursor = e.next;
        }
        None
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + Eq,
    {
        let (_, k) = self.find(q)?;
        self.entries.get(k).map(|e| &e.value)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + Eq,
    {
        let (_, k) = self.find(q)?;
        self.entries.get_mut(k).map(|e| &mut e.value)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + Eq,
    {
        self.find(q).is_some()
    }

    /// Associates `value` with `key`, returning the previous value if the
    /// key was present. A new key is appended at the tail of its bucket's
    /// chain and may trigger a rehash; replacing a value never does.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = key.key_hash();
        let index = self.index_of(hash);
        let mut tail = None;
        let mut cursor = self.buckets[index];
        while let Some(k) = cursor {
            let e = self.entries.get_mut(k)?;
            if e.hash == hash && e.key == key {
                return Some(mem::replace(&mut e.value, value));
            }
            tail = Some(k);
            cursor = e.next;
        }

        let k = self.entries.insert(Entry {
            key,
            value,
            hash,
            next: None,
        });
        match tail.and_then(|t| self.entries.get_mut(t)) {
            Some(t) => t.next = Some(k),
            None => self.buckets[index] = Some(k),
        }
        trace!("put: new entry in bucket {index} (size {})", self.len());

        if policy::should_grow(self.len(), self.capacity()) {
            self.rehash();
        }
        None
    }

    /// Removes `q`, returning the owned key and value if present.
    pub fn remove_entry<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + Eq,
    {
        let (prev, k) = self.find(q)?;
        let e = self.entries.remove(k)?;
        match prev.and_then(|p| self.entries.get_mut(p)) {
            Some(p) => p.next = e.next,
            None => {
                let index = self.index_of(e.hash);
                self.buckets[index] = e.next;
            }
        }
        trace!("remove: unlinked entry (size {})", self.len());
        Some((e.key, e.value))
    }

    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + Eq,
    {
        self.remove_entry(q).map(|(_, v)| v)
    }

    /// Drops every entry and shrinks back to `DEFAULT_CAPACITY` buckets.
    pub fn clear(&mut self) {
        debug!(
            "clear: dropping {} entries, capacity {} -> {}",
            self.len(),
            self.capacity(),
            DEFAULT_CAPACITY
        );
        self.entries.clear();
        self.buckets = vec![None; DEFAULT_CAPACITY];
    }

    /// Grows to `2c + 1` buckets and relinks every entry by its stored hash.
    /// Buckets are drained in index order and each chain front to back;
    /// entries are appended at the tail of their new chain, so two entries
    /// that share a new bucket keep their old relative order.
    fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let capacity = policy::grown(old_capacity);
        let old = mem::replace(&mut self.buckets, vec![None; capacity]);
        let mut tails: Vec<Option<DefaultKey>> = vec![None; capacity];
        let mut relinked = 0usize;

        for head in old {
            let mut cursor = head;
            while let Some(k) = cursor {
                let Some(e) = self.entries.get_mut(k) else {
                    break;
                };
                // Detach before relinking so no entry sits in two chains.
                cursor = e.next.take();
                let index = policy::bucket_index(e.hash, capacity);
                match tails[index].and_then(|t| self.entries.get_mut(t)) {
                    Some(t) => t.next = Some(k),
                    None => self.buckets[index] = Some(k),
                }
                tails[index] = Some(k);
                relinked += 1;
            }
        }

        debug_assert_eq!(relinked, self.entries.len(), "rehash lost entries");
        debug!(
            "rehash: capacity {old_capacity} -> {capacity} ({} entries)",
            self.len()
        );
    }

    pub(crate) fn chain(&self, index: usize) -> Chain<'_, K, V> {
        Chain {
            entries: &self.entries,
            cursor: self.buckets.get(index).copied().flatten(),
        }
    }
}

impl<K, V> fmt::Debug for ChainHashMap<K, V>
where
    K: KeyHash + Eq + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries((0..self.capacity()).flat_map(|i| self.chain(i)))
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for ChainHashMap<K, V>
where
    K: KeyHash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<K, V> Extend<(K, V)> for ChainHashMap<K, V>
where
    K: KeyHash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            let _ = self.put(k, v);
        }
    }
}
