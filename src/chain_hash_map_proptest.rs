#![cfg(test)]

// Property tests for ChainHashMap kept inside the crate so they can check
// chain structure after every step.

use crate::chain_hash_map::tests::assert_consistent;
use crate::chain_hash_map::ChainHashMap;
use crate::key_hash::KeyHash;
use crate::policy;
use proptest::prelude::*;
use std::collections::HashMap;
use std::fmt;

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}
impl KeyHash for Key {
    fn key_hash(&self) -> i32 {
        self.0.key_hash()
    }
}

// Every instance hashes to the same value, so all entries share one chain.
#[derive(Clone, Eq, PartialEq, Hash)]
struct Colliding(String);
impl fmt::Debug for Colliding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl KeyHash for Colliding {
    fn key_hash(&self) -> i32 {
        -7
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Get(usize),
    Remove(usize),
    Contains(String),
    Mutate(usize, i32),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=40).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => idx.clone().prop_map(OpI::Get),
            2 => idx.clone().prop_map(OpI::Remove),
            1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives `sut` and a std HashMap model through the same ops. `make` lifts a
// pool string into the key type under test.
fn run_state_machine<K, F>(pool: &[String], ops: Vec<OpI>, make: F) -> Result<(), TestCaseError>
where
    K: KeyHash + Eq + std::hash::Hash + Clone + fmt::Debug,
    F: Fn(&str) -> K,
{
    let mut sut: ChainHashMap<K, i32> = ChainHashMap::new();
    let mut model: HashMap<K, i32> = HashMap::new();

    for op in ops {
        let capacity_before = sut.capacity();
        let len_before = sut.len();
        match op {
            OpI::Put(i, v) => {
                let k = make(&pool[i]);
                let prev = sut.put(k.clone(), v);
                prop_assert_eq!(prev, model.insert(k, v));
                if prev.is_some() {
                    prop_assert_eq!(sut.capacity(), capacity_before, "update must not rehash");
                } else if policy::should_grow(sut.len(), capacity_before) {
                    prop_assert_eq!(sut.capacity(), policy::grown(capacity_before));
                } else {
                    prop_assert_eq!(sut.capacity(), capacity_before);
                }
            }
            OpI::Get(i) => {
                let k = make(&pool[i]);
                prop_assert_eq!(sut.get(&k), model.get(&k));
            }
            OpI::Remove(i) => {
                let k = make(&pool[i]);
                let removed = sut.remove(&k);
                prop_assert_eq!(removed, model.remove(&k));
                prop_assert_eq!(sut.len(), len_before - usize::from(removed.is_some()));
                prop_assert_eq!(sut.remove(&k), None);
                prop_assert_eq!(sut.capacity(), capacity_before, "remove never shrinks");
            }
            OpI::Contains(s) => {
                let k = make(&s);
                prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
            }
            OpI::Mutate(i, d) => {
                let k = make(&pool[i]);
                if let Some(v) = sut.get_mut(&k) {
                    *v = v.wrapping_add(d);
                }
                if let Some(v) = model.get_mut(&k) {
                    *v = v.wrapping_add(d);
                }
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), policy::DEFAULT_CAPACITY);
            }
        }

        // Post-conditions after each op
        assert_consistent(&sut);
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `put` returns the replaced value; only new keys can grow the table,
//   and growth happens exactly when size reaches floor(0.75 * capacity).
// - `remove` returns the mapped value and is idempotent.
// - Every model entry stays retrievable across rehashes and clears.
// - Chains stay acyclic, duplicate-free and placed by stored hash.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_state_machine(&pool, ops, |s| Key(s.to_string()))?;
    }
}

// Property: Same invariants under worst-case collisions, where every key
// shares one chain and equality alone separates entries.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_state_machine(&pool, ops, |s| Colliding(s.to_string()))?;
    }
}

// Property: borrowed `&str` lookups agree with owned-key lookups.
proptest! {
    #[test]
    fn prop_borrowed_lookup(keys in proptest::collection::vec("[a-z]{0,6}", 0..50), probe in "[a-z]{0,6}") {
        let mut m: ChainHashMap<Key, usize> = ChainHashMap::new();
        for (i, k) in keys.iter().enumerate() {
            m.put(Key(k.clone()), i);
        }
        prop_assert_eq!(m.get(probe.as_str()), m.get(&Key(probe.clone())));
        prop_assert_eq!(m.contains_key(probe.as_str()), keys.contains(&probe));
    }
}

// Property: bucket order is arrival order for keys sharing a chain, even
// after rehashes (all keys collide, so they stay in one bucket).
proptest! {
    #[test]
    fn prop_colliding_chain_is_fifo(n in 1usize..60) {
        let mut m: ChainHashMap<Colliding, usize> = ChainHashMap::new();
        for i in 0..n {
            m.put(Colliding(i.to_string()), i);
        }
        let index = policy::bucket_index(-7, m.capacity());
        let order: Vec<usize> = m.chain(index).map(|(_, v)| *v).collect();
        prop_assert_eq!(order, (0..n).collect::<Vec<_>>());
    }
}
