// ChainHashMap property tests (public surface).
//
// Property 1: size accounting. After any sequence of puts, len() equals the
//  number of distinct keys put.
// Property 2: round-trip. put(k, v) then get(k) yields v, for Some and None
//  keys alike.
// Property 3: rehash transparency. Every key put before the insert that
//  crosses floor(0.75 * capacity) is still mapped to its value right after
//  that insert.
// Property 4: remove then re-put. A removed key is absent until put again,
//  and the other keys are unaffected.
use chain_hashmap::policy;
use chain_hashmap::ChainHashMap;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

proptest! {
    #[test]
    fn prop_size_counts_distinct_keys(keys in proptest::collection::vec(-200i32..200, 0..300)) {
        let mut m = ChainHashMap::new();
        for (i, k) in keys.iter().enumerate() {
            m.put(*k, i);
        }
        let distinct: BTreeSet<_> = keys.iter().collect();
        prop_assert_eq!(m.len(), distinct.len());
    }
}

proptest! {
    #[test]
    fn prop_round_trip(pairs in proptest::collection::vec((proptest::option::of(any::<i32>()), any::<i64>()), 1..100)) {
        let mut m: ChainHashMap<Option<i32>, i64> = ChainHashMap::new();
        for (k, v) in &pairs {
            m.put(*k, *v);
            prop_assert_eq!(m.get(k), Some(v));
        }
        // Last write wins.
        let last: BTreeMap<_, _> = pairs.iter().cloned().collect();
        for (k, v) in &last {
            prop_assert_eq!(m.get(k), Some(v));
        }
    }
}

proptest! {
    #[test]
    fn prop_rehash_is_transparent(keys in proptest::collection::btree_set(any::<i32>(), 1..400)) {
        let mut m: ChainHashMap<i32, i32> = ChainHashMap::new();
        let mut inserted: Vec<i32> = Vec::new();
        for k in keys {
            let before = m.capacity();
            m.put(k, k.wrapping_mul(3));
            inserted.push(k);
            if m.capacity() != before {
                prop_assert_eq!(m.capacity(), policy::grown(before));
                prop_assert_eq!(m.len(), policy::threshold(before));
                for p in &inserted {
                    prop_assert_eq!(m.get(p), Some(&p.wrapping_mul(3)));
                }
            }
        }
        prop_assert_eq!(m.len(), inserted.len());
    }
}

proptest! {
    #[test]
    fn prop_remove_then_reput(
        keys in proptest::collection::btree_set("[a-zA-Z]{1,8}", 1..60),
        pick in any::<prop::sample::Index>(),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut m: ChainHashMap<String, usize> = keys.iter().cloned().zip(0..).collect();
        let victim = pick.get(&keys);
        let idx = keys.iter().position(|k| k == victim).unwrap();

        prop_assert_eq!(m.remove(victim.as_str()), Some(idx));
        prop_assert_eq!(m.get(victim.as_str()), None);
        prop_assert_eq!(m.remove(victim.as_str()), None);
        prop_assert_eq!(m.len(), keys.len() - 1);
        for (i, k) in keys.iter().enumerate().filter(|(i, _)| *i != idx) {
            prop_assert_eq!(m.get(k.as_str()), Some(&i));
        }

        prop_assert_eq!(m.put(victim.clone(), usize::MAX), None);
        prop_assert_eq!(m.get(victim.as_str()), Some(&usize::MAX));
        prop_assert_eq!(m.len(), keys.len());
    }
}
