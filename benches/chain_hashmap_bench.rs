use chain_hashmap::{ChainHashMap, KeyValueMap};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::HashMap;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

// Same workload for both maps through the shared trait.
fn fill<M: KeyValueMap<String, u64>>(m: &mut M, n: usize, seed: u64) {
    for (i, x) in lcg(seed).take(n).enumerate() {
        let _ = m.put(key(x), i as u64);
    }
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_10k");
    group.bench_function("chain_hashmap", |b| {
        b.iter_batched(
            ChainHashMap::<String, u64>::new,
            |mut m| {
                fill(&mut m, 10_000, 1);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("std_hashmap", |b| {
        b.iter_batched(
            HashMap::<String, u64>::new,
            |mut m| {
                fill(&mut m, 10_000, 1);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chain_hashmap_get_hit", |b| {
        let mut m: ChainHashMap<String, u64> = ChainHashMap::new();
        fill(&mut m, 20_000, 7);
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k.as_str()).unwrap());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chain_hashmap_get_miss", |b| {
        let mut m: ChainHashMap<String, u64> = ChainHashMap::new();
        fill(&mut m, 10_000, 11);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(m.get(k.as_str()));
        })
    });
}

fn bench_put_remove_churn(c: &mut Criterion) {
    c.bench_function("chain_hashmap_put_remove", |b| {
        let mut m: ChainHashMap<String, u64> = ChainHashMap::new();
        fill(&mut m, 1_000, 5);
        let mut fresh = lcg(99).map(key);
        b.iter(|| {
            let k = fresh.next().unwrap();
            m.put(k.clone(), 0);
            black_box(m.remove(k.as_str()));
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_put_remove_churn
}
criterion_main!(benches);
