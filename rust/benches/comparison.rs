//! Benchmarks comparing TreeMap against std BTreeMap.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use treemap::TreeMap;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn shuffled_keys(n: usize) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..n as u64).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(7));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES {
        let keys = shuffled_keys(size);

        group.bench_with_input(BenchmarkId::new("treemap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = TreeMap::new();
                for key in keys {
                    map.insert(*key, *key);
                }
                black_box(map.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("btreemap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for key in keys {
                    map.insert(*key, *key);
                }
                black_box(map.len())
            })
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in SIZES {
        let keys = shuffled_keys(size);
        let treemap: TreeMap<_, _> = keys.iter().map(|k| (*k, *k)).collect();
        let btreemap: BTreeMap<_, _> = keys.iter().map(|k| (*k, *k)).collect();

        group.bench_with_input(BenchmarkId::new("treemap", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(treemap.get(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("btreemap", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(btreemap.get(key));
                }
            })
        });
    }
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    for size in SIZES {
        let keys = shuffled_keys(size);
        let treemap: TreeMap<_, _> = keys.iter().map(|k| (*k, *k)).collect();
        let btreemap: BTreeMap<_, _> = keys.iter().map(|k| (*k, *k)).collect();

        group.bench_function(BenchmarkId::new("treemap", size), |b| {
            b.iter(|| black_box(treemap.iter().map(|(_, v)| *v).sum::<u64>()))
        });

        group.bench_function(BenchmarkId::new("btreemap", size), |b| {
            b.iter(|| black_box(btreemap.iter().map(|(_, v)| *v).sum::<u64>()))
        });
    }
    group.finish();
}

fn bench_floor(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor");
    for size in SIZES {
        let treemap: TreeMap<_, _> = (0..size as u64).step_by(2).map(|k| (k, k)).collect();

        group.bench_function(BenchmarkId::new("treemap", size), |b| {
            b.iter(|| {
                for probe in 0..size as u64 {
                    black_box(treemap.floor(&probe));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_get, bench_iterate, bench_floor);
criterion_main!(benches);
