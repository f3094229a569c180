use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::cmp::Reverse as StdReverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::hint::black_box;
use navigable::{NavMap, PriorityQueue};

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn filled_maps(keys: &[i64]) -> (NavMap<i64, i64>, BTreeMap<i64, i64>) {
    let nav = keys.iter().map(|&k| (k, k)).collect();
    let bt = keys.iter().map(|&k| (k, k)).collect();
    (nav, bt)
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("map_insert_random");

    group.bench_function(BenchmarkId::new("NavMap", N), |b| {
        b.iter(|| {
            let mut map = NavMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_floor_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let probes: Vec<i64> = keys.iter().map(|k| k + 1).collect();
    let (nav, bt) = filled_maps(&keys);
    let mut group = c.benchmark_group("map_floor_random");

    group.bench_function(BenchmarkId::new("NavMap", N), |b| {
        b.iter(|| {
            for p in &probes {
                black_box(nav.floor(p));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for p in &probes {
                black_box(bt.range(..=p).next_back());
            }
        });
    });

    group.finish();
}

fn bench_map_range_scan(c: &mut Criterion) {
    let keys = random_keys(N);
    let (nav, bt) = filled_maps(&keys);
    let (lo, hi) = (1i64 << 28, 1i64 << 29);
    let mut group = c.benchmark_group("map_range_scan");

    group.bench_function(BenchmarkId::new("NavMap", N), |b| {
        b.iter(|| nav.range_view(&lo, &hi).map(|view| view.fold(0i64, |acc, (_, v)| acc.wrapping_add(*v))));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt.range(lo..hi).fold(0i64, |acc, (_, v)| acc.wrapping_add(*v)));
    });

    group.finish();
}

fn bench_map_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let (nav, bt) = filled_maps(&keys);
    let mut group = c.benchmark_group("map_remove_random");

    group.bench_function(BenchmarkId::new("NavMap", N), |b| {
        b.iter_batched(
            || nav.clone(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || bt.clone(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Priority Queue Benchmarks ──────────────────────────────────────────────

fn bench_queue_push_pop(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("queue_push_pop");

    group.bench_function(BenchmarkId::new("PriorityQueue", N), |b| {
        b.iter(|| {
            let mut queue: PriorityQueue<i64> = PriorityQueue::with_capacity(N);
            queue.extend(&keys);
            let mut sum = 0i64;
            while let Some(k) = queue.pop() {
                sum = sum.wrapping_add(k);
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BinaryHeap", N), |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::with_capacity(N);
            heap.extend(keys.iter().map(|&k| StdReverse(k)));
            let mut sum = 0i64;
            while let Some(StdReverse(k)) = heap.pop() {
                sum = sum.wrapping_add(k);
            }
            sum
        });
    });

    group.finish();
}

criterion_group!(map_benches, bench_map_insert_random, bench_map_floor_random, bench_map_range_scan, bench_map_remove_random,);

criterion_group!(queue_benches, bench_queue_push_pop);

criterion_main!(map_benches, queue_benches);
