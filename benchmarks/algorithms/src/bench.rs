//! Algorithm benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - The six sorts on random, sorted, reversed and duplicate-heavy inputs
//! - Simultaneous min/max selection
//! - Breadth-first traversal of random sparse graphs
//! - Sampling in known-length and reservoir modes
//!
//! Input sizes scale with `ALGORITHMS_BENCH_SIZE` (default 10000), e.g.
//! `ALGORITHMS_BENCH_SIZE=100000 cargo bench`.

use algorithms::prelude::*;
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn base_size() -> usize {
    env::var("ALGORITHMS_BENCH_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000)
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform random integers.
fn generate_random(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random()).collect()
}

/// Integers drawn from a handful of distinct values.
fn generate_duplicates(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..8)).collect()
}

/// Random sparse directed graph with `degree` out-edges per node.
fn generate_graph(nodes: usize, degree: usize, seed: u64) -> Vec<Vec<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..nodes)
        .map(|_| (0..degree).map(|_| rng.random_range(0..nodes)).collect())
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_sorts(c: &mut Criterion) {
    let n = base_size();
    let inputs = [
        ("random", generate_random(n, 42)),
        ("sorted", (0..n as u64).collect::<Vec<_>>()),
        ("reversed", (0..n as u64).rev().collect::<Vec<_>>()),
        ("duplicates", generate_duplicates(n, 7)),
    ];

    for (shape, input) in &inputs {
        let mut group = c.benchmark_group(format!("sort_{shape}"));
        group.sample_size(20);

        for algorithm in SortAlgorithm::ALL {
            // Quadratic sorts get a smaller input
            let len = match algorithm {
                SortAlgorithm::Insertion | SortAlgorithm::BinaryInsertion => input.len().min(2_000),
                _ => input.len(),
            };
            group.throughput(Throughput::Elements(len as u64));
            group.bench_with_input(BenchmarkId::new(algorithm.name(), len), &len, |b, &len| {
                b.iter_batched_ref(
                    || input[..len].to_vec(),
                    |data| Sort::new(algorithm).seed(1).sort(black_box(data)).unwrap(),
                    BatchSize::LargeInput,
                )
            });
        }
        group.finish();
    }
}

fn bench_min_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let n = base_size() * 10;
    let data = generate_random(n, 3);

    group.throughput(Throughput::Elements(n as u64));
    group.bench_function(BenchmarkId::new("min_max", n), |b| {
        b.iter(|| min_max(black_box(&data)).unwrap())
    });
    group.bench_function(BenchmarkId::new("iter_min_then_max", n), |b| {
        b.iter(|| {
            let data = black_box(&data);
            (data.iter().min(), data.iter().max())
        })
    });
    group.finish();
}

fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    group.sample_size(30);

    for degree in [2, 8] {
        let graph = generate_graph(base_size(), degree, 11);
        group.bench_with_input(BenchmarkId::new("bfs", degree), &degree, |b, _| {
            b.iter(|| bfs(black_box(&graph), Some(0)).count())
        });
    }
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let n = base_size() * 10;
    let data: Vec<u64> = (0..n as u64).collect();

    for k in [1, 100, n / 10] {
        let sampler = Sample::new().size(k as i64).seed(5).build().unwrap();
        group.bench_with_input(BenchmarkId::new("known_length", k), &k, |b, _| {
            b.iter(|| sampler.sample_slice(black_box(&data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("reservoir", k), &k, |b, _| {
            b.iter(|| sampler.sample_iter(black_box(&data).iter()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sorts, bench_min_max, bench_bfs, bench_sampling);
criterion_main!(benches);
