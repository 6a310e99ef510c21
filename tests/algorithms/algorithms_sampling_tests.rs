#![cfg(feature = "dev")]
//! Tests for sampling without replacement.
//!
//! ## Test Organization
//!
//! 1. **Validity** - Distinct members of the population, right size
//! 2. **Reproducibility** - Fixed seeds give fixed samples
//! 3. **Uniformity** - Every subset equally likely, in both modes
//! 4. **Gathering** - Ascending, single-pass element fetches
//! 5. **Edge Cases** - Zero-size samples and small populations

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{BTreeSet, HashMap};

use algorithms::internals::algorithms::sampling::{
    Reservoir, choose_indices, sample_iter, sample_slice,
};
use algorithms::internals::primitives::errors::AlgorithmError;

// ============================================================================
// Validity Tests
// ============================================================================

/// Test that sampled positions are distinct and inside the population.
#[test]
fn test_choose_indices_distinct_and_in_range() {
    let mut rng = StdRng::seed_from_u64(1);
    for population in [1, 2, 10, 1000, 100_000] {
        for size in [0, 1, population / 2, population] {
            let sample = choose_indices(population, size, &mut rng).unwrap();
            assert_eq!(sample.len(), size);
            let distinct: BTreeSet<_> = sample.positions().iter().copied().collect();
            assert_eq!(distinct.len(), size, "Positions must be distinct");
            assert!(sample.positions().iter().all(|&p| p < population));
        }
    }
}

/// Test that a reservoir returns distinct items of the stream.
#[test]
fn test_reservoir_distinct_items() {
    let items = sample_iter(0..500, 20, StdRng::seed_from_u64(2)).unwrap();
    assert_eq!(items.len(), 20);
    let distinct: BTreeSet<_> = items.iter().copied().collect();
    assert_eq!(distinct.len(), 20);
    assert!(items.iter().all(|&x| x < 500));
}

/// Test sampling by reference from a slice.
#[test]
fn test_sample_slice_references() {
    let words = ["a", "b", "c", "d"];
    let picked = sample_slice(&words, 4, &mut StdRng::seed_from_u64(3)).unwrap();
    assert!(picked.iter().all(|w| words.iter().any(|x| core::ptr::eq(x, *w))));
    let distinct: BTreeSet<_> = picked.iter().collect();
    assert_eq!(distinct.len(), 4);
}

// ============================================================================
// Reproducibility Tests
// ============================================================================

/// Test that equal seeds give equal samples in both modes.
#[test]
fn test_seeded_sampling_is_reproducible() {
    let a = choose_indices(100, 10, &mut StdRng::seed_from_u64(77)).unwrap();
    let b = choose_indices(100, 10, &mut StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a, b);

    let a = sample_iter(0..100, 10, StdRng::seed_from_u64(77)).unwrap();
    let b = sample_iter(0..100, 10, StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Uniformity Tests
// ============================================================================

const TRIALS: usize = 20_000;

fn subset_frequencies(mut draw: impl FnMut() -> Vec<usize>) -> HashMap<Vec<usize>, f64> {
    let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let mut subset = draw();
        subset.sort_unstable();
        *counts.entry(subset).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(subset, count)| (subset, count as f64 / TRIALS as f64))
        .collect()
}

/// Test that every 2-subset of 5 positions is equally likely.
#[test]
fn test_choose_indices_uniform_subsets() {
    let mut rng = StdRng::seed_from_u64(10);
    let freqs = subset_frequencies(|| choose_indices(5, 2, &mut rng).unwrap().positions().to_vec());

    assert_eq!(freqs.len(), 10, "All C(5, 2) subsets should occur");
    for (subset, freq) in freqs {
        assert_abs_diff_eq!(freq, 0.1, epsilon = 0.015);
        assert_eq!(subset.len(), 2);
    }
}

/// Test that every 2-subset of a 5-item stream is equally likely.
#[test]
fn test_reservoir_uniform_subsets() {
    let mut seed = 0u64;
    let freqs = subset_frequencies(|| {
        seed += 1;
        sample_iter(0..5usize, 2, StdRng::seed_from_u64(seed)).unwrap()
    });

    assert_eq!(freqs.len(), 10, "All C(5, 2) subsets should occur");
    for freq in freqs.values() {
        assert_abs_diff_eq!(*freq, 0.1, epsilon = 0.015);
    }
}

/// Test that a full-size index sample is a uniform permutation.
#[test]
fn test_choose_indices_uniform_permutations() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let order = choose_indices(3, 3, &mut rng).unwrap().positions().to_vec();
        *counts.entry(order).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for count in counts.values() {
        assert_abs_diff_eq!(*count as f64 / TRIALS as f64, 1.0 / 6.0, epsilon = 0.015);
    }
}

// ============================================================================
// Gathering Tests
// ============================================================================

/// Test that gathering fetches in ascending order and returns slot order.
#[test]
fn test_gather_order() {
    let sample = choose_indices(50, 8, &mut StdRng::seed_from_u64(8)).unwrap();

    let mut fetched = Vec::new();
    let items: Vec<usize> = sample
        .gather(|i| {
            fetched.push(i);
            Ok::<_, ()>(i * 10)
        })
        .unwrap();

    assert!(fetched.windows(2).all(|w| w[0] < w[1]), "Ascending fetches");
    assert_eq!(fetched.len(), 8, "One fetch per position");
    let expected: Vec<usize> = sample.positions().iter().map(|p| p * 10).collect();
    assert_eq!(items, expected, "Results in slot order");
}

/// Test that a failing fetch stops gathering.
#[test]
fn test_gather_stops_on_error() {
    let sample = choose_indices(10, 10, &mut StdRng::seed_from_u64(9)).unwrap();
    let mut calls = 0;
    let result: Result<Vec<usize>, String> = sample.gather(|i| {
        calls += 1;
        if i == 4 { Err("boom".into()) } else { Ok(i) }
    });
    assert_eq!(result, Err("boom".to_string()));
    assert_eq!(calls, 5, "Positions 0..=4 were fetched, nothing after");
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test zero-size samples.
#[test]
fn test_zero_size_samples() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(choose_indices(0, 0, &mut rng).unwrap().is_empty());
    assert!(choose_indices(10, 0, &mut rng).unwrap().is_empty());
    assert!(sample_iter(0..10, 0, rng.clone()).unwrap().is_empty());
    assert!(sample_iter(0..0, 0, rng).unwrap().is_empty());
}

/// Test populations smaller than the sample.
#[test]
fn test_population_too_small() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        choose_indices(10, 11, &mut rng).unwrap_err(),
        AlgorithmError::PopulationTooSmall { size: 11, got: 10 }
    );
    assert_eq!(
        sample_iter(0..10, 11, rng).unwrap_err(),
        AlgorithmError::PopulationTooSmall { size: 11, got: 10 }
    );
}

/// Test feeding a reservoir item by item.
#[test]
fn test_reservoir_incremental() {
    let mut reservoir = Reservoir::new(3, StdRng::seed_from_u64(4));
    assert!(!reservoir.is_full());
    for word in ["a", "b", "c", "d", "e"] {
        reservoir.offer(word.to_string());
    }
    assert_eq!(reservoir.seen(), 5);
    assert_eq!(reservoir.capacity(), 3);
    assert!(reservoir.is_full());

    let items = reservoir.finish().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|w| ["a", "b", "c", "d", "e"].contains(&w.as_str())));
}
