#![cfg(feature = "dev")]
//! Tests for simultaneous minimum and maximum selection.
//!
//! ## Test Organization
//!
//! 1. **Correctness** - Agreement with iterator min/max
//! 2. **Identity** - Returned references point into the input
//! 3. **Comparison Bound** - At most `3⌈n/2⌉` comparisons
//! 4. **Failures** - Empty and unorderable input

use core::cmp::Ordering;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use algorithms::internals::algorithms::selection::{min_max, min_max_by};
use algorithms::internals::primitives::compare::Incomparable;
use algorithms::internals::primitives::errors::AlgorithmError;

/// Element ordered by `key` only.
#[derive(Debug)]
struct Keyed {
    key: i32,
    id: usize,
}

fn by_key(a: &Keyed, b: &Keyed) -> Result<Ordering, Incomparable> {
    Ok(a.key.cmp(&b.key))
}

// ============================================================================
// Correctness Tests
// ============================================================================

/// Test against iterator min/max on random inputs of odd and even length.
#[test]
fn test_min_max_matches_iterators() {
    let mut rng = StdRng::seed_from_u64(21);
    for n in 1..80 {
        let data: Vec<i32> = (0..n).map(|_| rng.random_range(-100..100)).collect();
        let (lo, hi) = min_max(&data).unwrap();
        assert_eq!(*lo, *data.iter().min().unwrap(), "min for n={n}");
        assert_eq!(*hi, *data.iter().max().unwrap(), "max for n={n}");
    }
}

/// Test small hand-picked cases.
#[test]
fn test_min_max_small_cases() {
    assert_eq!(min_max(&[3, 1]).unwrap(), (&1, &3));
    assert_eq!(min_max(&[1, 3]).unwrap(), (&1, &3));
    assert_eq!(min_max(&[2, 9, -4]).unwrap(), (&-4, &9));
    assert_eq!(min_max(&["pear", "apple", "fig"]).unwrap(), (&"apple", &"pear"));
}

// ============================================================================
// Identity Tests
// ============================================================================

/// Test that a single element is both minimum and maximum.
#[test]
fn test_min_max_singleton_identity() {
    let data = [Keyed { key: 7, id: 0 }];
    let (lo, hi) = min_max_by(&data, &mut by_key).unwrap();
    assert!(core::ptr::eq(lo, &data[0]));
    assert!(core::ptr::eq(hi, &data[0]));
}

/// Test the tie-break: first minimum and last maximum.
#[test]
fn test_min_max_tie_break() {
    for n in 1..12 {
        // Every element equal
        let data: Vec<Keyed> = (0..n).map(|id| Keyed { key: 0, id }).collect();
        let (lo, hi) = min_max_by(&data, &mut by_key).unwrap();
        assert_eq!(lo.id, 0, "First minimum for n={n}");
        assert_eq!(hi.id, n - 1, "Last maximum for n={n}");
    }

    let keys = [5, 1, 9, 1, 9, 3];
    let data: Vec<Keyed> = keys
        .iter()
        .enumerate()
        .map(|(id, &key)| Keyed { key, id })
        .collect();
    let (lo, hi) = min_max_by(&data, &mut by_key).unwrap();
    assert_eq!((lo.id, hi.id), (1, 4));
}

// ============================================================================
// Comparison Bound Tests
// ============================================================================

/// Test that at most `3⌈n/2⌉` comparisons are made.
#[test]
fn test_min_max_comparison_bound() {
    let mut rng = StdRng::seed_from_u64(4);
    for n in 1..200usize {
        let data: Vec<i32> = (0..n).map(|_| rng.random_range(0..1000)).collect();
        let mut calls = 0usize;
        let mut cmp = |a: &i32, b: &i32| -> Result<Ordering, Incomparable> {
            calls += 1;
            Ok(a.cmp(b))
        };
        min_max_by(&data, &mut cmp).unwrap();
        assert!(calls <= 3 * n.div_ceil(2), "{calls} comparisons for n={n}");
    }
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Test empty input.
#[test]
fn test_min_max_empty() {
    let data: [i32; 0] = [];
    let err = min_max(&data).unwrap_err();
    assert_eq!(err, AlgorithmError::EmptyInput { function: "min_max" });
    assert!(err.to_string().contains("empty sequence"));
}

/// Test unorderable elements.
#[test]
fn test_min_max_unorderable() {
    let err = min_max(&[1.0, f64::NAN, 2.0]).unwrap_err();
    assert!(matches!(err, AlgorithmError::Unorderable { .. }));
}
