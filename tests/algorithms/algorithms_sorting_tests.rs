#![cfg(feature = "dev")]
//! Tests for the in-place sorting algorithms.
//!
//! ## Test Organization
//!
//! 1. **Correctness** - Agreement with `slice::sort` on random inputs
//! 2. **Stability** - Equal keys keep their order for stable algorithms
//! 3. **Ranges** - Elements outside `[first, last)` are untouched
//! 4. **Failures** - Unorderable elements abort the sort
//! 5. **Algorithm Names** - Parsing and metadata

use core::cmp::Ordering;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use algorithms::internals::algorithms::sorting::{
    SortAlgorithm, binary_insertion_sort, heap_sort, insertion_sort, merge_sort, quick_sort,
    quick_sort_random,
};
use algorithms::internals::primitives::compare::{Incomparable, NaturalOrder};
use algorithms::internals::primitives::errors::AlgorithmError;
use algorithms::internals::primitives::view::SequenceView;
use algorithms::prelude::Sort;

/// Element ordered by `key` only, remembering its original position.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i32,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

fn random_ints(rng: &mut StdRng, n: usize, max: i32) -> Vec<i32> {
    (0..n).map(|_| rng.random_range(0..max)).collect()
}

fn sort_all(algorithm: SortAlgorithm, items: &mut [i32]) {
    Sort::new(algorithm)
        .seed(11)
        .sort(items)
        .expect("integers are always orderable");
}

// ============================================================================
// Correctness Tests
// ============================================================================

/// Test every algorithm against `slice::sort` on random inputs of many sizes.
#[test]
fn test_sorts_match_std_sort() {
    let mut rng = StdRng::seed_from_u64(42);
    for algorithm in SortAlgorithm::ALL {
        for n in (0..40).chain([257, 1000]) {
            let mut data = random_ints(&mut rng, n, 50);
            let mut expected = data.clone();
            expected.sort();

            sort_all(algorithm, &mut data);
            assert_eq!(data, expected, "{algorithm} failed on n={n}");
        }
    }
}

/// Test degenerate inputs: already sorted, reversed, all equal.
#[test]
fn test_sorts_degenerate_inputs() {
    let ascending: Vec<i32> = (0..500).collect();
    let descending: Vec<i32> = (0..500).rev().collect();
    let constant = vec![7; 500];

    for algorithm in SortAlgorithm::ALL {
        for input in [&ascending, &descending, &constant] {
            let mut data = input.clone();
            let mut expected = input.clone();
            expected.sort();

            sort_all(algorithm, &mut data);
            assert_eq!(data, expected, "{algorithm} failed on a degenerate input");
        }
    }
}

/// Test that sorting a sorted sequence changes nothing.
#[test]
fn test_sorts_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    for algorithm in SortAlgorithm::ALL {
        let mut data = random_ints(&mut rng, 200, 20);
        sort_all(algorithm, &mut data);
        let once = data.clone();
        sort_all(algorithm, &mut data);
        assert_eq!(data, once, "{algorithm} is not idempotent");
    }
}

/// Test the free functions directly on a view, including the empty and
/// single-element cases.
#[test]
fn test_free_functions_on_views() {
    type SortFn = fn(&mut SequenceView<'_, i32>, &mut NaturalOrder) -> Result<(), AlgorithmError>;
    let sorts: [SortFn; 5] = [
        binary_insertion_sort,
        insertion_sort,
        heap_sort,
        merge_sort,
        quick_sort,
    ];

    for sort in sorts {
        let mut empty: Vec<i32> = vec![];
        sort(&mut SequenceView::new(&mut empty), &mut NaturalOrder).unwrap();
        assert!(empty.is_empty());

        let mut single = vec![5];
        sort(&mut SequenceView::new(&mut single), &mut NaturalOrder).unwrap();
        assert_eq!(single, vec![5]);

        let mut data = vec![4, -1, 9, 0, 3, 3];
        sort(&mut SequenceView::new(&mut data), &mut NaturalOrder).unwrap();
        assert_eq!(data, vec![-1, 0, 3, 3, 4, 9]);
    }
}

/// Test sorting elements that are neither `Copy` nor `Clone`.
#[test]
fn test_sorts_move_owned_values() {
    for algorithm in SortAlgorithm::ALL {
        let mut words: Vec<String> = ["pear", "fig", "apple", "kiwi", "date"]
            .into_iter()
            .map(String::from)
            .collect();
        Sort::new(algorithm).sort(&mut words).unwrap();
        assert_eq!(words, vec!["apple", "date", "fig", "kiwi", "pear"]);
    }
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test that stable algorithms keep equal keys in their original order.
#[test]
fn test_stable_algorithms_preserve_order_of_equal_keys() {
    let mut rng = StdRng::seed_from_u64(9);
    let original: Vec<Tagged> = (0..300)
        .map(|tag| Tagged {
            key: rng.random_range(0..5),
            tag,
        })
        .collect();

    for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()) {
        let mut data = original.clone();
        Sort::new(algorithm).sort(&mut data).unwrap();

        for pair in data.windows(2) {
            assert!(pair[0].key <= pair[1].key, "{algorithm} is not sorted");
            if pair[0].key == pair[1].key {
                assert!(
                    pair[0].tag < pair[1].tag,
                    "{algorithm} reordered equal keys"
                );
            }
        }
    }
}

// ============================================================================
// Range Tests
// ============================================================================

/// Test that only `[first, last)` is sorted.
#[test]
fn test_range_sort_leaves_outside_untouched() {
    let original = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];

    for algorithm in SortAlgorithm::ALL {
        let mut data = original.clone();
        Sort::new(algorithm).first(2).last(7).sort(&mut data).unwrap();
        assert_eq!(data, vec![9, 8, 3, 4, 5, 6, 7, 2, 1, 0], "{algorithm}");
    }
}

/// Test empty and full ranges.
#[test]
fn test_range_sort_bounds_at_extremes() {
    let mut data = vec![3, 1, 2];
    Sort::new(SortAlgorithm::Heap).first(1).last(1).sort(&mut data).unwrap();
    assert_eq!(data, vec![3, 1, 2], "Empty range should be a no-op");

    Sort::new(SortAlgorithm::Heap).first(0).last(3).sort(&mut data).unwrap();
    assert_eq!(data, vec![1, 2, 3]);

    let mut empty: Vec<i32> = vec![];
    Sort::new(SortAlgorithm::Quick).first(0).last(0).sort(&mut empty).unwrap();
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Test that an unorderable pair reports absolute positions.
#[test]
fn test_unorderable_reports_absolute_positions() {
    let mut data = vec![3.0, 2.0, f64::NAN, 1.0];
    let err = Sort::new(SortAlgorithm::Insertion)
        .first(1)
        .sort(&mut data)
        .unwrap_err();

    match err {
        AlgorithmError::Unorderable { left, right, .. } => {
            assert_eq!((left, right), (2, 1), "Positions should be absolute");
        }
        other => panic!("Expected Unorderable, got {other:?}"),
    }
}

/// Test that merge sort moves nothing when a comparison fails.
#[test]
fn test_merge_sort_failure_leaves_input_unchanged() {
    let mut data = vec![4.0, 3.0, 2.0, 1.0, f64::NAN, 0.5];
    let err = Sort::new(SortAlgorithm::Merge).sort(&mut data);
    assert!(matches!(err, Err(AlgorithmError::Unorderable { .. })));

    assert_eq!(&data[..4], &[4.0, 3.0, 2.0, 1.0]);
    assert!(data[4].is_nan());
    assert_eq!(data[5], 0.5);
}

/// Test that a failing comparator aborts every algorithm without losing or
/// duplicating elements, and is never called again after failing.
#[test]
fn test_failure_preserves_multiset() {
    let original: Vec<i32> = (0..64).rev().collect();

    for algorithm in SortAlgorithm::ALL {
        let mut calls = 0usize;
        let mut failed = false;
        let mut cmp = |a: &i32, b: &i32| -> Result<Ordering, Incomparable> {
            assert!(!failed, "{algorithm} compared after a failure");
            calls += 1;
            if calls == 40 {
                failed = true;
                return Err(Incomparable::new("boom"));
            }
            Ok(a.cmp(b))
        };

        let mut data = original.clone();
        let err = Sort::new(algorithm).seed(1).sort_by(&mut data, &mut cmp);
        assert!(
            matches!(err, Err(AlgorithmError::Unorderable { ref reason, .. }) if reason == "boom"),
            "{algorithm} should report the comparator failure"
        );

        data.sort();
        let mut expected = original.clone();
        expected.sort();
        assert_eq!(data, expected, "{algorithm} lost or duplicated elements");
    }
}

// ============================================================================
// Quicksort Tests
// ============================================================================

/// Test that three-way partitioning handles all-equal input in linear time.
#[test]
fn test_quick_sort_equal_keys_linear() {
    let mut data = vec![1; 2000];
    let mut calls = 0usize;
    let mut cmp = |a: &i32, b: &i32| -> Result<Ordering, Incomparable> {
        calls += 1;
        Ok(a.cmp(b))
    };
    quick_sort(&mut SequenceView::new(&mut data), &mut cmp).unwrap();
    assert!(calls <= 2 * 2000, "Expected O(n) comparisons, got {calls}");
}

/// Test that a fixed seed makes the randomized quicksort reproducible.
#[test]
fn test_quick_sort_random_seeded_is_reproducible() {
    let mut rng = StdRng::seed_from_u64(5);
    let input = random_ints(&mut rng, 500, 1000);

    let count = |seed: u64| {
        let mut data = input.clone();
        let mut calls = 0usize;
        let mut cmp = |a: &i32, b: &i32| -> Result<Ordering, Incomparable> {
            calls += 1;
            Ok(a.cmp(b))
        };
        let mut pivots = StdRng::seed_from_u64(seed);
        quick_sort_random(&mut SequenceView::new(&mut data), &mut cmp, &mut pivots).unwrap();
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
        calls
    };

    assert_eq!(count(17), count(17), "Same seed should take the same path");
}

// ============================================================================
// Algorithm Name Tests
// ============================================================================

/// Test host-facing names and parsing.
#[test]
fn test_algorithm_names_round_trip() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.name().parse::<SortAlgorithm>(), Ok(algorithm));
        assert_eq!(algorithm.to_string(), algorithm.name());
    }
    assert_eq!("quick".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Quick));
    assert!("bogo_sort".parse::<SortAlgorithm>().is_err());
    assert_eq!(SortAlgorithm::default(), SortAlgorithm::Merge);
    assert!(SortAlgorithm::QuickRandom.is_randomized());
    assert!(!SortAlgorithm::Heap.is_stable());
}
