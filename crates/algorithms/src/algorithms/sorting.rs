//! In-place comparison sorts.
//!
//! ## Purpose
//!
//! This module implements the six sorting algorithms of the crate over a
//! [`SequenceView`]: insertion, binary insertion, heap, merge, and the
//! deterministic and randomized quicksorts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Every comparison is checked; the first failure returns
//!   immediately and no further swap happens.
//! * **Merge by position**: Merge sort merges element positions in an
//!   auxiliary buffer and applies the resulting permutation once at the end,
//!   so a failed comparison leaves the sequence untouched.
//! * **Bounded stack**: Quicksort recurses into the shorter side and loops on
//!   the longer one, keeping auxiliary space at `O(log n)`.
//!
//! ## Key concepts
//!
//! | Algorithm             | Comparisons (worst) | Stable |
//! |-----------------------|---------------------|--------|
//! | Insertion             | O(n²)               | yes    |
//! | Binary insertion      | O(n log n)          | yes    |
//! | Heap                  | O(n log n)          | no     |
//! | Merge                 | O(n log n)          | yes    |
//! | Quick (median-of-3)   | O(n²)               | no     |
//! | Quick (random pivot)  | O(n²), O(n log n) expected | no |
//!
//! ## Invariants
//!
//! * On success the view is sorted in non-decreasing order.
//! * The multiset of elements in the view never changes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use rand::Rng;

// Internal dependencies
use crate::algorithms::heap::{HeapOrder, heapify, sift_down};
use crate::algorithms::partition::{median_of_three, partition, random_pivot};
use crate::algorithms::search::insertion_point;
use crate::primitives::compare::Comparator;
use crate::primitives::errors::AlgorithmError;
use crate::primitives::view::SequenceView;

// ============================================================================
// Algorithm Selection
// ============================================================================

/// The sorting algorithms implemented by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortAlgorithm {
    /// Binary insertion sort.
    BinaryInsertion,

    /// Insertion sort by adjacent swaps.
    Insertion,

    /// Heap sort.
    Heap,

    /// Top-down merge sort.
    #[default]
    Merge,

    /// Quicksort with median-of-three pivots.
    Quick,

    /// Quicksort with uniformly random pivots.
    QuickRandom,
}

impl SortAlgorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [SortAlgorithm; 6] = [
        Self::BinaryInsertion,
        Self::Insertion,
        Self::Heap,
        Self::Merge,
        Self::Quick,
        Self::QuickRandom,
    ];

    /// Function name exposed to host runtimes.
    pub fn name(self) -> &'static str {
        match self {
            Self::BinaryInsertion => "binary_insertion_sort",
            Self::Insertion => "insertion_sort",
            Self::Heap => "heap_sort",
            Self::Merge => "merge_sort",
            Self::Quick => "quick_sort",
            Self::QuickRandom => "quick_sort_random",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::BinaryInsertion | Self::Insertion | Self::Merge)
    }

    /// Whether the algorithm draws from an RNG.
    pub fn is_randomized(self) -> bool {
        matches!(self, Self::QuickRandom)
    }
}

impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s || a.name().trim_end_matches("_sort") == s)
            .ok_or_else(|| format!("Unknown sorting algorithm: {s}"))
    }
}

// ============================================================================
// Insertion Sorts
// ============================================================================

/// Insertion sort by successive adjacent swaps.
pub fn insertion_sort<T, C>(view: &mut SequenceView<'_, T>, cmp: &mut C) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    for i in 1..view.len() {
        // view[..i) is sorted; walk view[i] down into place
        let mut j = i;
        while j > 0 && view.compare(j, j - 1, cmp)? == Ordering::Less {
            view.swap(j, j - 1);
            j -= 1;
        }
    }
    Ok(())
}

/// Insertion sort locating each insertion point by binary search.
pub fn binary_insertion_sort<T, C>(
    view: &mut SequenceView<'_, T>,
    cmp: &mut C,
) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    for i in 1..view.len() {
        let k = insertion_point(view, i, 0, i, cmp)?;
        if k < i {
            view.rotate_into(k, i);
        }
    }
    Ok(())
}

// ============================================================================
// Heap Sort
// ============================================================================

/// Heap sort over a max-heap built in place.
pub fn heap_sort<T, C>(view: &mut SequenceView<'_, T>, cmp: &mut C) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    heapify(view, HeapOrder::Max, cmp)?;
    for end in (1..view.len()).rev() {
        view.swap(0, end);
        sift_down(view, 0, end, HeapOrder::Max, cmp)?;
    }
    Ok(())
}

// ============================================================================
// Merge Sort
// ============================================================================

/// Stable top-down merge sort.
pub fn merge_sort<T, C>(view: &mut SequenceView<'_, T>, cmp: &mut C) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    let n = view.len();
    if n < 2 {
        return Ok(());
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut buffer = vec![0; n];
    merge_positions(view, &mut order, &mut buffer, cmp)?;

    view.permute(&order);
    Ok(())
}

/// Sort `order` (positions into `view`) by the elements they refer to.
fn merge_positions<T, C>(
    view: &SequenceView<'_, T>,
    order: &mut [usize],
    buffer: &mut [usize],
    cmp: &mut C,
) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    let n = order.len();
    if n < 2 {
        return Ok(());
    }

    let mid = n / 2;
    merge_positions(view, &mut order[..mid], &mut buffer[..mid], cmp)?;
    merge_positions(view, &mut order[mid..], &mut buffer[mid..], cmp)?;

    buffer.copy_from_slice(order);
    let (left, right) = buffer.split_at(mid);

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        // Ties take from the left run
        if view.compare(left[i], right[j], cmp)? == Ordering::Greater {
            order[k] = right[j];
            j += 1;
        } else {
            order[k] = left[i];
            i += 1;
        }
        k += 1;
    }
    let rest = left.len() - i;
    order[k..k + rest].copy_from_slice(&left[i..]);
    k += rest;
    order[k..].copy_from_slice(&right[j..]);

    Ok(())
}

// ============================================================================
// Quick Sorts
// ============================================================================

/// Quicksort with median-of-three pivot selection.
pub fn quick_sort<T, C>(view: &mut SequenceView<'_, T>, cmp: &mut C) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    let hi = view.len();
    quick_sort_range(view, 0, hi, cmp, &mut MedianOfThree)
}

/// Quicksort with a uniformly random pivot for every partition.
pub fn quick_sort_random<T, C, R>(
    view: &mut SequenceView<'_, T>,
    cmp: &mut C,
    rng: &mut R,
) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
    R: Rng + ?Sized,
{
    let hi = view.len();
    quick_sort_range(view, 0, hi, cmp, &mut RandomPivot(rng))
}

/// Rule for picking the pivot of `view[lo..hi)`.
trait PivotRule<T, C: ?Sized> {
    fn choose(
        &mut self,
        view: &SequenceView<'_, T>,
        lo: usize,
        hi: usize,
        cmp: &mut C,
    ) -> Result<usize, AlgorithmError>;
}

struct MedianOfThree;

impl<T, C: Comparator<T> + ?Sized> PivotRule<T, C> for MedianOfThree {
    fn choose(
        &mut self,
        view: &SequenceView<'_, T>,
        lo: usize,
        hi: usize,
        cmp: &mut C,
    ) -> Result<usize, AlgorithmError> {
        median_of_three(view, lo, hi, cmp)
    }
}

struct RandomPivot<'r, R: ?Sized>(&'r mut R);

impl<T, C: ?Sized, R: Rng + ?Sized> PivotRule<T, C> for RandomPivot<'_, R> {
    fn choose(
        &mut self,
        _view: &SequenceView<'_, T>,
        lo: usize,
        hi: usize,
        _cmp: &mut C,
    ) -> Result<usize, AlgorithmError> {
        Ok(random_pivot(lo, hi, &mut *self.0))
    }
}

fn quick_sort_range<T, C, P>(
    view: &mut SequenceView<'_, T>,
    mut lo: usize,
    mut hi: usize,
    cmp: &mut C,
    rule: &mut P,
) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
    P: PivotRule<T, C>,
{
    while hi - lo > 1 {
        let pivot = rule.choose(view, lo, hi, cmp)?;
        let (lt, gt) = partition(view, lo, hi, pivot, cmp)?;

        if lt - lo < hi - gt {
            quick_sort_range(view, lo, lt, cmp, rule)?;
            lo = gt;
        } else {
            quick_sort_range(view, gt, hi, cmp, rule)?;
            hi = lt;
        }
    }
    Ok(())
}
