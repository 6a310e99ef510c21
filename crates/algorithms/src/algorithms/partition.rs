//! Pivot selection and three-way partitioning for quicksort.
//!
//! ## Purpose
//!
//! This module splits a stretch of a [`SequenceView`] around a pivot into
//! elements less than, equal to and greater than it, and provides the two
//! pivot rules quicksort uses: median-of-three and uniform random.
//!
//! ## Design notes
//!
//! * **Dutch national flag**: Runs of keys equal to the pivot are gathered in
//!   the middle band and excluded from further recursion, so inputs with
//!   heavy duplication partition in linear time.
//! * **Compare by position**: The partition compares against the element
//!   currently at `lt`, which always equals the pivot, so the pivot is never
//!   copied out of the sequence.
//!
//! ## Invariants
//!
//! After `partition(view, lo, hi, p)` returns `(lt, gt)`:
//!
//! * `view[lo..lt)` < pivot
//! * `view[lt..gt)` == pivot, and `lt < gt` whenever `lo < hi`
//! * `view[gt..hi)` > pivot

// External dependencies
use core::cmp::Ordering;
use rand::Rng;

// Internal dependencies
use crate::primitives::compare::Comparator;
use crate::primitives::errors::AlgorithmError;
use crate::primitives::view::SequenceView;

// ============================================================================
// Pivot Selection
// ============================================================================

/// Index of the median of `view[lo]`, `view[mid]` and `view[hi - 1]`.
///
/// Ranges shorter than three elements return `lo`.
pub fn median_of_three<T, C>(
    view: &SequenceView<'_, T>,
    lo: usize,
    hi: usize,
    cmp: &mut C,
) -> Result<usize, AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    if hi - lo < 3 {
        return Ok(lo);
    }

    let (mut a, mut b) = (lo, lo + (hi - lo) / 2);
    let c = hi - 1;

    // Order the first two so that view[a] <= view[b]
    if view.compare(a, b, cmp)? == Ordering::Greater {
        core::mem::swap(&mut a, &mut b);
    }
    if view.compare(b, c, cmp)? != Ordering::Greater {
        return Ok(b);
    }
    // view[c] < view[b]: the median is the larger of view[a] and view[c]
    if view.compare(a, c, cmp)? == Ordering::Greater {
        Ok(a)
    } else {
        Ok(c)
    }
}

/// Uniformly random index in `[lo, hi)`.
pub fn random_pivot<R>(lo: usize, hi: usize, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let pivot = rng.random_range(lo..hi);
    tracing::trace!(pivot, lo, hi, "random pivot");
    pivot
}

// ============================================================================
// Partitioning
// ============================================================================

/// Three-way partition of `view[lo..hi)` around the element at `pivot`.
///
/// Returns the bounds `(lt, gt)` of the band equal to the pivot.
pub fn partition<T, C>(
    view: &mut SequenceView<'_, T>,
    lo: usize,
    hi: usize,
    pivot: usize,
    cmp: &mut C,
) -> Result<(usize, usize), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    if lo >= hi {
        return Ok((lo, lo));
    }

    view.swap(lo, pivot);

    let (mut lt, mut i, mut gt) = (lo, lo + 1, hi);
    while i < gt {
        match view.compare(i, lt, cmp)? {
            Ordering::Less => {
                view.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                view.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    Ok((lt, gt))
}
