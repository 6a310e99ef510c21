//! Binary search for insertion points.
//!
//! ## Purpose
//!
//! Locates where an element belongs inside an already sorted stretch of a
//! [`SequenceView`]. Binary insertion sort is built on it.
//!
//! ## Key concepts
//!
//! The returned position is the *upper bound*: the first position whose
//! element is strictly greater than the key. Inserting there places the key
//! after every element equal to it, which keeps binary insertion sort stable.
//!
//! ## Invariants
//!
//! * `view[lo..hi)` must be sorted (more precisely, partitioned with respect
//!   to the key).
//! * The key is compared on the left: `compare(key, mid)`.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::compare::Comparator;
use crate::primitives::errors::AlgorithmError;
use crate::primitives::view::SequenceView;

/// Index in `[lo, hi]` such that every element of `view[lo..idx)` is less than
/// or equal to `view[key]` and every element of `view[idx..hi)` is greater.
pub fn insertion_point<T, C>(
    view: &SequenceView<'_, T>,
    key: usize,
    lo: usize,
    hi: usize,
    cmp: &mut C,
) -> Result<usize, AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    let (mut lo, mut hi) = (lo, hi);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if view.compare(key, mid, cmp)? == Ordering::Less {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Ok(lo)
}
