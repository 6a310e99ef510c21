//! Simultaneous minimum and maximum selection.
//!
//! ## Purpose
//!
//! Finds both extremes of a sequence in a single pass using at most
//! `3⌈n/2⌉` comparisons instead of the `2n - 2` of two separate scans.
//!
//! ## Key concepts
//!
//! Elements are processed in pairs. The two members of a pair are compared
//! with each other first; the smaller is then compared only against the
//! running minimum and the larger only against the running maximum. An odd
//! length seeds both extremes with the first element; an even length seeds
//! them with the first ordered pair.
//!
//! ## Invariants
//!
//! * Returned references point into the input; nothing is copied.
//! * Among equal minima the **first** occurrence is returned, among equal
//!   maxima the **last** one, i.e. the first and last elements a stable sort
//!   would produce.
//! * For a single element, both references point to that element.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::compare::{Comparator, NaturalOrder};
use crate::primitives::errors::AlgorithmError;

/// Minimum and maximum of `items` under their natural order.
pub fn min_max<T: PartialOrd>(items: &[T]) -> Result<(&T, &T), AlgorithmError> {
    min_max_by(items, &mut NaturalOrder)
}

/// Minimum and maximum of `items` under `cmp`.
pub fn min_max_by<'a, T, C>(items: &'a [T], cmp: &mut C) -> Result<(&'a T, &'a T), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    let n = items.len();
    if n == 0 {
        return Err(AlgorithmError::EmptyInput {
            function: "min_max",
        });
    }

    let (mut lo, mut hi, mut i) = if n % 2 == 1 {
        (0, 0, 1)
    } else {
        let (small, large) = ordered_pair(items, 0, 1, cmp)?;
        (small, large, 2)
    };

    while i + 1 < n {
        let (small, large) = ordered_pair(items, i, i + 1, cmp)?;
        if compare_at(items, small, lo, cmp)? == Ordering::Less {
            lo = small;
        }
        if compare_at(items, large, hi, cmp)? != Ordering::Less {
            hi = large;
        }
        i += 2;
    }

    Ok((&items[lo], &items[hi]))
}

/// Order the pair at `x < y`, keeping `x` first when the elements are equal.
#[inline]
fn ordered_pair<T, C>(
    items: &[T],
    x: usize,
    y: usize,
    cmp: &mut C,
) -> Result<(usize, usize), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    if compare_at(items, y, x, cmp)? == Ordering::Less {
        Ok((y, x))
    } else {
        Ok((x, y))
    }
}

#[inline]
fn compare_at<T, C>(items: &[T], i: usize, j: usize, cmp: &mut C) -> Result<Ordering, AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    cmp.compare(&items[i], &items[j])
        .map_err(|e| AlgorithmError::Unorderable {
            left: i,
            right: j,
            reason: e.reason,
        })
}
