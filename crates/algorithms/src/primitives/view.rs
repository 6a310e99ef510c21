//! Bounds-checked sequence view.
//!
//! ## Purpose
//!
//! A [`SequenceView`] grants an algorithm exclusive, swap-capable access to
//! the sub-range `[first, last)` of a caller-owned slice for the duration of
//! one call. It owns no elements.
//!
//! ## Design notes
//!
//! * **Relative indexing**: Algorithms address elements as `0..len()`; the
//!   view adds `first` only when reporting positions in errors.
//! * **Exclusive**: Holding `&mut [T]` rules out aliasing mutation mid-call.
//! * **Moves, not copies**: Elements are only ever swapped or rotated, so
//!   `T` needs neither `Clone` nor `Copy`.
//!
//! ## Invariants
//!
//! * `0 <= first <= last <= items.len()` for the underlying slice.
//! * No operation touches an element outside `[first, last)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(feature = "std")]
use std::vec;

// External dependencies
use core::cmp::Ordering;
use core::ops::Range;

// Internal dependencies
use crate::primitives::compare::Comparator;
use crate::primitives::errors::AlgorithmError;

// ============================================================================
// Sequence View
// ============================================================================

/// Exclusive view over the range `[first, last)` of a slice.
#[derive(Debug)]
pub struct SequenceView<'a, T> {
    /// The elements in `[first, last)`.
    items: &'a mut [T],

    /// Absolute position of `items[0]` in the caller's sequence.
    first: usize,
}

impl<'a, T> SequenceView<'a, T> {
    /// View the whole slice.
    pub fn new(items: &'a mut [T]) -> Self {
        Self { items, first: 0 }
    }

    /// View `items[range]`, rejecting ranges outside the slice.
    pub fn with_range(items: &'a mut [T], range: Range<usize>) -> Result<Self, AlgorithmError> {
        let len = items.len();
        if range.start > len {
            return Err(AlgorithmError::OutOfRange {
                argument: "first",
                index: range.start as i128,
                len: Some(len),
            });
        }
        if range.end > len {
            return Err(AlgorithmError::OutOfRange {
                argument: "last",
                index: range.end as i128,
                len: Some(len),
            });
        }
        if range.start > range.end {
            return Err(AlgorithmError::InvertedRange {
                first: range.start,
                last: range.end,
            });
        }

        let first = range.start;
        Ok(Self {
            items: &mut items[range],
            first,
        })
    }

    /// Absolute start of the view.
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    /// Absolute end of the view.
    #[inline]
    pub fn last(&self) -> usize {
        self.first + self.items.len()
    }

    /// Number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at relative position `i`.
    #[inline]
    pub fn get(&self, i: usize) -> &T {
        &self.items[i]
    }

    /// Swap the elements at relative positions `i` and `j`.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    /// Compare the elements at relative positions `i` and `j`.
    #[inline]
    pub fn compare<C>(&self, i: usize, j: usize, cmp: &mut C) -> Result<Ordering, AlgorithmError>
    where
        C: Comparator<T> + ?Sized,
    {
        cmp.compare(&self.items[i], &self.items[j])
            .map_err(|e| AlgorithmError::Unorderable {
                left: self.first + i,
                right: self.first + j,
                reason: e.reason,
            })
    }

    /// Move the element at `i` down to `k <= i`, shifting `[k, i)` up by one.
    #[inline]
    pub fn rotate_into(&mut self, k: usize, i: usize) {
        self.items[k..=i].rotate_right(1);
    }

    /// Rearrange the view so that position `k` receives the element that was
    /// at position `order[k]`.
    ///
    /// `order` must be a permutation of `0..len()`. The permutation is applied
    /// by following its cycles, so every element moves by swaps only.
    pub fn permute(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.items.len());

        let mut placed = vec![false; order.len()];
        for start in 0..order.len() {
            if placed[start] {
                continue;
            }
            let mut dest = start;
            loop {
                placed[dest] = true;
                let src = order[dest];
                if src == start {
                    break;
                }
                self.items.swap(dest, src);
                dest = src;
            }
        }
    }

    /// The elements of the view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items
    }
}
