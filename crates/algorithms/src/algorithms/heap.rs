//! Binary heap primitives over a sequence view.
//!
//! ## Purpose
//!
//! Builds and repairs implicit binary heaps laid out in a [`SequenceView`]
//! (children of `i` at `2i + 1` and `2i + 2`). Heap sort uses the max-heap
//! form; the min-heap form is provided for selection-style callers.
//!
//! ## Design notes
//!
//! * **Iterative**: Sift-down is naturally tail recursive and is written as a
//!   loop.
//! * **Bottom-up build**: Heapification starts at the last parent and works
//!   toward the root; leaves are already heaps.
//!
//! ## Invariants
//!
//! * `sift_down` assumes both subtrees of `root` are already heaps.
//! * Only positions below `size` are read or written.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::compare::Comparator;
use crate::primitives::errors::AlgorithmError;
use crate::primitives::view::SequenceView;

// ============================================================================
// Heap Order
// ============================================================================

/// Which extreme sits at the root of the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapOrder {
    /// Largest element at the root.
    #[default]
    Max,

    /// Smallest element at the root.
    Min,
}

impl HeapOrder {
    /// Whether a child comparing as `ord` against its parent must be lifted.
    #[inline]
    fn prefers(self, ord: Ordering) -> bool {
        match self {
            Self::Max => ord == Ordering::Greater,
            Self::Min => ord == Ordering::Less,
        }
    }
}

// ============================================================================
// Heap Operations
// ============================================================================

/// Index of the parent of node `i` (`i > 0`).
#[inline]
pub fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Restore the heap property for the subtree of `view[..size)` rooted at `root`.
pub fn sift_down<T, C>(
    view: &mut SequenceView<'_, T>,
    mut root: usize,
    size: usize,
    order: HeapOrder,
    cmp: &mut C,
) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    loop {
        let left = 2 * root + 1;
        let right = left + 1;

        let mut best = root;
        if left < size && order.prefers(view.compare(left, best, cmp)?) {
            best = left;
        }
        if right < size && order.prefers(view.compare(right, best, cmp)?) {
            best = right;
        }
        if best == root {
            return Ok(());
        }

        view.swap(root, best);
        root = best;
    }
}

/// Permute the whole view into a binary heap.
pub fn heapify<T, C>(
    view: &mut SequenceView<'_, T>,
    order: HeapOrder,
    cmp: &mut C,
) -> Result<(), AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    let size = view.len();
    if size < 2 {
        return Ok(());
    }
    for i in (0..=parent(size - 1)).rev() {
        sift_down(view, i, size, order, cmp)?;
    }
    Ok(())
}

/// Whether `view` satisfies the heap property for `order`.
pub fn is_heap<T, C>(
    view: &SequenceView<'_, T>,
    order: HeapOrder,
    cmp: &mut C,
) -> Result<bool, AlgorithmError>
where
    C: Comparator<T> + ?Sized,
{
    for child in 1..view.len() {
        if order.prefers(view.compare(child, parent(child), cmp)?) {
            return Ok(false);
        }
    }
    Ok(true)
}
