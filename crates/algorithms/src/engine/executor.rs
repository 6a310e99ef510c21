//! Execution engine for sorting calls.
//!
//! ## Purpose
//!
//! This module dispatches a [`SortAlgorithm`] to its implementation over an
//! already validated [`SequenceView`], and owns the call-scoped RNG of the
//! randomized quicksort.
//!
//! ## Design notes
//!
//! * One entry point for every algorithm, so host boundaries never match on
//!   the algorithm themselves.
//! * A generator is only built for algorithms that draw from one; seeding from
//!   operating-system entropy is skipped for the deterministic sorts.
//!
//! ## Non-goals
//!
//! * This module does not validate bounds (handled by `validator`).
//! * This module does not convert between host and native sequences.

// External dependencies
use rand::Rng;
use rand::rngs::StdRng;

// Internal dependencies
use crate::algorithms::sorting::{
    SortAlgorithm, binary_insertion_sort, heap_sort, insertion_sort, merge_sort, quick_sort,
    quick_sort_random,
};
use crate::primitives::compare::Comparator;
use crate::primitives::entropy::call_rng;
use crate::primitives::errors::AlgorithmError;
use crate::primitives::view::SequenceView;

// ============================================================================
// Executor
// ============================================================================

/// Runs sorting algorithms over sequence views.
pub struct SortExecutor;

impl SortExecutor {
    /// Sort `view` with `algorithm`.
    ///
    /// `seed` only affects [`SortAlgorithm::QuickRandom`]; without one, a fresh
    /// generator is seeded from operating-system entropy.
    pub fn run<T, C>(
        algorithm: SortAlgorithm,
        view: &mut SequenceView<'_, T>,
        cmp: &mut C,
        seed: Option<u64>,
    ) -> Result<(), AlgorithmError>
    where
        C: Comparator<T> + ?Sized,
    {
        if algorithm.is_randomized() {
            Self::run_with_rng(algorithm, view, cmp, &mut call_rng(seed))
        } else {
            Self::dispatch::<T, C, StdRng>(algorithm, view, cmp, None)
        }
    }

    /// Sort `view` with `algorithm`, drawing any randomness from `rng`.
    pub fn run_with_rng<T, C, R>(
        algorithm: SortAlgorithm,
        view: &mut SequenceView<'_, T>,
        cmp: &mut C,
        rng: &mut R,
    ) -> Result<(), AlgorithmError>
    where
        C: Comparator<T> + ?Sized,
        R: Rng + ?Sized,
    {
        Self::dispatch(algorithm, view, cmp, Some(rng))
    }

    fn dispatch<T, C, R>(
        algorithm: SortAlgorithm,
        view: &mut SequenceView<'_, T>,
        cmp: &mut C,
        rng: Option<&mut R>,
    ) -> Result<(), AlgorithmError>
    where
        C: Comparator<T> + ?Sized,
        R: Rng + ?Sized,
    {
        tracing::debug!(
            %algorithm,
            first = view.first(),
            last = view.last(),
            len = view.len(),
            "sorting"
        );

        match (algorithm, rng) {
            (SortAlgorithm::BinaryInsertion, _) => binary_insertion_sort(view, cmp),
            (SortAlgorithm::Insertion, _) => insertion_sort(view, cmp),
            (SortAlgorithm::Heap, _) => heap_sort(view, cmp),
            (SortAlgorithm::Merge, _) => merge_sort(view, cmp),
            (SortAlgorithm::Quick, _) => quick_sort(view, cmp),
            (SortAlgorithm::QuickRandom, Some(rng)) => quick_sort_random(view, cmp, rng),
            (SortAlgorithm::QuickRandom, None) => {
                quick_sort_random(view, cmp, &mut call_rng(None))
            }
        }
    }
}
