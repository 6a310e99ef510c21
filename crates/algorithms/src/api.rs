//! High-level API for sorting and sampling.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points of the crate: fluent
//! builders for configuring a sort ([`SortBuilder`]) or a sampler
//! ([`SampleBuilder`]), plus re-exports of the selection and traversal
//! functions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults (whole sequence,
//!   sample size 1, fresh entropy).
//! * **Validated**: Bounds and sizes are stored as given and validated when
//!   the call runs, through the engine `Validator`.
//! * **Reusable**: A built [`Sampler`] is plain configuration; each draw owns
//!   its own generator, so one sampler may serve many threads.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Sort::new(algorithm)` or `Sample::new()`.
//! 2. Chain configuration methods (`.first()`, `.last()`, `.size()`, `.seed()`).
//! 3. Run with `.sort(..)` / `.sort_by(..)`, or `.build()` a [`Sampler`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::rngs::StdRng;

// Internal dependencies
use crate::algorithms::sampling::{choose_indices, sample_iter, sample_slice};
use crate::engine::executor::SortExecutor;
use crate::engine::validator::Validator;
use crate::primitives::compare::{Comparator, NaturalOrder};
use crate::primitives::entropy::call_rng;
use crate::primitives::view::SequenceView;

// Publicly re-exported types
pub use crate::algorithms::sampling::{IndexSample, Reservoir};
pub use crate::algorithms::selection::{min_max, min_max_by};
pub use crate::algorithms::sorting::SortAlgorithm;
pub use crate::algorithms::traversal::{Adjacency, Bfs, TraversalState, VisitedSet, bfs};
pub use crate::primitives::errors::AlgorithmError;

// ============================================================================
// Sort Builder
// ============================================================================

/// Fluent builder for an in-place sort over an optional sub-range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortBuilder {
    /// Sorting algorithm.
    pub algorithm: SortAlgorithm,

    /// Inclusive start of the range (default: 0).
    pub first: Option<i64>,

    /// Exclusive end of the range (default: sequence length).
    pub last: Option<i64>,

    /// Seed for randomized pivots.
    pub seed: Option<u64>,
}

impl SortBuilder {
    /// Create a builder for `algorithm` over the whole sequence.
    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Set the inclusive start of the range.
    pub fn first(mut self, first: i64) -> Self {
        self.first = Some(first);
        self
    }

    /// Set the exclusive end of the range.
    pub fn last(mut self, last: i64) -> Self {
        self.last = Some(last);
        self
    }

    /// Seed the pivot generator of the randomized quicksort.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sort `items[first..last)` by natural order.
    pub fn sort<T: PartialOrd>(&self, items: &mut [T]) -> Result<(), AlgorithmError> {
        self.sort_by(items, &mut NaturalOrder)
    }

    /// Sort `items[first..last)` with a custom comparator.
    ///
    /// On failure the elements of the range may have been partially
    /// rearranged (except for merge sort), but none was lost or duplicated.
    pub fn sort_by<T, C>(&self, items: &mut [T], cmp: &mut C) -> Result<(), AlgorithmError>
    where
        C: Comparator<T> + ?Sized,
    {
        let range = Validator::validate_bounds(items.len(), self.first, self.last)?;
        let mut view = SequenceView::with_range(items, range)?;
        SortExecutor::run(self.algorithm, &mut view, cmp, self.seed)
    }
}

// ============================================================================
// Sample Builder
// ============================================================================

/// Fluent builder for sampling without replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleBuilder {
    /// Number of elements to draw (default: 1).
    pub size: i64,

    /// Seed for reproducible draws.
    pub seed: Option<u64>,
}

impl Default for SampleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleBuilder {
    /// Create a builder drawing one element with fresh entropy.
    pub fn new() -> Self {
        Self {
            size: 1,
            seed: None,
        }
    }

    /// Set the number of elements to draw.
    pub fn size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Seed the generator for reproducible draws.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<Sampler, AlgorithmError> {
        Ok(Sampler {
            size: Validator::validate_sample_size(self.size)?,
            seed: self.seed,
        })
    }
}

/// Validated sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    size: usize,
    seed: Option<u64>,
}

impl Sampler {
    /// Number of elements drawn per call.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Configured seed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Choose distinct positions out of a population of known length.
    pub fn indices(&self, population: usize) -> Result<IndexSample, AlgorithmError> {
        tracing::debug!(size = self.size, population, mode = "known_length", "sampling");
        choose_indices(population, self.size, &mut call_rng(self.seed))
    }

    /// Sample elements of a slice by reference.
    pub fn sample_slice<'a, T>(&self, items: &'a [T]) -> Result<Vec<&'a T>, AlgorithmError> {
        sample_slice(items, self.size, &mut call_rng(self.seed))
    }

    /// Sample items from an iterator of unknown length.
    pub fn sample_iter<I: IntoIterator>(&self, iter: I) -> Result<Vec<I::Item>, AlgorithmError> {
        sample_iter(iter, self.size, call_rng(self.seed))
    }

    /// Empty reservoir for feeding a stream item by item.
    pub fn reservoir<T>(&self) -> Reservoir<T, StdRng> {
        tracing::debug!(size = self.size, mode = "reservoir", "sampling");
        Reservoir::new(self.size, call_rng(self.seed))
    }
}
