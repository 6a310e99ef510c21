//! # Generic sorting, selection, traversal and sampling
//!
//! Classic array and graph algorithms written once, generically, so that the
//! same code serves native Rust callers and host runtimes whose values can
//! only be compared, hashed or iterated through fallible calls.
//!
//! ## What is provided?
//!
//! * **Sorting**: binary insertion, insertion, heap, merge, deterministic and
//!   randomized quicksort, in place over an optional sub-range `[first, last)`.
//! * **Selection**: simultaneous minimum and maximum in at most `3⌈n/2⌉`
//!   comparisons.
//! * **Traversal**: lazy breadth-first iteration over any adjacency mapping.
//! * **Sampling**: uniform sampling without replacement from populations of
//!   known length (partial Fisher–Yates) or unknown length (reservoir).
//!
//! ## Quick Start
//!
//! ```rust
//! use algorithms::prelude::*;
//!
//! let mut data = vec![5, 3, 9, 1, 4];
//!
//! // Sort only positions 1..4
//! Sort::new(SortAlgorithm::Merge).first(1).last(4).sort(&mut data)?;
//! assert_eq!(data, vec![5, 1, 3, 9, 4]);
//!
//! let (lo, hi) = min_max(&data)?;
//! assert_eq!((*lo, *hi), (1, 9));
//!
//! let picked = Sample::new().size(2).seed(7).build()?.sample_slice(&data)?;
//! assert_eq!(picked.len(), 2);
//! # Result::<(), AlgorithmError>::Ok(())
//! ```
//!
//! ## Failing comparisons
//!
//! Every algorithm is generic over a [`Comparator`](prelude::Comparator)
//! that may fail. The first failure aborts the call with
//! [`AlgorithmError::Unorderable`](prelude::AlgorithmError), naming the
//! absolute positions of both operands:
//!
//! ```rust
//! use algorithms::prelude::*;
//!
//! let mut data = vec![2.0, f64::NAN, 1.0];
//! let err = Sort::new(SortAlgorithm::Insertion).sort(&mut data).unwrap_err();
//! assert!(matches!(err, AlgorithmError::Unorderable { .. }));
//! ```
//!
//! ## Breadth-first traversal
//!
//! ```rust
//! use algorithms::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let graph = BTreeMap::from([(1, vec![2, 3]), (2, vec![1, 3]), (3, vec![])]);
//! let order: Vec<_> = bfs(&graph, Some(1)).collect();
//! assert_eq!(order, vec![1, 2, 3]);
//! ```
//!
//! ## Randomness
//!
//! Randomized calls own their generator: seeded from the caller's `u64` when
//! one is given, and from fresh operating-system entropy otherwise. There is
//! no global generator, so independent calls may run concurrently.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` per call, `trace` per pivot and
//! per traversal step) and installs no subscriber.
//!
//! ## `no_std`
//!
//! The default `std` feature can be disabled; the crate then needs only
//! `alloc`. Without `std`, [`bfs`](prelude::bfs) tracks visited nodes in a
//! `BTreeSet` (so nodes must be `Ord`), and `AlgorithmError` does not
//! implement `std::error::Error`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, comparators, views and RNG construction.
mod primitives;

// Layer 2: Algorithms - sorts, selection, traversal and sampling.
mod algorithms;

// Layer 3: Engine - validation and dispatch.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Adjacency, AlgorithmError, Bfs, IndexSample, Reservoir, SampleBuilder as Sample,
        SampleBuilder, Sampler, SortAlgorithm, SortBuilder as Sort, SortBuilder, TraversalState,
        VisitedSet, bfs, min_max, min_max_by,
    };
    pub use crate::engine::validator::Validator;
    pub use crate::primitives::compare::{Comparator, Incomparable, NaturalOrder};
    pub use crate::primitives::view::SequenceView;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
