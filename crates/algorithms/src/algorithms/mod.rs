//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer holds the algorithms themselves: the six in-place sorts and the
//! partition, heap and binary-search utilities they share, simultaneous
//! min/max selection, lazy breadth-first traversal and sampling without
//! replacement.
//!
//! Everything here is generic over element types, comparators, adjacency
//! mappings and RNGs, and knows nothing about any host runtime.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binary search for insertion points.
pub mod search;

/// Binary heap construction and repair.
pub mod heap;

/// Pivot selection and three-way partitioning.
pub mod partition;

/// In-place comparison sorts.
pub mod sorting;

/// Simultaneous minimum and maximum.
pub mod selection;

/// Lazy breadth-first traversal.
pub mod traversal;

/// Sampling without replacement.
pub mod sampling;
