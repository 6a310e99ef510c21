//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the abstractions every algorithm is written against:
//! the error type, the comparator capability, the sequence view and the
//! call-scoped RNG. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Ordering relations.
pub mod compare;

/// Bounds-checked sequence view.
pub mod view;

/// Call-scoped RNG construction.
pub mod entropy;
