//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer sits between host-facing entry points and the algorithms. It
//! validates call arguments in a fixed order and dispatches sorting calls to
//! their implementation with a call-scoped RNG.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sort dispatch.
pub mod executor;

/// Validation utilities.
pub mod validator;
