//! Ordering relations over arbitrary element types.
//!
//! ## Purpose
//!
//! Every algorithm in this crate is generic over a [`Comparator`] rather than
//! over `Ord`. This lets a host runtime plug in its own, possibly failing,
//! ordering relation (for example, rich comparison between dynamically typed
//! objects) while native callers keep using `PartialOrd`.
//!
//! ## Design notes
//!
//! * **Fallible**: A comparison returns `Result<Ordering, Incomparable>`; a
//!   failure is never coerced into one of the three orderings.
//! * **Stateful**: Comparators take `&mut self` so they may count calls or
//!   stash host errors.
//!
//! ## Invariants
//!
//! * The comparator is only ever called with two elements of the same
//!   sequence, and never after it has failed once within an algorithm call.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Comparison Failure
// ============================================================================

/// Failure of the ordering relation between two elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incomparable {
    /// Human-readable reason, usually the host's own message.
    pub reason: String,
}

impl Incomparable {
    /// Create a comparison failure with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Display for Incomparable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.reason)
    }
}

// ============================================================================
// Comparator Trait
// ============================================================================

/// A total or partial ordering relation over `T`.
pub trait Comparator<T: ?Sized> {
    /// Compare `a` with `b`.
    fn compare(&mut self, a: &T, b: &T) -> core::result::Result<Ordering, Incomparable>;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: FnMut(&T, &T) -> core::result::Result<Ordering, Incomparable>,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> core::result::Result<Ordering, Incomparable> {
        self(a, b)
    }
}

/// Natural ordering through `PartialOrd`.
///
/// Pairs for which `partial_cmp` returns `None` (such as a NaN against any
/// float) are reported as [`Incomparable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> core::result::Result<Ordering, Incomparable> {
        a.partial_cmp(b)
            .ok_or_else(|| Incomparable::new("values have no defined order"))
    }
}
