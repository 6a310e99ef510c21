//! Argument validation for algorithm calls.
//!
//! ## Purpose
//!
//! This module checks call arguments before any algorithm runs: the shape of
//! a host call (positional count, keyword names), sub-range bounds and sample
//! sizes. Host boundaries call these checks in a fixed order so the first
//! reported error is always the same for a given bad call.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Split bounds check**: The sign of a bound is checked before the input is
//!   materialised; the upper bound needs the length and is checked after.
//! * **Generics**: Bound and size checks are generic over `PrimInt`, so a host
//!   passes whatever integer type it parsed.
//!
//! ## Key concepts
//!
//! Validation order at a host boundary:
//!
//! 1. Call shape ([`Validator::validate_positional`], [`Validator::validate_keywords`]).
//! 2. Argument types (host-specific).
//! 3. Bound signs ([`Validator::validate_non_negative`]).
//! 4. Iterability and materialisation (host-specific).
//! 5. Bound range ([`Validator::validate_range`]).
//!
//! ## Invariants
//!
//! * A validated range satisfies `first <= last <= len`.
//! * A validated sample size fits in `usize`.
//!
//! ## Non-goals
//!
//! * This module does not inspect host objects.
//! * This module does not clamp or repair invalid arguments.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::borrow::ToOwned;
#[cfg(feature = "std")]
use std::borrow::ToOwned;

// External dependencies
use core::ops::Range;
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::AlgorithmError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for algorithm call arguments.
///
/// Provides static methods that fail fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Call Shape
    // ========================================================================

    /// Validate the number of positional arguments.
    pub fn validate_positional(
        function: &'static str,
        expected: usize,
        got: usize,
    ) -> Result<(), AlgorithmError> {
        if got != expected {
            return Err(AlgorithmError::PositionalArgument {
                function,
                expected,
                got,
            });
        }
        Ok(())
    }

    /// Validate that every keyword in `given` is one of `allowed`.
    pub fn validate_keywords<'k, I>(
        function: &'static str,
        given: I,
        allowed: &[&str],
    ) -> Result<(), AlgorithmError>
    where
        I: IntoIterator<Item = &'k str>,
    {
        for keyword in given {
            if !allowed.contains(&keyword) {
                return Err(AlgorithmError::UnsupportedKeyword {
                    function,
                    keyword: keyword.to_owned(),
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Range Bounds
    // ========================================================================

    /// Validate that a range bound is a non-negative index.
    pub fn validate_non_negative<I: PrimInt>(
        argument: &'static str,
        index: I,
    ) -> Result<usize, AlgorithmError> {
        index.to_usize().ok_or_else(|| AlgorithmError::OutOfRange {
            argument,
            index: index.to_i128().unwrap_or(i128::MAX),
            len: None,
        })
    }

    /// Validate non-negative bounds against the sequence length, defaulting to
    /// the whole sequence.
    pub fn validate_range(
        len: usize,
        first: Option<usize>,
        last: Option<usize>,
    ) -> Result<Range<usize>, AlgorithmError> {
        let first = first.unwrap_or(0);
        let last = last.unwrap_or(len);

        for (argument, index) in [("first", first), ("last", last)] {
            if index > len {
                return Err(AlgorithmError::OutOfRange {
                    argument,
                    index: index as i128,
                    len: Some(len),
                });
            }
        }
        if first > last {
            return Err(AlgorithmError::InvertedRange { first, last });
        }

        Ok(first..last)
    }

    /// Validate optional signed bounds in one step.
    pub fn validate_bounds<I: PrimInt>(
        len: usize,
        first: Option<I>,
        last: Option<I>,
    ) -> Result<Range<usize>, AlgorithmError> {
        let first = first
            .map(|i| Self::validate_non_negative("first", i))
            .transpose()?;
        let last = last
            .map(|i| Self::validate_non_negative("last", i))
            .transpose()?;
        Self::validate_range(len, first, last)
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Validate a requested sample size.
    pub fn validate_sample_size<I: PrimInt>(size: I) -> Result<usize, AlgorithmError> {
        size.to_usize()
            .ok_or_else(|| AlgorithmError::InvalidSampleSize(size.to_i128().unwrap_or(i128::MAX)))
    }
}
