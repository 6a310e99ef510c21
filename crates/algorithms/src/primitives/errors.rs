//! Error types for algorithm calls.
//!
//! ## Purpose
//!
//! This module defines every failure an algorithm call can report, from
//! call-shape problems detected at the host boundary down to a comparison
//! that fails halfway through a sort.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending argument, index or position.
//! * **Host-agnostic**: Call-shape variants use plain names and counts so any
//!   host boundary can raise them with its own exception machinery.
//! * **Trait Implementation**: Implements `Display`, and `std::error::Error` with the `std` feature.
//!
//! ## Key concepts
//!
//! 1. **Call shape**: missing or extra positional arguments, unknown keywords.
//! 2. **Argument types**: non-integer bounds or sizes, non-iterable inputs.
//! 3. **Argument values**: bounds outside `[0, length]`, invalid sample sizes.
//! 4. **Runtime failures**: elements that cannot be ordered, empty inputs.
//!
//! ## Invariants
//!
//! * Positions in `Unorderable` are absolute indices into the caller's sequence.
//! * Every range failure message contains the phrase "out of range".
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not retry or recover from failures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for algorithm calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The argument does not support iteration.
    NotIterable {
        /// Host type name of the offending value.
        type_name: String,
    },

    /// A typed parameter received a value of the wrong type.
    TypeMismatch {
        /// Name of the parameter.
        argument: &'static str,
        /// Description of the accepted type.
        expected: &'static str,
        /// Host type name of the value received.
        got: String,
    },

    /// Wrong number of positional arguments.
    PositionalArgument {
        /// Name of the called function.
        function: &'static str,
        /// Number of positional arguments accepted.
        expected: usize,
        /// Number of positional arguments received.
        got: usize,
    },

    /// A keyword option the function does not recognize.
    UnsupportedKeyword {
        /// Name of the called function.
        function: &'static str,
        /// The unrecognized keyword.
        keyword: String,
    },

    /// A range bound lies outside `[0, len]`.
    OutOfRange {
        /// Name of the bound (`first` or `last`).
        argument: &'static str,
        /// The bound as given by the caller.
        index: i128,
        /// Length of the sequence, when it was already known.
        len: Option<usize>,
    },

    /// `first` is greater than `last`.
    InvertedRange {
        /// Start of the requested range.
        first: usize,
        /// End of the requested range.
        last: usize,
    },

    /// Sample size is negative or does not fit the platform's index type.
    InvalidSampleSize(i128),

    /// The population produced fewer items than the requested sample size.
    PopulationTooSmall {
        /// Requested sample size.
        size: usize,
        /// Number of items the population produced.
        got: usize,
    },

    /// The ordering relation failed between two elements.
    Unorderable {
        /// Absolute position of the left operand.
        left: usize,
        /// Absolute position of the right operand.
        right: usize,
        /// Reason reported by the comparator.
        reason: String,
    },

    /// Selection over an empty sequence.
    EmptyInput {
        /// Name of the called function.
        function: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AlgorithmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NotIterable { type_name } => write!(f, "'{type_name}' object is not iterable"),
            Self::TypeMismatch {
                argument,
                expected,
                got,
            } => write!(f, "{argument}: {expected} is required (got type {got})"),
            Self::PositionalArgument {
                function,
                expected,
                got,
            } => {
                if *got < *expected {
                    write!(
                        f,
                        "{function}() missing required positional argument ({got} of {expected} given)"
                    )
                } else {
                    write!(
                        f,
                        "{function}() takes {expected} positional argument(s) but {got} were given"
                    )
                }
            }
            Self::UnsupportedKeyword { function, keyword } => {
                write!(f, "'{keyword}' is an invalid keyword argument for {function}()")
            }
            Self::OutOfRange {
                argument,
                index,
                len: Some(len),
            } => write!(
                f,
                "Index out of range: {argument}={index} (must be within [0, {len}])"
            ),
            Self::OutOfRange {
                argument,
                index,
                len: None,
            } => write!(
                f,
                "Index out of range: {argument}={index} (must be non-negative)"
            ),
            Self::InvertedRange { first, last } => write!(
                f,
                "Index out of range: first={first} is greater than last={last}"
            ),
            Self::InvalidSampleSize(size) => {
                write!(f, "Invalid sample size: {size} (must be non-negative)")
            }
            Self::PopulationTooSmall { size, got } => write!(
                f,
                "Population is too small: sample size {size}, population yielded {got}"
            ),
            Self::Unorderable {
                left,
                right,
                reason,
            } => write!(
                f,
                "Elements at positions {left} and {right} are not orderable: {reason}"
            ),
            Self::EmptyInput { function } => write!(f, "{function}() arg is an empty sequence"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for AlgorithmError {}
