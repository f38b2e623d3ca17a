//! Error types for dependence estimation.
//!
//! ## Purpose
//!
//! This module defines the single error type surfaced by the public API.
//! Only input and configuration problems are errors; every irregularity
//! met while fitting (singular designs, constant columns, degenerate
//! partitions) is absorbed by the algorithms and never reaches the caller.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is written by hand so the type works without `std`.
//! * **Descriptive**: Variants carry the offending lengths, indices or values.
//! * **std::error::Error**: Implemented when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * This module does not validate anything itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Dependence Error
// ============================================================================

/// Errors returned by the dependence estimators.
#[derive(Debug, Clone, PartialEq)]
pub enum DependenceError {
    /// One of the input arrays is empty.
    EmptyInput,

    /// The two variables do not have the same number of observations.
    MismatchedInputs {
        /// Number of observations in `x`.
        x_len: usize,
        /// Number of observations in `y`.
        y_len: usize,
    },

    /// A missing (NaN) or non-finite value was found in the input.
    InvalidNumericValue(String),

    /// Matrix input has fewer columns than a pairwise analysis needs.
    TooFewColumns {
        /// Number of columns supplied.
        got: usize,
        /// Minimum number of columns.
        min: usize,
    },

    /// Matrix input columns do not all have the same length.
    RaggedColumns {
        /// Index of the first offending column.
        column: usize,
        /// Length of column 0.
        expected: usize,
        /// Length of the offending column.
        got: usize,
    },

    /// Tail probability for interval estimation is outside (0, 0.5).
    InvalidProbability(f64),

    /// Too few permutation replicates requested.
    InvalidPermutations {
        /// Number of replicates requested.
        got: usize,
        /// Minimum number of replicates.
        min: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for DependenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::TooFewColumns { got, min } => {
                write!(f, "Too few columns: got {}, need at least {}", got, min)
            }
            Self::RaggedColumns {
                column,
                expected,
                got,
            } => write!(
                f,
                "Column {} has {} observations, expected {}",
                column, got, expected
            ),
            Self::InvalidProbability(p) => {
                write!(f, "Invalid tail probability: {} (must be > 0 and < 0.5)", p)
            }
            Self::InvalidPermutations { got, min } => {
                write!(f, "Invalid permutations: {} (must be at least {})", got, min)
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DependenceError {}
