//! Input validation for dependence configuration and data.
//!
//! ## Purpose
//!
//! This module checks input samples and builder parameters before any
//! partitioning or fitting takes place. It is the only place where the crate
//! produces errors; everything downstream is total.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Missing values**: NaN marks a missing observation and is rejected,
//!   never dropped or imputed. Infinite values are rejected alongside.
//! * **Parameter Bounds**: Tail probability in (0, 0.5), at least 2
//!   permutation replicates.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DependenceError;

/// Minimum number of permutation replicates.
pub const MIN_PERMUTATIONS: usize = 2;

/// Minimum number of columns for matrix input.
pub const MIN_COLUMNS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for dependence configuration and input data.
///
/// All methods return `Result<(), DependenceError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a pair of aligned samples.
    pub fn validate_pair<T: Float>(x: &[T], y: &[T]) -> Result<(), DependenceError> {
        if x.is_empty() || y.is_empty() {
            return Err(DependenceError::EmptyInput);
        }

        if x.len() != y.len() {
            return Err(DependenceError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Self::validate_values(x, "x")?;
        Self::validate_values(y, "y")
    }

    /// Validate that every value of `values` is present and finite.
    pub fn validate_values<T: Float>(values: &[T], name: &str) -> Result<(), DependenceError> {
        for (i, &val) in values.iter().enumerate() {
            if val.is_nan() {
                return Err(DependenceError::InvalidNumericValue(format!(
                    "{}[{}]=NaN (missing values are not permitted)",
                    name, i
                )));
            }
            if !val.is_finite() {
                return Err(DependenceError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate matrix input given as a slice of columns.
    pub fn validate_columns<T: Float, C: AsRef<[T]>>(columns: &[C]) -> Result<(), DependenceError> {
        if columns.len() < MIN_COLUMNS {
            return Err(DependenceError::TooFewColumns {
                got: columns.len(),
                min: MIN_COLUMNS,
            });
        }

        let expected = columns[0].as_ref().len();
        if expected == 0 {
            return Err(DependenceError::EmptyInput);
        }

        for (j, column) in columns.iter().enumerate() {
            let column = column.as_ref();
            if column.len() != expected {
                return Err(DependenceError::RaggedColumns {
                    column: j,
                    expected,
                    got: column.len(),
                });
            }
        }

        for (j, column) in columns.iter().enumerate() {
            Self::validate_values(column.as_ref(), &format!("column {}", j))?;
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the one-sided tail probability of the intervals.
    pub fn validate_probability<T: Float>(probability: T) -> Result<(), DependenceError> {
        let half = T::from(0.5).unwrap();
        if !probability.is_finite() || probability <= T::zero() || probability >= half {
            return Err(DependenceError::InvalidProbability(
                probability.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of permutation replicates.
    pub fn validate_permutations(permutations: usize) -> Result<(), DependenceError> {
        if permutations < MIN_PERMUTATIONS {
            return Err(DependenceError::InvalidPermutations {
                got: permutations,
                min: MIN_PERMUTATIONS,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DependenceError> {
        if let Some(param) = duplicate_param {
            return Err(DependenceError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
