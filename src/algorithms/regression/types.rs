//! Regression Types
//!
//! ## Purpose
//!
//! This module defines the tagged results of a local fit and the degree
//! policies that pick a polynomial degree from the data at hand.

// External dependencies
use num_traits::Float;

/// Highest polynomial degree any fit in the crate will use.
pub const MAX_DEGREE: usize = 10;

// ============================================================================
// Fit Failure
// ============================================================================

/// Why a regression could not produce a usable goodness-of-fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitFailure {
    /// Fewer observations than the fit requires.
    TooFewObservations {
        /// Observations available.
        got: usize,
        /// Observations required.
        min: usize,
    },

    /// The explanatory variable takes a single value.
    ConstantRegressor,

    /// The response takes a single value, so R^2 is undefined.
    ConstantResponse,

    /// The design matrix is rank deficient.
    SingularDesign,

    /// The fit produced a non-finite statistic.
    NonFinite,
}

// ============================================================================
// Fit Outcome
// ============================================================================

/// Tagged result of one local fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitOutcome<T> {
    /// Signed goodness-of-fit, `sign(r) * R^2`.
    Fitted(T),

    /// The fit failed; the caller must substitute a fallback statistic.
    FallbackRequired(FitFailure),
}

impl<T: Float> FitOutcome<T> {
    /// The fitted value, if any.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            FitOutcome::Fitted(v) => Some(v),
            FitOutcome::FallbackRequired(_) => None,
        }
    }

    /// Whether a fallback is required.
    #[inline]
    pub fn requires_fallback(&self) -> bool {
        matches!(self, FitOutcome::FallbackRequired(_))
    }
}

// ============================================================================
// Degree Policies
// ============================================================================

/// Degree of a quadrant's local fit: `max(1, min(10, floor(sqrt(n)) - 1))`.
#[inline]
pub fn local_degree(n: usize) -> usize {
    let root = integer_sqrt(n);
    root.saturating_sub(1).min(MAX_DEGREE).max(1)
}

/// Degree of the whole-sample blend fit: `min(10, max(1, lx - 1), max(1, ly - 1))`.
#[inline]
pub fn global_degree(distinct_x: usize, distinct_y: usize) -> usize {
    let dx = distinct_x.saturating_sub(1).max(1);
    let dy = distinct_y.saturating_sub(1).max(1);
    MAX_DEGREE.min(dx).min(dy)
}

/// Largest `r` with `r * r <= n`.
#[inline]
fn integer_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    let mut r = Float::sqrt(n as f64) as usize;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}
