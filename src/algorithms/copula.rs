//! Copula-style fallback dependence statistic.
//!
//! ## Purpose
//!
//! This module provides the statistic substituted for a local fit whenever
//! regression cannot produce a goodness-of-fit (constant columns, singular
//! designs, undersized quadrants). It is derived from the co-partial moments
//! of the paired sample about its means and is defined for every non-empty
//! input.
//!
//! ## Design notes
//!
//! * **Trait seam**: Callers can inject their own statistic through
//!   `CopulaStatistic`; `PartialMomentCopula` is the default.
//! * **Discrete and continuous**: The default averages the degree-0
//!   (frequency) and degree-1 (area) concordance statistics.
//!
//! ## Key concepts
//!
//! ```text
//! concordant = CoLPM + CoUPM
//! discordant = DLPM + DUPM
//! statistic  = |concordant - discordant| / (concordant + discordant)
//! ```
//!
//! ## Invariants
//!
//! * The statistic lies in `[0, 1]` and is never NaN.
//! * A constant column yields 0.
//!
//! ## Non-goals
//!
//! * This module does not fit copula models or densities.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::math::descriptive::{mean, min_max};
use crate::math::moments::CoPartialMoments;

// ============================================================================
// Copula Statistic Trait
// ============================================================================

/// A bivariate dependence statistic used when local regression fails.
pub trait CopulaStatistic<T>: Debug + Send + Sync {
    /// Dependence between two aligned samples, in `[0, 1]`.
    fn dependence(&self, x: &[T], y: &[T]) -> T;
}

// ============================================================================
// Partial-Moment Copula
// ============================================================================

/// Default fallback statistic built from co-partial moments about the means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialMomentCopula {
    /// Also include the degree-1 (area-weighted) statistic.
    pub continuous: bool,
}

impl Default for PartialMomentCopula {
    fn default() -> Self {
        Self { continuous: true }
    }
}

impl PartialMomentCopula {
    /// Concordance statistic at a single co-partial moment degree.
    pub fn statistic<T: Float>(degree: T, x: &[T], y: &[T]) -> T {
        let moments = CoPartialMoments::compute(degree, x, y, mean(x), mean(y));
        let concordant = moments.concordant();
        let discordant = moments.discordant();
        let total = concordant + discordant;
        if total <= T::zero() || !total.is_finite() {
            return T::zero();
        }
        ((concordant - discordant).abs() / total).min(T::one())
    }
}

impl<T: Float + Send + Sync> CopulaStatistic<T> for PartialMomentCopula {
    fn dependence(&self, x: &[T], y: &[T]) -> T {
        let n = x.len().min(y.len());
        if n == 0 {
            return T::zero();
        }
        let (x, y) = (&x[..n], &y[..n]);

        let (x_lo, x_hi) = min_max(x);
        let (y_lo, y_hi) = min_max(y);
        if x_lo == x_hi || y_lo == y_hi {
            return T::zero();
        }

        let discrete = Self::statistic(T::zero(), x, y);
        if !self.continuous {
            return discrete;
        }
        let continuous = Self::statistic(T::one(), x, y);
        (discrete + continuous) / T::from(2.0).unwrap()
    }
}
