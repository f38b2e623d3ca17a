//! Partial moments, co-partial moments and their quantile inversions.
//!
//! ## Purpose
//!
//! This module implements the one-sided moment statistics the crate relies
//! on: lower/upper partial moments of a single sample about a target, the
//! four co-partial moments of a paired sample, and the value-at-risk style
//! inversion that finds the target at which a partial-moment ratio reaches a
//! given probability.
//!
//! ## Design notes
//!
//! * **Ties**: Observations equal to the target count toward the lower side.
//! * **Degree 0**: Uses indicator counts, so `lpm(0, t, s)` is the empirical
//!   CDF at `t` and `lpm(0) + upm(0) = 1`.
//! * **Inversion**: Degree 0 inverts through the empirical quantile with
//!   linear interpolation; higher degrees bisect on the ratio, which is
//!   monotone in the target.
//!
//! ## Key concepts
//!
//! ```text
//! LPM(d, t, X) = 1/n * sum_{x <= t} (t - x)^d
//! UPM(d, t, X) = 1/n * sum_{x >  t} (x - t)^d
//! ```
//!
//! ## Invariants
//!
//! * All moments are non-negative.
//! * `lpm_ratio` lies in `[0, 1]` and is non-decreasing in the target.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs; an empty sample yields zero
//!   moments and NaN inversions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::math::descriptive::min_max;

/// Bisection steps used when inverting higher-degree ratios.
const BISECTION_STEPS: usize = 100;

#[inline]
fn deviation_power<T: Float>(deviation: T, degree: T) -> T {
    if degree == T::zero() {
        T::one()
    } else {
        deviation.powf(degree)
    }
}

// ============================================================================
// Univariate Partial Moments
// ============================================================================

/// Lower partial moment of `variable` about `target`.
pub fn lpm<T: Float>(degree: T, target: T, variable: &[T]) -> T {
    if variable.is_empty() {
        return T::zero();
    }
    let sum = variable
        .iter()
        .filter(|&&v| v <= target)
        .fold(T::zero(), |acc, &v| acc + deviation_power(target - v, degree));
    sum / T::from(variable.len()).unwrap()
}

/// Upper partial moment of `variable` about `target`.
pub fn upm<T: Float>(degree: T, target: T, variable: &[T]) -> T {
    if variable.is_empty() {
        return T::zero();
    }
    let sum = variable
        .iter()
        .filter(|&&v| v > target)
        .fold(T::zero(), |acc, &v| acc + deviation_power(v - target, degree));
    sum / T::from(variable.len()).unwrap()
}

/// Share of the total partial moment that lies below `target`.
pub fn lpm_ratio<T: Float>(degree: T, target: T, variable: &[T]) -> T {
    let lower = lpm(degree, target, variable);
    if degree == T::zero() {
        return lower;
    }
    let total = lower + upm(degree, target, variable);
    if total <= T::zero() {
        // Every observation sits on the target.
        lpm(T::zero(), target, variable)
    } else {
        lower / total
    }
}

/// Share of the total partial moment that lies above `target`.
pub fn upm_ratio<T: Float>(degree: T, target: T, variable: &[T]) -> T {
    T::one() - lpm_ratio(degree, target, variable)
}

// ============================================================================
// Quantile Inversion
// ============================================================================

/// Target below which a `percentile` share of the lower partial moment lies.
///
/// For degree 0 this is the empirical `percentile` quantile.
pub fn lpm_var<T: Float>(percentile: T, degree: T, variable: &[T]) -> T {
    if variable.is_empty() {
        return T::nan();
    }
    if degree == T::zero() {
        return quantile(variable, percentile);
    }
    let (lo, hi) = min_max(variable);
    bisect(lo, hi, |t| lpm_ratio(degree, t, variable) < percentile)
}

/// Target above which a `percentile` share of the upper partial moment lies.
///
/// For degree 0 this is the empirical `1 - percentile` quantile.
pub fn upm_var<T: Float>(percentile: T, degree: T, variable: &[T]) -> T {
    if variable.is_empty() {
        return T::nan();
    }
    if degree == T::zero() {
        return quantile(variable, T::one() - percentile);
    }
    let (lo, hi) = min_max(variable);
    bisect(lo, hi, |t| upm_ratio(degree, t, variable) > percentile)
}

/// Empirical quantile with linear interpolation between order statistics.
pub fn quantile<T: Float>(variable: &[T], probability: T) -> T {
    if variable.is_empty() {
        return T::nan();
    }
    let mut sorted: Vec<T> = variable.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));

    let p = probability.max(T::zero()).min(T::one());
    let h = p * T::from(sorted.len() - 1).unwrap();
    let lo = h.floor();
    let idx = lo.to_usize().unwrap_or(0).min(sorted.len() - 1);
    if idx + 1 >= sorted.len() {
        return sorted[idx];
    }
    sorted[idx] + (h - lo) * (sorted[idx + 1] - sorted[idx])
}

/// Smallest point of `[lo, hi]` where `below` turns false.
fn bisect<T: Float, F: Fn(T) -> bool>(mut lo: T, mut hi: T, below: F) -> T {
    let two = T::from(2.0).unwrap();
    for _ in 0..BISECTION_STEPS {
        let mid = (lo + hi) / two;
        if below(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / two
}

// ============================================================================
// Co-Partial Moments
// ============================================================================

/// The four co-partial moments of a paired sample about `(target_x, target_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoPartialMoments<T> {
    /// Both variables at or below their targets.
    pub co_lpm: T,
    /// Both variables above their targets.
    pub co_upm: T,
    /// `x` above and `y` at or below the target.
    pub d_lpm: T,
    /// `x` at or below and `y` above the target.
    pub d_upm: T,
}

impl<T: Float> CoPartialMoments<T> {
    /// Compute all four co-partial moments in one pass.
    pub fn compute(degree: T, x: &[T], y: &[T], target_x: T, target_y: T) -> Self {
        let n = x.len().min(y.len());
        let mut out = Self {
            co_lpm: T::zero(),
            co_upm: T::zero(),
            d_lpm: T::zero(),
            d_upm: T::zero(),
        };
        if n == 0 {
            return out;
        }

        for (&xi, &yi) in x.iter().zip(y).take(n) {
            let dx = xi - target_x;
            let dy = yi - target_y;
            let term = deviation_power(dx.abs(), degree) * deviation_power(dy.abs(), degree);
            match (xi <= target_x, yi <= target_y) {
                (true, true) => out.co_lpm = out.co_lpm + term,
                (false, false) => out.co_upm = out.co_upm + term,
                (false, true) => out.d_lpm = out.d_lpm + term,
                (true, false) => out.d_upm = out.d_upm + term,
            }
        }

        let n_t = T::from(n).unwrap();
        out.co_lpm = out.co_lpm / n_t;
        out.co_upm = out.co_upm / n_t;
        out.d_lpm = out.d_lpm / n_t;
        out.d_upm = out.d_upm / n_t;
        out
    }

    /// Concordant mass: both variables on the same side of their targets.
    #[inline]
    pub fn concordant(&self) -> T {
        self.co_lpm + self.co_upm
    }

    /// Discordant mass: the variables on opposite sides of their targets.
    #[inline]
    pub fn discordant(&self) -> T {
        self.d_lpm + self.d_upm
    }
}
