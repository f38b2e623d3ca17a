//! Descriptive statistics used by partitioning and local fitting.
//!
//! ## Purpose
//!
//! This module provides the small set of sample statistics the pipeline
//! needs: mean, median, the partitioner's central tendency ("gravity"),
//! Pearson correlation and distinct-value counts.
//!
//! ## Design notes
//!
//! * **Algorithm**: Medians use Quickselect on a scratch copy (O(n)).
//! * **Undefined results**: Correlation returns `None` when either column has
//!   zero spread instead of producing NaN.
//!
//! ## Invariants
//!
//! * `gravity` lies within `[min, max]` of its input.
//! * `pearson`, when defined, lies within `[-1, 1]`.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (NaN/Inf); inputs are validated upstream.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Location
// ============================================================================

/// Arithmetic mean (zero for an empty slice).
#[inline]
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let sum = vals.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(vals.len()).unwrap()
}

/// Median of a slice (zero for an empty slice).
pub fn median<T: Float>(vals: &[T]) -> T {
    let mut scratch: Vec<T> = vals.to_vec();
    median_inplace(&mut scratch)
}

/// Central tendency used to place splits: the average of mean and median.
pub fn gravity<T: Float>(vals: &[T]) -> T {
    let two = T::from(2.0).unwrap();
    (mean(vals) + median(vals)) / two
}

/// Compute the median in place using Quickselect.
#[inline]
fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / T::from(2.0).unwrap()
    } else {
        upper
    }
}

// ============================================================================
// Spread and Association
// ============================================================================

/// Number of distinct values in a slice.
pub fn count_distinct<T: Float>(vals: &[T]) -> usize {
    if vals.is_empty() {
        return 0;
    }
    let mut sorted: Vec<T> = vals.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Pearson correlation of two aligned samples.
///
/// Returns `None` when the samples are shorter than two observations or
/// either has zero variance.
pub fn pearson<T: Float>(x: &[T], y: &[T]) -> Option<T> {
    let n = x.len().min(y.len());
    if n < 2 {
        return None;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let mx = mean(x);
    let my = mean(y);

    let (mut sxy, mut sxx, mut syy) = (T::zero(), T::zero(), T::zero());
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy = sxy + dx * dy;
        sxx = sxx + dx * dx;
        syy = syy + dy * dy;
    }

    if sxx <= T::zero() || syy <= T::zero() {
        return None;
    }
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    Some(r.max(-T::one()).min(T::one()))
}

/// Sign of a value with `sign(0) = 0`.
#[inline]
pub fn sign<T: Float>(v: T) -> T {
    if v > T::zero() {
        T::one()
    } else if v < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

/// Smallest and largest value of a non-empty slice.
pub fn min_max<T: Float>(vals: &[T]) -> (T, T) {
    vals.iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
