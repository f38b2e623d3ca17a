//! Ordinary polynomial least squares with R^2 extraction.
//!
//! ## Purpose
//!
//! This module fits `y ~ b0 + b1 u + ... + bd u^d` by ordinary least squares
//! and reports the coefficient of determination. It is used both for the
//! per-quadrant local fits and for the whole-sample blend fit.
//!
//! ## Design notes
//!
//! * The regressor is mapped affinely onto `[-1, 1]` before the powers are
//!   formed. R^2 is invariant under this map and the Vandermonde columns stay
//!   well conditioned up to degree 10.
//! * A requested degree above `distinct(x) - 1` is lowered to that bound; the
//!   extra columns would be collinear and could not change the fitted values.
//! * Failures are returned as `FitFailure` values, never as panics.
//!
//! ## Invariants
//!
//! * `r_squared` lies in `[0, 1]`.
//! * `coefficients.len() == degree + 1`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::descriptive::{count_distinct, mean, min_max};
use crate::math::linalg::FloatLinalg;

// Module dependencies
use super::types::FitFailure;

/// A fitted polynomial regression.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit<T> {
    /// Degree actually fitted.
    pub degree: usize,
    /// Coefficients in the scaled regressor, lowest power first.
    pub coefficients: Vec<T>,
    /// Coefficient of determination.
    pub r_squared: T,
    center: T,
    half_range: T,
}

impl<T: FloatLinalg> PolynomialFit<T> {
    /// Fit `y` on powers of `x` up to `degree`.
    pub fn fit(x: &[T], y: &[T], degree: usize) -> Result<Self, FitFailure> {
        let n = x.len().min(y.len());
        if n < 2 {
            return Err(FitFailure::TooFewObservations { got: n, min: 2 });
        }
        let (x, y) = (&x[..n], &y[..n]);

        let distinct = count_distinct(x);
        if distinct < 2 {
            return Err(FitFailure::ConstantRegressor);
        }
        let degree = degree.max(1).min(distinct - 1);
        let cols = degree + 1;

        let (lo, hi) = min_max(x);
        let two = T::from(2.0).unwrap();
        let center = (lo + hi) / two;
        let half_range = (hi - lo) / two;

        let mut design = Vec::with_capacity(n * cols);
        for &xi in x {
            let u = (xi - center) / half_range;
            let mut term = T::one();
            for _ in 0..cols {
                design.push(term);
                term = term * u;
            }
        }

        let coefficients =
            T::least_squares(&design, y, n, cols).ok_or(FitFailure::SingularDesign)?;

        let y_mean = mean(y);
        let (mut rss, mut tss) = (T::zero(), T::zero());
        for (row, &yi) in design.chunks_exact(cols).zip(y) {
            let fitted = row
                .iter()
                .zip(&coefficients)
                .fold(T::zero(), |acc, (&t, &b)| acc + t * b);
            let resid = yi - fitted;
            let dev = yi - y_mean;
            rss = rss + resid * resid;
            tss = tss + dev * dev;
        }

        if tss <= T::zero() {
            return Err(FitFailure::ConstantResponse);
        }
        let r_squared = T::one() - rss / tss;
        if !r_squared.is_finite() {
            return Err(FitFailure::NonFinite);
        }

        Ok(Self {
            degree,
            coefficients,
            r_squared: r_squared.max(T::zero()).min(T::one()),
            center,
            half_range,
        })
    }

    /// Evaluate the fitted polynomial at `x`.
    pub fn predict(&self, x: T) -> T {
        let u = (x - self.center) / self.half_range;
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &b| acc * u + b)
    }
}
