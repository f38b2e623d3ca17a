//! Linear algebra backend abstraction for polynomial regression.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the least-squares
//! solve used by every polynomial fit in the crate, standardizing on the
//! nalgebra backend.
//!
//! ## Design notes
//!
//! * Solves the rectangular system `X * beta = y` directly through a thin SVD
//!   instead of forming the normal equations, which would square the
//!   condition number of high-degree Vandermonde designs.
//! * Rank-deficient designs are reported as `None` so callers can fall back.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Send + Sync + 'static {
    /// Least-squares coefficients for a row-major `rows x cols` design.
    ///
    /// Returns `None` when the design is rank deficient or the solve fails.
    fn least_squares(design: &[Self], rhs: &[Self], rows: usize, cols: usize)
        -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>> {
        let rel_eps = f64::EPSILON * rows.max(cols) as f64;
        nalgebra_backend::least_squares(design, rhs, rows, cols, rel_eps)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>> {
        let rel_eps = f32::EPSILON * rows.max(cols) as f32;
        nalgebra_backend::least_squares(design, rhs, rows, cols, rel_eps)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Solve `X * beta = y` in the least-squares sense.
    ///
    /// Singular values below `rel_eps * sigma_max` count as zero; any such
    /// value makes the design rank deficient and the solve is rejected.
    pub fn least_squares<R: RealField + Copy>(
        design: &[R],
        rhs: &[R],
        rows: usize,
        cols: usize,
        rel_eps: R,
    ) -> Option<Vec<R>> {
        if cols == 0 || rows < cols || design.len() != rows * cols || rhs.len() != rows {
            return None;
        }

        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        let svd = matrix.svd(true, true);
        let sigma_max = svd
            .singular_values
            .iter()
            .fold(R::zero(), |acc, &s| if s > acc { s } else { acc });
        if sigma_max <= R::zero() {
            return None;
        }

        let tol = rel_eps * sigma_max;
        if svd.rank(tol) < cols {
            return None;
        }

        svd.solve(&b, tol)
            .ok()
            .map(|beta: DVector<R>| beta.as_slice().to_vec())
    }
}
