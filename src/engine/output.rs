//! Result types of the dependence pipelines.
//!
//! ## Purpose
//!
//! This module defines the values handed back to callers: the bivariate
//! `(correlation, dependence)` pair with optional diagnostics, and the
//! pairwise matrices produced for multi-column input.
//!
//! ## Design notes
//!
//! * **Plain data**: Diagnostics carry numbers only; rendering belongs to
//!   the caller.
//! * **Row-major**: Matrices are stored as flat `n * n` vectors.
//!
//! ## Invariants
//!
//! * Matrix diagonals are exactly one.
//! * The correlation matrix is symmetric.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::aggregation::FitSource;
use crate::engine::combiner::{BlendStatus, FramingAggregates};
use crate::primitives::partition::QuadrantId;

// ============================================================================
// Bivariate Result
// ============================================================================

/// Signed fits of one quadrant under the three framings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadrantDiagnostics<T> {
    /// Quadrant identifier.
    pub id: QuadrantId,
    /// Partition label (e.g. `q12`).
    pub label: String,
    /// Number of observations.
    pub count: usize,
    /// Population share.
    pub weight: T,
    /// Values per framing.
    pub fits: FramingAggregates<T>,
    /// Provenance per framing, ordered like `Framing::ALL`.
    pub sources: [FitSource; 3],
}

/// Intermediate quantities of one bivariate evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DependenceDiagnostics<T> {
    /// Per-quadrant records, in partition order.
    pub quadrants: Vec<QuadrantDiagnostics<T>>,
    /// Rounds of splitting performed.
    pub partition_order: usize,
    /// Minimum quadrant population passed to the partitioner.
    pub min_observations: usize,
    /// Signed weighted sums.
    pub signed: FramingAggregates<T>,
    /// Absolute weighted sums.
    pub magnitude: FramingAggregates<T>,
    /// Dependence before the global blend.
    pub pre_blend: T,
    /// Blend term.
    pub poly_base: T,
    /// Outcome of the global fit.
    pub blend: BlendStatus,
    /// Distinct values of `x`.
    pub distinct_x: usize,
    /// Distinct values of `y`.
    pub distinct_y: usize,
    /// Voronoi rendering was requested.
    pub voronoi: bool,
}

/// Correlation and dependence of a pair of variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DependenceResult<T> {
    /// Nonlinear correlation in `[-1, 1]`.
    pub correlation: T,
    /// Nonlinear dependence in `[0, 1]`.
    pub dependence: T,
    /// Intermediate quantities, when requested.
    pub diagnostics: Option<DependenceDiagnostics<T>>,
}

impl<T: Float> DependenceResult<T> {
    /// The zero result of a degenerate partition.
    pub fn zero() -> Self {
        Self {
            correlation: T::zero(),
            dependence: T::zero(),
            diagnostics: None,
        }
    }

    /// `(correlation, dependence)`.
    #[inline]
    pub fn pair(&self) -> (T, T) {
        (self.correlation, self.dependence)
    }

    /// Whether diagnostics were collected.
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

impl<T: Float + Display> Display for DependenceResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Correlation: {:.6}", self.correlation)?;
        writeln!(f, "  Dependence:  {:.6}", self.dependence)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(
                f,
                "Quadrants ({} after {} rounds, min {} obs):",
                diag.quadrants.len(),
                diag.partition_order,
                diag.min_observations
            )?;
            writeln!(
                f,
                "{:>10} {:>6} {:>8} {:>10} {:>10} {:>10}",
                "Quadrant", "Count", "Weight", "y~x", "|y|~x", "|x|~y"
            )?;
            writeln!(f, "  {}", "-".repeat(56))?;
            for q in &diag.quadrants {
                writeln!(
                    f,
                    "{:>10} {:>6} {:>8.4} {:>10.6} {:>10.6} {:>10.6}",
                    q.label, q.count, q.weight, q.fits.symmetric, q.fits.asymmetric_x, q.fits.asymmetric_y
                )?;
            }
            writeln!(f)?;
            writeln!(f, "  Pre-blend dependence: {:.6}", diag.pre_blend)?;
            writeln!(f, "  Blend term:           {:.6} ({:?})", diag.poly_base, diag.blend)?;
        }

        Ok(())
    }
}

// ============================================================================
// Matrix Result
// ============================================================================

/// Pairwise correlation and dependence of `n` variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DependenceMatrix<T> {
    /// Number of variables.
    pub n: usize,
    /// Row-major correlation matrix.
    pub correlation: Vec<T>,
    /// Row-major dependence matrix.
    pub dependence: Vec<T>,
    /// Dependence entries are directional (`[i][j]` is column `j` on `i`).
    pub asym: bool,
}

impl<T: Float> DependenceMatrix<T> {
    /// Identity-initialized matrices for `n` variables.
    pub fn identity(n: usize, asym: bool) -> Self {
        let mut correlation = vec![T::zero(); n * n];
        for i in 0..n {
            correlation[i * n + i] = T::one();
        }
        Self {
            n,
            dependence: correlation.clone(),
            correlation,
            asym,
        }
    }

    /// Number of variables.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// `(correlation, dependence)` at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> (T, T) {
        (self.correlation(i, j), self.dependence(i, j))
    }

    /// Correlation at row `i`, column `j`.
    #[inline]
    pub fn correlation(&self, i: usize, j: usize) -> T {
        self.correlation[i * self.n + j]
    }

    /// Dependence at row `i`, column `j`.
    #[inline]
    pub fn dependence(&self, i: usize, j: usize) -> T {
        self.dependence[i * self.n + j]
    }

    /// Row `i` of the correlation matrix.
    pub fn correlation_row(&self, i: usize) -> &[T] {
        &self.correlation[i * self.n..(i + 1) * self.n]
    }

    /// Row `i` of the dependence matrix.
    pub fn dependence_row(&self, i: usize) -> &[T] {
        &self.dependence[i * self.n..(i + 1) * self.n]
    }
}

impl<T: Float + Display> Display for DependenceMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (title, values) in [("Correlation", &self.correlation), ("Dependence", &self.dependence)] {
            writeln!(f, "{}:", title)?;
            for row in values.chunks(self.n.max(1)) {
                for v in row {
                    write!(f, " {:>9.5}", v)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
