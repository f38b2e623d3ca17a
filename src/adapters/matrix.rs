//! Matrix adapter for pairwise dependence of many variables.
//!
//! ## Purpose
//!
//! This module applies the bivariate pipeline to every pair of columns and
//! assembles square correlation and dependence matrices with unit diagonal.
//!
//! ## Design notes
//!
//! * **Input**: A slice of equally long columns (`&[Vec<T>]`, `&[&[T]]`, ...).
//! * **Pairs**: Each unordered pair is evaluated with the lower-indexed
//!   column as `x`. Correlation is mirrored. Symmetric dependence is
//!   mirrored; directional dependence evaluates both orderings.
//! * **Parallel**: With the `parallel` feature, pairs are evaluated with
//!   rayon; results do not depend on the schedule.
//!
//! ## Invariants
//!
//! * The correlation matrix is symmetric with unit diagonal.
//! * With `asym = false` the dependence matrix is symmetric too.
//!
//! ## Non-goals
//!
//! * This adapter does not compute p-values for matrix input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::copula::CopulaStatistic;
use crate::algorithms::partition::Partitioner;
use crate::engine::executor::{DependenceConfig, DependenceExecutor};
use crate::engine::output::DependenceMatrix;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::DependenceError;

// ============================================================================
// Matrix Dependence Builder
// ============================================================================

/// Builder for the matrix processor.
#[derive(Debug, Clone)]
pub struct MatrixDependenceBuilder<T> {
    /// Directional dependence.
    pub asym: bool,

    /// Quadrant partitioner.
    pub partitioner: Arc<dyn Partitioner<T>>,

    /// Fallback statistic.
    pub copula: Arc<dyn CopulaStatistic<T>>,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<DependenceError>,

    /// Parallel execution hint.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for MatrixDependenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> MatrixDependenceBuilder<T> {
    /// Create a new matrix builder with default parameters.
    fn new() -> Self {
        let defaults = DependenceConfig::default();
        Self {
            asym: defaults.asym,
            partitioner: defaults.partitioner,
            copula: defaults.copula,
            deferred_error: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set directional dependence.
    pub fn asym(mut self, asym: bool) -> Self {
        self.asym = asym;
        self
    }

    /// Replace the quadrant partitioner.
    pub fn partitioner(mut self, partitioner: Arc<dyn Partitioner<T>>) -> Self {
        self.partitioner = partitioner;
        self
    }

    /// Replace the fallback statistic.
    pub fn copula(mut self, copula: Arc<dyn CopulaStatistic<T>>) -> Self {
        self.copula = copula;
        self
    }

    /// Set parallel execution hint.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the matrix processor.
    pub fn build(self) -> Result<MatrixDependence<T>, DependenceError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = DependenceConfig {
            asym: self.asym,
            return_diagnostics: false,
            partitioner: self.partitioner,
            copula: self.copula,
        };

        Ok(MatrixDependence {
            executor: DependenceExecutor::from_config(&config),
            parallel: self.parallel.unwrap_or(cfg!(feature = "parallel")),
        })
    }
}

// ============================================================================
// Matrix Dependence Processor
// ============================================================================

/// Pairwise dependence processor.
#[derive(Debug, Clone)]
pub struct MatrixDependence<T> {
    executor: DependenceExecutor<T>,
    parallel: bool,
}

/// Values of one unordered pair `(i, j)`, `i < j`.
struct PairValues<T> {
    i: usize,
    j: usize,
    correlation: T,
    dependence_ij: T,
    dependence_ji: T,
}

impl<T: FloatLinalg> MatrixDependence<T> {
    /// Pairwise correlation and dependence of all columns.
    pub fn fit<C>(&self, columns: &[C]) -> Result<DependenceMatrix<T>, DependenceError>
    where
        C: AsRef<[T]> + Sync,
    {
        Validator::validate_columns(columns)?;

        let n = columns.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let evaluate = |&(i, j): &(usize, usize)| {
            let (xi, xj) = (columns[i].as_ref(), columns[j].as_ref());
            let (correlation, dependence_ij) = self.executor.evaluate_pair(xi, xj);
            let dependence_ji = if self.executor.asym {
                self.executor.evaluate_pair(xj, xi).1
            } else {
                dependence_ij
            };
            PairValues {
                i,
                j,
                correlation,
                dependence_ij,
                dependence_ji,
            }
        };

        #[cfg(feature = "parallel")]
        let values: Vec<PairValues<T>> = if self.parallel {
            pairs.par_iter().map(evaluate).collect()
        } else {
            pairs.iter().map(evaluate).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let values: Vec<PairValues<T>> = pairs.iter().map(evaluate).collect();

        let mut matrix = DependenceMatrix::identity(n, self.executor.asym);
        for v in values {
            matrix.correlation[v.i * n + v.j] = v.correlation;
            matrix.correlation[v.j * n + v.i] = v.correlation;
            matrix.dependence[v.i * n + v.j] = v.dependence_ij;
            matrix.dependence[v.j * n + v.i] = v.dependence_ji;
        }

        log::debug!("dependence matrix: {} columns, {} pairs", n, pairs.len());

        Ok(matrix)
    }

    /// Whether pairs are evaluated in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }
}
