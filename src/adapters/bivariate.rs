//! Bivariate adapter for a single pair of variables.
//!
//! ## Purpose
//!
//! This module provides the default execution adapter: one `(x, y)` pair in,
//! one correlation and dependence out, optionally with per-quadrant
//! diagnostics.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, then evaluates in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built processor can be fitted any number of times.
//!
//! ## Invariants
//!
//! * Input arrays `x` and `y` must have the same length.
//! * No value may be missing (NaN) or infinite.
//!
//! ## Non-goals
//!
//! * This adapter does not test significance (use the permutation adapter).
//! * This adapter does not handle more than two variables (use the matrix adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

// Internal dependencies
use crate::algorithms::copula::CopulaStatistic;
use crate::algorithms::partition::Partitioner;
use crate::engine::executor::{DependenceConfig, DependenceExecutor};
use crate::engine::output::DependenceResult;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::DependenceError;

// ============================================================================
// Bivariate Dependence Builder
// ============================================================================

/// Builder for the bivariate processor.
#[derive(Debug, Clone)]
pub struct BivariateDependenceBuilder<T> {
    /// Directional dependence.
    pub asym: bool,

    /// Whether to collect per-quadrant diagnostics.
    pub return_diagnostics: bool,

    /// Quadrant partitioner.
    pub partitioner: Arc<dyn Partitioner<T>>,

    /// Fallback statistic.
    pub copula: Arc<dyn CopulaStatistic<T>>,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<DependenceError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for BivariateDependenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> BivariateDependenceBuilder<T> {
    /// Create a new bivariate builder with default parameters.
    fn new() -> Self {
        let defaults = DependenceConfig::default();
        Self {
            asym: defaults.asym,
            return_diagnostics: defaults.return_diagnostics,
            partitioner: defaults.partitioner,
            copula: defaults.copula,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set directional dependence.
    pub fn asym(mut self, asym: bool) -> Self {
        self.asym = asym;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
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

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the bivariate processor.
    pub fn build(self) -> Result<BivariateDependence<T>, DependenceError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = DependenceConfig {
            asym: self.asym,
            return_diagnostics: self.return_diagnostics,
            partitioner: self.partitioner,
            copula: self.copula,
        };

        Ok(BivariateDependence {
            executor: DependenceExecutor::from_config(&config),
        })
    }
}

// ============================================================================
// Bivariate Dependence Processor
// ============================================================================

/// Bivariate dependence processor.
#[derive(Debug, Clone)]
pub struct BivariateDependence<T> {
    executor: DependenceExecutor<T>,
}

impl<T: FloatLinalg> BivariateDependence<T> {
    /// Correlation and dependence of `y` on `x`.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<DependenceResult<T>, DependenceError> {
        Validator::validate_pair(x, y)?;
        Ok(self.executor.run(x, y))
    }

    /// The underlying executor.
    pub fn executor(&self) -> &DependenceExecutor<T> {
        &self.executor
    }
}
