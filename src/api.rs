//! High-level API for nonlinear dependence estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the estimator and choosing an execution
//! adapter (Bivariate, Matrix, or Permutation).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Bivariate, Matrix, and Permutation modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DependenceBuilder`] via `Dependence::new()`.
//! 2. Chain configuration methods (`.asym()`, `.seed()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Bivariate)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

// Internal dependencies
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::adapters::bivariate::{BivariateDependence, BivariateDependenceBuilder};
pub use crate::adapters::matrix::{MatrixDependence, MatrixDependenceBuilder};
pub use crate::adapters::permutation::{PermutationDependence, PermutationDependenceBuilder};
pub use crate::algorithms::aggregation::{FitSource, Framing};
pub use crate::algorithms::copula::{CopulaStatistic, PartialMomentCopula};
pub use crate::algorithms::partition::{GravityPartitioner, Partitioner};
pub use crate::algorithms::regression::FitFailure;
pub use crate::engine::combiner::{BlendStatus, FramingAggregates};
pub use crate::engine::output::{
    DependenceDiagnostics, DependenceMatrix, DependenceResult, QuadrantDiagnostics,
};
pub use crate::evaluation::significance::{MetricSignificance, ReferenceSet, SignificanceResult};
pub use crate::primitives::errors::DependenceError;
pub use crate::primitives::partition::{
    Partition, PartitionConfig, PartitionMode, QuadrantId, RegressionPoint,
};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Bivariate, Matrix, Permutation};
}

/// Fluent builder for configuring the estimator and execution mode.
#[derive(Debug, Clone)]
pub struct DependenceBuilder<T> {
    /// Directional dependence (`|y| ~ x` only).
    pub asym: Option<bool>,

    /// Seed of the permutation generator (Permutation only).
    pub seed: Option<u64>,

    /// Number of null replicates (Permutation only).
    pub permutations: Option<usize>,

    /// One-sided tail probability of the intervals (Permutation only).
    pub interval_probability: Option<T>,

    /// Collect per-quadrant diagnostics (Bivariate only).
    pub return_diagnostics: Option<bool>,

    /// Quadrant partitioner.
    pub partitioner: Option<Arc<dyn Partitioner<T>>>,

    /// Fallback statistic for failed local fits.
    pub copula: Option<Arc<dyn CopulaStatistic<T>>>,

    /// Parallel execution hint (Matrix and Permutation).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for DependenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> DependenceBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: DependenceAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            asym: None,
            seed: None,
            permutations: None,
            interval_probability: None,
            return_diagnostics: None,
            partitioner: None,
            copula: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Report directional dependence of `y` on `x` instead of the symmetric maximum.
    pub fn asym(mut self, asym: bool) -> Self {
        if self.asym.is_some() {
            self.duplicate_param = Some("asym");
        }
        self.asym = Some(asym);
        self
    }

    /// Seed the permutation generator.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the number of null replicates (default 99).
    pub fn permutations(mut self, permutations: usize) -> Self {
        if self.permutations.is_some() {
            self.duplicate_param = Some("permutations");
        }
        self.permutations = Some(permutations);
        self
    }

    /// Set the one-sided tail probability of the intervals (default 0.025).
    pub fn interval_probability(mut self, probability: T) -> Self {
        if self.interval_probability.is_some() {
            self.duplicate_param = Some("interval_probability");
        }
        self.interval_probability = Some(probability);
        self
    }

    /// Include per-quadrant diagnostics in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Replace the quadrant partitioner.
    pub fn partitioner(mut self, partitioner: Arc<dyn Partitioner<T>>) -> Self {
        if self.partitioner.is_some() {
            self.duplicate_param = Some("partitioner");
        }
        self.partitioner = Some(partitioner);
        self
    }

    /// Replace the fallback statistic.
    pub fn copula(mut self, copula: Arc<dyn CopulaStatistic<T>>) -> Self {
        if self.copula.is_some() {
            self.duplicate_param = Some("copula");
        }
        self.copula = Some(copula);
        self
    }

    /// Set parallel execution hint.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait DependenceAdapter<T: FloatLinalg> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`DependenceBuilder`] into a specialized execution builder.
    fn convert(builder: DependenceBuilder<T>) -> Self::Output;
}

/// Marker for a single pair of variables.
#[derive(Debug, Clone, Copy)]
pub struct Bivariate;

impl<T: FloatLinalg> DependenceAdapter<T> for Bivariate {
    type Output = BivariateDependenceBuilder<T>;

    fn convert(builder: DependenceBuilder<T>) -> Self::Output {
        let mut result = BivariateDependenceBuilder::default();

        if let Some(asym) = builder.asym {
            result.asym = asym;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }
        if let Some(p) = builder.partitioner {
            result.partitioner = p;
        }
        if let Some(c) = builder.copula {
            result.copula = c;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for pairwise analysis of many columns.
#[derive(Debug, Clone, Copy)]
pub struct Matrix;

impl<T: FloatLinalg> DependenceAdapter<T> for Matrix {
    type Output = MatrixDependenceBuilder<T>;

    fn convert(builder: DependenceBuilder<T>) -> Self::Output {
        let mut result = MatrixDependenceBuilder::default();

        if let Some(asym) = builder.asym {
            result.asym = asym;
        }
        if let Some(p) = builder.partitioner {
            result.partitioner = p;
        }
        if let Some(c) = builder.copula {
            result.copula = c;
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for permutation significance testing.
#[derive(Debug, Clone, Copy)]
pub struct Permutation;

impl<T: FloatLinalg> DependenceAdapter<T> for Permutation {
    type Output = PermutationDependenceBuilder<T>;

    fn convert(builder: DependenceBuilder<T>) -> Self::Output {
        let mut result = PermutationDependenceBuilder::default();

        if let Some(asym) = builder.asym {
            result.asym = asym;
        }
        if let Some(p) = builder.partitioner {
            result.partitioner = p;
        }
        if let Some(c) = builder.copula {
            result.copula = c;
        }
        if let Some(n) = builder.permutations {
            result.permutations = n;
        }
        if let Some(prob) = builder.interval_probability {
            result.interval_probability = prob;
        }
        result.seed = builder.seed;
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
