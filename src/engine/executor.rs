//! Execution engine for the bivariate dependence pipeline.
//!
//! ## Purpose
//!
//! This module runs one `(x, y)` evaluation end to end: it derives the
//! observation requirement, partitions the sample, builds the quadrant
//! table, runs the three framings through the local fit aggregator and hands
//! the tables to the combiner. Every adapter calls into this executor.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and builder-style entry points.
//! * Collaborators (partitioner, copula statistic) are held behind `Arc`
//!   so one configuration can be shared across permutation replicates and
//!   matrix pairs.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Observation requirement**: `max(10, ceil(n / 5))` per quadrant.
//! * **Degenerate partition**: No regression points; the result is exactly
//!   `(0, 0)` and no fit is attempted.
//!
//! ## Invariants
//!
//! * `x` and `y` have equal length and contain no missing values.
//! * The pipeline always returns finite numbers for validated input.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not draw permutations (handled by `evaluation`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, sync::Arc, vec::Vec};

// Internal dependencies
use crate::algorithms::aggregation::{Framing, LocalFitAggregator, QuadrantFit};
use crate::algorithms::copula::{CopulaStatistic, PartialMomentCopula};
use crate::algorithms::partition::{GravityPartitioner, Partitioner};
use crate::engine::combiner::{Combined, DependenceCombiner, FramingAggregates};
use crate::engine::output::{DependenceDiagnostics, DependenceResult, QuadrantDiagnostics};
use crate::math::descriptive::count_distinct;
use crate::math::linalg::FloatLinalg;
use crate::primitives::partition::{Partition, PartitionConfig, PartitionMode};
use crate::primitives::quadrant::QuadrantTable;

/// Lower bound of the per-quadrant observation requirement.
pub const MIN_QUADRANT_OBSERVATIONS: usize = 10;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for dependence execution.
#[derive(Debug, Clone)]
pub struct DependenceConfig<T> {
    /// Directional dependence (`|y| ~ x` only).
    pub asym: bool,

    /// Collect per-quadrant diagnostics.
    pub return_diagnostics: bool,

    /// Quadrant partitioner.
    pub partitioner: Arc<dyn Partitioner<T>>,

    /// Fallback statistic for failed local fits.
    pub copula: Arc<dyn CopulaStatistic<T>>,
}

impl<T: FloatLinalg> Default for DependenceConfig<T> {
    fn default() -> Self {
        Self {
            asym: false,
            return_diagnostics: false,
            partitioner: Arc::new(GravityPartitioner),
            copula: Arc::new(PartialMomentCopula::default()),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for bivariate dependence evaluations.
#[derive(Debug, Clone)]
pub struct DependenceExecutor<T> {
    /// Directional dependence.
    pub asym: bool,

    /// Collect per-quadrant diagnostics.
    pub return_diagnostics: bool,

    /// Quadrant partitioner.
    pub partitioner: Arc<dyn Partitioner<T>>,

    /// Fallback statistic.
    pub copula: Arc<dyn CopulaStatistic<T>>,
}

impl<T: FloatLinalg> Default for DependenceExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> DependenceExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self::from_config(&DependenceConfig::default())
    }

    /// Create an executor from a configuration.
    pub fn from_config(config: &DependenceConfig<T>) -> Self {
        Self {
            asym: config.asym,
            return_diagnostics: config.return_diagnostics,
            partitioner: Arc::clone(&config.partitioner),
            copula: Arc::clone(&config.copula),
        }
    }

    /// Set directional dependence.
    pub fn asym(mut self, asym: bool) -> Self {
        self.asym = asym;
        self
    }

    /// Set diagnostics collection.
    pub fn return_diagnostics(mut self, flag: bool) -> Self {
        self.return_diagnostics = flag;
        self
    }

    /// Set the partitioner.
    pub fn partitioner(mut self, partitioner: Arc<dyn Partitioner<T>>) -> Self {
        self.partitioner = partitioner;
        self
    }

    /// Set the fallback statistic.
    pub fn copula(mut self, copula: Arc<dyn CopulaStatistic<T>>) -> Self {
        self.copula = copula;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Per-quadrant observation requirement for a sample of `n`.
    pub fn min_observations(n: usize) -> usize {
        MIN_QUADRANT_OBSERVATIONS.max(n.div_ceil(5))
    }

    /// Partitioner arguments for a sample of `n`.
    pub fn partition_config(&self, n: usize) -> PartitionConfig {
        PartitionConfig {
            order: None,
            min_observations: Self::min_observations(n),
            min_obs_stop: true,
            mode: PartitionMode::XOnly,
            voronoi: self.return_diagnostics,
        }
    }

    /// Run with an explicit configuration.
    pub fn run_with_config(x: &[T], y: &[T], config: &DependenceConfig<T>) -> DependenceResult<T> {
        Self::from_config(config).run(x, y)
    }

    /// Evaluate correlation and dependence of `y` on `x`.
    ///
    /// Inputs must already be validated.
    pub fn run(&self, x: &[T], y: &[T]) -> DependenceResult<T> {
        let n = x.len().min(y.len());
        let (x, y) = (&x[..n], &y[..n]);

        let partition_config = self.partition_config(n);
        let partition = self.partitioner.partition(x, y, &partition_config);
        if partition.is_degenerate() {
            log::debug!(
                "degenerate partition ({} observations, {} required); returning zero result",
                n,
                partition_config.min_observations
            );
            return DependenceResult::zero();
        }
        if !partition.is_well_formed(n) {
            log::warn!(
                "partition covers {} of {} observations over {} quadrants; returning zero result",
                partition.len(),
                n,
                partition.n_quadrants()
            );
            return DependenceResult::zero();
        }

        let table = QuadrantTable::from_partition(x, y, &partition);
        let aggregator = LocalFitAggregator::new(&table, self.copula.as_ref(), x, y);
        let tables = Framing::ALL.map(|framing| aggregator.aggregate(framing));

        let distinct_x = count_distinct(x);
        let distinct_y = count_distinct(y);
        let combined =
            DependenceCombiner::new(self.asym).combine(&tables, x, y, distinct_x, distinct_y);

        let diagnostics = self.return_diagnostics.then(|| {
            Self::diagnostics(
                &partition,
                &table,
                &tables,
                &combined,
                &partition_config,
                (distinct_x, distinct_y),
            )
        });

        DependenceResult {
            correlation: combined.correlation,
            dependence: combined.dependence,
            diagnostics,
        }
    }

    /// `(correlation, dependence)` of `y` on `x`, without diagnostics.
    pub fn evaluate_pair(&self, x: &[T], y: &[T]) -> (T, T) {
        if self.return_diagnostics {
            self.clone().return_diagnostics(false).run(x, y).pair()
        } else {
            self.run(x, y).pair()
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    fn diagnostics(
        partition: &Partition<T>,
        table: &QuadrantTable<T>,
        tables: &[Vec<QuadrantFit<T>>; 3],
        combined: &Combined<T>,
        config: &PartitionConfig,
        (distinct_x, distinct_y): (usize, usize),
    ) -> DependenceDiagnostics<T> {
        let quadrants = table
            .records()
            .iter()
            .enumerate()
            .map(|(k, record)| QuadrantDiagnostics {
                id: record.id,
                label: String::from(partition.label(record.id)),
                count: record.count,
                weight: record.weight,
                fits: FramingAggregates {
                    symmetric: tables[0][k].value,
                    asymmetric_x: tables[1][k].value,
                    asymmetric_y: tables[2][k].value,
                },
                sources: [tables[0][k].source, tables[1][k].source, tables[2][k].source],
            })
            .collect();

        DependenceDiagnostics {
            quadrants,
            partition_order: partition.order,
            min_observations: config.min_observations,
            signed: combined.signed,
            magnitude: combined.magnitude,
            pre_blend: combined.pre_blend,
            poly_base: combined.poly_base,
            blend: combined.blend,
            distinct_x,
            distinct_y,
            voronoi: config.voronoi,
        }
    }
}
