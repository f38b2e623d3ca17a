//! Permutation adapter for significance testing.
//!
//! ## Purpose
//!
//! This module evaluates a pair of variables together with a reference set
//! of permutation replicates and reports p-values and intervals for both
//! correlation and dependence.
//!
//! ## Design notes
//!
//! * **Reproducible**: Permutations come from one random source, seeded
//!   from `seed` (or a fixed default) unless the caller injects an RNG.
//! * **Delegation**: Replicates are evaluated by the execution engine and
//!   summarized by the evaluation layer.
//! * **Parallel**: With the `parallel` feature, replicates are evaluated with
//!   rayon after all permutations have been drawn.
//!
//! ## Invariants
//!
//! * Input arrays `x` and `y` must have the same length.
//! * At least 2 permutation replicates are drawn.
//! * The tail probability lies in (0, 0.5).
//!
//! ## Non-goals
//!
//! * This adapter does not render histograms of the reference set.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

// External dependencies
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::algorithms::copula::CopulaStatistic;
use crate::algorithms::partition::Partitioner;
use crate::engine::executor::{DependenceConfig, DependenceExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::significance::{
    SignificanceEstimator, SignificanceResult, DEFAULT_PERMUTATIONS, DEFAULT_TAIL_PROBABILITY,
};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::DependenceError;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 123;

// ============================================================================
// Permutation Dependence Builder
// ============================================================================

/// Builder for the permutation processor.
#[derive(Debug, Clone)]
pub struct PermutationDependenceBuilder<T> {
    /// Directional dependence.
    pub asym: bool,

    /// Quadrant partitioner.
    pub partitioner: Arc<dyn Partitioner<T>>,

    /// Fallback statistic.
    pub copula: Arc<dyn CopulaStatistic<T>>,

    /// Number of null replicates.
    pub permutations: usize,

    /// One-sided tail probability of the intervals.
    pub interval_probability: T,

    /// Seed of the permutation generator.
    pub seed: Option<u64>,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<DependenceError>,

    /// Parallel execution hint.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for PermutationDependenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> PermutationDependenceBuilder<T> {
    /// Create a new permutation builder with default parameters.
    fn new() -> Self {
        let defaults = DependenceConfig::default();
        Self {
            asym: defaults.asym,
            partitioner: defaults.partitioner,
            copula: defaults.copula,
            permutations: DEFAULT_PERMUTATIONS,
            interval_probability: T::from(DEFAULT_TAIL_PROBABILITY).unwrap(),
            seed: None,
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

    /// Set the number of null replicates.
    pub fn permutations(mut self, permutations: usize) -> Self {
        self.permutations = permutations;
        self
    }

    /// Set the one-sided tail probability of the intervals.
    pub fn interval_probability(mut self, probability: T) -> Self {
        self.interval_probability = probability;
        self
    }

    /// Set the seed of the permutation generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
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

    /// Build the permutation processor.
    pub fn build(self) -> Result<PermutationDependence<T>, DependenceError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_permutations(self.permutations)?;
        Validator::validate_probability(self.interval_probability)?;

        let config = DependenceConfig {
            asym: self.asym,
            return_diagnostics: false,
            partitioner: self.partitioner,
            copula: self.copula,
        };

        Ok(PermutationDependence {
            executor: DependenceExecutor::from_config(&config),
            permutations: self.permutations,
            interval_probability: self.interval_probability,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            parallel: self.parallel.unwrap_or(cfg!(feature = "parallel")),
        })
    }
}

// ============================================================================
// Permutation Dependence Processor
// ============================================================================

/// Permutation significance processor.
#[derive(Debug, Clone)]
pub struct PermutationDependence<T> {
    executor: DependenceExecutor<T>,
    permutations: usize,
    interval_probability: T,
    seed: u64,
    parallel: bool,
}

impl<T: FloatLinalg> PermutationDependence<T> {
    /// Estimates, p-values and intervals, with permutations seeded from the
    /// configured seed.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<SignificanceResult<T>, DependenceError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.fit_with_rng(x, y, &mut rng)
    }

    /// Estimates, p-values and intervals, drawing permutations from `rng`.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        x: &[T],
        y: &[T],
        rng: &mut R,
    ) -> Result<SignificanceResult<T>, DependenceError> {
        Validator::validate_pair(x, y)?;

        let permutations = SignificanceEstimator::draw_permutations(y.len(), self.permutations, rng);
        let reference =
            SignificanceEstimator::reference_set(x, y, &permutations, self.parallel, |a, b| {
                self.executor.evaluate_pair(a, b)
            });

        Ok(SignificanceEstimator::summarize(
            reference,
            self.interval_probability,
        ))
    }

    /// Number of null replicates.
    pub fn permutations(&self) -> usize {
        self.permutations
    }

    /// Seed used by `fit`.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
