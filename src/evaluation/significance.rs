//! Permutation-based significance of correlation and dependence.
//!
//! ## Purpose
//!
//! This module builds an empirical reference distribution for "no
//! relationship" by re-evaluating the bivariate estimator against randomly
//! reordered copies of `y`, and turns it into one-sided p-values and
//! partial-moment intervals for both metrics.
//!
//! ## Design notes
//!
//! * **Callback**: The estimator itself is passed in as a closure; this
//!   module never partitions or fits.
//! * **Single RNG**: Every permutation is drawn up front from one injected
//!   random source, so sequential and parallel evaluation agree exactly.
//! * **Plain data**: The full reference set is returned for renderers.
//!
//! ## Key concepts
//!
//! * **Reference set**: Slot 0 holds `(x, x)`, slot 1 the observed `(x, y)`,
//!   slots 2.. the permutation replicates.
//! * **p-value**: `min(LPM(0, est, nulls), UPM(0, est, nulls))`.
//! * **Interval**: `[LPM.VaR(p, 0, nulls), UPM.VaR(p, 0, nulls)]`.
//!
//! ## Invariants
//!
//! * `x` is never reordered; only the pairing partner is.
//! * p-values lie in `[0, 0.5]` up to ties.
//!
//! ## Non-goals
//!
//! * This module does not render histograms of the reference set.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::math::moments::{lpm, lpm_var, upm, upm_var};

/// Number of null replicates in the default reference set.
pub const DEFAULT_PERMUTATIONS: usize = 99;

/// Default one-sided tail probability of the reported intervals.
pub const DEFAULT_TAIL_PROBABILITY: f64 = 0.025;

/// Slot of the observed `(x, y)` pair in the reference set.
pub const OBSERVED_SLOT: usize = 1;

/// First slot holding a permutation replicate.
pub const FIRST_NULL_SLOT: usize = 2;

// ============================================================================
// Reference Set
// ============================================================================

/// Correlation and dependence of every evaluated pairing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceSet<T> {
    /// Correlation per slot.
    pub correlations: Vec<T>,
    /// Dependence per slot.
    pub dependences: Vec<T>,
}

impl<T: Float> ReferenceSet<T> {
    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.correlations.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.correlations.is_empty()
    }

    /// Correlation and dependence of the observed pairing.
    #[inline]
    pub fn observed(&self) -> (T, T) {
        (
            self.correlations[OBSERVED_SLOT],
            self.dependences[OBSERVED_SLOT],
        )
    }

    /// Correlations of the permutation replicates.
    #[inline]
    pub fn null_correlations(&self) -> &[T] {
        &self.correlations[FIRST_NULL_SLOT..]
    }

    /// Dependences of the permutation replicates.
    #[inline]
    pub fn null_dependences(&self) -> &[T] {
        &self.dependences[FIRST_NULL_SLOT..]
    }
}

// ============================================================================
// Significance Results
// ============================================================================

/// Point estimate, p-value and interval of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricSignificance<T> {
    /// Value for the observed pairing.
    pub estimate: T,
    /// Smaller tail mass of the null replicates at the estimate.
    pub p_value: T,
    /// Lower interval bound.
    pub lower: T,
    /// Upper interval bound.
    pub upper: T,
}

impl<T: Float> MetricSignificance<T> {
    /// Summarize an estimate against its null replicates.
    pub fn from_nulls(estimate: T, nulls: &[T], probability: T) -> Self {
        let lower_tail = lpm(T::zero(), estimate, nulls);
        let upper_tail = upm(T::zero(), estimate, nulls);
        Self {
            estimate,
            p_value: lower_tail.min(upper_tail),
            lower: lpm_var(probability, T::zero(), nulls),
            upper: upm_var(probability, T::zero(), nulls),
        }
    }
}

/// Output of the permutation path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignificanceResult<T> {
    /// Correlation estimate, p-value and interval.
    pub correlation: MetricSignificance<T>,
    /// Dependence estimate, p-value and interval.
    pub dependence: MetricSignificance<T>,
    /// One-sided tail probability used for the intervals.
    pub probability: T,
    /// Every evaluated pairing.
    pub reference: ReferenceSet<T>,
}

impl<T: Float> SignificanceResult<T> {
    /// Coverage of the reported intervals, e.g. 0.95.
    pub fn interval_level(&self) -> T {
        T::one() - (self.probability + self.probability)
    }
}

impl<T: Float + Display> Display for SignificanceResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let level = self.interval_level() * T::from(100.0).unwrap();
        writeln!(f, "Summary:")?;
        writeln!(f, "  Replicates: {}", self.reference.null_correlations().len())?;
        writeln!(f, "  Interval:   {:.1}%", level)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10} {:>10}",
            "Metric", "Estimate", "p-value", "Lower", "Upper"
        )?;
        writeln!(f, "  {}", "-".repeat(54))?;
        for (name, m) in [("Correlation", &self.correlation), ("Dependence", &self.dependence)] {
            writeln!(
                f,
                "{:>12} {:>10.6} {:>10.4} {:>10.6} {:>10.6}",
                name, m.estimate, m.p_value, m.lower, m.upper
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Significance Estimator
// ============================================================================

/// Drives the permutation replicates.
pub struct SignificanceEstimator;

impl SignificanceEstimator {
    /// Draw `count` independent permutations of `0..n` from `rng`.
    pub fn draw_permutations<R: Rng + ?Sized>(n: usize, count: usize, rng: &mut R) -> Vec<Vec<usize>> {
        (0..count)
            .map(|_| {
                let mut order: Vec<usize> = (0..n).collect();
                order.shuffle(rng);
                order
            })
            .collect()
    }

    /// Evaluate `(x, x)`, `(x, y)` and `(x, y[perm])` for every permutation.
    ///
    /// `evaluate` returns `(correlation, dependence)` for one pairing.
    pub fn reference_set<T, F>(
        x: &[T],
        y: &[T],
        permutations: &[Vec<usize>],
        parallel: bool,
        evaluate: F,
    ) -> ReferenceSet<T>
    where
        T: Float + Send + Sync,
        F: Fn(&[T], &[T]) -> (T, T) + Sync,
    {
        let replicate = |perm: &Vec<usize>| {
            let shuffled: Vec<T> = perm.iter().map(|&i| y[i]).collect();
            evaluate(x, &shuffled)
        };

        #[cfg(feature = "parallel")]
        let nulls: Vec<(T, T)> = if parallel {
            permutations.par_iter().map(replicate).collect()
        } else {
            permutations.iter().map(replicate).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let nulls: Vec<(T, T)> = {
            let _ = parallel;
            permutations.iter().map(replicate).collect()
        };

        let mut correlations = Vec::with_capacity(nulls.len() + FIRST_NULL_SLOT);
        let mut dependences = Vec::with_capacity(nulls.len() + FIRST_NULL_SLOT);
        for (c, d) in [evaluate(x, x), evaluate(x, y)].into_iter().chain(nulls) {
            correlations.push(c);
            dependences.push(d);
        }

        ReferenceSet {
            correlations,
            dependences,
        }
    }

    /// Reduce a reference set to p-values and intervals.
    pub fn summarize<T: Float>(reference: ReferenceSet<T>, probability: T) -> SignificanceResult<T> {
        let (cor, dep) = reference.observed();
        let correlation =
            MetricSignificance::from_nulls(cor, reference.null_correlations(), probability);
        let dependence =
            MetricSignificance::from_nulls(dep, reference.null_dependences(), probability);

        log::debug!(
            "permutation reference set: {} replicates, correlation p = {:?}, dependence p = {:?}",
            reference.null_correlations().len(),
            correlation.p_value.to_f64(),
            dependence.p_value.to_f64()
        );

        SignificanceResult {
            correlation,
            dependence,
            probability,
            reference,
        }
    }
}
