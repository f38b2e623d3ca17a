//! Per-quadrant local fits under the three dependence framings.
//!
//! ## Purpose
//!
//! This module computes, for every quadrant of a partition, a signed
//! goodness-of-fit `sign(r) * R^2` of a degree-adaptive polynomial fit on the
//! quadrant's capped sub-sample. Fits that cannot be computed are replaced by
//! the copula statistic of the quadrant, and any value still undefined after
//! that by the copula statistic of the whole sample.
//!
//! ## Design notes
//!
//! * **Tagged outcomes**: `local_fit` returns `FitOutcome`; the aggregator
//!   branches on the tag instead of catching failures.
//! * **Provenance**: Each `QuadrantFit` records whether its value came from
//!   regression or from one of the two fallbacks.
//! * **Pure**: The aggregator only reads the quadrant table and samples.
//!
//! ## Key concepts
//!
//! * **Symmetric**: `y ~ poly(x)`, signed by `cor(x, y)`.
//! * **AsymmetricX**: `|y| ~ poly(x)`, signed by `cor(x, y)`.
//! * **AsymmetricY**: `|x| ~ poly(y)`, signed by `cor(y, x)`.
//! * **Degree**: `max(1, min(10, floor(sqrt(n)) - 1))` for a quadrant of `n`.
//!
//! ## Invariants
//!
//! * One `QuadrantFit` per quadrant record, in table order.
//! * No returned value is NaN.
//!
//! ## Non-goals
//!
//! * This module does not weight or combine quadrants (see `engine::combiner`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::copula::CopulaStatistic;
use crate::algorithms::regression::{local_degree, FitFailure, FitOutcome, PolynomialFit};
use crate::math::descriptive::{count_distinct, pearson, sign};
use crate::math::linalg::FloatLinalg;
use crate::primitives::partition::QuadrantId;
use crate::primitives::quadrant::{QuadrantRecord, QuadrantTable, MIN_LOCAL_OBSERVATIONS};

// ============================================================================
// Framing
// ============================================================================

/// Which variable explains which in a local fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Framing {
    /// `y` on `x`.
    Symmetric,

    /// `|y|` on `x`.
    AsymmetricX,

    /// `|x|` on `y`.
    AsymmetricY,
}

impl Framing {
    /// All three framings in evaluation order.
    pub const ALL: [Framing; 3] = [
        Framing::Symmetric,
        Framing::AsymmetricX,
        Framing::AsymmetricY,
    ];
}

/// Where a quadrant's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitSource {
    /// Signed R^2 of the local polynomial fit.
    Regression,

    /// Copula statistic of the quadrant after the given failure.
    QuadrantCopula(FitFailure),

    /// Copula statistic of the whole sample.
    GlobalCopula,
}

/// Value of one quadrant under one framing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadrantFit<T> {
    /// Quadrant identifier.
    pub quadrant: QuadrantId,
    /// Population share of the quadrant.
    pub weight: T,
    /// Signed goodness-of-fit or fallback statistic.
    pub value: T,
    /// Provenance of `value`.
    pub source: FitSource,
}

// ============================================================================
// Local Fit Aggregator
// ============================================================================

/// Runs the local fits of one partition.
#[derive(Debug, Clone, Copy)]
pub struct LocalFitAggregator<'a, T> {
    table: &'a QuadrantTable<T>,
    copula: &'a dyn CopulaStatistic<T>,
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: FloatLinalg> LocalFitAggregator<'a, T> {
    /// Create an aggregator over a quadrant table and the full samples.
    pub fn new(
        table: &'a QuadrantTable<T>,
        copula: &'a dyn CopulaStatistic<T>,
        x: &'a [T],
        y: &'a [T],
    ) -> Self {
        Self {
            table,
            copula,
            x,
            y,
        }
    }

    /// Signed local fit of a single quadrant.
    pub fn local_fit(record: &QuadrantRecord<T>, framing: Framing) -> FitOutcome<T> {
        if record.is_undersized() {
            return FitOutcome::FallbackRequired(FitFailure::TooFewObservations {
                got: record.count,
                min: MIN_LOCAL_OBSERVATIONS,
            });
        }

        let (explanatory, response) = match framing {
            Framing::Symmetric | Framing::AsymmetricX => (record.capped_x(), record.capped_y()),
            Framing::AsymmetricY => (record.capped_y(), record.capped_x()),
        };

        let direction = match pearson(explanatory, response) {
            Some(r) => sign(r),
            None => {
                let failure = if count_distinct(explanatory) < 2 {
                    FitFailure::ConstantRegressor
                } else {
                    FitFailure::ConstantResponse
                };
                return FitOutcome::FallbackRequired(failure);
            }
        };

        let degree = local_degree(record.count);
        let fit = match framing {
            Framing::Symmetric => PolynomialFit::fit(explanatory, response, degree),
            Framing::AsymmetricX | Framing::AsymmetricY => {
                let magnitude: Vec<T> = response.iter().map(|v| v.abs()).collect();
                PolynomialFit::fit(explanatory, &magnitude, degree)
            }
        };

        match fit {
            Ok(fit) => {
                let value = direction * fit.r_squared;
                if value.is_nan() {
                    FitOutcome::FallbackRequired(FitFailure::NonFinite)
                } else {
                    FitOutcome::Fitted(value)
                }
            }
            Err(failure) => FitOutcome::FallbackRequired(failure),
        }
    }

    /// Values of every quadrant under `framing`, with fallbacks applied.
    pub fn aggregate(&self, framing: Framing) -> Vec<QuadrantFit<T>> {
        let mut fits: Vec<QuadrantFit<T>> = self
            .table
            .records()
            .iter()
            .map(|record| {
                let (value, source) = match Self::local_fit(record, framing) {
                    FitOutcome::Fitted(v) => (v, FitSource::Regression),
                    FitOutcome::FallbackRequired(failure) => {
                        log::trace!(
                            "quadrant {} ({:?}): local fit failed with {:?}, using quadrant copula",
                            record.id.index(),
                            framing,
                            failure
                        );
                        (
                            self.copula.dependence(record.x(), record.y()),
                            FitSource::QuadrantCopula(failure),
                        )
                    }
                };
                QuadrantFit {
                    quadrant: record.id,
                    weight: record.weight,
                    value,
                    source,
                }
            })
            .collect();

        if fits.iter().any(|f| f.value.is_nan()) {
            let global = self.copula.dependence(self.x, self.y);
            let global = if global.is_nan() { T::zero() } else { global };
            for fit in fits.iter_mut().filter(|f| f.value.is_nan()) {
                fit.value = global;
                fit.source = FitSource::GlobalCopula;
            }
        }

        fits
    }
}
