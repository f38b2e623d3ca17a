//! Combination of the three framings into correlation and dependence.
//!
//! ## Purpose
//!
//! This module reduces the per-quadrant signed fits of the three framings to
//! the final `(correlation, dependence)` pair. Quadrant values are weighted
//! by population share, the framings are combined, and the dependence is
//! blended with a whole-sample polynomial fit when both variables are
//! continuous enough for one.
//!
//! ## Design notes
//!
//! * **Maximum, not mean**: Symmetric dependence takes the strongest framing.
//! * **Fixed blend**: The global fit contributes exactly a quarter of the
//!   final dependence.
//! * **Absorbed failures**: A skipped or failed blend fit reuses the
//!   pre-blend dependence.
//!
//! ## Key concepts
//!
//! ```text
//! signed[f]    = sum_q w_q * v_q[f]
//! magnitude[f] = sum_q w_q * |v_q[f]|
//! correlation  = mean(signed[sym], signed[xy], signed[yx])
//! dependence   = asym ? magnitude[xy] : max(magnitude[..])
//! final        = (3 * dependence + poly_base) / 4
//! ```
//!
//! ## Invariants
//!
//! * With weights summing to one and values in `[-1, 1]`, correlation lies
//!   in `[-1, 1]` and dependence in `[0, 1]`.
//!
//! ## Non-goals
//!
//! * This module does not fit quadrants (see `algorithms::aggregation`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::aggregation::{Framing, QuadrantFit};
use crate::algorithms::regression::{global_degree, PolynomialFit};
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Aggregates
// ============================================================================

/// One weighted sum per framing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramingAggregates<T> {
    /// `y ~ x`.
    pub symmetric: T,
    /// `|y| ~ x`.
    pub asymmetric_x: T,
    /// `|x| ~ y`.
    pub asymmetric_y: T,
}

impl<T: Float> FramingAggregates<T> {
    /// Value of one framing.
    pub fn get(&self, framing: Framing) -> T {
        match framing {
            Framing::Symmetric => self.symmetric,
            Framing::AsymmetricX => self.asymmetric_x,
            Framing::AsymmetricY => self.asymmetric_y,
        }
    }

    /// Arithmetic mean of the three framings.
    pub fn mean(&self) -> T {
        (self.symmetric + self.asymmetric_x + self.asymmetric_y) / T::from(3.0).unwrap()
    }

    /// Largest of the three framings.
    pub fn max(&self) -> T {
        self.symmetric.max(self.asymmetric_x).max(self.asymmetric_y)
    }
}

/// How the whole-sample blend fit went.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendStatus {
    /// The fit ran; carries its degree.
    Fitted(usize),

    /// A variable had too few distinct values.
    Skipped,

    /// The fit failed and the pre-blend dependence was reused.
    Failed,
}

/// Final pair plus the intermediate quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combined<T> {
    /// Mean of the signed aggregates.
    pub correlation: T,
    /// Blended dependence.
    pub dependence: T,
    /// Signed weighted sums.
    pub signed: FramingAggregates<T>,
    /// Absolute weighted sums.
    pub magnitude: FramingAggregates<T>,
    /// Dependence before the blend.
    pub pre_blend: T,
    /// R^2 of the global fit, or the pre-blend dependence.
    pub poly_base: T,
    /// Outcome of the global fit.
    pub blend: BlendStatus,
}

// ============================================================================
// Dependence Combiner
// ============================================================================

/// Reduces framing tables to the final pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependenceCombiner {
    /// Directional dependence (`|y| ~ x` only).
    pub asym: bool,
}

impl DependenceCombiner {
    /// Create a combiner.
    pub fn new(asym: bool) -> Self {
        Self { asym }
    }

    /// `sum w * v` over a framing table.
    pub fn weighted_sum<T: Float>(fits: &[QuadrantFit<T>]) -> T {
        fits.iter().fold(T::zero(), |acc, f| acc + f.weight * f.value)
    }

    /// `sum w * |v|` over a framing table.
    pub fn weighted_abs_sum<T: Float>(fits: &[QuadrantFit<T>]) -> T {
        fits.iter()
            .fold(T::zero(), |acc, f| acc + f.weight * f.value.abs())
    }

    /// Goodness of fit of `|y| ~ poly(x)` over the whole sample.
    ///
    /// `lx` and `ly` are the distinct-value counts of `x` and `y`. Returns
    /// `(R^2, degree)`, or the reason no usable fit was produced.
    pub fn global_fit<T: FloatLinalg>(
        x: &[T],
        y: &[T],
        lx: usize,
        ly: usize,
    ) -> Result<(T, usize), BlendStatus> {
        let threshold = T::from(x.len()).unwrap().sqrt();
        if T::from(lx).unwrap() <= threshold || T::from(ly).unwrap() <= threshold {
            log::debug!(
                "global blend fit skipped: {} distinct x, {} distinct y of {}",
                lx,
                ly,
                x.len()
            );
            return Err(BlendStatus::Skipped);
        }

        let magnitude: Vec<T> = y.iter().map(|v| v.abs()).collect();
        match PolynomialFit::fit(x, &magnitude, global_degree(lx, ly)) {
            Ok(fit) => Ok((fit.r_squared, fit.degree)),
            Err(failure) => {
                log::debug!("global blend fit failed: {:?}", failure);
                Err(BlendStatus::Failed)
            }
        }
    }

    /// Combine the three framing tables.
    ///
    /// `tables` is indexed like `Framing::ALL`.
    pub fn combine<T: FloatLinalg>(
        &self,
        tables: &[Vec<QuadrantFit<T>>; 3],
        x: &[T],
        y: &[T],
        lx: usize,
        ly: usize,
    ) -> Combined<T> {
        let signed = FramingAggregates {
            symmetric: Self::weighted_sum(&tables[0]),
            asymmetric_x: Self::weighted_sum(&tables[1]),
            asymmetric_y: Self::weighted_sum(&tables[2]),
        };
        let magnitude = FramingAggregates {
            symmetric: Self::weighted_abs_sum(&tables[0]),
            asymmetric_x: Self::weighted_abs_sum(&tables[1]),
            asymmetric_y: Self::weighted_abs_sum(&tables[2]),
        };

        let pre_blend = if self.asym {
            magnitude.asymmetric_x
        } else {
            magnitude.max()
        };

        let (poly_base, blend) = match Self::global_fit(x, y, lx, ly) {
            Ok((r2, degree)) => (r2, BlendStatus::Fitted(degree)),
            Err(status) => (pre_blend, status),
        };

        let three = T::from(3.0).unwrap();
        let four = T::from(4.0).unwrap();

        Combined {
            correlation: signed.mean(),
            dependence: (three * pre_blend + poly_base) / four,
            signed,
            magnitude,
            pre_blend,
            poly_base,
            blend,
        }
    }
}
