//! Partition types shared between partitioners and the dependence pipeline.
//!
//! ## Purpose
//!
//! This module defines the data produced by a partitioner (the quadrant
//! assignment of every observation plus one regression point per quadrant)
//! and the configuration a partitioner is invoked with.
//!
//! ## Design notes
//!
//! * **Opaque ids**: `QuadrantId` is a dense index into the partition's
//!   quadrant list; only equality is meaningful to the pipeline.
//! * **Labels**: Each quadrant also carries a path label (`"q"`, `"q1"`,
//!   `"q12"`, ...) recording the splits that produced it.
//! * **Degeneracy**: An empty regression-points table signals a degenerate
//!   partition; the assignment is still total.
//!
//! ## Invariants
//!
//! * `assignments.len()` equals the number of observations.
//! * Every assignment indexes into `labels`.
//! * Regression points are listed in quadrant order.
//!
//! ## Non-goals
//!
//! * This module does not implement any splitting logic (see `algorithms::partition`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// ============================================================================
// Quadrant Identity
// ============================================================================

/// Identifier of a quadrant within one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadrantId(pub usize);

impl QuadrantId {
    /// Position of the quadrant in the partition's quadrant list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Representative point of a quadrant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionPoint<T> {
    /// Quadrant the point represents.
    pub quadrant: QuadrantId,
    /// Mean of `x` within the quadrant.
    pub x: T,
    /// Mean of `y` within the quadrant.
    pub y: T,
}

// ============================================================================
// Partition
// ============================================================================

/// Output of a partitioner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition<T> {
    /// Quadrant of each observation, aligned with the input samples.
    pub assignments: Vec<QuadrantId>,
    /// Path label of each quadrant, indexed by `QuadrantId`.
    pub labels: Vec<String>,
    /// One representative point per quadrant; empty when degenerate.
    pub regression_points: Vec<RegressionPoint<T>>,
    /// Number of splitting rounds that were kept.
    pub order: usize,
}

impl<T> Partition<T> {
    /// Whether the partitioner could not form a single valid quadrant.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.regression_points.is_empty()
    }

    /// Number of quadrants in the assignment.
    #[inline]
    pub fn n_quadrants(&self) -> usize {
        self.labels.len()
    }

    /// Number of observations covered by the assignment.
    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the assignment covers no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Whether the assignment covers exactly `n` observations and every
    /// quadrant id refers to a labelled quadrant.
    pub fn is_well_formed(&self, n: usize) -> bool {
        let n_quadrants = self.n_quadrants();
        self.assignments.len() == n && self.assignments.iter().all(|id| id.index() < n_quadrants)
    }

    /// Path label of a quadrant.
    #[inline]
    pub fn label(&self, id: QuadrantId) -> &str {
        &self.labels[id.index()]
    }
}

// ============================================================================
// Partition Configuration
// ============================================================================

/// Which variables a partitioner splits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartitionMode {
    /// Split on the explanatory variable only (binary splits).
    #[default]
    XOnly,

    /// Split on both variables at once (up to four children per split).
    Joint,
}

/// Arguments passed to a partitioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionConfig {
    /// Maximum number of splitting rounds (`None` derives it from the sample size).
    pub order: Option<usize>,
    /// Minimum observations a quadrant needs to be split.
    pub min_observations: usize,
    /// Roll back the round that first produces an undersized quadrant, then stop.
    pub min_obs_stop: bool,
    /// Variables to split on.
    pub mode: PartitionMode,
    /// Request Voronoi cell geometry for diagnostic rendering (no numeric effect).
    pub voronoi: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            order: None,
            min_observations: 8,
            min_obs_stop: true,
            mode: PartitionMode::XOnly,
            voronoi: false,
        }
    }
}
