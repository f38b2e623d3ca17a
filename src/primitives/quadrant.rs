//! Immutable per-quadrant records built from a partition.
//!
//! ## Purpose
//!
//! This module turns a partitioner's assignment into a `QuadrantTable`: one
//! record per quadrant holding its observations (in their natural order),
//! its population share, and the size of the capped sub-sample used for the
//! local fit. The table is built once and read by the three local-fit
//! framings without further mutation.
//!
//! ## Design notes
//!
//! * **Grouping**: Observations are grouped by quadrant id in a single pass,
//!   preserving input order within each quadrant.
//! * **Capping**: The local-fit sample is the first `min(max(n, 8), 100)`
//!   observations of a quadrant; quadrants smaller than the floor are
//!   flagged as undersized rather than padded.
//!
//! ## Key concepts
//!
//! * **Weight**: `count / total`, the quadrant's share of the sample.
//! * **Sample size**: The requested local-fit sample size; a quadrant is
//!   undersized when it holds fewer observations than requested.
//!
//! ## Invariants
//!
//! * Weights are positive and sum to one (up to rounding).
//! * Every observation belongs to exactly one record.
//!
//! ## Non-goals
//!
//! * This module does not fit anything (see `algorithms::aggregation`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::partition::{Partition, QuadrantId};

/// Smallest local-fit sample a quadrant must be able to supply.
pub const MIN_LOCAL_OBSERVATIONS: usize = 8;

/// Largest local-fit sample taken from any quadrant.
pub const MAX_LOCAL_OBSERVATIONS: usize = 100;

// ============================================================================
// Quadrant Record
// ============================================================================

/// Observations and weight of a single quadrant.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantRecord<T> {
    /// Quadrant identifier.
    pub id: QuadrantId,
    /// Number of observations in the quadrant.
    pub count: usize,
    /// Share of the whole sample held by the quadrant.
    pub weight: T,
    /// Requested local-fit sample size.
    pub sample_size: usize,
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Float> QuadrantRecord<T> {
    /// All `x` observations of the quadrant.
    #[inline]
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// All `y` observations of the quadrant.
    #[inline]
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Capped `x` sample used for the local fit.
    #[inline]
    pub fn capped_x(&self) -> &[T] {
        &self.x[..self.sample_size.min(self.count)]
    }

    /// Capped `y` sample used for the local fit.
    #[inline]
    pub fn capped_y(&self) -> &[T] {
        &self.y[..self.sample_size.min(self.count)]
    }

    /// Whether the quadrant holds fewer observations than its requested sample.
    #[inline]
    pub fn is_undersized(&self) -> bool {
        self.count < self.sample_size
    }
}

/// Requested local-fit sample size for a quadrant of `n` observations.
#[inline]
pub fn local_sample_size(n: usize) -> usize {
    n.max(MIN_LOCAL_OBSERVATIONS).min(MAX_LOCAL_OBSERVATIONS)
}

// ============================================================================
// Quadrant Table
// ============================================================================

/// All quadrant records of one partition, in quadrant order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantTable<T> {
    records: Vec<QuadrantRecord<T>>,
    total: usize,
}

impl<T: Float> QuadrantTable<T> {
    /// Group `x` and `y` by the partition's assignment.
    ///
    /// Quadrants that received no observations are omitted.
    pub fn from_partition(x: &[T], y: &[T], partition: &Partition<T>) -> Self {
        let total = partition.len();
        let mut xs: Vec<Vec<T>> = vec![Vec::new(); partition.n_quadrants()];
        let mut ys: Vec<Vec<T>> = vec![Vec::new(); partition.n_quadrants()];

        for (i, id) in partition.assignments.iter().enumerate() {
            xs[id.index()].push(x[i]);
            ys[id.index()].push(y[i]);
        }

        let n_total = T::from(total).unwrap();
        let records = xs
            .into_iter()
            .zip(ys)
            .enumerate()
            .filter(|(_, (qx, _))| !qx.is_empty())
            .map(|(idx, (qx, qy))| {
                let count = qx.len();
                QuadrantRecord {
                    id: QuadrantId(idx),
                    count,
                    weight: T::from(count).unwrap() / n_total,
                    sample_size: local_sample_size(count),
                    x: qx,
                    y: qy,
                }
            })
            .collect();

        Self { records, total }
    }

    /// Quadrant records in quadrant order.
    #[inline]
    pub fn records(&self) -> &[QuadrantRecord<T>] {
        &self.records
    }

    /// Number of non-empty quadrants.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no quadrants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of observations across all quadrants.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Sum of all quadrant weights.
    pub fn weight_sum(&self) -> T {
        self.records.iter().fold(T::zero(), |acc, r| acc + r.weight)
    }
}
