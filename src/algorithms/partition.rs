//! Recursive gravity partitioning of the joint sample space.
//!
//! ## Purpose
//!
//! This module splits a paired sample into quadrants of comparable
//! population. Each round splits every sufficiently populated quadrant at
//! its gravity (the average of mean and median), either on `x` alone or on
//! both variables at once. The dependence pipeline consumes the resulting
//! assignment and regression points.
//!
//! ## Design notes
//!
//! * **Trait seam**: `Partitioner` lets callers inject a different splitting
//!   scheme; `GravityPartitioner` is the default.
//! * **Breadth-first**: All quadrants of a round are split together, so the
//!   partition depth is uniform wherever the data allow it.
//! * **Rollback**: With `min_obs_stop`, the first round that creates an
//!   undersized quadrant is discarded and splitting stops.
//!
//! ## Key concepts
//!
//! * **Gravity**: `(mean + median) / 2` of the quadrant's values.
//! * **XOnly**: Children `1` (`x <= gx`) and `2` (`x > gx`).
//! * **Joint**: Children `1` (both at/below), `2` (x above, y at/below),
//!   `3` (x at/below, y above), `4` (both above); empty children are dropped.
//!
//! ## Invariants
//!
//! * Every observation is assigned to exactly one quadrant.
//! * A degenerate partition (fewer observations than `min_observations`)
//!   has an empty regression-points table.
//!
//! ## Non-goals
//!
//! * This module does not compute Voronoi geometry; the flag is carried for
//!   diagnostic renderers only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::math::descriptive::{count_distinct, gravity, mean};
use crate::primitives::partition::{
    Partition, PartitionConfig, PartitionMode, QuadrantId, RegressionPoint,
};

// ============================================================================
// Partitioner Trait
// ============================================================================

/// Produces a quadrant assignment for a paired sample.
pub trait Partitioner<T>: Debug + Send + Sync {
    /// Partition the aligned samples `x` and `y`.
    fn partition(&self, x: &[T], y: &[T], config: &PartitionConfig) -> Partition<T>;
}

// ============================================================================
// Gravity Partitioner
// ============================================================================

/// Default partitioner splitting at quadrant gravity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravityPartitioner;

#[derive(Debug, Clone)]
struct Cell {
    label: String,
    members: Vec<usize>,
}

impl GravityPartitioner {
    /// Default number of rounds for `n` observations: `ceil(log2(n))`, at least 1.
    pub fn default_order(n: usize) -> usize {
        let mut order = 0;
        while (1usize << order) < n && order < usize::BITS as usize - 1 {
            order += 1;
        }
        order.max(1)
    }

    fn column<T: Float>(values: &[T], members: &[usize]) -> Vec<T> {
        members.iter().map(|&i| values[i]).collect()
    }

    /// Split one cell, or return `None` when it cannot be split.
    fn split<T: Float>(x: &[T], y: &[T], cell: &Cell, mode: PartitionMode) -> Option<Vec<Cell>> {
        let cx = Self::column(x, &cell.members);
        let x_splits = count_distinct(&cx) >= 2;

        let children = match mode {
            PartitionMode::XOnly => {
                if !x_splits {
                    return None;
                }
                let gx = gravity(&cx);
                let (low, high): (Vec<usize>, Vec<usize>) =
                    cell.members.iter().copied().partition(|&i| x[i] <= gx);
                [(b'1', low), (b'2', high)].into_iter().collect::<Vec<_>>()
            }
            PartitionMode::Joint => {
                let cy = Self::column(y, &cell.members);
                if !x_splits && count_distinct(&cy) < 2 {
                    return None;
                }
                let (gx, gy) = (gravity(&cx), gravity(&cy));
                let mut buckets: [Vec<usize>; 4] = Default::default();
                for &i in &cell.members {
                    let slot = match (x[i] <= gx, y[i] <= gy) {
                        (true, true) => 0,
                        (false, true) => 1,
                        (true, false) => 2,
                        (false, false) => 3,
                    };
                    buckets[slot].push(i);
                }
                [b'1', b'2', b'3', b'4'].into_iter().zip(buckets).collect()
            }
        };

        let cells: Vec<Cell> = children
            .into_iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(digit, members)| {
                let mut label = cell.label.clone();
                label.push(digit as char);
                Cell { label, members }
            })
            .collect();

        if cells.len() < 2 {
            None
        } else {
            Some(cells)
        }
    }

    fn assemble<T: Float>(x: &[T], y: &[T], cells: Vec<Cell>, order: usize) -> Partition<T> {
        let mut assignments = vec![QuadrantId(0); x.len()];
        let mut labels = Vec::with_capacity(cells.len());
        let mut regression_points = Vec::with_capacity(cells.len());

        for (idx, cell) in cells.into_iter().enumerate() {
            for &i in &cell.members {
                assignments[i] = QuadrantId(idx);
            }
            regression_points.push(RegressionPoint {
                quadrant: QuadrantId(idx),
                x: mean(&Self::column(x, &cell.members)),
                y: mean(&Self::column(y, &cell.members)),
            });
            labels.push(cell.label);
        }

        Partition {
            assignments,
            labels,
            regression_points,
            order,
        }
    }
}

impl<T: Float + Send + Sync> Partitioner<T> for GravityPartitioner {
    fn partition(&self, x: &[T], y: &[T], config: &PartitionConfig) -> Partition<T> {
        let n = x.len().min(y.len());
        let root = Cell {
            label: String::from("q"),
            members: (0..n).collect(),
        };

        if n == 0 || n < config.min_observations {
            return Partition {
                assignments: vec![QuadrantId(0); n],
                labels: vec![root.label],
                regression_points: Vec::new(),
                order: 0,
            };
        }

        let max_rounds = config.order.unwrap_or_else(|| Self::default_order(n));
        let mut cells = vec![root];
        let mut rounds = 0;

        while rounds < max_rounds {
            let mut next = Vec::with_capacity(cells.len() * 2);
            let mut split_any = false;
            let mut undersized = false;

            for cell in &cells {
                let splittable = cell.members.len() >= config.min_observations;
                match splittable
                    .then(|| Self::split(x, y, cell, config.mode))
                    .flatten()
                {
                    Some(children) => {
                        split_any = true;
                        undersized |= children
                            .iter()
                            .any(|c| c.members.len() < config.min_observations);
                        next.extend(children);
                    }
                    None => next.push(cell.clone()),
                }
            }

            if !split_any || (config.min_obs_stop && undersized) {
                break;
            }
            cells = next;
            rounds += 1;
        }

        Self::assemble(&x[..n], &y[..n], cells, rounds)
    }
}
