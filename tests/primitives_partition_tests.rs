#![cfg(feature = "dev")]
//! Tests for partition output and configuration types.
//!
//! ## Test Organization
//!
//! 1. **Configuration** - Defaults and modes
//! 2. **Partition** - Degeneracy, labels and sizes

use nns_dep::internals::primitives::partition::{
    Partition, PartitionConfig, PartitionMode, QuadrantId, RegressionPoint,
};

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test PartitionConfig defaults.
#[test]
fn test_partition_config_default() {
    let config = PartitionConfig::default();
    assert_eq!(config.order, None);
    assert_eq!(config.min_observations, 8);
    assert!(config.min_obs_stop);
    assert_eq!(config.mode, PartitionMode::XOnly);
    assert!(!config.voronoi);
}

/// Test PartitionMode default and distinct variants.
#[test]
fn test_partition_mode_variants() {
    assert_eq!(PartitionMode::default(), PartitionMode::XOnly);
    assert_ne!(PartitionMode::XOnly, PartitionMode::Joint);
}

// ============================================================================
// Partition Tests
// ============================================================================

fn two_quadrants() -> Partition<f64> {
    Partition {
        assignments: vec![QuadrantId(0), QuadrantId(0), QuadrantId(1)],
        labels: vec!["q1".to_string(), "q2".to_string()],
        regression_points: vec![
            RegressionPoint {
                quadrant: QuadrantId(0),
                x: 1.5,
                y: 3.0,
            },
            RegressionPoint {
                quadrant: QuadrantId(1),
                x: 3.0,
                y: 1.0,
            },
        ],
        order: 1,
    }
}

/// Test sizes and labels of a regular partition.
#[test]
fn test_partition_accessors() {
    let p = two_quadrants();
    assert!(!p.is_degenerate());
    assert_eq!(p.len(), 3);
    assert!(!p.is_empty());
    assert_eq!(p.n_quadrants(), 2);
    assert_eq!(p.label(QuadrantId(1)), "q2");
    assert_eq!(QuadrantId(1).index(), 1);
}

/// Test that an empty regression-points table marks degeneracy.
#[test]
fn test_partition_degenerate() {
    let mut p = two_quadrants();
    p.regression_points.clear();
    assert!(p.is_degenerate());
    assert_eq!(p.len(), 3);
}

/// Test the assignment/label consistency check.
#[test]
fn test_partition_well_formed() {
    let p = two_quadrants();
    assert!(p.is_well_formed(3));
    assert!(!p.is_well_formed(4));

    let mut stray = two_quadrants();
    stray.assignments[2] = QuadrantId(2);
    assert!(!stray.is_well_formed(3));
}
