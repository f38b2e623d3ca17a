#![cfg(feature = "dev")]
//! Tests for framing combination and the whole-sample blend.

use approx::assert_relative_eq;

use nns_dep::internals::algorithms::aggregation::{FitSource, Framing, QuadrantFit};
use nns_dep::internals::engine::combiner::{BlendStatus, DependenceCombiner, FramingAggregates};
use nns_dep::internals::primitives::partition::QuadrantId;

fn table(values: [f64; 2]) -> Vec<QuadrantFit<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(q, &value)| QuadrantFit {
            quadrant: QuadrantId(q),
            weight: 0.5,
            value,
            source: FitSource::Regression,
        })
        .collect()
}

fn tables() -> [Vec<QuadrantFit<f64>>; 3] {
    [table([0.8, -0.4]), table([0.6, 0.2]), table([0.3, 0.3])]
}

/// Two-valued regressor so the blend is skipped.
fn coarse_sample() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..16).map(|i| (i % 2) as f64).collect();
    let y: Vec<f64> = (0..16).map(|i| i as f64).collect();
    (x, y)
}

/// Test the weighted sums.
#[test]
fn test_weighted_sums() {
    let t = table([0.8, -0.4]);
    assert_relative_eq!(DependenceCombiner::weighted_sum(&t), 0.2);
    assert_relative_eq!(DependenceCombiner::weighted_abs_sum(&t), 0.6);
}

/// Test the framing accessors.
#[test]
fn test_framing_aggregates() {
    let agg = FramingAggregates {
        symmetric: 0.2,
        asymmetric_x: 0.4,
        asymmetric_y: 0.3,
    };
    assert_relative_eq!(agg.mean(), 0.3);
    assert_relative_eq!(agg.max(), 0.4);
    assert_eq!(agg.get(Framing::AsymmetricY), 0.3);
}

/// Test symmetric combination without a blend.
#[test]
fn test_combine_symmetric() {
    let (x, y) = coarse_sample();
    let c = DependenceCombiner::new(false).combine(&tables(), &x, &y, 2, 16);

    assert_relative_eq!(c.correlation, 0.3);
    assert_relative_eq!(c.magnitude.symmetric, 0.6);
    assert_relative_eq!(c.pre_blend, 0.6);
    assert_eq!(c.blend, BlendStatus::Skipped);
    assert_relative_eq!(c.poly_base, c.pre_blend);
    assert_relative_eq!(c.dependence, 0.6);
}

/// Test that directional combination uses `|y| ~ x` only.
#[test]
fn test_combine_asymmetric() {
    let (x, y) = coarse_sample();
    let c = DependenceCombiner::new(true).combine(&tables(), &x, &y, 2, 16);

    assert_relative_eq!(c.pre_blend, 0.4);
    assert_relative_eq!(c.dependence, 0.4);
    assert_relative_eq!(c.correlation, 0.3);
}

/// Test the whole-sample blend fit.
#[test]
fn test_global_fit() {
    let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let (r2, degree) = DependenceCombiner::global_fit(&x, &x, 20, 20).unwrap();
    assert_eq!(degree, 10);
    assert_relative_eq!(r2, 1.0, epsilon = 1e-8);

    let (cx, cy) = coarse_sample();
    assert_eq!(
        DependenceCombiner::global_fit(&cx, &cy, 2, 16),
        Err(BlendStatus::Skipped)
    );
}

/// Test the blend weighting of three parts local to one part global.
#[test]
fn test_blend_weighting() {
    let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let c = DependenceCombiner::new(false).combine(&tables(), &x, &x, 20, 20);

    assert!(matches!(c.blend, BlendStatus::Fitted(10)));
    assert_relative_eq!(c.dependence, (3.0 * 0.6 + c.poly_base) / 4.0);
    assert_relative_eq!(c.dependence, 0.7, epsilon = 1e-8);
}
