use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nns_dep::prelude::*;
use nns_dep::{BlendStatus, FitSource};

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

fn uniform_pair(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = (0..n).map(|_| rng.random::<f64>()).collect();
    let y = (0..n).map(|_| rng.random::<f64>()).collect();
    (x, y)
}

// ============================================================================
// Bivariate Integration Tests
// ============================================================================

#[test]
fn test_identical_variables() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();

    let result = Dependence::new()
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&x, &x)
        .unwrap();

    assert_relative_eq!(result.correlation, 1.0, epsilon = 1e-6);
    assert_relative_eq!(result.dependence, 1.0, epsilon = 1e-6);
    assert!(!result.has_diagnostics());
}

#[test]
fn test_too_small_to_partition_is_zero() {
    let x = ramp(9);
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();

    let result = Dependence::new()
        .return_diagnostics()
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(result.pair(), (0.0, 0.0));
    assert!(result.diagnostics.is_none());
}

#[test]
fn test_independent_noise() {
    let (x, y) = uniform_pair(100, 42);

    let result = Dependence::new()
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(result.dependence >= 0.0 && result.dependence < 0.5);
    assert!(result.correlation.abs() < 0.5);
}

#[test]
fn test_parabola_is_dependent_but_uncorrelated() {
    let x: Vec<f64> = (-20..=20).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();

    let result = Dependence::new()
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(result.dependence > 0.9);
    assert!(result.correlation.abs() < 0.1);
}

#[test]
fn test_swap_invariant_for_linear() {
    let x = ramp(50);
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    let model = Dependence::new().adapter(Bivariate).build().unwrap();

    let forward = model.fit(&x, &y).unwrap();
    let backward = model.fit(&y, &x).unwrap();

    assert_relative_eq!(forward.dependence, backward.dependence, epsilon = 1e-9);
    assert_relative_eq!(forward.correlation, backward.correlation, epsilon = 1e-9);
    assert_relative_eq!(forward.correlation, 1.0, epsilon = 1e-6);
}

#[test]
fn test_swap_invariant_for_monotone_curve() {
    let x: Vec<f64> = (1..=60).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v * v).collect();
    let model = Dependence::new().adapter(Bivariate).build().unwrap();

    let forward = model.fit(&x, &y).unwrap();
    let backward = model.fit(&y, &x).unwrap();

    assert!(forward.dependence > 0.99);
    assert_relative_eq!(forward.dependence, backward.dependence, epsilon = 0.01);
    assert_relative_eq!(forward.correlation, backward.correlation, epsilon = 0.01);
}

#[test]
fn test_swap_changes_non_monotone_dependence() {
    // x partitions drive the fit, so a many-to-one y explains x poorly.
    let x: Vec<f64> = (0..80).map(|i| -3.0 + 6.0 * i as f64 / 79.0).collect();
    let y: Vec<f64> = x.iter().map(|v| (3.0 * v).sin()).collect();
    let model = Dependence::new().adapter(Bivariate).build().unwrap();

    let forward = model.fit(&x, &y).unwrap();
    let backward = model.fit(&y, &x).unwrap();

    assert!(forward.dependence > 0.6);
    assert!(backward.dependence < 0.3);
}

#[test]
fn test_results_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(2024);
    let shapes: [fn(f64) -> f64; 5] = [
        |v| v,
        |v| v * v,
        |v| (4.0 * v).sin(),
        |v| (-v).exp(),
        |v| (v - 0.5).abs(),
    ];

    for n in [12, 25, 60, 150] {
        for shape in shapes {
            for noise in [0.0, 0.1, 1.0] {
                let x: Vec<f64> = (0..n).map(|_| rng.random::<f64>() * 4.0 - 2.0).collect();
                let y: Vec<f64> = x
                    .iter()
                    .map(|&v| shape(v) + noise * (rng.random::<f64>() - 0.5))
                    .collect();

                for asym in [false, true] {
                    let result = Dependence::new()
                        .asym(asym)
                        .adapter(Bivariate)
                        .build()
                        .unwrap()
                        .fit(&x, &y)
                        .unwrap();
                    assert!((0.0..=1.0).contains(&result.dependence));
                    assert!((-1.0..=1.0).contains(&result.correlation));
                }
            }
        }
    }
}

#[test]
fn test_diagnostics() {
    let x = ramp(40);
    let model = Dependence::new()
        .return_diagnostics()
        .adapter(Bivariate)
        .build()
        .unwrap();

    let result = model.fit(&x, &x).unwrap();
    let diag = result.diagnostics.as_ref().unwrap();

    assert_eq!(diag.min_observations, 10);
    assert_eq!(diag.partition_order, 2);
    assert_eq!(diag.quadrants.len(), 4);
    assert_eq!(diag.quadrants[0].label, "q11");
    assert_eq!(diag.quadrants[3].count, 10);
    assert_relative_eq!(diag.quadrants[1].weight, 0.25);
    assert!(diag
        .quadrants
        .iter()
        .all(|q| q.sources == [FitSource::Regression; 3]));
    assert_eq!(diag.blend, BlendStatus::Fitted(10));
    assert_eq!((diag.distinct_x, diag.distinct_y), (40, 40));
    assert!(diag.voronoi);

    let plain = Dependence::new()
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&x, &x)
        .unwrap();
    assert_eq!(plain.pair(), result.pair());

    let text = format!("{}", result);
    assert!(text.contains("Correlation"));
    assert!(text.contains("q22"));
}

#[test]
fn test_asym_uses_single_framing() {
    let x: Vec<f64> = (-20..=20).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();

    let symmetric = Dependence::new()
        .return_diagnostics()
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let directional = Dependence::new()
        .asym(true)
        .return_diagnostics()
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let s = symmetric.diagnostics.unwrap();
    let d = directional.diagnostics.unwrap();
    assert_relative_eq!(d.pre_blend, d.magnitude.asymmetric_x);
    assert_relative_eq!(s.pre_blend, s.magnitude.max());
    assert_relative_eq!(symmetric.correlation, directional.correlation);
}

#[test]
fn test_invalid_input() {
    let model = Dependence::new().adapter(Bivariate).build().unwrap();

    assert!(matches!(
        model.fit(&[1.0, f64::NAN], &[1.0, 2.0]),
        Err(DependenceError::InvalidNumericValue(_))
    ));
    assert_eq!(
        model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(DependenceError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
    assert_eq!(model.fit(&[], &[]), Err(DependenceError::EmptyInput));
}

// ============================================================================
// Matrix Integration Tests
// ============================================================================

fn columns() -> Vec<Vec<f64>> {
    let a = ramp(40);
    let b: Vec<f64> = a.iter().map(|v| v * v).collect();
    let c: Vec<f64> = a.iter().map(|v| (v * 0.7).cos()).collect();
    vec![a, b, c]
}

#[test]
fn test_matrix_symmetric() {
    let cols = columns();
    let matrix = Dependence::new()
        .adapter(Matrix)
        .build()
        .unwrap()
        .fit(&cols)
        .unwrap();

    assert_eq!(matrix.dim(), 3);
    assert!(!matrix.asym);
    for i in 0..3 {
        assert_eq!(matrix.correlation(i, i), 1.0);
        assert_eq!(matrix.dependence(i, i), 1.0);
        for j in 0..3 {
            assert_eq!(matrix.correlation(i, j), matrix.correlation(j, i));
            assert_eq!(matrix.dependence(i, j), matrix.dependence(j, i));
        }
    }

    let pair = Dependence::new()
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&cols[0], &cols[2])
        .unwrap();
    assert_eq!(matrix.get(0, 2), pair.pair());
    assert_eq!(matrix.correlation_row(1).len(), 3);
}

#[test]
fn test_matrix_asymmetric_orders() {
    let cols = columns();
    let matrix = Dependence::new()
        .asym(true)
        .adapter(Matrix)
        .build()
        .unwrap()
        .fit(&cols)
        .unwrap();
    let model = Dependence::new()
        .asym(true)
        .adapter(Bivariate)
        .build()
        .unwrap();

    assert!(matrix.asym);
    assert_eq!(matrix.dependence(0, 1), model.fit(&cols[0], &cols[1]).unwrap().dependence);
    assert_eq!(matrix.dependence(1, 0), model.fit(&cols[1], &cols[0]).unwrap().dependence);
    assert_eq!(matrix.correlation(1, 0), matrix.correlation(0, 1));
}

#[test]
fn test_matrix_parallel_matches_sequential() {
    let cols = columns();
    let sequential = Dependence::new()
        .parallel(false)
        .adapter(Matrix)
        .build()
        .unwrap();
    let parallel = Dependence::new()
        .parallel(true)
        .adapter(Matrix)
        .build()
        .unwrap();

    assert!(!sequential.is_parallel());
    assert_eq!(sequential.fit(&cols).unwrap(), parallel.fit(&cols).unwrap());
}

#[test]
fn test_matrix_invalid_columns() {
    let model = Dependence::new().adapter(Matrix).build().unwrap();

    assert_eq!(
        model.fit(&[ramp(5)]),
        Err(DependenceError::TooFewColumns { got: 1, min: 2 })
    );
    assert!(matches!(
        model.fit(&[ramp(5), ramp(4)]),
        Err(DependenceError::RaggedColumns { column: 1, .. })
    ));
}

// ============================================================================
// Permutation Integration Tests
// ============================================================================

#[test]
fn test_permutation_strong_relationship() {
    let x = ramp(60);
    let result = Dependence::new()
        .seed(11)
        .permutations(30)
        .adapter(Permutation)
        .build()
        .unwrap()
        .fit(&x, &x)
        .unwrap();

    assert_eq!(result.reference.len(), 32);
    assert_relative_eq!(result.correlation.estimate, 1.0, epsilon = 1e-6);
    assert!(result.correlation.p_value < 0.05);
    assert!(result.dependence.p_value < 0.05);
    assert!(result.correlation.lower <= result.correlation.upper);
}

#[test]
fn test_permutation_reproducible() {
    let (x, y) = uniform_pair(60, 3);
    let model = Dependence::new()
        .seed(5)
        .permutations(20)
        .adapter(Permutation)
        .build()
        .unwrap();

    let first = model.fit(&x, &y).unwrap();
    let second = model.fit(&x, &y).unwrap();
    assert_eq!(first, second);

    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(first, model.fit_with_rng(&x, &y, &mut rng).unwrap());

    for p in [first.correlation.p_value, first.dependence.p_value] {
        assert!((0.0..=1.0).contains(&p));
    }
}

#[test]
fn test_permutation_defaults() {
    let (x, y) = uniform_pair(60, 17);
    let result = Dependence::new()
        .adapter(Permutation)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(result.reference.len(), 101);
    assert_eq!(result.reference.null_correlations().len(), 99);
    for metric in [&result.correlation, &result.dependence] {
        assert!(metric.p_value >= 0.0 && metric.p_value <= 0.5);
        assert!(metric.lower <= metric.upper);
    }
}

#[test]
fn test_permutation_p_values_are_one_sided() {
    for seed in 0..10 {
        let (x, y) = uniform_pair(40, 100 + seed);
        let result = Dependence::new()
            .seed(seed)
            .permutations(40)
            .adapter(Permutation)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();

        assert!(result.correlation.p_value <= 0.5);
        assert!(result.dependence.p_value <= 0.5);
    }
}

#[test]
fn test_permutation_rejects_invalid_input() {
    let model = Dependence::new()
        .permutations(5)
        .adapter(Permutation)
        .build()
        .unwrap();

    assert!(matches!(
        model.fit(&[1.0, f64::INFINITY], &[1.0, 2.0]),
        Err(DependenceError::InvalidNumericValue(_))
    ));
}
