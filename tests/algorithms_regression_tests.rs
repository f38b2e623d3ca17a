#![cfg(feature = "dev")]
//! Tests for polynomial regression and degree policies.
//!
//! ## Test Organization
//!
//! 1. **Degree Policies** - Local and global degrees
//! 2. **Polynomial Fit** - Goodness of fit and prediction
//! 3. **Failures** - Tagged failure reasons

use approx::assert_relative_eq;

use nns_dep::internals::algorithms::regression::{
    global_degree, local_degree, FitFailure, FitOutcome, PolynomialFit, MAX_DEGREE,
};

// ============================================================================
// Degree Policy Tests
// ============================================================================

/// Test the local degree from the quadrant size.
#[test]
fn test_local_degree() {
    assert_eq!(local_degree(0), 1);
    assert_eq!(local_degree(8), 1);
    assert_eq!(local_degree(9), 2);
    assert_eq!(local_degree(25), 4);
    assert_eq!(local_degree(99), 8);
    assert_eq!(local_degree(100), 9);
    assert_eq!(local_degree(121), MAX_DEGREE);
    assert_eq!(local_degree(1_000_000), MAX_DEGREE);
}

/// Test the global degree from the distinct-value counts.
#[test]
fn test_global_degree() {
    assert_eq!(global_degree(10, 10), 9);
    assert_eq!(global_degree(100, 50), 10);
    assert_eq!(global_degree(1, 5), 1);
    assert_eq!(global_degree(3, 20), 2);
}

// ============================================================================
// Polynomial Fit Tests
// ============================================================================

/// Test an exact line.
#[test]
fn test_exact_line() {
    let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 3.0 - 0.5 * v).collect();

    let fit = PolynomialFit::fit(&x, &y, 1).unwrap();
    assert_eq!(fit.degree, 1);
    assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-10);
    assert_relative_eq!(fit.predict(20.0), -7.0, epsilon = 1e-9);
}

/// Test a parabola that a line cannot explain.
#[test]
fn test_parabola() {
    let x: Vec<f64> = (-3..=3).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();

    let linear = PolynomialFit::fit(&x, &y, 1).unwrap();
    assert_relative_eq!(linear.r_squared, 0.0, epsilon = 1e-10);

    let quadratic = PolynomialFit::fit(&x, &y, 2).unwrap();
    assert_relative_eq!(quadratic.r_squared, 1.0, epsilon = 1e-10);
    assert_relative_eq!(quadratic.predict(4.0), 16.0, epsilon = 1e-8);
    assert_eq!(quadratic.coefficients.len(), 3);
}

/// Test that the degree is capped by the number of distinct regressor values.
#[test]
fn test_degree_capped_by_distinct_values() {
    let x = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
    let y = [0.1, -0.1, 1.1, 0.9, 4.2, 3.8];

    let fit = PolynomialFit::fit(&x, &y, 5).unwrap();
    assert_eq!(fit.degree, 2);
    assert!(fit.r_squared > 0.95 && fit.r_squared <= 1.0);
}

/// Test that R^2 stays in the unit interval for noise.
#[test]
fn test_r_squared_bounds() {
    let x: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..30).map(|i| ((i * 7919) % 13) as f64).collect();

    let fit = PolynomialFit::fit(&x, &y, 4).unwrap();
    assert!((0.0..=1.0).contains(&fit.r_squared));
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Test the tagged failure reasons.
#[test]
fn test_failures() {
    assert_eq!(
        PolynomialFit::fit(&[1.0], &[2.0], 1).unwrap_err(),
        FitFailure::TooFewObservations { got: 1, min: 2 }
    );
    assert_eq!(
        PolynomialFit::fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0], 1).unwrap_err(),
        FitFailure::ConstantRegressor
    );
    assert_eq!(
        PolynomialFit::fit(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0], 1).unwrap_err(),
        FitFailure::ConstantResponse
    );
}

/// Test the fit outcome accessors.
#[test]
fn test_fit_outcome() {
    let fitted = FitOutcome::Fitted(0.5);
    let failed: FitOutcome<f64> = FitOutcome::FallbackRequired(FitFailure::SingularDesign);

    assert_eq!(fitted.value(), Some(0.5));
    assert!(!fitted.requires_fallback());
    assert_eq!(failed.value(), None);
    assert!(failed.requires_fallback());
}
