#![cfg(feature = "dev")]
//! Tests for the least-squares backend.

use approx::assert_relative_eq;

use nns_dep::internals::math::linalg::FloatLinalg;

fn design(x: &[f64], cols: usize) -> Vec<f64> {
    x.iter()
        .flat_map(|&v| (0..cols).map(move |p| v.powi(p as i32)))
        .collect()
}

/// Test exact recovery of a line.
#[test]
fn test_least_squares_line() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|v| 1.0 + 2.0 * v).collect();

    let beta = f64::least_squares(&design(&x, 2), &y, 5, 2).unwrap();
    assert_relative_eq!(beta[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(beta[1], 2.0, epsilon = 1e-10);
}

/// Test the least-squares solution of an overdetermined system.
#[test]
fn test_least_squares_mean() {
    let y = [1.0, 2.0, 6.0];
    let beta = f64::least_squares(&[1.0, 1.0, 1.0], &y, 3, 1).unwrap();
    assert_relative_eq!(beta[0], 3.0, epsilon = 1e-12);
}

/// Test rejection of rank-deficient and malformed designs.
#[test]
fn test_least_squares_rejects() {
    // Duplicated column.
    let d = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    assert!(f64::least_squares(&d, &[1.0, 2.0, 3.0], 3, 2).is_none());

    // More columns than rows.
    assert!(f64::least_squares(&[1.0, 2.0], &[1.0], 1, 2).is_none());

    // All zeros.
    assert!(f64::least_squares(&[0.0; 4], &[1.0, 2.0], 2, 2).is_none());
}

/// Test the f32 backend.
#[test]
fn test_least_squares_f32() {
    let d: Vec<f32> = vec![1.0, 0.0, 1.0, 1.0, 1.0, 2.0];
    let beta = f32::least_squares(&d, &[3.0, 5.0, 7.0], 3, 2).unwrap();
    assert_relative_eq!(beta[0], 3.0, epsilon = 1e-4);
    assert_relative_eq!(beta[1], 2.0, epsilon = 1e-4);
}
