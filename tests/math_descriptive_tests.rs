#![cfg(feature = "dev")]
//! Tests for descriptive statistics.

use approx::assert_relative_eq;

use nns_dep::internals::math::descriptive::{
    count_distinct, gravity, mean, median, min_max, pearson, sign,
};

/// Test mean and median, including even lengths and empty input.
#[test]
fn test_location() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 10.0]), 4.0);
    assert_relative_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    assert_relative_eq!(median(&[10.0, 1.0, 3.0, 2.0]), 2.5);
    assert_eq!(mean::<f64>(&[]), 0.0);
    assert_eq!(median::<f64>(&[]), 0.0);
}

/// Test gravity as the average of mean and median.
#[test]
fn test_gravity() {
    assert_relative_eq!(gravity(&[1.0, 2.0, 3.0, 10.0]), 3.25);
    assert_relative_eq!(gravity(&[1.0, 2.0, 3.0]), 2.0);
}

/// Test distinct counts with ties.
#[test]
fn test_count_distinct() {
    assert_eq!(count_distinct(&[1.0, 1.0, 2.0, 3.0, 3.0]), 3);
    assert_eq!(count_distinct(&[4.0; 6]), 1);
    assert_eq!(count_distinct::<f64>(&[]), 0);
}

/// Test Pearson correlation and its undefined cases.
#[test]
fn test_pearson() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let up = [2.0, 4.0, 6.0, 8.0, 10.0];
    let down = [5.0, 4.0, 3.0, 2.0, 1.0];

    assert_relative_eq!(pearson(&x, &up).unwrap(), 1.0);
    assert_relative_eq!(pearson(&x, &down).unwrap(), -1.0);
    assert!(pearson(&x, &[3.0; 5]).is_none());
    assert!(pearson(&[1.0], &[2.0]).is_none());
}

/// Test sign with a zero sign for zero.
#[test]
fn test_sign() {
    assert_eq!(sign(0.3), 1.0);
    assert_eq!(sign(-2.0), -1.0);
    assert_eq!(sign(0.0), 0.0);
}

/// Test extremes.
#[test]
fn test_min_max() {
    assert_eq!(min_max(&[3.0, -1.0, 7.0, 2.0]), (-1.0, 7.0));
}
