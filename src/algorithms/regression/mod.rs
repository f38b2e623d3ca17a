//! Regression Module
//!
//! ## Purpose
//!
//! This module provides the polynomial least-squares fit used by the local
//! and global dependence fits, together with its tagged result types and
//! degree-selection policies.
//!
//! ## Features
//!
//! - Ordinary polynomial regression up to degree 10 with R^2 extraction.
//! - Explicit `FitOutcome` / `FitFailure` values instead of error propagation.
//! - Data-driven degree selection for quadrant and whole-sample fits.

/// Polynomial Fit
mod polynomial;

/// Regression Types
mod types;

/// Re-exports
pub use polynomial::PolynomialFit;
pub use types::{global_degree, local_degree, FitFailure, FitOutcome, MAX_DEGREE};
