//! # NNS Dependence: Nonlinear Correlation and Dependence for Rust
//!
//! Partition-based estimation of nonlinear correlation and dependence between
//! two variables, with permutation significance testing and pairwise
//! matrices for many variables.
//!
//! ## What is NNS dependence?
//!
//! Linear correlation summarizes a relationship with a single slope. Many
//! relationships are monotone but curved, or not monotone at all
//! (`y = x^2` on a symmetric domain has zero Pearson correlation and perfect
//! dependence). This crate partitions the joint sample space into quadrants
//! of comparable population, fits a degree-adaptive polynomial inside each
//! quadrant, and aggregates the signed goodness-of-fit across quadrants.
//!
//! **Two numbers come out:**
//! - **Correlation** in `[-1, 1]`: the typical signed direction of the local
//!   relationships.
//! - **Dependence** in `[0, 1]`: how much of `y` (or `|y|`) is explained
//!   locally by `x`, regardless of direction.
//!
//! **How it works:**
//!
//! 1. Split the sample on `x` at the quadrant "gravity" (average of mean and
//!    median) until quadrants would fall below `max(10, n / 5)` observations
//! 2. In each quadrant fit `y ~ x`, `|y| ~ x` and `|x| ~ y` and take
//!    `sign(r) * R^2`; failed fits fall back to a co-partial-moment statistic
//! 3. Weight quadrants by population share and combine the three framings
//! 4. Blend the dependence with a whole-sample polynomial fit when both
//!    variables are continuous
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use nns_dep::prelude::*;
//!
//! let x: Vec<f64> = (1..=10).map(f64::from).collect();
//! let y = x.clone();
//!
//! let model = Dependence::new().adapter(Bivariate).build()?;
//! let result = model.fit(&x, &y)?;
//!
//! assert!((result.correlation - 1.0).abs() < 1e-6);
//! assert!((result.dependence - 1.0).abs() < 1e-6);
//! println!("{}", result);
//! # Result::<(), DependenceError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Correlation: 1.000000
//!   Dependence:  1.000000
//! ```
//!
//! ### Significance
//!
//! ```rust
//! use nns_dep::prelude::*;
//!
//! let x: Vec<f64> = (0..60).map(|i| i as f64 / 6.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
//!
//! let model = Dependence::new()
//!     .seed(42)                      // Reproducible permutations
//!     .permutations(99)              // Null replicates
//!     .interval_probability(0.025)   // 95% intervals
//!     .adapter(Permutation)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert!(result.dependence.p_value >= 0.0 && result.dependence.p_value <= 1.0);
//! println!("{}", result);
//! # Result::<(), DependenceError>::Ok(())
//! ```
//!
//! ### Matrix
//!
//! ```rust
//! use nns_dep::prelude::*;
//!
//! let a: Vec<f64> = (0..40).map(|i| i as f64).collect();
//! let b: Vec<f64> = a.iter().map(|v| v * v).collect();
//! let c: Vec<f64> = a.iter().map(|v| (v * 0.7).cos()).collect();
//!
//! let model = Dependence::new().adapter(Matrix).build()?;
//! let matrix = model.fit(&[a, b, c])?;
//!
//! assert_eq!(matrix.dim(), 3);
//! assert_eq!(matrix.correlation(0, 1), matrix.correlation(1, 0));
//! assert_eq!(matrix.dependence(2, 2), 1.0);
//! # Result::<(), DependenceError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every `fit` returns a `Result<_, DependenceError>`. Only input and
//! configuration problems are errors:
//!
//! - Missing (NaN) or infinite values: `InvalidNumericValue`
//! - Empty or mismatched inputs: `EmptyInput`, `MismatchedInputs`
//! - Fewer than two or ragged columns: `TooFewColumns`, `RaggedColumns`
//! - Out-of-range parameters: `InvalidProbability`, `InvalidPermutations`
//! - A builder parameter set twice: `DuplicateParameter`
//!
//! Fitting irregularities never surface. Samples too small to partition
//! return exactly `(0, 0)`; singular or constant quadrants fall back to the
//! copula statistic; a failed whole-sample blend reuses the pre-blend value.
//!
//! ## Builder
//!
//! | Parameter                 | Default | Adapters              |
//! |---------------------------|---------|-----------------------|
//! | `asym(bool)`              | `false` | all                   |
//! | `return_diagnostics()`    | off     | Bivariate             |
//! | `seed(u64)`               | fixed   | Permutation           |
//! | `permutations(usize)`     | 99      | Permutation           |
//! | `interval_probability(T)` | 0.025   | Permutation           |
//! | `parallel(bool)`          | feature | Matrix, Permutation   |
//! | `partitioner(Arc<_>)`     | gravity | all                   |
//! | `copula(Arc<_>)`          | moments | all                   |
//!
//! Setting any parameter twice is rejected at `build()`.
//!
//! ### Asymmetric dependence
//!
//! By default the dependence is the strongest of the three framings, so
//! swapping `x` and `y` of a monotone relationship leaves it unchanged. With
//! `.asym(true)` only `|y| ~ x` is used, and `dep(x, y)` may differ from
//! `dep(y, x)`.
//!
//! Partitioning always splits on `x`, so even the symmetric dependence is
//! directional for non-monotone relationships: `y = sin(3x)` is strongly
//! dependent on `x`, while `x` is barely explained by `y`.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to build without `std`; `alloc` is required.
//!
//! ```toml
//! [dependencies]
//! nns-dep = { version = "0.1", default-features = false }
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library support.
//! - `parallel`: evaluate permutation replicates and matrix pairs with rayon.
//! - `serde`: derive `Serialize`/`Deserialize` on result types.
//! - `dev`: expose internal modules for testing.
//!
//! ## References
//!
//! - Viole, F. & Nawrocki, D. (2013). "Nonlinear Nonparametric Statistics: Using Partial Moments"
//! - Viole, F. (2016). "Beyond Correlation: Using the Elements of Variance for Conditional Means and Probabilities"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures.
//
// Contains the error type, partition output and configuration, and the
// immutable per-quadrant records.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains least squares via nalgebra, partial and co-partial moments, and
// descriptive statistics.
mod math;

// Layer 3: Algorithms - core dependence algorithms.
//
// Contains the gravity partitioner, the copula fallback statistic,
// polynomial regression, and the local fit aggregator.
mod algorithms;

// Layer 4: Evaluation - significance.
//
// Contains the permutation reference set, p-values and intervals.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the bivariate pipeline, framing combination and
// result assembly.
mod engine;

// Layer 6: Adapters - execution mode adapters.
//
// Contains execution adapters for different use cases:
// bivariate (standard), matrix (many columns), permutation (p-values).
mod adapters;

// High-level fluent API.
//
// Provides the `Dependence` builder for configuring and running estimators.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use nns_dep::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Bivariate, Matrix, Permutation},
        CopulaStatistic, DependenceBuilder as Dependence, DependenceError, DependenceMatrix,
        DependenceResult, GravityPartitioner, PartialMomentCopula, Partitioner,
        SignificanceResult,
    };
}

pub use api::*;

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
