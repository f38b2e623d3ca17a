//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Least-squares solves via nalgebra
//! - Partial and co-partial moments with quantile inversion
//! - Descriptive statistics (mean, median, gravity, Pearson correlation)
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Descriptive statistics.
pub mod descriptive;

/// Linear algebra backend.
pub mod linalg;

/// Partial moments and value-at-risk inversion.
pub mod moments;
