//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution modes exposed through the builder:
//! - Bivariate: one pair of variables
//! - Matrix: every pair of a set of columns
//! - Permutation: one pair with p-values and intervals
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-pair adapter.
pub mod bivariate;

/// Pairwise matrix adapter.
pub mod matrix;

/// Permutation significance adapter.
pub mod permutation;
