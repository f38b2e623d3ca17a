//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer assesses the statistical significance of a fitted relationship:
//! - Permutation reference sets for correlation and dependence
//! - One-sided p-values from degree-0 partial moments
//! - Partial-moment quantile intervals
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Permutation significance.
pub mod significance;
