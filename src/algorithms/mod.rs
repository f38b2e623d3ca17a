//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core dependence algorithms:
//! - Gravity partitioning of the joint sample space
//! - Polynomial regression with tagged fit outcomes
//! - The copula-style fallback statistic
//! - Per-quadrant local fits under the three framings
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Local fit aggregation.
pub mod aggregation;

/// Fallback dependence statistic.
pub mod copula;

/// Partitioners.
pub mod partition;

/// Polynomial regression.
pub mod regression;
