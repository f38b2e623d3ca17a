//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the bivariate pipeline:
//! - Input and parameter validation
//! - Partition, local fits and framing combination
//! - Result and diagnostics types
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Framing combination and global blend.
pub mod combiner;

/// Bivariate pipeline executor.
pub mod executor;

/// Result types.
pub mod output;

/// Input validation.
pub mod validator;
