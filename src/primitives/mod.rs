//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures shared by every other layer:
//! - The crate error type
//! - Partition output and configuration
//! - Immutable per-quadrant records
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type.
pub mod errors;

/// Partition output and partitioner configuration.
pub mod partition;

/// Per-quadrant records.
pub mod quadrant;
