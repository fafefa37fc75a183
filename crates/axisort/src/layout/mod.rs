//! Layer 2: Layout
//!
//! # Purpose
//!
//! This layer turns shape/stride metadata into the pointer arithmetic the
//! sorters run on: resolved traversal sequences per `(order, axis)` signature
//! and carry-aware per-level deltas per call. Pure arithmetic; no error
//! conditions and no element access.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Layout ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Traversal planning for sub-block moves and comparisons.
pub mod planner;
