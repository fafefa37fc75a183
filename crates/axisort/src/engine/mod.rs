//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a sort call: it validates the request, resolves a
//! cached specialization for the array's signature, binds the layout plan,
//! checks scratch out of the pool, and dispatches the full axis range to the
//! sorters.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Layout
//!   ↓
//! Layer 1: Primitives
//! ```

/// Process-wide specialization cache.
pub mod cache;

/// Sort execution.
pub mod executor;

/// Validation utilities.
pub mod validator;
