//! Process-wide specialization cache.
//!
//! ## Purpose
//!
//! Resolving a traversal specialization is a pure function of the
//! `(order, axis, dtype)` signature. This module memoizes the resolution so
//! repeated sorts of same-shaped arrays skip it; shape, strides, and offset
//! stay per-call inputs and are never baked into a cached entry.
//!
//! ## Design notes
//!
//! * **Structured key**: [`SortSignature`] replaces the string key a dynamic
//!   runtime would use; the hash map lives behind a `OnceLock<Mutex<..>>`.
//! * **Monomorphization split**: The compiler already specializes the sort
//!   routines per element type; the cache carries the per-`(order, axis)`
//!   traversal resolution, with the dtype kept in the key so signatures stay
//!   distinct per element kind.
//! * **No-std**: Without `std` there is no process-wide state; each call
//!   resolves its specialization directly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::sync::{Arc, Mutex, OnceLock};
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::layout::planner::Specialization;
#[cfg(feature = "std")]
use crate::primitives::element::DType;
use crate::primitives::element::Element;

// ============================================================================
// SortSignature
// ============================================================================

/// Cache key: everything a specialization depends on.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortSignature {
    /// Memory-layout permutation of the array's dimensions.
    pub order: Vec<usize>,

    /// Sort axis.
    pub axis: usize,

    /// Element kind.
    pub dtype: DType,
}

// ============================================================================
// Resolution
// ============================================================================

#[cfg(feature = "std")]
fn cache() -> &'static Mutex<HashMap<SortSignature, Arc<Specialization>>> {
    static CACHE: OnceLock<Mutex<HashMap<SortSignature, Arc<Specialization>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Resolve the specialization for an array signature, reusing a cached entry
/// when one exists.
#[cfg(feature = "std")]
pub fn resolve<T: Element>(order: &[usize], axis: usize) -> Arc<Specialization> {
    let signature = SortSignature {
        order: order.to_vec(),
        axis,
        dtype: T::DTYPE,
    };

    let mut entries = cache().lock().unwrap_or_else(|e| e.into_inner());
    let entry = entries
        .entry(signature)
        .or_insert_with(|| Arc::new(Specialization::new(order, axis, T::DTYPE)));
    Arc::clone(entry)
}

/// Resolve the specialization for an array signature.
#[cfg(not(feature = "std"))]
pub fn resolve<T: Element>(order: &[usize], axis: usize) -> Arc<Specialization> {
    Arc::new(Specialization::new(order, axis, T::DTYPE))
}
