//! Error types for axis sorting.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while constructing a
//! strided view or sorting along an axis: configuration mistakes, metadata
//! inconsistencies, and scratch-allocation failure.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the relevant values (e.g., the axis
//!   requested and the number of dimensions available).
//! * **No recovery**: An `AllocationFailure` is fatal to the current call;
//!   the array may be left partially reordered and the caller must treat the
//!   whole call as failed.
//! * **No-std**: Implements `Display` unconditionally and `std::error::Error`
//!   when the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * Degenerate inputs (empty axes, single elements, sorted or
//!   duplicate-heavy data) are fast paths, never errors.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for axis-sort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSortError {
    /// The requested sort axis is outside `[0, ndim)`.
    InvalidAxis {
        /// The axis requested.
        axis: usize,
        /// Number of dimensions in the array.
        ndim: usize,
    },

    /// The element type has no fixed-width numeric representation.
    UnsupportedElementType {
        /// Kind name of the rejected element type.
        dtype: &'static str,
    },

    /// The scratch allocator could not provide a buffer.
    AllocationFailure {
        /// Number of elements requested.
        elements: usize,
    },

    /// Shape and stride metadata disagree on the number of dimensions.
    MetadataMismatch {
        /// Number of entries in the shape.
        shape_len: usize,
        /// Number of entries in the strides.
        stride_len: usize,
    },

    /// The view reaches outside its backing buffer.
    OutOfBounds {
        /// Number of backing elements the view requires.
        required: usize,
        /// Number of elements actually available.
        len: usize,
    },

    /// An axis permutation is not a permutation of `0..ndim`.
    InvalidPermutation {
        /// Number of dimensions in the array.
        ndim: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AxisSortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidAxis { axis, ndim } => {
                write!(f, "Invalid axis: {axis} (array has {ndim} dimensions)")
            }
            Self::UnsupportedElementType { dtype } => {
                write!(
                    f,
                    "Unsupported element type: {dtype} (only fixed-width numeric elements can be sorted)"
                )
            }
            Self::AllocationFailure { elements } => {
                write!(f, "Scratch allocation failed for {elements} elements")
            }
            Self::MetadataMismatch {
                shape_len,
                stride_len,
            } => {
                write!(
                    f,
                    "Metadata mismatch: shape has {shape_len} dimensions, strides have {stride_len}"
                )
            }
            Self::OutOfBounds { required, len } => {
                write!(
                    f,
                    "View out of bounds: requires {required} backing elements, got {len}"
                )
            }
            Self::InvalidPermutation { ndim } => {
                write!(f, "Invalid permutation of {ndim} axes")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for AxisSortError {}
