//! Traversal planning over shape/stride metadata.
//!
//! ## Purpose
//!
//! This module computes the arithmetic that lets the sorters walk a
//! (D-1)-dimensional sub-block one scalar at a time without ever evaluating
//! `Σ index·stride` per step: per-call odometer deltas for the data pointer
//! and, in lockstep, for a pointer into a densely packed scratch region.
//!
//! ## Design notes
//!
//! * **Two traversals**: Block *moves* nest the non-axis dimensions in layout
//!   order (smallest absolute stride innermost), which keeps copies and
//!   shifts cache-friendly for any memory layout. Block *comparisons* nest in
//!   logical index order, so the lexicographic result is a pure function of
//!   logical indices and never depends on the layout.
//! * **Odometer deltas**: Advancing one scalar adds `step[l]` for every
//!   nesting level `l` the advance touches (the incremented level plus each
//!   level that wrapped). The closed form is
//!   `step[l] = stride[c_l] - shape[c_{l-1}]·stride[c_{l-1}]`, with
//!   `step[0] = stride[c_0]` for the innermost level.
//! * **Scratch packing**: Scratch buffers are packed row-major in visiting
//!   order - unit stride for the innermost-visited dimension, running shape
//!   products for the others. A move traversal therefore advances the scratch
//!   pointer by exactly one per scalar, while a comparison traversal walks
//!   the packed region through its own delta chain.
//! * **Signature vs. call split**: [`Specialization`] depends only on
//!   `(order, axis, dtype)` and is cacheable process-wide; [`LayoutPlan`]
//!   binds it to one call's shape/strides/offset.
//!
//! ## Invariants
//!
//! * `ptr(i) = offset + i·stride[axis]` addresses the first scalar of the
//!   sub-block at axis index `i`.
//! * A full traversal of either plan visits each of the `block_len` scalars
//!   of a sub-block exactly once.
//!
//! ## Non-goals
//!
//! * This module does not touch elements and cannot fail.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::element::DType;

// ============================================================================
// Specialization
// ============================================================================

/// Traversal resolution for one `(order, axis, dtype)` signature.
///
/// Reused across calls regardless of concrete shape/stride/offset, which are
/// per-call inputs to [`LayoutPlan::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specialization {
    /// Sort axis.
    pub axis: usize,

    /// Element kind of the arrays this specialization serves.
    pub dtype: DType,

    /// Non-axis dimensions in layout order, innermost first.
    pub visit: Vec<usize>,

    /// Non-axis dimensions in logical order, innermost first.
    pub logical: Vec<usize>,
}

impl Specialization {
    /// Resolve the traversal sequences for a layout order and axis.
    pub fn new(order: &[usize], axis: usize, dtype: DType) -> Self {
        let visit: Vec<usize> = order.iter().copied().filter(|&d| d != axis).collect();
        let logical: Vec<usize> = (0..order.len()).rev().filter(|&d| d != axis).collect();

        Self {
            axis,
            dtype,
            visit,
            logical,
        }
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Per-level sizes and odometer deltas for one traversal nesting.
///
/// Level 0 is the innermost dimension. Advancing one scalar increments level
/// 0; each wrap carries into the next level. The pointer adds the step of
/// every touched level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Dimension size per level.
    pub sizes: Vec<usize>,

    /// Data-pointer delta per level.
    pub data_steps: Vec<isize>,

    /// Packed-scratch-pointer delta per level.
    pub scratch_steps: Vec<isize>,
}

impl Traversal {
    /// Build the delta chains for a dimension sequence (innermost first).
    fn build(
        sequence: &[usize],
        shape: &[usize],
        data_strides: &[isize],
        scratch_strides: &[isize],
    ) -> Self {
        let levels = sequence.len();
        let mut sizes = Vec::with_capacity(levels);
        let mut data_steps = Vec::with_capacity(levels);
        let mut scratch_steps = Vec::with_capacity(levels);

        for (l, &d) in sequence.iter().enumerate() {
            sizes.push(shape[d]);
            if l == 0 {
                data_steps.push(data_strides[d]);
                scratch_steps.push(scratch_strides[d]);
            } else {
                let p = sequence[l - 1];
                let carry = shape[p] as isize;
                data_steps.push(data_strides[d] - carry * data_strides[p]);
                scratch_steps.push(scratch_strides[d] - carry * scratch_strides[p]);
            }
        }

        Self {
            sizes,
            data_steps,
            scratch_steps,
        }
    }
}

// ============================================================================
// LayoutPlan
// ============================================================================

/// The pointer arithmetic for one sort call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Displacement of axis index 0.
    pub offset: isize,

    /// Element step along the sort axis.
    pub axis_stride: isize,

    /// Number of sub-blocks along the sort axis.
    pub axis_len: usize,

    /// Scalars per sub-block: `Π shape[d]` over non-axis dimensions.
    pub block_len: usize,

    /// Layout-order traversal used for copies, shifts, swaps, and rotations.
    pub movement: Traversal,

    /// Logical-order traversal used for lexicographic comparison.
    pub comparison: Traversal,
}

impl LayoutPlan {
    /// Bind a specialization to one call's shape, strides, and offset.
    pub fn new(
        spec: &Specialization,
        shape: &[usize],
        strides: &[isize],
        offset: usize,
    ) -> Self {
        // Scratch strides: packed row-major in visiting order.
        let mut scratch_strides = vec![0isize; shape.len()];
        let mut acc = 1isize;
        for &d in &spec.visit {
            scratch_strides[d] = acc;
            acc *= shape[d] as isize;
        }

        let movement = Traversal::build(&spec.visit, shape, strides, &scratch_strides);
        let comparison = Traversal::build(&spec.logical, shape, strides, &scratch_strides);

        let block_len = spec.visit.iter().map(|&d| shape[d]).product();

        Self {
            offset: offset as isize,
            axis_stride: strides[spec.axis],
            axis_len: shape[spec.axis],
            block_len,
            movement,
            comparison,
        }
    }

    /// Address of the first scalar of the sub-block at axis index `i`.
    #[inline]
    pub fn ptr(&self, i: isize) -> isize {
        self.offset + i * self.axis_stride
    }

    /// Nesting depth of a sub-block traversal.
    #[inline]
    pub fn levels(&self) -> usize {
        self.movement.sizes.len()
    }
}
