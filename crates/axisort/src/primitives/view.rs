//! Mutable strided views over dense numeric buffers.
//!
//! ## Purpose
//!
//! This module provides [`StridedViewMut`], the array abstraction the sorting
//! engine operates on: a borrowed backing slice plus shape, per-dimension
//! signed strides, a base offset, and the memory-layout permutation derived
//! from the strides.
//!
//! ## Design notes
//!
//! * **Borrowed backing**: The view never owns element storage; `&mut`
//!   exclusivity is what guarantees no concurrent mutation during a sort.
//! * **Signed strides**: Negative strides express reversed views; the base
//!   offset always addresses the element at logical index `[0, 0, ..]`.
//! * **Validated construction**: Metadata consistency and reachability bounds
//!   are checked up front, so the hot loops can index without surprises.
//! * **Layout order**: `order` lists dimensions by ascending absolute stride
//!   (fastest-varying first). It only steers traversal nesting; it never
//!   affects comparison results.
//!
//! ## Invariants
//!
//! * `shape.len() == stride.len() == order.len()`.
//! * Every logical index maps to an in-bounds backing element (checked at
//!   construction; preserved by `permute_axes` and `reverse_axis`).
//! * Zero-size dimensions are permitted; such views have no elements.
//!
//! ## Non-goals
//!
//! * This module does not sort, compare, or plan traversals.
//! * No slicing, broadcasting, or element-type conversion.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::errors::AxisSortError;

// ============================================================================
// StridedViewMut
// ============================================================================

/// A mutable view of a dense multi-dimensional array with arbitrary strides.
#[derive(Debug)]
pub struct StridedViewMut<'a, T: Element> {
    /// Backing element storage (shared with the caller, never owned).
    data: &'a mut [T],

    /// Size of each dimension.
    shape: Vec<usize>,

    /// Signed element step of each dimension.
    stride: Vec<isize>,

    /// Displacement of logical index `[0, 0, ..]` into the backing slice.
    offset: usize,

    /// Dimensions sorted by ascending absolute stride (fastest first).
    order: Vec<usize>,
}

impl<'a, T: Element> StridedViewMut<'a, T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a view with explicit shape, strides, and base offset.
    pub fn new(
        data: &'a mut [T],
        shape: &[usize],
        stride: &[isize],
        offset: usize,
    ) -> Result<Self, AxisSortError> {
        if shape.len() != stride.len() {
            return Err(AxisSortError::MetadataMismatch {
                shape_len: shape.len(),
                stride_len: stride.len(),
            });
        }
        validate_bounds(data.len(), shape, stride, offset)?;

        Ok(Self {
            data,
            shape: shape.to_vec(),
            stride: stride.to_vec(),
            offset,
            order: compute_order(stride),
        })
    }

    /// Create a row-major view covering `data` exactly.
    pub fn from_slice(data: &'a mut [T], shape: &[usize]) -> Result<Self, AxisSortError> {
        let required = shape
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or(AxisSortError::OutOfBounds {
                required: usize::MAX,
                len: data.len(),
            })?;
        if required != data.len() {
            return Err(AxisSortError::OutOfBounds {
                required,
                len: data.len(),
            });
        }

        // Row-major strides: the last dimension is contiguous.
        let mut stride = vec![0isize; shape.len()];
        let mut acc = 1isize;
        for d in (0..shape.len()).rev() {
            stride[d] = acc;
            acc *= shape[d] as isize;
        }

        Self::new(data, shape, &stride, 0)
    }

    // ========================================================================
    // Metadata Accessors
    // ========================================================================

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Size of each dimension.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Signed element step of each dimension.
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.stride
    }

    /// Displacement of logical index `[0, 0, ..]`.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Dimensions sorted by ascending absolute stride.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Read-only access to the backing slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        self.data
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Read the element at a logical multi-index.
    pub fn get(&self, index: &[usize]) -> Option<T> {
        let linear = self.linear_index(index)?;
        self.data.get(linear).copied()
    }

    /// Write the element at a logical multi-index.
    pub fn set(&mut self, index: &[usize], value: T) -> Option<()> {
        let linear = self.linear_index(index)?;
        let slot = self.data.get_mut(linear)?;
        *slot = value;
        Some(())
    }

    fn linear_index(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut ptr = self.offset as isize;
        for (d, &i) in index.iter().enumerate() {
            if i >= self.shape[d] {
                return None;
            }
            ptr += i as isize * self.stride[d];
        }
        usize::try_from(ptr).ok()
    }

    // ========================================================================
    // View Transforms
    // ========================================================================

    /// Reorder the dimensions: new dimension `d` is old dimension `perm[d]`.
    pub fn permute_axes(&mut self, perm: &[usize]) -> Result<(), AxisSortError> {
        let ndim = self.shape.len();
        if perm.len() != ndim {
            return Err(AxisSortError::InvalidPermutation { ndim });
        }
        let mut seen = vec![false; ndim];
        for &p in perm {
            if p >= ndim || seen[p] {
                return Err(AxisSortError::InvalidPermutation { ndim });
            }
            seen[p] = true;
        }

        self.shape = perm.iter().map(|&p| self.shape[p]).collect();
        self.stride = perm.iter().map(|&p| self.stride[p]).collect();
        self.order = compute_order(&self.stride);
        Ok(())
    }

    /// Flip one dimension: logical index `i` becomes `shape[axis] - 1 - i`.
    pub fn reverse_axis(&mut self, axis: usize) -> Result<(), AxisSortError> {
        let ndim = self.shape.len();
        if axis >= ndim {
            return Err(AxisSortError::InvalidAxis { axis, ndim });
        }

        // Rebase onto the last element of the flipped dimension.
        if self.shape[axis] > 0 {
            let span = (self.shape[axis] - 1) as isize * self.stride[axis];
            self.offset = (self.offset as isize + span) as usize;
        }
        self.stride[axis] = -self.stride[axis];
        Ok(())
    }
}

// ============================================================================
// Metadata Helpers
// ============================================================================

/// Dimensions sorted by ascending absolute stride, ties in index order.
fn compute_order(stride: &[isize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..stride.len()).collect();
    order.sort_by_key(|&d| stride[d].unsigned_abs());
    order
}

/// Check that every reachable linear index lands inside the backing slice.
fn validate_bounds(
    len: usize,
    shape: &[usize],
    stride: &[isize],
    offset: usize,
) -> Result<(), AxisSortError> {
    // A zero-size dimension makes the view empty; nothing is reachable.
    if shape.iter().any(|&n| n == 0) {
        return Ok(());
    }

    let mut lo = offset as isize;
    let mut hi = offset as isize;
    for (&n, &s) in shape.iter().zip(stride.iter()) {
        let span = (n - 1) as isize * s;
        if span >= 0 {
            hi += span;
        } else {
            lo += span;
        }
    }

    if lo < 0 || hi as usize >= len {
        let required = if lo < 0 {
            (hi - lo + 1) as usize
        } else {
            hi as usize + 1
        };
        return Err(AxisSortError::OutOfBounds { required, len });
    }
    Ok(())
}
