//! High-level API for axis sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. A sort is a single
//! in-place operation, so the API is two free functions: [`sort`] for the
//! default axis and [`sort_axis`] for a chosen one.
//!
//! ## Design notes
//!
//! * **In-place**: Both functions mutate the view's backing data and return
//!   nothing on success.
//! * **Validated**: An out-of-range axis or non-numeric element type fails
//!   the call before anything is touched.

// Internal dependencies
use crate::engine::executor;
use crate::primitives::element::Element;
use crate::primitives::errors::AxisSortError;
use crate::primitives::view::StridedViewMut;

/// Sort `array` along its first axis, in place.
///
/// Equivalent to [`sort_axis`]`(array, 0)`.
///
/// # Examples
///
/// ```rust
/// use axisort::prelude::*;
///
/// let mut data = [5, 3, 1, 4, 2];
/// let mut view = StridedViewMut::from_slice(&mut data, &[5])?;
/// sort(&mut view)?;
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// # Result::<(), AxisSortError>::Ok(())
/// ```
pub fn sort<T: Element>(array: &mut StridedViewMut<'_, T>) -> Result<(), AxisSortError> {
    executor::execute(array, 0)
}

/// Sort `array` along `axis`, in place.
///
/// The elements being ordered are the (D-1)-dimensional sub-blocks sharing
/// one index along `axis`, compared lexicographically in logical index
/// order.
///
/// # Errors
///
/// * [`AxisSortError::InvalidAxis`] if `axis` is not in `[0, ndim)`.
/// * [`AxisSortError::UnsupportedElementType`] for non-numeric elements.
/// * [`AxisSortError::AllocationFailure`] if scratch cannot be allocated;
///   the axis may be left partially reordered.
pub fn sort_axis<T: Element>(
    array: &mut StridedViewMut<'_, T>,
    axis: usize,
) -> Result<(), AxisSortError> {
    executor::execute(array, axis)
}
