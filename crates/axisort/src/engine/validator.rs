//! Input validation for sort requests.
//!
//! ## Purpose
//!
//! This module checks a sort request before any work happens: the axis must
//! address an existing dimension and the element type must be a fixed-width
//! numeric kind. View metadata consistency is validated earlier, by the view
//! constructors.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Configuration errors only**: Degenerate but well-formed inputs (empty
//!   axes, single elements) are the executor's fast paths, not errors.
//!
//! ## Non-goals
//!
//! * This module does not sort, plan, or allocate.

// Internal dependencies
use crate::primitives::element::{DType, Element};
use crate::primitives::errors::AxisSortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort requests.
///
/// All methods return `Result<(), AxisSortError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that the sort axis addresses an existing dimension.
    pub fn validate_axis(axis: usize, ndim: usize) -> Result<(), AxisSortError> {
        if axis >= ndim {
            return Err(AxisSortError::InvalidAxis { axis, ndim });
        }
        Ok(())
    }

    /// Validate that the element type is a sortable numeric kind.
    ///
    /// Generic elements are rejected here, never silently accepted.
    pub fn validate_element<T: Element>() -> Result<(), AxisSortError> {
        if T::DTYPE == DType::Generic {
            return Err(AxisSortError::UnsupportedElementType {
                dtype: T::DTYPE.name(),
            });
        }
        Ok(())
    }
}
