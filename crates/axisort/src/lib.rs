//! # axisort - axis-wise in-place sorting for strided multi-dimensional arrays
//!
//! `axisort` orders the elements of a dense, arbitrarily strided,
//! multi-dimensional numeric array along one chosen axis, in place. An
//! "element" along that axis is the whole (D-1)-dimensional sub-block sharing
//! one axis index; sub-blocks are compared lexicographically, scalar by
//! scalar, and moved as a unit.
//!
//! The engine is a hybrid dual-pivot quicksort with an insertion-sort base
//! case, generalized to arbitrary dimensionality, arbitrary (including
//! negative) strides, and a memory-layout-driven traversal order for block
//! moves. Sub-block moves go through a bounded, pooled scratch buffer, and
//! the traversal resolution for a `(dimension order, axis, element type)`
//! signature is cached so repeated sorts of same-shaped arrays skip the setup
//! cost.
//!
//! ## Quick Start
//!
//! ### Sorting a 1-D array
//!
//! ```rust
//! use axisort::prelude::*;
//!
//! let mut data = [5.0_f64, 3.0, 1.0, 4.0, 2.0];
//! let mut view = StridedViewMut::from_slice(&mut data, &[5])?;
//!
//! sort(&mut view)?;
//!
//! assert_eq!(data, [1.0, 2.0, 3.0, 4.0, 5.0]);
//! # Result::<(), AxisSortError>::Ok(())
//! ```
//!
//! ### Sorting rows of a 2-D array
//!
//! Rows are compared lexicographically: the first differing scalar decides.
//!
//! ```rust
//! use axisort::prelude::*;
//!
//! // [[2, 1],
//! //  [1, 9],
//! //  [1, 2]]
//! let mut data = [2, 1, 1, 9, 1, 2];
//! let mut view = StridedViewMut::from_slice(&mut data, &[3, 2])?;
//!
//! sort(&mut view)?;
//!
//! // [[1, 2],
//! //  [1, 9],
//! //  [2, 1]]
//! assert_eq!(data, [1, 2, 1, 9, 2, 1]);
//! # Result::<(), AxisSortError>::Ok(())
//! ```
//!
//! ### Sorting along a chosen axis
//!
//! ```rust
//! use axisort::prelude::*;
//!
//! // [[3, 1, 2],
//! //  [9, 8, 7]]
//! let mut data = [3, 1, 2, 9, 8, 7];
//! let mut view = StridedViewMut::from_slice(&mut data, &[2, 3])?;
//!
//! // Along axis 1 the elements are columns, compared top-down.
//! sort_axis(&mut view, 1)?;
//!
//! assert_eq!(data, [1, 2, 3, 8, 7, 9]);
//! # Result::<(), AxisSortError>::Ok(())
//! ```
//!
//! ### Views
//!
//! Sorting acts on the view, not on the backing memory layout: a
//! reversed-stride or transposed view sorts the data *as seen through that
//! view*.
//!
//! ```rust
//! use axisort::prelude::*;
//!
//! let mut data = [3, 1, 2];
//! let mut view = StridedViewMut::from_slice(&mut data, &[3])?;
//! view.reverse_axis(0)?;
//!
//! sort(&mut view)?;
//!
//! // The reversed view reads [1, 2, 3]; the backing slice is its mirror.
//! assert_eq!(view.get(&[0]), Some(1));
//! assert_eq!(view.get(&[2]), Some(3));
//! assert_eq!(data, [3, 2, 1]);
//! # Result::<(), AxisSortError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! `sort` and `sort_axis` return `Result<(), AxisSortError>`. An out-of-range
//! axis, a non-numeric element type, or scratch-allocation exhaustion fail
//! the call; degenerate inputs (empty axes, single elements, already-sorted
//! or duplicate-heavy data) are fast paths, not errors.
//!
//! ## Minimal usage (no_std)
//!
//! The crate supports `no_std` environments with an allocator. Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! axisort = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, the process-wide specialization cache and scratch pool are
//! unavailable; each call resolves its traversal and allocates scratch
//! directly.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - element kinds, errors, the strided view, scratch.
mod primitives;

// Layer 2: Layout - traversal planning over shape/stride metadata.
mod layout;

// Layer 3: Algorithms - block primitives and the two sorters.
mod algorithms;

// Layer 4: Engine - validation, specialization cache, execution.
mod engine;

// High-level entry points.
mod api;

// Standard axisort prelude.
pub mod prelude {
    pub use crate::api::{sort, sort_axis};
    pub use crate::primitives::element::{DType, Element};
    pub use crate::primitives::errors::AxisSortError;
    pub use crate::primitives::view::StridedViewMut;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod layout {
        pub use crate::layout::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
