//! Sort execution.
//!
//! ## Purpose
//!
//! This module runs one sort call end to end: validation, specialization
//! resolution, layout planning, scratch checkout, and range dispatch. It is
//! the only place the layers meet.
//!
//! ## Design notes
//!
//! * **Fast paths first**: An axis shorter than two sub-blocks, or a view
//!   with a zero-size dimension, returns before any allocation.
//! * **One top-level scratch**: The insertion scratch is acquired once per
//!   call and threaded through the recursion; the quicksorter acquires its
//!   two pivot buffers per partition step on its own.
//! * **Atomicity caveat**: An allocation failure mid-recursion aborts the
//!   call and may leave the axis partially reordered; the scratch guards
//!   still release on that path.
//!
//! ## Invariants
//!
//! * The axis and element type are validated before anything is touched.
//! * The full axis range `[0, axis_len - 1]` is dispatched exactly once.

// Internal dependencies
use crate::algorithms::{self, block::BlockOps, SortFrame};
use crate::engine::cache;
use crate::engine::validator::Validator;
use crate::layout::planner::LayoutPlan;
use crate::primitives::element::Element;
use crate::primitives::errors::AxisSortError;
use crate::primitives::scratch;
use crate::primitives::view::StridedViewMut;

/// Sort `view` along `axis`, in place.
pub fn execute<T: Element>(
    view: &mut StridedViewMut<'_, T>,
    axis: usize,
) -> Result<(), AxisSortError> {
    Validator::validate_element::<T>()?;
    Validator::validate_axis(axis, view.ndim())?;

    let axis_len = view.shape()[axis];
    if axis_len < 2 {
        return Ok(());
    }

    let spec = cache::resolve::<T>(view.order(), axis);
    let plan = LayoutPlan::new(&spec, view.shape(), view.strides(), view.offset());
    if plan.block_len == 0 {
        return Ok(());
    }

    let mut scratch = scratch::acquire::<T>(plan.block_len)?;
    let mut frame = SortFrame {
        data: view.data_mut(),
        plan: &plan,
        ops: BlockOps::new(plan.levels()),
        scratch: &mut scratch,
    };

    algorithms::sort_span(&mut frame, 0, axis_len as isize - 1)
}
