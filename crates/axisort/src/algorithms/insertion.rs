//! Stable insertion sort over an axis range.
//!
//! ## Purpose
//!
//! The base case of the hybrid sort: ranges of at most
//! [`INSERTION_SORT_THRESHOLD`](super::INSERTION_SORT_THRESHOLD) sub-blocks,
//! and every recursion leaf of the quicksorter, are ordered here.
//!
//! ## Design notes
//!
//! * The sub-block at `i` is lifted into scratch once; shifting then moves
//!   each greater block one axis slot without further scratch traffic.
//! * Shifting stops at the first block that does not compare greater, so
//!   tied blocks keep their relative order (stable).
//! * For 1-D arrays the blocks are single scalars and this is ordinary
//!   scalar insertion sort through a one-element scratch.
//!
//! ## Invariants
//!
//! * Only the inclusive range `[left, right]` is touched.
//! * Infallible: the scratch block was acquired by the caller.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::SortFrame;
use crate::primitives::element::Element;

/// Sort the inclusive axis range `[left, right]` in place.
pub fn sort_range<T: Element>(frame: &mut SortFrame<'_, T>, left: isize, right: isize) {
    let plan = frame.plan;

    for i in (left + 1)..=right {
        frame
            .ops
            .copy_to_scratch(plan, frame.data, plan.ptr(i), frame.scratch);

        // Scan backward, shifting greater blocks one slot toward `right`.
        let mut hole = i;
        while hole > left {
            let below = plan.ptr(hole - 1);
            if frame.ops.cmp_with_scratch(plan, frame.data, below, frame.scratch)
                != Ordering::Greater
            {
                break;
            }
            frame.ops.move_block(plan, frame.data, plan.ptr(hole), below);
            hole -= 1;
        }

        frame
            .ops
            .copy_from_scratch(plan, frame.data, plan.ptr(hole), frame.scratch);
    }
}
