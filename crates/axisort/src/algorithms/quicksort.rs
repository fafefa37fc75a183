//! Dual-pivot quicksort over an axis range.
//!
//! ## Purpose
//!
//! Orders ranges longer than the insertion threshold by partitioning around
//! two pivots sampled from five quintile sentinels, then recursing; short
//! sub-ranges are routed back to the insertion sorter.
//!
//! ## Design notes
//!
//! * Pivots are lifted into pooled scratch blocks before any partition move,
//!   so later block moves cannot invalidate them; both buffers return to the
//!   pool on every exit path, including error propagation.
//! * Equal pivots trigger a single-pivot partition that leaves pivot-equal
//!   blocks in an all-equal middle zone and never recurses into it, which
//!   keeps duplicate-heavy ranges linear instead of quadratic.
//! * All compares, moves, swaps, and rotations are the sub-block primitives
//!   of `algorithms::block`; for 1-D arrays they are plain scalar operations.
//!
//! ## Invariants
//!
//! * Called only with `right - left + 1` above the insertion threshold, so
//!   all five sample positions are distinct and interior.
//! * Total on valid ranges; the only failure is scratch-allocation
//!   exhaustion while acquiring the pivot buffers.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::SortFrame;
use crate::primitives::element::Element;
use crate::primitives::errors::AxisSortError;
use crate::primitives::scratch;

/// Compare-and-swap of the sub-blocks at axis indices `a` and `b`.
#[inline]
fn compare_swap<T: Element>(frame: &mut SortFrame<'_, T>, a: isize, b: isize) {
    let plan = frame.plan;
    if frame.ops.cmp_blocks(plan, frame.data, plan.ptr(a), plan.ptr(b)) == Ordering::Greater {
        frame
            .ops
            .swap_blocks(plan, frame.data, plan.ptr(a), plan.ptr(b));
    }
}

/// Sort the inclusive axis range `[left, right]` in place.
pub fn sort_range<T: Element>(
    frame: &mut SortFrame<'_, T>,
    left: isize,
    right: isize,
) -> Result<(), AxisSortError> {
    let plan = frame.plan;

    // Five roughly quintile sample positions.
    let sixth = (right - left + 1) / 6;
    let index1 = left + sixth;
    let index5 = right - sixth;
    let index3 = (left + right) / 2;
    let index2 = index3 - sixth;
    let index4 = index3 + sixth;

    // Order the five sampled blocks with a fixed 9-step sorting network.
    compare_swap(frame, index1, index2);
    compare_swap(frame, index4, index5);
    compare_swap(frame, index1, index3);
    compare_swap(frame, index2, index3);
    compare_swap(frame, index1, index4);
    compare_swap(frame, index3, index4);
    compare_swap(frame, index2, index5);
    compare_swap(frame, index2, index3);
    compare_swap(frame, index4, index5);

    // Lift the 2nd- and 4th-smallest samples into scratch as the pivots.
    let mut pivot1 = scratch::acquire::<T>(plan.block_len)?;
    let mut pivot2 = scratch::acquire::<T>(plan.block_len)?;
    frame
        .ops
        .copy_to_scratch(plan, frame.data, plan.ptr(index2), &mut pivot1);
    frame
        .ops
        .copy_to_scratch(plan, frame.data, plan.ptr(index4), &mut pivot2);
    let pivots_are_equal = frame.ops.cmp_scratch_pair(plan, &pivot1, &pivot2) == Ordering::Equal;

    // Fill the pivot holes from the range endpoints; the endpoint slots are
    // overwritten when the pivots settle into their resting positions.
    frame
        .ops
        .move_block(plan, frame.data, plan.ptr(index2), plan.ptr(left));
    frame
        .ops
        .move_block(plan, frame.data, plan.ptr(index4), plan.ptr(right));

    let mut less = left + 1;
    let mut great = right - 1;

    if pivots_are_equal {
        // Single-pivot partition:
        //
        // [ < pivot | == pivot | unpartitioned | > pivot ]
        //            ^          ^               ^
        //          less         k             great
        let mut k = less;
        while k <= great {
            let comp = frame
                .ops
                .cmp_with_scratch(plan, frame.data, plan.ptr(k), &pivot1);
            if comp == Ordering::Equal {
                k += 1;
                continue;
            }
            if comp == Ordering::Less {
                if k != less {
                    frame
                        .ops
                        .swap_blocks(plan, frame.data, plan.ptr(k), plan.ptr(less));
                }
                less += 1;
            } else {
                loop {
                    let comp = frame
                        .ops
                        .cmp_with_scratch(plan, frame.data, plan.ptr(great), &pivot1);
                    if comp == Ordering::Greater {
                        great -= 1;
                        if great < k {
                            break;
                        }
                        continue;
                    }
                    if comp == Ordering::Less {
                        frame.ops.rotate_blocks(
                            plan,
                            frame.data,
                            plan.ptr(k),
                            plan.ptr(less),
                            plan.ptr(great),
                        );
                        less += 1;
                        great -= 1;
                    } else {
                        frame
                            .ops
                            .swap_blocks(plan, frame.data, plan.ptr(k), plan.ptr(great));
                        great -= 1;
                    }
                    break;
                }
            }
            k += 1;
        }
    } else {
        // Three-way partition:
        //
        // [ < pivot1 | pivot1 <= x <= pivot2 | unpartitioned | > pivot2 ]
        //             ^                       ^               ^
        //           less                      k             great
        let mut k = less;
        while k <= great {
            let comp_pivot1 = frame
                .ops
                .cmp_with_scratch(plan, frame.data, plan.ptr(k), &pivot1);
            if comp_pivot1 == Ordering::Less {
                if k != less {
                    frame
                        .ops
                        .swap_blocks(plan, frame.data, plan.ptr(k), plan.ptr(less));
                }
                less += 1;
            } else {
                let comp_pivot2 = frame
                    .ops
                    .cmp_with_scratch(plan, frame.data, plan.ptr(k), &pivot2);
                if comp_pivot2 == Ordering::Greater {
                    loop {
                        let comp = frame
                            .ops
                            .cmp_with_scratch(plan, frame.data, plan.ptr(great), &pivot2);
                        if comp == Ordering::Greater {
                            great -= 1;
                            if great < k {
                                break;
                            }
                            continue;
                        }
                        if frame
                            .ops
                            .cmp_with_scratch(plan, frame.data, plan.ptr(great), &pivot1)
                            == Ordering::Less
                        {
                            frame.ops.rotate_blocks(
                                plan,
                                frame.data,
                                plan.ptr(k),
                                plan.ptr(less),
                                plan.ptr(great),
                            );
                            less += 1;
                            great -= 1;
                        } else {
                            frame
                                .ops
                                .swap_blocks(plan, frame.data, plan.ptr(k), plan.ptr(great));
                            great -= 1;
                        }
                        break;
                    }
                }
            }
            k += 1;
        }
    }

    // Pivots settle at their resting slots `less-1` and `great+1`.
    frame
        .ops
        .move_block(plan, frame.data, plan.ptr(left), plan.ptr(less - 1));
    frame
        .ops
        .copy_from_scratch(plan, frame.data, plan.ptr(less - 1), &pivot1);
    frame
        .ops
        .move_block(plan, frame.data, plan.ptr(right), plan.ptr(great + 1));
    frame
        .ops
        .copy_from_scratch(plan, frame.data, plan.ptr(great + 1), &pivot2);

    super::sort_span(frame, left, less - 2)?;
    super::sort_span(frame, great + 2, right)?;

    if pivots_are_equal {
        // The middle zone holds only pivot-equal blocks; nothing to sort.
        return Ok(());
    }

    if less < index1 && great > index5 {
        // The middle zone still spans the sentinel positions: strip blocks
        // equal to either pivot off its edges before sorting it.
        while frame
            .ops
            .cmp_with_scratch(plan, frame.data, plan.ptr(less), &pivot1)
            == Ordering::Equal
        {
            less += 1;
        }
        while frame
            .ops
            .cmp_with_scratch(plan, frame.data, plan.ptr(great), &pivot2)
            == Ordering::Equal
        {
            great -= 1;
        }

        // Expel remaining pivot-equal blocks from the interior:
        //
        // [ == pivot1 | pivot1 < x < pivot2 | unpartitioned | == pivot2 ]
        //              ^                     ^               ^
        //            less                    k             great
        let mut k = less;
        while k <= great {
            if frame
                .ops
                .cmp_with_scratch(plan, frame.data, plan.ptr(k), &pivot1)
                == Ordering::Equal
            {
                if k != less {
                    frame
                        .ops
                        .swap_blocks(plan, frame.data, plan.ptr(k), plan.ptr(less));
                }
                less += 1;
            } else if frame
                .ops
                .cmp_with_scratch(plan, frame.data, plan.ptr(k), &pivot2)
                == Ordering::Equal
            {
                loop {
                    if frame
                        .ops
                        .cmp_with_scratch(plan, frame.data, plan.ptr(great), &pivot2)
                        == Ordering::Equal
                    {
                        great -= 1;
                        if great < k {
                            break;
                        }
                        continue;
                    }
                    if frame
                        .ops
                        .cmp_with_scratch(plan, frame.data, plan.ptr(great), &pivot1)
                        == Ordering::Less
                    {
                        frame.ops.rotate_blocks(
                            plan,
                            frame.data,
                            plan.ptr(k),
                            plan.ptr(less),
                            plan.ptr(great),
                        );
                        less += 1;
                        great -= 1;
                    } else {
                        frame
                            .ops
                            .swap_blocks(plan, frame.data, plan.ptr(k), plan.ptr(great));
                        great -= 1;
                    }
                    break;
                }
            }
            k += 1;
        }
    }

    // The pivot buffers are not needed for the middle zone.
    drop(pivot1);
    drop(pivot2);

    super::sort_span(frame, less, great)
}
