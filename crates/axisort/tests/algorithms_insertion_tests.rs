#![cfg(feature = "dev")]
//! Tests for the insertion sorter.
//!
//! These tests drive `insertion::sort_range` directly over a hand-built
//! frame:
//! - Scalar and sub-block ranges
//! - Partial ranges that must leave the rest of the axis untouched
//! - Sorted, reversed, and duplicate-heavy inputs
//!
//! ## Test Organization
//!
//! 1. **Scalar Ranges** - 1-D behavior
//! 2. **Partial Ranges** - inclusive bounds
//! 3. **Sub-Block Ranges** - 2-D and strided data

use axisort::internals::algorithms::{block::BlockOps, insertion, SortFrame};
use axisort::internals::layout::planner::{LayoutPlan, Specialization};
use axisort::internals::primitives::element::DType;
use axisort::internals::primitives::scratch;

// ============================================================================
// Helpers
// ============================================================================

fn plan_for(shape: &[usize], strides: &[isize], axis: usize, offset: usize) -> LayoutPlan {
    let mut order: Vec<usize> = (0..strides.len()).collect();
    order.sort_by_key(|&d| strides[d].unsigned_abs());
    LayoutPlan::new(&Specialization::new(&order, axis, DType::I32), shape, strides, offset)
}

fn run_insertion(data: &mut [i32], plan: &LayoutPlan, left: isize, right: isize) {
    let mut block = scratch::acquire::<i32>(plan.block_len).unwrap();
    let mut frame = SortFrame {
        data,
        plan,
        ops: BlockOps::new(plan.levels()),
        scratch: &mut block,
    };
    insertion::sort_range(&mut frame, left, right);
}

// ============================================================================
// Scalar Ranges
// ============================================================================

/// Test a full 1-D range.
#[test]
fn test_full_scalar_range() {
    let mut data = [5, 3, 1, 4, 2];
    let plan = plan_for(&[5], &[1], 0, 0);

    run_insertion(&mut data, &plan, 0, 4);

    assert_eq!(data, [1, 2, 3, 4, 5]);
}

/// Test that a single-element range is a no-op.
#[test]
fn test_single_element_range() {
    let mut data = [2, 9, 1];
    let plan = plan_for(&[3], &[1], 0, 0);

    run_insertion(&mut data, &plan, 1, 1);

    assert_eq!(data, [2, 9, 1], "Nothing outside [1, 1] may move");
}

/// Test sorted input: the shift loop should never fire.
#[test]
fn test_sorted_scalar_range() {
    let mut data = [1, 2, 3, 4, 5, 6];
    let plan = plan_for(&[6], &[1], 0, 0);

    run_insertion(&mut data, &plan, 0, 5);

    assert_eq!(data, [1, 2, 3, 4, 5, 6]);
}

/// Test reverse-sorted input, the worst case.
#[test]
fn test_reversed_scalar_range() {
    let mut data: Vec<i32> = (0..32).rev().collect();
    let plan = plan_for(&[32], &[1], 0, 0);

    run_insertion(&mut data, &plan, 0, 31);

    let expected: Vec<i32> = (0..32).collect();
    assert_eq!(data, expected);
}

/// Test duplicate-heavy input.
#[test]
fn test_duplicates_scalar_range() {
    let mut data = [2, 1, 2, 0, 1, 0, 2, 1];
    let plan = plan_for(&[8], &[1], 0, 0);

    run_insertion(&mut data, &plan, 0, 7);

    assert_eq!(data, [0, 0, 1, 1, 1, 2, 2, 2]);
}

// ============================================================================
// Partial Ranges
// ============================================================================

/// Test that only the inclusive range `[left, right]` is touched.
#[test]
fn test_partial_range_is_inclusive() {
    let mut data = [9, 5, 4, 3, 2, 8];
    let plan = plan_for(&[6], &[1], 0, 0);

    run_insertion(&mut data, &plan, 1, 4);

    assert_eq!(data, [9, 2, 3, 4, 5, 8], "Endpoints stay in place");
}

// ============================================================================
// Sub-Block Ranges
// ============================================================================

/// Test row blocks of a 2-D array.
#[test]
fn test_row_blocks() {
    // [[2, 1], [1, 9], [1, 2]]
    let mut data = [2, 1, 1, 9, 1, 2];
    let plan = plan_for(&[3, 2], &[2, 1], 0, 0);

    run_insertion(&mut data, &plan, 0, 2);

    assert_eq!(data, [1, 2, 1, 9, 2, 1]);
}

/// Test column blocks of a 2-D array (axis 1).
#[test]
fn test_column_blocks() {
    // [[3, 1, 2],
    //  [9, 8, 7]]
    let mut data = [3, 1, 2, 9, 8, 7];
    let plan = plan_for(&[2, 3], &[3, 1], 1, 0);

    run_insertion(&mut data, &plan, 0, 2);

    assert_eq!(data, [1, 2, 3, 8, 7, 9]);
}

/// Test blocks reached through an offset and a gap stride.
#[test]
fn test_offset_gapped_blocks() {
    // Axis of 3 single-scalar blocks at addresses 1, 3, 5.
    let mut data = [0, 30, 0, 10, 0, 20];
    let plan = plan_for(&[3], &[2], 0, 1);

    run_insertion(&mut data, &plan, 0, 2);

    assert_eq!(data, [0, 10, 0, 20, 0, 30], "Gaps keep their values");
}
