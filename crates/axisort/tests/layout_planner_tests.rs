#![cfg(feature = "dev")]
//! Tests for traversal planning.
//!
//! These tests verify the layout planner's arithmetic contracts:
//! - Specialization resolution from `(order, axis)`
//! - The axis addressing contract `ptr(i) = offset + i·stride[axis]`
//! - Odometer deltas visiting exactly the `Σ index·stride` addresses
//! - Dense scratch packing in visiting order
//! - Logical-order comparison independent of memory layout
//!
//! ## Test Organization
//!
//! 1. **Specialization** - traversal sequence resolution
//! 2. **Axis Addressing** - `ptr` contract, negative strides
//! 3. **Traversal Deltas** - visited addresses against the analytic form
//! 4. **Comparison Order** - logical order decides, layout order does not

use axisort::internals::algorithms::block::BlockOps;
use axisort::internals::layout::planner::{LayoutPlan, Specialization};
use axisort::internals::primitives::element::DType;

// ============================================================================
// Helpers
// ============================================================================

/// Layout order of dimensions: ascending absolute stride, ties by index.
fn order_of(strides: &[isize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..strides.len()).collect();
    order.sort_by_key(|&d| strides[d].unsigned_abs());
    order
}

fn plan_for(shape: &[usize], strides: &[isize], axis: usize, offset: usize) -> LayoutPlan {
    let spec = Specialization::new(&order_of(strides), axis, DType::I32);
    LayoutPlan::new(&spec, shape, strides, offset)
}

/// Addresses of one sub-block in traversal order, computed analytically:
/// mixed-radix decomposition with `sequence[0]` as the fastest digit.
fn analytic_addresses(
    base: isize,
    shape: &[usize],
    strides: &[isize],
    sequence: &[usize],
) -> Vec<isize> {
    let block_len: usize = sequence.iter().map(|&d| shape[d]).product();
    (0..block_len)
        .map(|k| {
            let mut rem = k;
            let mut addr = base;
            for &d in sequence {
                addr += (rem % shape[d]) as isize * strides[d];
                rem /= shape[d];
            }
            addr
        })
        .collect()
}

// ============================================================================
// Specialization
// ============================================================================

/// Test traversal sequence resolution for a row-major 3-D array.
#[test]
fn test_specialization_row_major() {
    // C-order: dim 2 is fastest, so order is [2, 1, 0].
    let spec = Specialization::new(&[2, 1, 0], 0, DType::F64);

    assert_eq!(spec.axis, 0);
    assert_eq!(spec.dtype, DType::F64);
    assert_eq!(spec.visit, vec![2, 1], "Layout order, innermost first");
    assert_eq!(spec.logical, vec![2, 1], "Logical order, innermost first");
}

/// Test that visit and logical sequences diverge for non-row-major layouts.
#[test]
fn test_specialization_column_major() {
    // F-order: dim 0 is fastest.
    let spec = Specialization::new(&[0, 1, 2], 1, DType::I32);

    assert_eq!(spec.visit, vec![0, 2], "Axis removed from the layout order");
    assert_eq!(spec.logical, vec![2, 0], "Logical order ignores the layout");
}

/// Test that a 1-D specialization has no traversal levels.
#[test]
fn test_specialization_one_dimensional() {
    let spec = Specialization::new(&[0], 0, DType::U8);

    assert!(spec.visit.is_empty());
    assert!(spec.logical.is_empty());
}

// ============================================================================
// Axis Addressing
// ============================================================================

/// Test the `ptr(i) = offset + i·stride[axis]` contract.
#[test]
fn test_axis_addressing() {
    let plan = plan_for(&[4, 3], &[3, 1], 0, 5);

    assert_eq!(plan.axis_stride, 3);
    assert_eq!(plan.axis_len, 4);
    assert_eq!(plan.block_len, 3);
    for i in 0..4 {
        assert_eq!(plan.ptr(i), 5 + i * 3, "ptr({i})");
    }
}

/// Test axis addressing through a negative stride.
#[test]
fn test_axis_addressing_negative_stride() {
    let plan = plan_for(&[4], &[-1], 0, 3);

    assert_eq!(plan.block_len, 1);
    let addresses: Vec<isize> = (0..4).map(|i| plan.ptr(i)).collect();
    assert_eq!(addresses, vec![3, 2, 1, 0], "Walks the view backward");
}

// ============================================================================
// Traversal Deltas
// ============================================================================

/// Observe the data addresses a movement traversal visits by copying an
/// identity-valued block into scratch.
fn observed_movement_addresses(plan: &LayoutPlan, base: isize, total: usize) -> Vec<isize> {
    let data: Vec<i64> = (0..total as i64).collect();
    let mut scratch = vec![0i64; plan.block_len];
    let mut ops = BlockOps::new(plan.levels());
    ops.copy_to_scratch(plan, &data, base, &mut scratch);
    scratch.iter().map(|&v| v as isize).collect()
}

/// Test movement deltas on a row-major 3-D block.
#[test]
fn test_movement_addresses_row_major() {
    let shape = [2, 3, 4];
    let strides = [12, 4, 1];
    let plan = plan_for(&shape, &strides, 0, 0);

    let expected = analytic_addresses(plan.ptr(1), &shape, &strides, &[2, 1]);
    let observed = observed_movement_addresses(&plan, plan.ptr(1), 24);

    assert_eq!(observed, expected, "Odometer must reproduce Σ index·stride");
}

/// Test movement deltas on a column-major 3-D block sorted along axis 1.
#[test]
fn test_movement_addresses_column_major() {
    let shape = [2, 3, 4];
    let strides = [1, 2, 6];
    let plan = plan_for(&shape, &strides, 1, 0);

    // Layout order without the axis: dim 0, then dim 2.
    let expected = analytic_addresses(plan.ptr(0), &shape, &strides, &[0, 2]);
    let observed = observed_movement_addresses(&plan, plan.ptr(0), 24);

    assert_eq!(observed, expected);
}

/// Test movement deltas with a reversed (negative-stride) dimension.
#[test]
fn test_movement_addresses_reversed_dimension() {
    // 2-D, rows of 4, with the column dimension flipped: offset rebased to 3.
    let shape = [3, 4];
    let strides = [4, -1];
    let plan = plan_for(&shape, &strides, 0, 3);

    let expected = analytic_addresses(plan.ptr(2), &shape, &strides, &[1]);
    let observed = observed_movement_addresses(&plan, plan.ptr(2), 12);

    assert_eq!(observed, expected);
    assert_eq!(observed, vec![11, 10, 9, 8], "Row 2 read right-to-left");
}

/// Test that movement traversal advances the scratch pointer densely.
#[test]
fn test_movement_scratch_steps_are_dense() {
    let plan = plan_for(&[2, 3, 4], &[12, 4, 1], 0, 0);

    assert_eq!(plan.movement.scratch_steps[0], 1);
    assert!(
        plan.movement.scratch_steps[1..].iter().all(|&s| s == 0),
        "Carries must not move the packed scratch pointer"
    );
}

/// Test the closed-form carry deltas on an awkward stride pattern.
///
/// The naive chain `d_j = s_j - d_p·n_p` only telescopes when every
/// intermediate delta equals its stride; this pattern breaks that premise.
#[test]
fn test_movement_addresses_interleaved_strides() {
    // 4-D, axis 0; non-axis layout order is [3, 2, 1].
    let shape = [2, 2, 3, 4];
    let strides = [24, 12, 4, 1];
    let plan = plan_for(&shape, &strides, 0, 0);

    let expected = analytic_addresses(plan.ptr(1), &shape, &strides, &[3, 2, 1]);
    let observed = observed_movement_addresses(&plan, plan.ptr(1), 48);

    assert_eq!(observed, expected);
    // The block is contiguous: axis index 1 covers addresses 24..48.
    assert_eq!(observed, (24..48).collect::<Vec<isize>>());
}

// ============================================================================
// Comparison Order
// ============================================================================

/// Test that comparison walks logical order even when the layout disagrees.
///
/// The two blocks differ at logical position (0, 1) and, with the opposite
/// sign, at (1, 0). Logical order sees (0, 1) first; the column-major layout
/// order would see (1, 0) first.
#[test]
fn test_comparison_is_logical_order() {
    // 3-D, axis 0, column-major: layout order is [1, 2], logical is [2, 1].
    let shape = [2, 2, 2];
    let strides = [1isize, 2, 4];
    let plan = plan_for(&shape, &strides, 0, 0);

    // Block at axis index 0: scalar (j1, j2) lives at 2·j1 + 4·j2.
    let mut data = vec![0i32; 8];
    data[0] = 1; // (0,0)
    data[4] = 5; // (0,1) - greater than the scratch value
    data[2] = 1; // (1,0) - less than the scratch value
    data[6] = 1; // (1,1)

    // Scratch packed in visiting order: index j1·1 + j2·2.
    let mut scratch = vec![0i32; 4];
    scratch[0] = 1; // (0,0)
    scratch[2] = 3; // (0,1)
    scratch[1] = 2; // (1,0)
    scratch[3] = 9; // (1,1)

    let mut ops = BlockOps::new(plan.levels());
    let ord = ops.cmp_with_scratch(&plan, &data, plan.ptr(0), &scratch);

    assert_eq!(
        ord,
        core::cmp::Ordering::Greater,
        "(0,1) decides in logical order; layout order would say Less"
    );
}

/// Test that block comparison finds the first difference and ignores later
/// ones.
#[test]
fn test_comparison_first_difference_decides() {
    let shape = [2, 3];
    let strides = [3, 1];
    let plan = plan_for(&shape, &strides, 0, 0);

    // Rows [1, 2, 3] and [1, 2, 4]: equal until the last scalar.
    let data = vec![1, 2, 3, 1, 2, 4];
    let mut ops = BlockOps::new(plan.levels());

    assert_eq!(
        ops.cmp_blocks(&plan, &data, plan.ptr(0), plan.ptr(1)),
        core::cmp::Ordering::Less
    );
    assert_eq!(
        ops.cmp_blocks(&plan, &data, plan.ptr(1), plan.ptr(0)),
        core::cmp::Ordering::Greater
    );
    assert_eq!(
        ops.cmp_blocks(&plan, &data, plan.ptr(0), plan.ptr(0)),
        core::cmp::Ordering::Equal
    );
}
