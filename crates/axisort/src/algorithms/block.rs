//! Sub-block primitives: copies, moves, swaps, rotations, and comparison.
//!
//! ## Purpose
//!
//! Both sorters manipulate whole (D-1)-dimensional sub-blocks. This module
//! provides those operations as odometer walks over a [`LayoutPlan`]: moves
//! traverse in layout order, comparisons in logical order, and every
//! operation degenerates to a single scalar access for 1-D arrays.
//!
//! ## Design notes
//!
//! * **One odometer per operation**: Pointers that advance together share one
//!   carry computation; only the per-level step tables differ.
//! * **Reusable counter**: The multi-index counter lives in [`BlockOps`] so
//!   the hot loops never allocate.
//! * **First difference decides**: Comparison walks scalars in logical order
//!   and returns at the first non-equal pair.
//! * **Aliasing-tolerant**: Swap and rotate are elementwise exchanges, so
//!   coinciding block addresses degrade to the correct smaller permutation
//!   instead of corrupting data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::layout::planner::LayoutPlan;
use crate::primitives::element::{scalar_cmp, Element};

// ============================================================================
// BlockOps
// ============================================================================

/// Working state for sub-block operations.
#[derive(Debug)]
pub struct BlockOps {
    /// Odometer counter, one entry per traversal level.
    idx: Vec<usize>,
}

impl BlockOps {
    /// Create working state for traversals of the given nesting depth.
    pub fn new(levels: usize) -> Self {
        Self {
            idx: vec![0; levels],
        }
    }

    // ========================================================================
    // Moves (layout-order traversal)
    // ========================================================================

    /// Copy the sub-block at `src` into the packed scratch buffer.
    pub fn copy_to_scratch<T: Element>(
        &mut self,
        plan: &LayoutPlan,
        data: &[T],
        src: isize,
        scratch: &mut [T],
    ) {
        let t = &plan.movement;
        let levels = t.sizes.len();
        self.idx[..levels].fill(0);

        let mut p = src;
        let mut s = 0usize;
        loop {
            scratch[s] = data[p as usize];
            s += 1;

            let mut l = 0;
            loop {
                if l == levels {
                    return;
                }
                p += t.data_steps[l];
                self.idx[l] += 1;
                if self.idx[l] < t.sizes[l] {
                    break;
                }
                self.idx[l] = 0;
                l += 1;
            }
        }
    }

    /// Copy the packed scratch buffer into the sub-block at `dst`.
    pub fn copy_from_scratch<T: Element>(
        &mut self,
        plan: &LayoutPlan,
        data: &mut [T],
        dst: isize,
        scratch: &[T],
    ) {
        let t = &plan.movement;
        let levels = t.sizes.len();
        self.idx[..levels].fill(0);

        let mut p = dst;
        let mut s = 0usize;
        loop {
            data[p as usize] = scratch[s];
            s += 1;

            let mut l = 0;
            loop {
                if l == levels {
                    return;
                }
                p += t.data_steps[l];
                self.idx[l] += 1;
                if self.idx[l] < t.sizes[l] {
                    break;
                }
                self.idx[l] = 0;
                l += 1;
            }
        }
    }

    /// Overwrite the sub-block at `dst` with the sub-block at `src`.
    pub fn move_block<T: Element>(
        &mut self,
        plan: &LayoutPlan,
        data: &mut [T],
        dst: isize,
        src: isize,
    ) {
        let t = &plan.movement;
        let levels = t.sizes.len();
        self.idx[..levels].fill(0);

        let mut pd = dst;
        let mut ps = src;
        loop {
            data[pd as usize] = data[ps as usize];

            let mut l = 0;
            loop {
                if l == levels {
                    return;
                }
                pd += t.data_steps[l];
                ps += t.data_steps[l];
                self.idx[l] += 1;
                if self.idx[l] < t.sizes[l] {
                    break;
                }
                self.idx[l] = 0;
                l += 1;
            }
        }
    }

    /// Exchange the sub-blocks at `a` and `b` elementwise.
    pub fn swap_blocks<T: Element>(
        &mut self,
        plan: &LayoutPlan,
        data: &mut [T],
        a: isize,
        b: isize,
    ) {
        let t = &plan.movement;
        let levels = t.sizes.len();
        self.idx[..levels].fill(0);

        let mut pa = a;
        let mut pb = b;
        loop {
            data.swap(pa as usize, pb as usize);

            let mut l = 0;
            loop {
                if l == levels {
                    return;
                }
                pa += t.data_steps[l];
                pb += t.data_steps[l];
                self.idx[l] += 1;
                if self.idx[l] < t.sizes[l] {
                    break;
                }
                self.idx[l] = 0;
                l += 1;
            }
        }
    }

    /// Partition triple-exchange:
    /// `a[k] ← a[less]`, `a[less] ← a[great]`, `a[great] ← old a[k]`.
    pub fn rotate_blocks<T: Element>(
        &mut self,
        plan: &LayoutPlan,
        data: &mut [T],
        k: isize,
        less: isize,
        great: isize,
    ) {
        let t = &plan.movement;
        let levels = t.sizes.len();
        self.idx[..levels].fill(0);

        let mut pk = k;
        let mut pl = less;
        let mut pg = great;
        loop {
            let held = data[pk as usize];
            data[pk as usize] = data[pl as usize];
            data[pl as usize] = data[pg as usize];
            data[pg as usize] = held;

            let mut l = 0;
            loop {
                if l == levels {
                    return;
                }
                pk += t.data_steps[l];
                pl += t.data_steps[l];
                pg += t.data_steps[l];
                self.idx[l] += 1;
                if self.idx[l] < t.sizes[l] {
                    break;
                }
                self.idx[l] = 0;
                l += 1;
            }
        }
    }

    // ========================================================================
    // Comparisons (logical-order traversal)
    // ========================================================================

    /// Lexicographically compare the sub-blocks at `a` and `b`.
    pub fn cmp_blocks<T: Element>(
        &mut self,
        plan: &LayoutPlan,
        data: &[T],
        a: isize,
        b: isize,
    ) -> Ordering {
        let t = &plan.comparison;
        let levels = t.sizes.len();
        self.idx[..levels].fill(0);

        let mut pa = a;
        let mut pb = b;
        loop {
            let ord = scalar_cmp(data[pa as usize], data[pb as usize]);
            if ord != Ordering::Equal {
                return ord;
            }

            let mut l = 0;
            loop {
                if l == levels {
                    return Ordering::Equal;
                }
                pa += t.data_steps[l];
                pb += t.data_steps[l];
                self.idx[l] += 1;
                if self.idx[l] < t.sizes[l] {
                    break;
                }
                self.idx[l] = 0;
                l += 1;
            }
        }
    }

    /// Lexicographically compare the sub-block at `p` against a packed
    /// scratch buffer.
    pub fn cmp_with_scratch<T: Element>(
        &mut self,
        plan: &LayoutPlan,
        data: &[T],
        p: isize,
        scratch: &[T],
    ) -> Ordering {
        let t = &plan.comparison;
        let levels = t.sizes.len();
        self.idx[..levels].fill(0);

        let mut pd = p;
        let mut ps = 0isize;
        loop {
            let ord = scalar_cmp(data[pd as usize], scratch[ps as usize]);
            if ord != Ordering::Equal {
                return ord;
            }

            let mut l = 0;
            loop {
                if l == levels {
                    return Ordering::Equal;
                }
                pd += t.data_steps[l];
                ps += t.scratch_steps[l];
                self.idx[l] += 1;
                if self.idx[l] < t.sizes[l] {
                    break;
                }
                self.idx[l] = 0;
                l += 1;
            }
        }
    }

    /// Lexicographically compare two packed scratch buffers.
    pub fn cmp_scratch_pair<T: Element>(
        &mut self,
        plan: &LayoutPlan,
        a: &[T],
        b: &[T],
    ) -> Ordering {
        let t = &plan.comparison;
        let levels = t.sizes.len();
        self.idx[..levels].fill(0);

        let mut pa = 0isize;
        let mut pb = 0isize;
        loop {
            let ord = scalar_cmp(a[pa as usize], b[pb as usize]);
            if ord != Ordering::Equal {
                return ord;
            }

            let mut l = 0;
            loop {
                if l == levels {
                    return Ordering::Equal;
                }
                pa += t.scratch_steps[l];
                pb += t.scratch_steps[l];
                self.idx[l] += 1;
                if self.idx[l] < t.sizes[l] {
                    break;
                }
                self.idx[l] = 0;
                l += 1;
            }
        }
    }
}
