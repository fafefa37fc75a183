//! Scratch buffer pooling for block moves.
//!
//! ## Purpose
//!
//! Block-granular sorting constantly needs temporary room for exactly one
//! sub-block: the insertion sorter holds the block being inserted, the
//! quicksorter holds the two pivots. This module checks such buffers out of a
//! process-wide pool and returns them automatically, so a sort never leaks a
//! buffer on any exit path.
//!
//! ## Design notes
//!
//! * **RAII release**: [`ScratchBlock`] returns its storage on drop, which
//!   covers early returns and error propagation alike.
//! * **Pooled under `std`**: A mutex-guarded shelf per element type recycles
//!   retired buffers across calls; the mutex also serializes checkouts, so a
//!   buffer is never concurrently shared. Without `std` each acquire
//!   allocates fresh storage.
//! * **Fallible growth**: Capacity is obtained with `try_reserve`, so
//!   allocator exhaustion surfaces as `AllocationFailure` instead of an
//!   abort.
//!
//! ## Invariants
//!
//! * An acquired buffer has exactly the requested length, zero-filled.
//! * A buffer is owned by exactly one checkout at a time.
//! * The shelf never holds more than a bounded number of retired buffers.
//!
//! ## Non-goals
//!
//! * No cross-thread buffer handoff; a checkout stays on its thread.
//! * No shrinking policy beyond the shelf bound.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::any::{Any, TypeId};
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::sync::{Mutex, OnceLock};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::errors::AxisSortError;

/// Retired buffers kept per element type.
#[cfg(feature = "std")]
const MAX_POOLED: usize = 8;

// ============================================================================
// ScratchBlock
// ============================================================================

/// A zero-filled scratch buffer checked out for the duration of a sort step.
#[derive(Debug)]
pub struct ScratchBlock<T: Element> {
    buf: Vec<T>,
}

impl<T: Element> Deref for ScratchBlock<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T: Element> DerefMut for ScratchBlock<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<T: Element> Drop for ScratchBlock<T> {
    fn drop(&mut self) {
        #[cfg(feature = "std")]
        release(core::mem::take(&mut self.buf));
    }
}

// ============================================================================
// Acquire / Release
// ============================================================================

/// Check a zero-filled buffer of `len` elements out of the pool.
pub fn acquire<T: Element>(len: usize) -> Result<ScratchBlock<T>, AxisSortError> {
    #[cfg(feature = "std")]
    let mut buf = checkout::<T>();
    #[cfg(not(feature = "std"))]
    let mut buf = Vec::new();

    buf.clear();
    if buf.capacity() < len {
        buf.try_reserve(len)
            .map_err(|_| AxisSortError::AllocationFailure { elements: len })?;
    }
    buf.resize(len, T::zero());

    Ok(ScratchBlock { buf })
}

#[cfg(feature = "std")]
fn pool() -> &'static Mutex<HashMap<TypeId, Box<dyn Any + Send>>> {
    static POOL: OnceLock<Mutex<HashMap<TypeId, Box<dyn Any + Send>>>> = OnceLock::new();
    POOL.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(feature = "std")]
fn checkout<T: Element>() -> Vec<T> {
    let mut shelves = pool().lock().unwrap_or_else(|e| e.into_inner());
    let shelf = shelves
        .entry(TypeId::of::<T>())
        .or_insert_with(|| Box::new(Vec::<Vec<T>>::new()));
    match shelf.downcast_mut::<Vec<Vec<T>>>() {
        Some(stack) => stack.pop().unwrap_or_default(),
        None => Vec::new(),
    }
}

#[cfg(feature = "std")]
fn release<T: Element>(mut buf: Vec<T>) {
    if buf.capacity() == 0 {
        return;
    }
    buf.clear();

    let mut shelves = pool().lock().unwrap_or_else(|e| e.into_inner());
    let shelf = shelves
        .entry(TypeId::of::<T>())
        .or_insert_with(|| Box::new(Vec::<Vec<T>>::new()));
    if let Some(stack) = shelf.downcast_mut::<Vec<Vec<T>>>() {
        if stack.len() < MAX_POOLED {
            stack.push(buf);
        }
    }
}
