//! Element kinds for axis sorting.
//!
//! ## Purpose
//!
//! This module defines which scalar types can back a sortable array and how
//! two scalars compare. Every fixed-width numeric primitive is supported;
//! anything else is reported as a configuration error by the validator, never
//! silently accepted.
//!
//! ## Design notes
//!
//! * **Marker constant**: `Element::DTYPE` defaults to [`DType::Generic`];
//!   only the numeric implementations in this module override it. The engine
//!   rejects `Generic` elements up front.
//! * **Float ordering**: scalars compare through `partial_cmp`, with
//!   incomparable pairs (NaN against anything) treated as equal. Sorting is
//!   total for finite data; NaN payloads keep their neighborhood.
//! * **Signature component**: `DType` is part of the specialization cache
//!   key, alongside the layout order and the axis.
//!
//! ## Non-goals
//!
//! * This module does not compare sub-blocks (see `algorithms::block`).
//! * No boxed, reference, or user-defined element support.

// External dependencies
use core::cmp::Ordering;
use num_traits::Zero;

// ============================================================================
// Element Kind
// ============================================================================

/// Kind tag for a sortable scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Anything else. Not sortable; rejected during validation.
    Generic,
}

impl DType {
    /// Human-readable kind name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Generic => "generic",
        }
    }
}

// ============================================================================
// Element Trait
// ============================================================================

/// A scalar type that can back a sortable strided array.
///
/// The trait is implemented for the fixed-width numeric primitives. Foreign
/// implementations are possible but keep the default [`DType::Generic`]
/// marker and are rejected with `UnsupportedElementType` when a sort is
/// attempted.
pub trait Element: Copy + PartialOrd + Zero + Send + Sync + 'static {
    /// The element kind; part of the specialization signature.
    const DTYPE: DType = DType::Generic;
}

macro_rules! impl_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$kind;
            }
        )*
    };
}

impl_element! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

// ============================================================================
// Scalar Comparison
// ============================================================================

/// Compare two scalars, treating incomparable pairs as equal.
#[inline]
pub fn scalar_cmp<T: Element>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
