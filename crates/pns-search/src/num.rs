// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Cost Numeric Trait
//!
//! Unified numeric bounds for objective value types. `CostValue` collects
//! the integer capabilities the bundled bounding helpers rely on, including
//! intrinsic traits (`PrimInt`, `Signed`), by-value saturating addition for
//! overflow-safe accumulation, and `Send + Sync` for concurrent solver
//! execution, into a single alias so generic signatures stay readable.
//!
//! Note: `i128` is intentionally excluded for performance reasons.

use pns_core::num::saturating::SaturatingAddVal;
use num_traits::{PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for numeric types usable as objective values.
/// These are usually the signed integer types `i8`, `i16`, `i32`, `i64`,
/// and `isize`.
pub trait CostValue:
    PrimInt
    + Signed
    + SaturatingAddVal
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
{
}

impl<T> CostValue for T where
    T: PrimInt
        + Signed
        + SaturatingAddVal
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}
