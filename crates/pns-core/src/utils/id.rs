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

//! # Strongly Typed Node Identifiers (Zero-Cost)
//!
//! Phantom-typed wrappers around `u64` to prevent mixing identifiers from
//! different domains (e.g., materials vs. operating units). `TypedId<T>`
//! carries a tag type `T: TypedIdTag` that encodes intent at the type level,
//! while compiling down to a transparent `u64` (no runtime overhead).
//!
//! ## Motivation
//!
//! Node identity is the backbone of the solver: sets, derived indices, and
//! decision state are all keyed by it. Raw integers invite accidental swaps
//! between index spaces and hard-to-trace bugs. Phantom-tagged identifiers
//! provide compile-time guarantees with minimal ceremony.
//!
//! ## Highlights
//!
//! - `TypedIdTag` defines a human-readable `NAME` used for `Display`/`Debug`.
//! - `TypedId<T>` offers `new`, `get`, and `fresh`.
//! - `fresh` draws from a single process-wide monotonically increasing
//!   sequence shared by all tags: an identifier is assigned exactly once and
//!   never reused, so two entities are the same iff they carry the same id.
//! - Conversions: `From<u64>` and `From<TypedId<T>> for u64`.
//! - Zero-cost: `#[repr(transparent)]` over `u64`.
//!
//! ## Usage
//!
//! ```rust
//! use pns_core::utils::id::{TypedId, TypedIdTag};
//!
//! #[derive(Clone)]
//! struct NodeTag;
//! impl TypedIdTag for NodeTag { const NAME: &'static str = "NodeId"; }
//!
//! type NodeId = TypedId<NodeTag>;
//! let a = NodeId::fresh();
//! let b = NodeId::fresh();
//! assert!(b.get() > a.get());
//! assert_eq!(format!("{}", NodeId::new(3)), "NodeId(3)");
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// The process-wide identifier sequence. Shared by every tag so that ids are
/// globally unique, not merely unique per domain.
static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A trait to tag typed identifiers with a name for debugging and display
/// purposes.
pub trait TypedIdTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed identifier associated with a specific tag type `T`.
///
/// This struct wraps a `u64` and uses a phantom type parameter `T` to
/// provide type safety and prevent mixing identifiers of different node
/// kinds. Equality, ordering, and hashing all operate on the raw id only.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedId<T> {
    id: u64,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedId<T> {
    /// Creates a new `TypedId` with the given raw identifier.
    ///
    /// Intended for tests and for rehydrating identifiers that were handed
    /// out earlier; regular node construction should use [`TypedId::fresh`].
    #[inline(always)]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Draws the next identifier from the process-wide sequence.
    ///
    /// The sequence is monotonically increasing and never reuses a value,
    /// which is what makes identity-based equality sound across problem
    /// instances.
    #[inline]
    pub fn fresh() -> Self {
        Self::new(ID_SEQUENCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying raw identifier.
    #[inline(always)]
    pub const fn get(&self) -> u64 {
        self.id
    }
}

impl<T> std::fmt::Debug for TypedId<T>
where
    T: TypedIdTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.id)
    }
}

impl<T> std::fmt::Display for TypedId<T>
where
    T: TypedIdTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.id)
    }
}

impl<T> From<u64> for TypedId<T> {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl<T> From<TypedId<T>> for u64 {
    fn from(typed_id: TypedId<T>) -> Self {
        typed_id.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIdTag for TestTag {
        const NAME: &'static str = "TestId";
    }

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct OtherTag;

    impl TypedIdTag for OtherTag {
        const NAME: &'static str = "OtherId";
    }

    type TestId = TypedId<TestTag>;
    type OtherId = TypedId<OtherTag>;

    #[test]
    fn test_new_and_get() {
        let id = TestId::new(10);
        assert_eq!(id.get(), 10);
    }

    #[test]
    fn test_fresh_is_strictly_increasing() {
        let a = TestId::fresh();
        let b = TestId::fresh();
        let c = TestId::fresh();
        assert!(a.get() < b.get());
        assert!(b.get() < c.get());
    }

    #[test]
    fn test_fresh_sequence_is_shared_across_tags() {
        // Ids from different tags must never collide; they draw from the
        // same process-wide sequence.
        let a = TestId::fresh();
        let b = OtherId::fresh();
        assert_ne!(a.get(), b.get());
    }

    #[test]
    fn test_conversions() {
        let id: TestId = 42u64.into();
        assert_eq!(id.get(), 42);

        let raw: u64 = id.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display_use_tag_name() {
        let id = TestId::new(7);
        assert_eq!(format!("{}", id), "TestId(7)");
        assert_eq!(format!("{:?}", id), "TestId(7)");
    }

    #[test]
    fn test_equality_and_ordering_by_raw_id() {
        assert_eq!(TestId::new(3), TestId::new(3));
        assert_ne!(TestId::new(3), TestId::new(4));
        assert!(TestId::new(3) < TestId::new(4));
    }
}
