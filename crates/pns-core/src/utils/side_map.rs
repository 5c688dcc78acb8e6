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

//! # Id-Keyed Side Tables
//!
//! `SideMap<I, V>` attaches typed payloads to nodes by identifier without
//! the node types themselves knowing about the payload. This is how domain
//! collaborators carry their data (unit costs, prices, flow bounds) next to
//! a model that stays payload-free: one side table per concern, each with
//! its own value type, instead of an untyped per-node property bag.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A typed side table from node identifiers to payload values.
///
/// Thin wrapper over an `FxHashMap` that keeps the id-keyed access pattern
/// explicit at call sites. One `SideMap` per extension concern; the value
/// type documents what the concern is.
#[derive(Debug, Clone)]
pub struct SideMap<I, V> {
    entries: FxHashMap<I, V>,
}

impl<I, V> PartialEq for SideMap<I, V>
where
    I: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<I, V> Default for SideMap<I, V>
where
    I: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, V> SideMap<I, V>
where
    I: Copy + Eq + Hash,
{
    /// Creates an empty side table.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Creates an empty side table with at least the given capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Associates `value` with `id`, returning the previous value if any.
    #[inline]
    pub fn insert(&mut self, id: I, value: V) -> Option<V> {
        self.entries.insert(id, value)
    }

    /// Removes the value associated with `id`, if any.
    #[inline]
    pub fn remove(&mut self, id: I) -> Option<V> {
        self.entries.remove(&id)
    }

    /// Returns the value associated with `id`, if any.
    #[inline]
    pub fn get(&self, id: I) -> Option<&V> {
        self.entries.get(&id)
    }

    /// Returns the value associated with `id`, or `default` when absent.
    #[inline]
    pub fn get_or<'a>(&'a self, id: I, default: &'a V) -> &'a V {
        self.entries.get(&id).unwrap_or(default)
    }

    /// Returns `true` if a value is associated with `id`.
    #[inline]
    pub fn contains(&self, id: I) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(id, value)` pairs in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (I, &V)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }
}

impl<I, V> FromIterator<(I, V)> for SideMap<I, V>
where
    I: Copy + Eq + Hash,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (I, V)>,
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::id::{TypedId, TypedIdTag};

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIdTag for TestTag {
        const NAME: &'static str = "TestId";
    }

    type TestId = TypedId<TestTag>;

    #[test]
    fn test_insert_get_remove() {
        let mut map: SideMap<TestId, i64> = SideMap::new();
        let id = TestId::new(1);

        assert!(map.is_empty());
        assert_eq!(map.insert(id, 42), None);
        assert_eq!(map.get(id), Some(&42));
        assert_eq!(map.len(), 1);
        assert!(map.contains(id));

        assert_eq!(map.insert(id, 7), Some(42));
        assert_eq!(map.remove(id), Some(7));
        assert!(map.is_empty());
    }

    #[test]
    fn test_get_or_falls_back_to_default() {
        let mut map: SideMap<TestId, i64> = SideMap::new();
        map.insert(TestId::new(1), 10);

        assert_eq!(*map.get_or(TestId::new(1), &0), 10);
        assert_eq!(*map.get_or(TestId::new(2), &0), 0);
    }

    #[test]
    fn test_from_iterator_and_iter() {
        let map: SideMap<TestId, &str> = [(TestId::new(1), "a"), (TestId::new(2), "b")]
            .into_iter()
            .collect();

        assert_eq!(map.len(), 2);
        let mut seen: Vec<(u64, &str)> = map.iter().map(|(id, v)| (id.get(), *v)).collect();
        seen.sort();
        assert_eq!(seen, vec![(1, "a"), (2, "b")]);
    }
}
