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

//! # Node Sets
//!
//! Hash-backed sets of node identifiers with a dual set-algebra API:
//!
//! * `union` / `except` / `intersect` are value-semantic and return **new**
//!   sets. Algorithm boundaries exchange these copies so that two
//!   subproblems can never alias each other's decision state.
//! * `union_with` / `except_with` / `intersect_with` mutate **in place**.
//!   Hot loops (frontier updates, candidate filtering) use these to avoid
//!   rebuilding sets per step.
//!
//! Insertion order is not preserved; `ordered` produces the ascending-id
//! listing used wherever deterministic iteration matters (branching,
//! display, tie-breaking).

use rustc_hash::FxHashSet;
use std::hash::Hash;

use crate::id::{MaterialId, UnitId};

/// A set of material identifiers.
pub type MaterialSet = NodeSet<MaterialId>;

/// A set of operating-unit identifiers.
pub type UnitSet = NodeSet<UnitId>;

/// A hash-backed set of node identifiers.
///
/// Because the elements are identifiers and node payloads live centrally on
/// the problem, a set can never hold two distinct instances claiming the
/// same identity.
#[derive(Clone)]
pub struct NodeSet<I> {
    entries: FxHashSet<I>,
}

impl<I> PartialEq for NodeSet<I>
where
    I: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<I> Eq for NodeSet<I> where I: Eq + Hash {}

impl<I> Default for NodeSet<I>
where
    I: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I> NodeSet<I>
where
    I: Copy + Eq + Hash,
{
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: FxHashSet::default(),
        }
    }

    /// Creates an empty set with at least the given capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts `id`, returning `true` if it was not present before.
    #[inline]
    pub fn insert(&mut self, id: I) -> bool {
        self.entries.insert(id)
    }

    /// Removes `id`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, id: I) -> bool {
        self.entries.remove(&id)
    }

    /// Returns `true` if `id` is in the set.
    #[inline]
    pub fn contains(&self, id: I) -> bool {
        self.entries.contains(&id)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the elements in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = I> + '_ {
        self.entries.iter().copied()
    }

    /// Returns `true` if `self` and `other` share no element.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.entries.is_disjoint(&other.entries)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.entries.is_superset(&other.entries)
    }

    /// Returns a new set holding every element of `self` or `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            entries: self.entries.union(&other.entries).copied().collect(),
        }
    }

    /// Returns a new set holding the elements of `self` not in `other`.
    #[inline]
    pub fn except(&self, other: &Self) -> Self {
        Self {
            entries: self.entries.difference(&other.entries).copied().collect(),
        }
    }

    /// Returns a new set holding the elements present in both sets.
    #[inline]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            entries: self
                .entries
                .intersection(&other.entries)
                .copied()
                .collect(),
        }
    }

    /// Adds every element of `other` to `self` in place.
    #[inline]
    pub fn union_with(&mut self, other: &Self) {
        self.entries.extend(other.entries.iter().copied());
    }

    /// Removes every element of `other` from `self` in place.
    #[inline]
    pub fn except_with(&mut self, other: &Self) {
        for id in other.entries.iter() {
            self.entries.remove(id);
        }
    }

    /// Keeps only the elements of `self` that are also in `other`, in place.
    #[inline]
    pub fn intersect_with(&mut self, other: &Self) {
        self.entries.retain(|id| other.entries.contains(id));
    }
}

impl<I> NodeSet<I>
where
    I: Copy + Eq + Hash + Ord,
{
    /// Returns the elements as a vector sorted ascending by identifier.
    ///
    /// This is the deterministic listing: branching, display, and every
    /// tie-breaking choice in the solver iterate this order.
    pub fn ordered(&self) -> Vec<I> {
        let mut ids: Vec<I> = self.entries.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl<I> std::fmt::Debug for NodeSet<I>
where
    I: Copy + Eq + Hash + Ord + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.ordered()).finish()
    }
}

impl<I> FromIterator<I> for NodeSet<I>
where
    I: Copy + Eq + Hash,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = I>,
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<I> Extend<I> for NodeSet<I>
where
    I: Copy + Eq + Hash,
{
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = I>,
    {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::MaterialId;

    fn set(ids: &[u64]) -> NodeSet<MaterialId> {
        ids.iter().map(|&i| MaterialId::new(i)).collect()
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut s = NodeSet::new();
        assert!(s.insert(MaterialId::new(1)));
        assert!(!s.insert(MaterialId::new(1)));
        assert!(s.contains(MaterialId::new(1)));
        assert!(s.remove(MaterialId::new(1)));
        assert!(!s.remove(MaterialId::new(1)));
        assert!(s.is_empty());
    }

    #[test]
    fn test_value_semantic_algebra_leaves_operands_untouched() {
        let a = set(&[1, 2, 3]);
        let b = set(&[2, 3, 4]);

        assert_eq!(a.union(&b), set(&[1, 2, 3, 4]));
        assert_eq!(a.except(&b), set(&[1]));
        assert_eq!(a.intersect(&b), set(&[2, 3]));

        // Operands are unchanged.
        assert_eq!(a, set(&[1, 2, 3]));
        assert_eq!(b, set(&[2, 3, 4]));
    }

    #[test]
    fn test_in_place_algebra() {
        let mut s = set(&[1, 2, 3]);
        s.union_with(&set(&[3, 4]));
        assert_eq!(s, set(&[1, 2, 3, 4]));

        s.except_with(&set(&[1, 4]));
        assert_eq!(s, set(&[2, 3]));

        s.intersect_with(&set(&[3, 5]));
        assert_eq!(s, set(&[3]));
    }

    #[test]
    fn test_disjoint_and_superset() {
        assert!(set(&[1, 2]).is_disjoint(&set(&[3, 4])));
        assert!(!set(&[1, 2]).is_disjoint(&set(&[2, 3])));
        assert!(set(&[1, 2, 3]).is_superset(&set(&[1, 3])));
        assert!(!set(&[1, 2]).is_superset(&set(&[1, 3])));
    }

    #[test]
    fn test_ordered_is_ascending() {
        let s = set(&[5, 1, 9, 3]);
        let ids: Vec<u64> = s.ordered().iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_empty_set_algebra() {
        let empty: NodeSet<MaterialId> = NodeSet::new();
        let a = set(&[1, 2]);

        assert_eq!(empty.union(&a), a);
        assert_eq!(a.except(&empty), a);
        assert_eq!(a.intersect(&empty), empty);
    }
}
