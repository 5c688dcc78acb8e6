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

//! # Solution Pool (n-Best Retention)
//!
//! A concurrent container for the best solutions discovered so far during
//! search. The pool keeps its entries sorted ascending under a caller-chosen
//! total order and, when capacity-bounded, evicts the current worst entry on
//! overflow. It is the single source of truth both for result reporting and
//! for the engine's pruning predicate.
//!
//! ## Motivation
//!
//! - One structure serves the best-1 optimization case, the n-best case,
//!   and the enumerate-everything case (`capacity: None`).
//! - Correctness by locking: entries live behind a `Mutex`; every operation
//!   holds the lock for a single insert or peek only, never across a
//!   branching or bounding computation.
//! - Stable ties: a later arrival with an equal key is inserted after the
//!   existing equal entries.
//!
//! ## Highlights
//!
//! - `insert(N) -> bool` places a candidate at its sorted position and
//!   reports whether it survived capacity eviction.
//! - `is_dominated(&N) -> bool` is the shared pruning predicate: once the
//!   pool is full, a bound that is not strictly better than the current
//!   worst entry cannot lead to a retained solution.
//! - `NetworkComparator` is the ordering seam; `ByNetworkOrd` delegates to
//!   the network's own `Ord` and callers may supply multi-key comparators.

use std::cmp::Ordering;
use std::sync::Mutex;

/// A total order over networks.
///
/// The same comparator instance orders both the retained solutions and the
/// best-first frontier, so it must be a total order consistent for leaf
/// objectives and intermediate bounds alike.
pub trait NetworkComparator<N>: Send + Sync {
    /// Compares two networks; `Less` means `a` is better.
    fn compare(&self, a: &N, b: &N) -> Ordering;
}

/// The default comparator: the network's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByNetworkOrd;

impl<N> NetworkComparator<N> for ByNetworkOrd
where
    N: Ord,
{
    #[inline]
    fn compare(&self, a: &N, b: &N) -> Ordering {
        a.cmp(b)
    }
}

/// A concurrent, sorted, capacity-bounded holder for the best networks
/// found during search.
#[derive(Debug)]
pub struct SolutionPool<N, C = ByNetworkOrd> {
    entries: Mutex<Vec<N>>,
    capacity: Option<usize>,
    comparator: C,
}

impl<N, C> SolutionPool<N, C>
where
    N: Clone,
    C: NetworkComparator<N>,
{
    /// Creates a pool retaining at most `capacity` networks, or every
    /// network when `capacity` is `None`.
    #[inline]
    pub fn new(capacity: Option<usize>) -> Self
    where
        C: Default,
    {
        Self::with_comparator(capacity, C::default())
    }

    /// Creates a pool with an explicit comparator.
    #[inline]
    pub fn with_comparator(capacity: Option<usize>, comparator: C) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            capacity,
            comparator,
        }
    }

    /// Returns the retention capacity, `None` meaning unbounded.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns the number of currently retained networks.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns `true` if no network has been retained yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Returns `true` if the pool has reached its capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        match self.capacity {
            None => false,
            Some(cap) => self.entries.lock().unwrap().len() >= cap,
        }
    }

    /// Returns a clone of the current worst retained network, if any.
    #[inline]
    pub fn worst(&self) -> Option<N> {
        self.entries.lock().unwrap().last().cloned()
    }

    /// Returns a clone of the current best retained network, if any.
    #[inline]
    pub fn best(&self) -> Option<N> {
        self.entries.lock().unwrap().first().cloned()
    }

    /// Inserts `network` at its sorted position, stable after existing
    /// entries with an equal key, evicting the worst entry when the
    /// capacity is exceeded. Returns `true` if the candidate was retained.
    pub fn insert(&self, network: N) -> bool {
        if self.capacity == Some(0) {
            return false;
        }

        let mut entries = self.entries.lock().unwrap();
        let position = entries
            .partition_point(|entry| self.comparator.compare(entry, &network) != Ordering::Greater);
        entries.insert(position, network);

        if let Some(cap) = self.capacity {
            if entries.len() > cap {
                entries.pop();
                // The candidate itself was the evicted worst entry.
                return position < cap;
            }
        }
        true
    }

    /// Returns `true` if `candidate` cannot lead to a retained solution:
    /// the pool is full and `candidate` does not order strictly better than
    /// the current worst entry.
    ///
    /// Valid as a pruning predicate only under monotone bounds: every
    /// descendant leaf of a subproblem must order no better than the bound
    /// network passed here.
    pub fn is_dominated(&self, candidate: &N) -> bool {
        let Some(cap) = self.capacity else {
            return false;
        };
        let entries = self.entries.lock().unwrap();
        if entries.len() < cap {
            return false;
        }
        match entries.last() {
            Some(worst) => self.comparator.compare(candidate, worst) != Ordering::Less,
            None => false,
        }
    }

    /// Consumes the pool and returns the retained networks, best first.
    pub fn into_sorted_vec(self) -> Vec<N> {
        self.entries.into_inner().unwrap()
    }
}
