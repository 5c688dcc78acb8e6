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

//! The open list: the explicit search frontier of the non-recursive
//! traversal strategies. Entries pair a subproblem with its bound network.
//!
//! Two disciplines share the container: the ordered discipline keeps the
//! list sorted by the bound comparator (pop = next-best bound, best-first),
//! the LIFO discipline pushes and pops at the head (explicit-stack
//! depth-first). Ordered insertion scans to the position after any equal
//! keys, so equal-bound entries keep their arrival order.

use pns_search::pool::NetworkComparator;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// A frontier entry: a subproblem awaiting expansion and the bound network
/// that justified keeping it.
#[derive(Debug, Clone)]
pub(crate) struct OpenEntry<S, N> {
    pub subproblem: S,
    pub bound: N,
}

/// The insertion/removal discipline of an open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Discipline {
    /// Keep sorted by bound; pop the best.
    Ordered,
    /// Push and pop at the head.
    Lifo,
}

/// The explicit search frontier.
#[derive(Debug)]
pub(crate) struct OpenList<S, N> {
    entries: VecDeque<OpenEntry<S, N>>,
    discipline: Discipline,
}

impl<S, N> OpenList<S, N> {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            entries: VecDeque::new(),
            discipline,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry according to the discipline.
    pub fn push<C>(&mut self, entry: OpenEntry<S, N>, comparator: &C)
    where
        C: NetworkComparator<N>,
    {
        match self.discipline {
            Discipline::Lifo => self.entries.push_front(entry),
            Discipline::Ordered => {
                let position = self
                    .entries
                    .iter()
                    .position(|existing| {
                        comparator.compare(&existing.bound, &entry.bound) == Ordering::Greater
                    })
                    .unwrap_or(self.entries.len());
                self.entries.insert(position, entry);
            }
        }
    }

    /// Removes and returns the head entry.
    pub fn pop(&mut self) -> Option<OpenEntry<S, N>> {
        self.entries.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pns_search::pool::ByNetworkOrd;

    fn entry(bound: i64, tag: u32) -> OpenEntry<u32, i64> {
        OpenEntry {
            subproblem: tag,
            bound,
        }
    }

    #[test]
    fn test_ordered_pops_best_first() {
        let mut list = OpenList::new(Discipline::Ordered);
        for (bound, tag) in [(30, 0), (10, 1), (20, 2)] {
            list.push(entry(bound, tag), &ByNetworkOrd);
        }

        let bounds: Vec<i64> = std::iter::from_fn(|| list.pop().map(|e| e.bound)).collect();
        assert_eq!(bounds, vec![10, 20, 30]);
    }

    #[test]
    fn test_ordered_keeps_arrival_order_on_ties() {
        let mut list = OpenList::new(Discipline::Ordered);
        for tag in 0..3 {
            list.push(entry(10, tag), &ByNetworkOrd);
        }
        list.push(entry(5, 99), &ByNetworkOrd);

        let tags: Vec<u32> = std::iter::from_fn(|| list.pop().map(|e| e.subproblem)).collect();
        assert_eq!(tags, vec![99, 0, 1, 2]);
    }

    #[test]
    fn test_lifo_pops_most_recent_first() {
        let mut list = OpenList::new(Discipline::Lifo);
        for (bound, tag) in [(30, 0), (10, 1), (20, 2)] {
            list.push(entry(bound, tag), &ByNetworkOrd);
        }

        let tags: Vec<u32> = std::iter::from_fn(|| list.pop().map(|e| e.subproblem)).collect();
        assert_eq!(tags, vec![2, 1, 0]);
    }

    #[test]
    fn test_empty_list_pops_none() {
        let mut list: OpenList<u32, i64> = OpenList::new(Discipline::Ordered);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.pop().is_none());
    }
}
