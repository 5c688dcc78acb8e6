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

//! # Solution Networks
//!
//! A network denotes a (possibly partial) candidate solution: the set of
//! included operating units plus whatever payload the bounding collaborator
//! attaches (objective value, per-unit capacities). Networks must be totally
//! ordered; the engine uses that order both to prioritize the frontier and
//! to retain the n best solutions.
//!
//! The ordering contract is load-bearing: for a network bounding a **leaf**
//! subproblem the order key is the exact objective, while for an
//! **intermediate** subproblem it must be a valid lower bound, i.e. no
//! descendant leaf may order strictly better. Pruning correctness rests on
//! this monotonicity.

use crate::set::UnitSet;
use num_traits::{PrimInt, Signed};

/// A totally ordered candidate solution carrying its included units.
pub trait Network: Clone + Ord + Send {
    /// Returns the operating units included in this network.
    fn unit_set(&self) -> &UnitSet;
}

/// A network ordered by a single accumulated cost.
///
/// Ties on cost are broken by the ordered unit-id listing, which makes the
/// order total and deterministic regardless of hash iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostNetwork<T> {
    cost: T,
    units: UnitSet,
}

impl<T> CostNetwork<T>
where
    T: PrimInt + Signed,
{
    /// Creates a network with the given cost and included units.
    #[inline]
    pub fn new(cost: T, units: UnitSet) -> Self {
        Self { cost, units }
    }

    /// Returns the accumulated cost of this network.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }
}

impl<T> Network for CostNetwork<T>
where
    T: PrimInt + Signed + Send,
{
    #[inline]
    fn unit_set(&self) -> &UnitSet {
        &self.units
    }
}

impl<T> Ord for CostNetwork<T>
where
    T: PrimInt + Signed,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.units.ordered().cmp(&other.units.ordered()))
    }
}

impl<T> PartialOrd for CostNetwork<T>
where
    T: PrimInt + Signed,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> std::fmt::Display for CostNetwork<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = self
            .units
            .ordered()
            .iter()
            .map(|id| id.get().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "CostNetwork(cost: {}, units: [{}])", self.cost, units)
    }
}
