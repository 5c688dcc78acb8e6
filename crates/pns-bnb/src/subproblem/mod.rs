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

//! # Subproblems
//!
//! A subproblem is a node of the branch-and-bound tree: the immutable
//! problem plus a partial set of decisions over the operating units. The
//! engine talks to subproblems through small capability traits instead of a
//! type hierarchy:
//!
//! * [`Subproblem`] is the minimum the engine needs: leafness and
//!   structural consistency.
//! * [`DecisionUnits`] is the get/set capability over the included and
//!   excluded unit sets. Branching extensions tighten any variant through
//!   this trait without knowing its other decision state.
//! * [`RootInitializer`] builds the root for a variant from the problem and
//!   the maximal-structure universe.
//!
//! Subproblems are values: branching clones and tightens, it never mutates
//! a parent. They form a tree and are retired once bounded and expanded.

use pns_model::{problem::Problem, set::UnitSet};

pub mod abb;
pub mod binary;

/// A node of the branch-and-bound search tree.
pub trait Subproblem: Clone + Send {
    /// Returns `true` when no decision remains to be made.
    fn is_leaf(&self) -> bool;

    /// Returns `true` when the decisions taken so far are structurally
    /// consistent: no unit is both included and excluded, and every
    /// parallel-production cap is respected by the included set.
    fn is_error_free(&self, problem: &Problem) -> bool;
}

/// The get/set capability over the included and excluded unit sets.
///
/// Implementations must keep their own derived decision state consistent
/// under these mutations; for instance, a variant tracking undecided units
/// removes newly included or excluded units from that set.
pub trait DecisionUnits {
    /// Returns the units decided into the network.
    fn included_units(&self) -> &UnitSet;

    /// Returns the units decided out of the network.
    fn excluded_units(&self) -> &UnitSet;

    /// Decides all of `units` into the network.
    fn include_units(&mut self, units: &UnitSet);

    /// Decides all of `units` out of the network.
    fn exclude_units(&mut self, units: &UnitSet);
}

/// Builds the root subproblem of a variant.
///
/// `universe` is the maximal-structure restriction computed once per run:
/// the root must exclude every unit outside of it.
pub trait RootInitializer<S>: Send + Sync {
    fn root(&self, problem: &Problem, universe: &UnitSet) -> S;
}

/// Shared error-free building block: every parallel-production cap must be
/// respected by the included set.
pub(crate) fn parallel_caps_respected(problem: &Problem, included: &UnitSet) -> bool {
    problem.parallel_production_caps().all(|(material, cap)| {
        problem.producers_of(material).intersect(included).len() <= cap as usize
    })
}
