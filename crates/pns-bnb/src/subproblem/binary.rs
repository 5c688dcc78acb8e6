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

//! # Unit-Wise Binary Subproblems
//!
//! The simplest branching variant: every operating unit of the universe is
//! an independent in-or-out decision. State is the tripartition of the
//! universe into included, excluded, and undecided units; a leaf has
//! decided everything. Whether a leaf's included set actually produces the
//! products is for the bounding function to check, the variant itself only
//! guards structural consistency of the decisions.

use crate::subproblem::{parallel_caps_respected, DecisionUnits, RootInitializer, Subproblem};
use pns_model::{problem::Problem, set::UnitSet};

/// Decision state of the unit-wise binary variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryDecisionSubproblem {
    undecided: UnitSet,
    included: UnitSet,
    excluded: UnitSet,
}

impl BinaryDecisionSubproblem {
    /// Creates a subproblem from explicit decision state.
    #[inline]
    pub fn new(undecided: UnitSet, included: UnitSet, excluded: UnitSet) -> Self {
        Self {
            undecided,
            included,
            excluded,
        }
    }

    /// Returns the units still awaiting a decision.
    #[inline]
    pub fn undecided_units(&self) -> &UnitSet {
        &self.undecided
    }
}

impl Subproblem for BinaryDecisionSubproblem {
    #[inline]
    fn is_leaf(&self) -> bool {
        self.undecided.is_empty()
    }

    fn is_error_free(&self, problem: &Problem) -> bool {
        self.included.is_disjoint(&self.excluded)
            && parallel_caps_respected(problem, &self.included)
    }
}

impl DecisionUnits for BinaryDecisionSubproblem {
    #[inline]
    fn included_units(&self) -> &UnitSet {
        &self.included
    }

    #[inline]
    fn excluded_units(&self) -> &UnitSet {
        &self.excluded
    }

    #[inline]
    fn include_units(&mut self, units: &UnitSet) {
        self.included.union_with(units);
        self.undecided.except_with(units);
    }

    #[inline]
    fn exclude_units(&mut self, units: &UnitSet) {
        self.excluded.union_with(units);
        self.undecided.except_with(units);
    }
}

/// Root factory of the binary variant: the whole universe is undecided and
/// everything outside it is excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryRootInitializer;

impl RootInitializer<BinaryDecisionSubproblem> for BinaryRootInitializer {
    fn root(&self, problem: &Problem, universe: &UnitSet) -> BinaryDecisionSubproblem {
        BinaryDecisionSubproblem::new(
            universe.clone(),
            UnitSet::new(),
            problem.operating_units().except(universe),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::seven_unit_problem;

    #[test]
    fn test_root_leaves_everything_undecided() {
        let f = seven_unit_problem();
        let universe = f.problem.operating_units().clone();
        let root = BinaryRootInitializer.root(&f.problem, &universe);

        assert_eq!(root.undecided_units().len(), 7);
        assert!(root.included_units().is_empty());
        assert!(root.excluded_units().is_empty());
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_capability_mutations_keep_tripartition() {
        let f = seven_unit_problem();
        let universe = f.problem.operating_units().clone();
        let mut sub = BinaryRootInitializer.root(&f.problem, &universe);

        let include: UnitSet = [f.o1].into_iter().collect();
        let exclude: UnitSet = [f.o2].into_iter().collect();
        sub.include_units(&include);
        sub.exclude_units(&exclude);

        assert!(sub.included_units().contains(f.o1));
        assert!(sub.excluded_units().contains(f.o2));
        assert!(!sub.undecided_units().contains(f.o1));
        assert!(!sub.undecided_units().contains(f.o2));
        assert_eq!(sub.undecided_units().len(), 5);
        assert!(sub.is_error_free(&f.problem));
    }

    #[test]
    fn test_error_free_rejects_cap_violation() {
        let f = seven_unit_problem();

        // O6 and O7 both produce material D; capping D at one producer
        // makes their joint inclusion inconsistent.
        let mut sub = BinaryRootInitializer.root(&f.capped_d_problem, &f.capped_d_problem.operating_units().clone());
        let both: UnitSet = [f.o6, f.o7].into_iter().collect();
        sub.include_units(&both);

        assert!(!sub.is_error_free(&f.capped_d_problem));
    }
}
