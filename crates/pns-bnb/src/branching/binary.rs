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

use crate::branching::Brancher;
use crate::subproblem::binary::BinaryDecisionSubproblem;
use crate::subproblem::DecisionUnits;
use pns_model::{problem::Problem, set::UnitSet};

/// Unit-wise branching: pick the smallest-id undecided unit and yield
/// exactly two children, one including it (and transitively excluding its
/// mutual-exclusion partners), one excluding it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryBrancher;

impl BinaryBrancher {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Brancher<BinaryDecisionSubproblem> for BinaryBrancher {
    fn name(&self) -> &str {
        "BinaryBrancher"
    }

    fn branch(
        &self,
        problem: &Problem,
        parent: &BinaryDecisionSubproblem,
    ) -> Vec<BinaryDecisionSubproblem> {
        let Some(&unit) = parent.undecided_units().ordered().first() else {
            return Vec::new();
        };
        let decided: UnitSet = [unit].into_iter().collect();

        let mut with_unit = parent.clone();
        with_unit.include_units(&decided);
        with_unit.exclude_units(problem.mutually_exclusive_with(unit));

        let mut without_unit = parent.clone();
        without_unit.exclude_units(&decided);

        vec![with_unit, without_unit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subproblem::binary::BinaryRootInitializer;
    use crate::subproblem::{RootInitializer, Subproblem};
    use crate::test_fixtures::seven_unit_problem;

    #[test]
    fn test_branch_yields_include_and_exclude_children() {
        let f = seven_unit_problem();
        let universe = f.problem.operating_units().clone();
        let root = BinaryRootInitializer.root(&f.problem, &universe);

        let children = BinaryBrancher::new().branch(&f.problem, &root);
        assert_eq!(children.len(), 2);

        // Smallest id first: O1. Including it excludes its partners O2 and
        // O5.
        let with_unit = &children[0];
        assert!(with_unit.included_units().contains(f.o1));
        assert!(with_unit.excluded_units().contains(f.o2));
        assert!(with_unit.excluded_units().contains(f.o5));
        assert_eq!(with_unit.undecided_units().len(), 4);

        let without_unit = &children[1];
        assert!(without_unit.excluded_units().contains(f.o1));
        assert!(!without_unit.included_units().contains(f.o1));
        assert_eq!(without_unit.undecided_units().len(), 6);
    }

    #[test]
    fn test_branching_terminates_at_leaves() {
        let f = seven_unit_problem();
        let universe = f.problem.operating_units().clone();
        let mut sub = BinaryRootInitializer.root(&f.problem, &universe);

        // Walking the include-first spine decides every unit eventually.
        let mut guard = 0;
        while !sub.is_leaf() {
            sub = BinaryBrancher::new()
                .branch(&f.problem, &sub)
                .into_iter()
                .next()
                .expect("non-leaf subproblems branch");
            guard += 1;
            assert!(guard <= 7, "branching must terminate");
        }
        assert!(BinaryBrancher::new().branch(&f.problem, &sub).is_empty());
    }
}
