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

//! # Solution Structure Generation (SSG)
//!
//! Enumerates *all* structurally feasible solution structures of a problem,
//! each expressed as an operating-unit set. SSG is purely combinatorial: it
//! honors mutual exclusions and parallel-production caps but knows nothing
//! about objectives.
//!
//! The enumeration is the recursive backtracking over material decisions
//! that also powers the material-driven brancher: resolve one demanded
//! material, try every valid producer subset, recurse until nothing is
//! demanded. The maximal structure serves as a pruning prefilter; when it
//! is empty there is nothing to enumerate.
//!
//! The result is order-independent as a *set* of structures; the sequence
//! follows the deterministic ascending-id decision order and contains no
//! duplicates.

use crate::branching::{Brancher, abb::AbbBrancher};
use crate::msg::maximal_structure;
use crate::subproblem::abb::{AbbRootInitializer, AbbSubproblem};
use crate::subproblem::{DecisionUnits, RootInitializer, Subproblem};
use pns_model::{problem::Problem, set::UnitSet};

/// Enumerator of all solution structures of a problem, optionally
/// restricted to a base unit set.
#[derive(Debug)]
pub struct SolutionStructureGenerator<'p> {
    problem: &'p Problem,
    base_units: Option<UnitSet>,
}

impl<'p> SolutionStructureGenerator<'p> {
    /// Enumerates over every operating unit of the problem.
    #[inline]
    pub fn new(problem: &'p Problem) -> Self {
        Self {
            problem,
            base_units: None,
        }
    }

    /// Enumerates over the given base unit set only.
    #[inline]
    pub fn with_base_units(problem: &'p Problem, base_units: UnitSet) -> Self {
        Self {
            problem,
            base_units: Some(base_units),
        }
    }

    /// Returns every structurally feasible solution structure.
    pub fn solution_structures(&self) -> Vec<UnitSet> {
        let allowed = self
            .base_units
            .as_ref()
            .unwrap_or_else(|| self.problem.operating_units());
        let universe = maximal_structure(self.problem, allowed);
        if universe.is_empty() {
            return Vec::new();
        }

        let root = AbbRootInitializer.root(self.problem, &universe);
        let mut structures = Vec::new();
        self.enumerate(&root, &mut structures);
        structures
    }

    fn enumerate(&self, subproblem: &AbbSubproblem, structures: &mut Vec<UnitSet>) {
        if !subproblem.is_error_free(self.problem) {
            return;
        }
        if subproblem.is_leaf() {
            structures.push(subproblem.included_units().clone());
            return;
        }
        for child in AbbBrancher::new().branch(self.problem, subproblem) {
            self.enumerate(&child, structures);
        }
    }
}
