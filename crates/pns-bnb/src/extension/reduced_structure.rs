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

use crate::extension::{BranchingExtension, ExtensionResult};
use crate::msg::maximal_structure;
use crate::subproblem::{DecisionUnits, Subproblem};
use pns_model::problem::Problem;

/// Re-runs maximal structure generation on the not-yet-excluded units and
/// folds everything it drops into the excluded set.
///
/// A unit the reduced structure drops can structurally never contribute to
/// a completion of this subproblem; excluding it now shrinks every later
/// branching step. When the reduced structure drops an already included
/// unit, or collapses entirely while products are still demanded, no
/// feasible completion exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReducedStructureExtension;

impl<S> BranchingExtension<S> for ReducedStructureExtension
where
    S: Subproblem + DecisionUnits,
{
    fn name(&self) -> &str {
        "ReducedStructureExtension"
    }

    fn apply(&self, problem: &Problem, subproblem: &mut S) -> ExtensionResult {
        let allowed = problem
            .operating_units()
            .except(subproblem.excluded_units());
        let reduced = maximal_structure(problem, &allowed);

        if reduced.is_empty() && !problem.products().is_empty() {
            return ExtensionResult::Infeasible;
        }

        let drops = allowed.except(&reduced);
        if !drops.is_disjoint(subproblem.included_units()) {
            return ExtensionResult::Infeasible;
        }
        if !drops.is_empty() {
            subproblem.exclude_units(&drops);
        }
        ExtensionResult::Feasible
    }
}
