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

//! # Neutral Extension
//!
//! Fixed-point propagation of forced producer choices. When a demanded
//! material has exactly one remaining candidate producer and none included
//! yet, including that producer loses no generality: every feasible
//! completion must contain it anyway. Including it may force further
//! choices (through its inputs and its mutual exclusions), so the pass
//! loops until no forced move remains.
//!
//! Two implementations share the rule: `NeutralExtension` works over any
//! subproblem exposing the included/excluded capability by recomputing the
//! demand closure; `AbbNeutralExtension` reads the demand frontier directly
//! off the ABB decision fields and also settles the forced material.

use crate::extension::{BranchingExtension, ExtensionResult};
use crate::subproblem::abb::AbbSubproblem;
use crate::subproblem::{DecisionUnits, Subproblem};
use pns_model::{
    id::{MaterialId, UnitId},
    problem::Problem,
    set::{MaterialSet, UnitSet},
};

/// The materials that must be produced given the current inclusions: the
/// products plus every non-raw input of an included unit.
fn demanded_materials<S: DecisionUnits>(problem: &Problem, subproblem: &S) -> MaterialSet {
    let mut demanded = problem.products().clone();
    for unit in subproblem.included_units().iter() {
        for input in problem.unit(unit).inputs().iter() {
            if !problem.raw_materials().contains(input) {
                demanded.insert(input);
            }
        }
    }
    demanded
}

/// The outcome of scanning the demand frontier for a forced choice.
enum ForcedMove {
    None,
    Include(MaterialId, UnitId),
    Infeasible,
}

fn find_forced_move<I>(
    problem: &Problem,
    demanded: I,
    included: &UnitSet,
    excluded: &UnitSet,
) -> ForcedMove
where
    I: IntoIterator<Item = MaterialId>,
{
    for material in demanded {
        let candidates = problem.producers_of(material).except(excluded);
        if candidates.is_empty() {
            return ForcedMove::Infeasible;
        }
        if candidates.len() == 1 && candidates.is_disjoint(included) {
            let unit = candidates.ordered()[0];
            return ForcedMove::Include(material, unit);
        }
    }
    ForcedMove::None
}

/// The variant-independent neutral extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralExtension;

impl<S> BranchingExtension<S> for NeutralExtension
where
    S: Subproblem + DecisionUnits,
{
    fn name(&self) -> &str {
        "NeutralExtension"
    }

    fn apply(&self, problem: &Problem, subproblem: &mut S) -> ExtensionResult {
        loop {
            let demanded = demanded_materials(problem, subproblem);
            let forced = find_forced_move(
                problem,
                demanded.ordered(),
                subproblem.included_units(),
                subproblem.excluded_units(),
            );

            let (_, unit) = match forced {
                ForcedMove::None => return ExtensionResult::Feasible,
                ForcedMove::Infeasible => return ExtensionResult::Infeasible,
                ForcedMove::Include(material, unit) => (material, unit),
            };

            let partners = problem.mutually_exclusive_with(unit);
            if !partners.is_disjoint(subproblem.included_units()) {
                return ExtensionResult::Infeasible;
            }
            subproblem.include_units(&[unit].into_iter().collect());
            subproblem.exclude_units(partners);

            if !subproblem.is_error_free(problem) {
                return ExtensionResult::Infeasible;
            }
        }
    }
}

/// The ABB-specialized neutral extension: reads the demand frontier off the
/// subproblem and settles the forced material while including its sole
/// producer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbbNeutralExtension;

impl BranchingExtension<AbbSubproblem> for AbbNeutralExtension {
    fn name(&self) -> &str {
        "AbbNeutralExtension"
    }

    fn apply(&self, problem: &Problem, subproblem: &mut AbbSubproblem) -> ExtensionResult {
        loop {
            let forced = find_forced_move(
                problem,
                subproblem.to_be_produced().ordered(),
                subproblem.included_units(),
                subproblem.excluded_units(),
            );

            let (material, unit) = match forced {
                ForcedMove::None => return ExtensionResult::Feasible,
                ForcedMove::Infeasible => return ExtensionResult::Infeasible,
                ForcedMove::Include(material, unit) => (material, unit),
            };

            let partners = problem.mutually_exclusive_with(unit);
            if !partners.is_disjoint(subproblem.included_units()) {
                return ExtensionResult::Infeasible;
            }
            subproblem.resolve_with_sole_producer(problem, material, unit);

            if !subproblem.is_error_free(problem) {
                return ExtensionResult::Infeasible;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::maximal_structure;
    use crate::subproblem::abb::AbbRootInitializer;
    use crate::subproblem::binary::BinaryRootInitializer;
    use crate::subproblem::RootInitializer;
    use crate::test_fixtures::seven_unit_problem;

    #[test]
    fn test_generic_pass_forces_the_sole_product_producer() {
        let f = seven_unit_problem();
        let universe = f.problem.operating_units().clone();
        let mut sub = BinaryRootInitializer.root(&f.problem, &universe);

        let verdict = NeutralExtension.apply(&f.problem, &mut sub);
        assert_eq!(verdict, ExtensionResult::Feasible);

        // O1 is the only producer of the product A: forced in, and its
        // mutual-exclusion partners O2 and O5 go out. That in turn leaves
        // O3 as the sole producer of B and O4 as the sole producer of C.
        assert!(sub.included_units().contains(f.o1));
        assert!(sub.excluded_units().contains(f.o2));
        assert!(sub.excluded_units().contains(f.o5));
        assert!(sub.included_units().contains(f.o3));
        assert!(sub.included_units().contains(f.o4));
        // D and H keep two candidates each; no further move is forced.
        assert!(!sub.included_units().contains(f.o6));
        assert!(!sub.included_units().contains(f.o7));
    }

    #[test]
    fn test_abb_pass_also_settles_the_forced_materials() {
        let f = seven_unit_problem();
        let universe = maximal_structure(&f.problem, f.problem.operating_units());
        let mut sub = AbbRootInitializer.root(&f.problem, &universe);

        let verdict = AbbNeutralExtension.apply(&f.problem, &mut sub);
        assert_eq!(verdict, ExtensionResult::Feasible);

        assert!(sub.included_units().contains(f.o1));
        assert!(sub.included_units().contains(f.o3));
        assert!(sub.included_units().contains(f.o4));
        // A, B, and C are settled; D and H remain demanded with two
        // candidates each.
        assert!(sub.already_produced().contains(f.a));
        assert!(sub.already_produced().contains(f.b));
        assert!(sub.already_produced().contains(f.c));
        assert!(sub.to_be_produced().contains(f.d));
        assert!(sub.to_be_produced().contains(f.h));
    }

    #[test]
    fn test_demanded_material_without_producers_is_infeasible() {
        let f = seven_unit_problem();
        let universe = f.problem.operating_units().clone();
        let mut sub = BinaryRootInitializer.root(&f.problem, &universe);

        // Nothing can produce the product once O1 is excluded.
        sub.exclude_units(&[f.o1].into_iter().collect());
        let verdict = NeutralExtension.apply(&f.problem, &mut sub);
        assert_eq!(verdict, ExtensionResult::Infeasible);
    }

    #[test]
    fn test_forced_inclusion_conflicting_with_partners_is_infeasible() {
        let f = seven_unit_problem();
        let universe = f.problem.operating_units().clone();
        let mut sub = BinaryRootInitializer.root(&f.problem, &universe);

        // With O2 already included, forcing O1 (sole producer of A) hits
        // the {O1, O2, O5} exclusion group.
        sub.include_units(&[f.o2].into_iter().collect());
        let verdict = NeutralExtension.apply(&f.problem, &mut sub);
        assert_eq!(verdict, ExtensionResult::Infeasible);
    }
}
