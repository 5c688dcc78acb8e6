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

//! # Bounding
//!
//! The bounding seam between the engine and the caller's objective model.
//! A bounding function prices a subproblem: for a **leaf** it returns the
//! network with the exact objective (or the infeasible marker when the
//! decisions violate a constraint the decision state cannot see); for an
//! **intermediate** it returns a network whose order key is a valid lower
//! bound on every descendant leaf, or the infeasible marker to prune the
//! whole branch. Infeasibility is `None`, an expected high-frequency
//! outcome, never an error.
//!
//! The bundled `UnitCostModel`/`UnitCostBounder` pair implements the
//! simplest useful objective: a fixed non-negative cost per operating unit,
//! summed over the included set. Since costs are non-negative and branching
//! only ever adds units, the included-set sum is an admissible bound.

use crate::msg::structure_produces_products;
use crate::subproblem::{DecisionUnits, Subproblem};
use pns_core::num::saturating::SaturatingAddVal;
use pns_core::utils::side_map::SideMap;
use pns_model::{id::UnitId, network::CostNetwork, problem::Problem, set::UnitSet};
use pns_search::num::CostValue;

/// Prices subproblems into networks of type `N`, or prunes them.
///
/// Side effects are permitted (caching across calls through interior
/// mutability); such bounding functions are single-thread only unless they
/// synchronize internally.
pub trait BoundingFunction<S, N>: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the bound network, or `None` as the infeasible marker.
    fn bound(&self, problem: &Problem, subproblem: &S) -> Option<N>;
}

/// Fixed per-unit costs, kept in a side table next to the payload-free
/// model nodes.
#[derive(Debug, Clone, Default)]
pub struct UnitCostModel<T> {
    costs: SideMap<UnitId, T>,
}

impl<T> UnitCostModel<T>
where
    T: CostValue,
{
    /// Creates an empty cost model; unknown units cost zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            costs: SideMap::new(),
        }
    }

    /// Assigns a cost to a unit.
    ///
    /// # Panics
    ///
    /// Panics if `cost` is negative: bound admissibility rests on
    /// non-negative unit costs.
    pub fn set_cost(&mut self, unit: UnitId, cost: T) -> &mut Self {
        assert!(
            cost >= T::zero(),
            "called `UnitCostModel::set_cost` with negative cost {}",
            cost
        );
        self.costs.insert(unit, cost);
        self
    }

    /// Returns the cost of a unit, zero when unassigned.
    #[inline]
    pub fn cost_of(&self, unit: UnitId) -> T {
        *self.costs.get_or(unit, &T::zero())
    }

    /// Returns the saturating cost sum of a unit set.
    pub fn total_cost(&self, units: &UnitSet) -> T {
        units
            .iter()
            .fold(T::zero(), |sum, unit| sum.saturating_add_val(self.cost_of(unit)))
    }
}

/// Bounds any included/excluded-capable subproblem by the cost sum of its
/// included units; at leaves it additionally verifies that the included set
/// is a structurally complete network.
#[derive(Debug, Clone, Default)]
pub struct UnitCostBounder<T> {
    model: UnitCostModel<T>,
}

impl<T> UnitCostBounder<T>
where
    T: CostValue,
{
    #[inline]
    pub fn new(model: UnitCostModel<T>) -> Self {
        Self { model }
    }

    /// Returns the underlying cost model.
    #[inline]
    pub fn model(&self) -> &UnitCostModel<T> {
        &self.model
    }
}

impl<S, T> BoundingFunction<S, CostNetwork<T>> for UnitCostBounder<T>
where
    S: Subproblem + DecisionUnits,
    T: CostValue,
{
    fn name(&self) -> &str {
        "UnitCostBounder"
    }

    fn bound(&self, problem: &Problem, subproblem: &S) -> Option<CostNetwork<T>> {
        let included = subproblem.included_units();
        if subproblem.is_leaf() && !structure_produces_products(problem, included) {
            return None;
        }
        Some(CostNetwork::new(
            self.model.total_cost(included),
            included.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::{abb::AbbBrancher, Brancher};
    use crate::msg::maximal_structure;
    use crate::subproblem::abb::{AbbRootInitializer, AbbSubproblem};
    use crate::subproblem::binary::BinaryDecisionSubproblem;
    use crate::subproblem::RootInitializer;
    use crate::test_fixtures::seven_unit_problem;
    use pns_model::set::{MaterialSet, UnitSet};

    #[test]
    fn test_total_cost_sums_assigned_costs() {
        let f = seven_unit_problem();
        let costs = f.unit_costs();

        let units: UnitSet = [f.o1, f.o3, f.o4, f.o7].into_iter().collect();
        assert_eq!(costs.total_cost(&units), 34 + 12 + 87 + 52);
        assert_eq!(costs.total_cost(&UnitSet::new()), 0);
    }

    #[test]
    fn test_unassigned_units_cost_zero() {
        let f = seven_unit_problem();
        let costs: UnitCostModel<i64> = UnitCostModel::new();
        assert_eq!(costs.cost_of(f.o1), 0);
    }

    #[test]
    #[should_panic(expected = "negative cost")]
    fn test_negative_costs_are_rejected() {
        let f = seven_unit_problem();
        let mut costs: UnitCostModel<i64> = UnitCostModel::new();
        costs.set_cost(f.o1, -1);
    }

    #[test]
    fn test_intermediate_bound_prices_included_units() {
        let f = seven_unit_problem();
        let bounder = UnitCostBounder::new(f.unit_costs());

        let sub = AbbSubproblem::new(
            f.problem.products().clone(),
            MaterialSet::new(),
            [f.o1].into_iter().collect(),
            UnitSet::new(),
        );
        let network = bounder.bound(&f.problem, &sub).expect("intermediate bound");
        assert_eq!(network.cost(), 34);
    }

    #[test]
    fn test_incomplete_leaf_is_infeasible() {
        let f = seven_unit_problem();
        let bounder = UnitCostBounder::new(f.unit_costs());

        // A binary leaf that decided everything out produces nothing.
        let leaf = BinaryDecisionSubproblem::new(
            UnitSet::new(),
            UnitSet::new(),
            f.problem.operating_units().clone(),
        );
        let bound: Option<pns_model::network::CostNetwork<i64>> =
            bounder.bound(&f.problem, &leaf);
        assert!(bound.is_none());
    }

    #[test]
    fn test_bound_monotonicity_along_branching() {
        let f = seven_unit_problem();
        let bounder = UnitCostBounder::new(f.unit_costs());
        let universe = maximal_structure(&f.problem, f.problem.operating_units());
        let root = AbbRootInitializer.root(&f.problem, &universe);

        // Walk three levels of the branching tree: a child's bound never
        // orders below its parent's.
        let mut frontier = vec![root];
        for _ in 0..3 {
            let mut next = Vec::new();
            for parent in &frontier {
                let parent_bound = bounder
                    .bound(&f.problem, parent)
                    .expect("fixture subproblems are feasible");
                for child in AbbBrancher::new().branch(&f.problem, parent) {
                    let child_bound = bounder
                        .bound(&f.problem, &child)
                        .expect("fixture subproblems are feasible");
                    assert!(child_bound.cost() >= parent_bound.cost());
                    next.push(child);
                }
            }
            frontier = next;
        }
    }
}
