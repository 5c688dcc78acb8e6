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

//! # Material-Driven Subproblems (ABB)
//!
//! The accelerated branch-and-bound variant drives the search by demanded
//! materials: each branching step resolves who produces one material still
//! waiting for a producer. Its decision state is therefore richer than the
//! included/excluded pair, it also tracks which materials still need a
//! production decision and which are already settled.
//!
//! A subproblem is a leaf exactly when no material remains to be produced;
//! by construction such a leaf's included set is a complete solution
//! structure.

use crate::branching::ProducerChoice;
use crate::subproblem::{parallel_caps_respected, DecisionUnits, RootInitializer, Subproblem};
use pns_model::{
    id::{MaterialId, UnitId},
    problem::Problem,
    set::{MaterialSet, UnitSet},
};

/// Decision state of the material-driven branching variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbSubproblem {
    to_be_produced: MaterialSet,
    already_produced: MaterialSet,
    included: UnitSet,
    excluded: UnitSet,
}

impl AbbSubproblem {
    /// Creates a subproblem from explicit decision state.
    #[inline]
    pub fn new(
        to_be_produced: MaterialSet,
        already_produced: MaterialSet,
        included: UnitSet,
        excluded: UnitSet,
    ) -> Self {
        Self {
            to_be_produced,
            already_produced,
            included,
            excluded,
        }
    }

    /// Returns the materials still waiting for a production decision.
    #[inline]
    pub fn to_be_produced(&self) -> &MaterialSet {
        &self.to_be_produced
    }

    /// Returns the materials whose production decision is settled.
    #[inline]
    pub fn already_produced(&self) -> &MaterialSet {
        &self.already_produced
    }

    /// Builds the child that resolves `material` with the given producer
    /// choice: the chosen producers are included, the rejected candidates
    /// and mutual-exclusion partners excluded, and the chosen units' inputs
    /// join the demand frontier.
    pub(crate) fn apply_choice(
        &self,
        problem: &Problem,
        material: MaterialId,
        choice: &ProducerChoice,
    ) -> AbbSubproblem {
        let mut already_produced = self.already_produced.clone();
        already_produced.insert(material);

        let mut to_be_produced = self.to_be_produced.clone();
        to_be_produced.remove(material);
        for unit in choice.chosen.iter() {
            for input in problem.unit(unit).inputs().iter() {
                if !problem.raw_materials().contains(input) && !already_produced.contains(input) {
                    to_be_produced.insert(input);
                }
            }
        }

        AbbSubproblem {
            to_be_produced,
            already_produced,
            included: self.included.union(&choice.newly_included),
            excluded: self.excluded.union(&choice.newly_excluded),
        }
    }

    /// Resolves `material` with its sole remaining producer `unit` in
    /// place. Used by the ABB-specialized neutral extension; the caller has
    /// established that `unit` is the only non-excluded candidate.
    pub(crate) fn resolve_with_sole_producer(
        &mut self,
        problem: &Problem,
        material: MaterialId,
        unit: UnitId,
    ) {
        self.included.insert(unit);
        self.excluded
            .union_with(problem.mutually_exclusive_with(unit));
        self.to_be_produced.remove(material);
        self.already_produced.insert(material);
        for input in problem.unit(unit).inputs().iter() {
            if !problem.raw_materials().contains(input) && !self.already_produced.contains(input) {
                self.to_be_produced.insert(input);
            }
        }
    }
}

impl Subproblem for AbbSubproblem {
    #[inline]
    fn is_leaf(&self) -> bool {
        self.to_be_produced.is_empty()
    }

    fn is_error_free(&self, problem: &Problem) -> bool {
        self.included.is_disjoint(&self.excluded)
            && parallel_caps_respected(problem, &self.included)
    }
}

impl DecisionUnits for AbbSubproblem {
    #[inline]
    fn included_units(&self) -> &UnitSet {
        &self.included
    }

    #[inline]
    fn excluded_units(&self) -> &UnitSet {
        &self.excluded
    }

    // Including a unit here does not resolve any material: the unit simply
    // counts as an already-included producer once its materials come up for
    // decision, which is exactly how the branching combinatorics treat it.
    #[inline]
    fn include_units(&mut self, units: &UnitSet) {
        self.included.union_with(units);
    }

    #[inline]
    fn exclude_units(&mut self, units: &UnitSet) {
        self.excluded.union_with(units);
    }
}

/// Root factory of the material-driven variant: every product is demanded,
/// nothing is decided, and everything outside the universe is excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbbRootInitializer;

impl RootInitializer<AbbSubproblem> for AbbRootInitializer {
    fn root(&self, problem: &Problem, universe: &UnitSet) -> AbbSubproblem {
        AbbSubproblem::new(
            problem.products().clone(),
            MaterialSet::new(),
            UnitSet::new(),
            problem.operating_units().except(universe),
        )
    }
}
