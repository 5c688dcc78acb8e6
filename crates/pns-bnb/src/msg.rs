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

//! # Maximal Structure Generation (MSG)
//!
//! Computes the maximal set of operating units that could possibly appear
//! in *any* feasible path from raw materials to the declared products. The
//! result is the search universe every other algorithm starts from: SSG
//! enumerates inside it, the engine's root excludes everything outside it,
//! and the reduced-structure extension re-runs it per subproblem.
//!
//! ## Algorithm
//!
//! 1. **Reduction**: start from the allowed units minus any unit that
//!    produces a raw material (raw materials must never be produced). Then
//!    iterate to a fixed point: a material that is neither raw nor an
//!    output of the surviving units can never be supplied, so every unit
//!    consuming it is removed; removals can orphan further materials. If at
//!    any point the surviving outputs no longer cover the products, there
//!    is no solution.
//! 2. **Composition**: walk the demand closure backwards from the products,
//!    pulling in every surviving producer of every demanded material and
//!    demanding their non-raw inputs in turn.
//!
//! "No solution" is represented as the **empty set**, never as an error;
//! callers short-circuit on emptiness before building roots or enumerating.

use pns_model::{
    problem::Problem,
    set::{MaterialSet, UnitSet},
};
use std::cell::OnceCell;

/// Union of the outputs of `units`.
fn produced_materials(problem: &Problem, units: &UnitSet) -> MaterialSet {
    let mut produced = MaterialSet::new();
    for unit in units.iter() {
        produced.union_with(problem.unit(unit).outputs());
    }
    produced
}

/// Computes the maximal structure of `problem` restricted to the `allowed`
/// unit set. Returns the empty set when no feasible structure exists.
pub fn maximal_structure(problem: &Problem, allowed: &UnitSet) -> UnitSet {
    // Units producing a raw material are structurally invalid from the
    // start.
    let mut units: UnitSet = allowed
        .iter()
        .filter(|&unit| {
            problem
                .unit(unit)
                .outputs()
                .is_disjoint(problem.raw_materials())
        })
        .collect();

    let mut produced = produced_materials(problem, &units);
    if !produced.is_superset(problem.products()) {
        return UnitSet::new();
    }

    // Reduction fixed point over the non-produced material frontier.
    let mut processed = MaterialSet::new();
    let mut frontier = problem
        .materials()
        .except(problem.raw_materials())
        .except(&produced);

    while !frontier.is_empty() {
        for material in frontier.ordered() {
            let doomed = problem.consumers_of(material).intersect(&units);
            units.except_with(&doomed);
        }
        processed.union_with(&frontier);

        produced = produced_materials(problem, &units);
        if !produced.is_superset(problem.products()) {
            return UnitSet::new();
        }
        frontier = problem
            .materials()
            .except(problem.raw_materials())
            .except(&produced)
            .except(&processed);
    }

    // Composition: demand closure from the products.
    let mut included = UnitSet::new();
    let mut pending = problem.products().clone();
    let mut visited = MaterialSet::new();

    while let Some(&material) = pending.ordered().first() {
        pending.remove(material);
        visited.insert(material);

        for unit in problem.producers_of(material).intersect(&units).iter() {
            if included.insert(unit) {
                for input in problem.unit(unit).inputs().iter() {
                    if !problem.raw_materials().contains(input) && !visited.contains(input) {
                        pending.insert(input);
                    }
                }
            }
        }
    }

    included
}

/// Checks whether `units` forms a structurally complete network: every
/// product and every non-raw input of a demanded unit has an included
/// producer, and every included unit produces at least one demanded
/// material.
pub fn structure_produces_products(problem: &Problem, units: &UnitSet) -> bool {
    let mut demanded = problem.products().clone();
    let mut processed = MaterialSet::new();
    let mut justified = UnitSet::new();

    while let Some(&material) = demanded.except(&processed).ordered().first() {
        processed.insert(material);

        let producers = problem.producers_of(material).intersect(units);
        if producers.is_empty() {
            return false;
        }
        for unit in producers.iter() {
            if justified.insert(unit) {
                for input in problem.unit(unit).inputs().iter() {
                    if !problem.raw_materials().contains(input) {
                        demanded.insert(input);
                    }
                }
            }
        }
    }

    justified.len() == units.len()
}

/// Lazily computed maximal structure for a problem, optionally restricted
/// to a base unit set.
///
/// The result is computed once per instance on first access and cached.
#[derive(Debug)]
pub struct MaximalStructureGenerator<'p> {
    problem: &'p Problem,
    base_units: Option<UnitSet>,
    cache: OnceCell<UnitSet>,
}

impl<'p> MaximalStructureGenerator<'p> {
    /// Generates over every operating unit of the problem.
    #[inline]
    pub fn new(problem: &'p Problem) -> Self {
        Self {
            problem,
            base_units: None,
            cache: OnceCell::new(),
        }
    }

    /// Generates over the given base unit set only.
    #[inline]
    pub fn with_base_units(problem: &'p Problem, base_units: UnitSet) -> Self {
        Self {
            problem,
            base_units: Some(base_units),
            cache: OnceCell::new(),
        }
    }

    /// Returns the maximal structure, computing it on first call.
    pub fn maximal_structure(&self) -> &UnitSet {
        self.cache.get_or_init(|| {
            let allowed = self
                .base_units
                .as_ref()
                .unwrap_or_else(|| self.problem.operating_units());
            maximal_structure(self.problem, allowed)
        })
    }
}
