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

//! Branching strategies for process network synthesis
//!
//! Defines the branching seam and the producer-choice combinatorics shared
//! by the bundled branchers and the solution-structure enumeration. Every
//! brancher produces children with strictly tightened decision state and
//! applies deterministic ascending-id ordering so runs are reproducible.
//!
//! Provided branchers:
//! - `abb`: material-driven, resolves one demanded material per step by
//!   enumerating every valid producer subset.
//! - `binary`: unit-wise, decides one undecided unit in or out per step.

use pns_model::{
    id::{MaterialId, UnitId},
    problem::Problem,
    set::UnitSet,
};
use smallvec::SmallVec;

pub mod abb;
pub mod binary;

/// Generates the children of a subproblem.
///
/// Children must strictly tighten the parent's decision state (more
/// included or excluded units, never fewer); the engine's termination
/// argument rests on this.
pub trait Brancher<S>: Send + Sync {
    fn name(&self) -> &str;

    fn branch(&self, problem: &Problem, parent: &S) -> Vec<S>;
}

/// One valid way to decide the producers of a single material.
#[derive(Debug, Clone)]
pub(crate) struct ProducerChoice {
    /// All producers of the material in the child: the newly chosen ones
    /// plus those that were already included.
    pub chosen: UnitSet,
    /// The subset of `chosen` that is newly included by this choice.
    pub newly_included: UnitSet,
    /// Rejected candidates plus the mutual-exclusion partners of the newly
    /// included units.
    pub newly_excluded: UnitSet,
}

/// Enumerates every valid producer assignment for `material` given the
/// decisions taken so far.
///
/// The candidates are the producers of `material` that are neither included
/// nor excluded yet. Each subset of them is a potential choice, clipped by
/// the material's parallel-production cap (counting already-included
/// producers against it) and rejected when it conflicts with a mutual
/// exclusion. The empty subset is only valid when some producer is already
/// included; a demanded material without any producer prunes the branch by
/// yielding no choice at all.
///
/// Candidates that are not chosen become excluded in the child, which is
/// what makes the enumeration free of duplicates: a later decision can
/// never silently re-add a producer this decision rejected.
pub(crate) fn producer_choices(
    problem: &Problem,
    material: MaterialId,
    included: &UnitSet,
    excluded: &UnitSet,
) -> Vec<ProducerChoice> {
    let can_produce = problem.producers_of(material);
    let already_included = can_produce.intersect(included);

    let cap = problem.max_parallel_production_of(material);
    if let Some(cap) = cap {
        if already_included.len() > cap as usize {
            return Vec::new();
        }
    }
    let slack = cap.map(|cap| cap as usize - already_included.len());

    let candidate_list: SmallVec<[UnitId; 8]> = can_produce
        .except(included)
        .except(excluded)
        .ordered()
        .into_iter()
        .collect();
    assert!(
        candidate_list.len() < 64,
        "producer subset enumeration supports at most 63 undecided candidates, got {}",
        candidate_list.len()
    );

    let mut choices = Vec::new();
    for mask in 0u64..(1u64 << candidate_list.len()) {
        let subset_size = mask.count_ones() as usize;
        if let Some(slack) = slack {
            if subset_size > slack {
                continue;
            }
        }
        if subset_size == 0 && already_included.is_empty() {
            continue;
        }

        let mut newly_included = UnitSet::with_capacity(subset_size);
        let mut rejected = UnitSet::new();
        for (position, &candidate) in candidate_list.iter().enumerate() {
            if mask & (1u64 << position) != 0 {
                newly_included.insert(candidate);
            } else {
                rejected.insert(candidate);
            }
        }

        let mut partner_exclusions = UnitSet::new();
        for unit in newly_included.iter() {
            partner_exclusions.union_with(problem.mutually_exclusive_with(unit));
        }

        let chosen = already_included.union(&newly_included);
        if !partner_exclusions.is_disjoint(&chosen) || !partner_exclusions.is_disjoint(included) {
            continue;
        }

        let mut newly_excluded = rejected;
        newly_excluded.union_with(&partner_exclusions);

        choices.push(ProducerChoice {
            chosen,
            newly_included,
            newly_excluded,
        });
    }
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::seven_unit_problem;

    #[test]
    fn test_sole_producer_yields_single_choice() {
        let f = seven_unit_problem();
        let choices = producer_choices(&f.problem, f.a, &UnitSet::new(), &UnitSet::new());

        // A is produced by O1 only; the empty subset is invalid without an
        // included producer.
        assert_eq!(choices.len(), 1);
        assert!(choices[0].newly_included.contains(f.o1));
        // Choosing O1 excludes its mutual-exclusion partners O2 and O5.
        assert!(choices[0].newly_excluded.contains(f.o2));
        assert!(choices[0].newly_excluded.contains(f.o5));
    }

    #[test]
    fn test_mutually_exclusive_producers_cannot_be_chosen_together() {
        let f = seven_unit_problem();
        let choices = producer_choices(&f.problem, f.d, &UnitSet::new(), &UnitSet::new());

        // D is produced by O6 and O7, which are mutually exclusive: only
        // the two singleton choices survive.
        assert_eq!(choices.len(), 2);
        for choice in &choices {
            assert_eq!(choice.newly_included.len(), 1);
        }
    }

    #[test]
    fn test_cap_clips_subset_size() {
        let f = seven_unit_problem();

        // In the D-capped variant the cap makes the joint choice invalid
        // even before the mutual exclusion does.
        let choices =
            producer_choices(&f.capped_d_problem, f.d, &UnitSet::new(), &UnitSet::new());
        assert_eq!(choices.len(), 2);

        // An already-included producer uses up the cap: only the empty
        // subset remains.
        let included: UnitSet = [f.o6].into_iter().collect();
        let choices = producer_choices(&f.capped_d_problem, f.d, &included, &UnitSet::new());
        assert_eq!(choices.len(), 1);
        assert!(choices[0].newly_included.is_empty());
        assert!(choices[0].chosen.contains(f.o6));
    }

    #[test]
    fn test_cap_already_exceeded_prunes_entirely() {
        let f = seven_unit_problem();
        let included: UnitSet = [f.o6, f.o7].into_iter().collect();
        let choices = producer_choices(&f.capped_d_problem, f.d, &included, &UnitSet::new());
        assert!(choices.is_empty());
    }

    #[test]
    fn test_material_without_producers_has_no_choice() {
        let f = seven_unit_problem();
        let excluded: UnitSet = [f.o6, f.o7].into_iter().collect();
        let choices = producer_choices(&f.problem, f.d, &UnitSet::new(), &excluded);
        assert!(choices.is_empty());
    }

    #[test]
    fn test_empty_subset_valid_with_included_producer() {
        let f = seven_unit_problem();
        let included: UnitSet = [f.o6].into_iter().collect();
        let excluded: UnitSet = [f.o7].into_iter().collect();
        let choices = producer_choices(&f.problem, f.h, &included, &excluded);

        assert_eq!(choices.len(), 1);
        assert!(choices[0].newly_included.is_empty());
        assert_eq!(choices[0].chosen, included);
    }

    #[test]
    fn test_uncapped_material_enumerates_the_power_set() {
        let f = seven_unit_problem();

        // B is produced by O2 and O3 (no cap, no mutual exclusion between
        // them): {O2}, {O3}, {O2, O3}.
        let choices = producer_choices(&f.problem, f.b, &UnitSet::new(), &UnitSet::new());
        assert_eq!(choices.len(), 3);
    }
}
