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

use crate::branching::{producer_choices, Brancher};
use crate::subproblem::abb::AbbSubproblem;
use crate::subproblem::DecisionUnits;
use pns_model::problem::Problem;

/// Material-driven branching: resolve the smallest-id demanded material by
/// enumerating every valid producer subset for it.
///
/// The choice of material is a heuristic degree of freedom; any demanded
/// material is correct. Smallest-id keeps runs reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbbBrancher;

impl AbbBrancher {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Brancher<AbbSubproblem> for AbbBrancher {
    fn name(&self) -> &str {
        "AbbBrancher"
    }

    fn branch(&self, problem: &Problem, parent: &AbbSubproblem) -> Vec<AbbSubproblem> {
        let Some(&material) = parent.to_be_produced().ordered().first() else {
            return Vec::new();
        };

        producer_choices(
            problem,
            material,
            parent.included_units(),
            parent.excluded_units(),
        )
        .iter()
        .map(|choice| parent.apply_choice(problem, material, choice))
        .collect()
    }
}
