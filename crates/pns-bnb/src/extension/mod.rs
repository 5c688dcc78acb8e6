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

//! # Branching Extensions
//!
//! Composable tightening passes applied to every child a brancher
//! produces, before bounding. An extension either declares the child
//! infeasible or tightens its included/excluded sets further, shrinking the
//! branching factor below it. Extensions work through the `DecisionUnits`
//! capability, so the same pass serves any subproblem variant; the ABB
//! specialization additionally maintains the material bookkeeping of its
//! variant.
//!
//! Dropping a child because an extension declared it infeasible is a
//! legitimate prune, not an error.

use crate::subproblem::abb::AbbSubproblem;
use crate::subproblem::{DecisionUnits, Subproblem};
use pns_model::problem::Problem;

pub mod neutral;
pub mod reduced_structure;

pub use neutral::{AbbNeutralExtension, NeutralExtension};
pub use reduced_structure::ReducedStructureExtension;

/// The verdict of a tightening pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionResult {
    /// The subproblem remains viable (possibly tightened).
    Feasible,
    /// No feasible completion exists below this subproblem.
    Infeasible,
}

/// A subproblem-tightening pass pluggable into any branching function.
pub trait BranchingExtension<S>: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, problem: &Problem, subproblem: &mut S) -> ExtensionResult;
}

/// The default extension set for any subproblem variant exposing the
/// included/excluded capability.
pub fn default_extensions<S>() -> Vec<Box<dyn BranchingExtension<S>>>
where
    S: Subproblem + DecisionUnits + 'static,
{
    vec![
        Box::new(ReducedStructureExtension),
        Box::new(NeutralExtension),
    ]
}

/// The default extension set for the material-driven variant, with the
/// neutral extension working directly against the ABB decision fields.
pub fn abb_default_extensions() -> Vec<Box<dyn BranchingExtension<AbbSubproblem>>> {
    vec![
        Box::new(ReducedStructureExtension),
        Box::new(AbbNeutralExtension),
    ]
}
