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

//! PNS-BnB: branch-and-bound for process network synthesis
//!
//! High-level crate that implements a modular exact solver for PNS
//! problems. The solver separates structure generation, branching,
//! bounding, extension, and retention so you can swap strategies without
//! touching the core search logic.
//!
//! Core flow
//! - Provide a `pns_model::problem::Problem`.
//! - Choose a subproblem variant with its `RootInitializer` and `Brancher`
//!   (material-driven `abb`, or unit-wise `binary`).
//! - Provide a `BoundingFunction` (exact objectives at leaves + admissible
//!   lower bounds at intermediates), or use the bundled unit-cost one.
//! - Optionally attach branching extensions, a base unit set, retention and
//!   time limits.
//! - Run `engine::BranchAndBound`, or enumerate with `ssg` when the
//!   combinatorial structures themselves are the result.
//!
//! Assumptions and guarantees
//! - Bounds must be admissible: no descendant leaf of a subproblem may
//!   order strictly better than the subproblem's bound network. Pruning
//!   relies on this.
//! - Branching must strictly tighten decision state; termination relies on
//!   this.
//!
//! Module map
//! - `msg`: maximal structure generation (the feasible search universe).
//! - `ssg`: exhaustive enumeration of solution structures.
//! - `subproblem`: the subproblem capability traits and both variants.
//! - `branching`: the branching seam and the bundled branchers.
//! - `extension`: composable subproblem-tightening passes.
//! - `bound`: the bounding seam and the bundled unit-cost model.
//! - `engine`: the generic branch-and-bound driver (recursive, best-first,
//!   depth-first; optional worker pool).

pub mod bound;
pub mod branching;
pub mod engine;
pub mod extension;
pub mod msg;
mod open_list;
pub mod ssg;
pub mod subproblem;

#[cfg(test)]
pub(crate) mod test_fixtures;
