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

//! # PNS Model
//!
//! **The Core Domain Model for Process Network Synthesis.**
//!
//! This crate defines the data structures that describe a PNS problem: the
//! materials flowing through a process, the operating units transforming
//! them, and the structural constraints (raw-material/product partition,
//! mutual exclusions, parallel-production caps) that a feasible network must
//! respect. It is the data interchange layer between problem definition
//! (user input) and the solving engine (`pns_bnb`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`id`**: strongly-typed identifiers (`MaterialId`, `UnitId`) to prevent
//!   logical indexing errors.
//! * **`node`**: identity-equal graph nodes (`Material`, `OperatingUnit`).
//! * **`set`**: hash-backed node-id sets with both value-semantic and
//!   in-place set algebra.
//! * **`problem`**: the `Problem` (immutable, with precomputed derived
//!   indices, optimized for solving) and `ProblemBuilder` (mutable,
//!   optimized for configuration).
//! * **`network`**: the output format, a totally ordered candidate solution
//!   carrying its included operating units.
//!
//! ## Design Philosophy
//!
//! 1. **Identity**: nodes are equal iff they carry the same process-wide id.
//!    All sets and derived indices are keyed by id; node payloads live in
//!    side tables owned by collaborators.
//! 2. **Fail-Fast**: `ProblemBuilder::build` validates the full structure
//!    eagerly and derives every index the solver will query, so the solver
//!    never encounters an invalid or stale view of the problem.

pub mod id;
pub mod network;
pub mod node;
pub mod problem;
pub mod set;
