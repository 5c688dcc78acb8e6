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

//! # PNS Core
//!
//! Foundational utilities shared by the PNS solver crates.
//!
//! This crate is deliberately small and dependency-light. It provides:
//!
//! * **`utils::id`**: zero-cost, phantom-tagged node identifiers drawn from a
//!   process-wide sequence. Identity is the only notion of equality used by
//!   the solver layers above.
//! * **`utils::side_map`**: id-keyed payload tables, the mechanism by which
//!   collaborators attach domain data (costs, flow bounds, prices) to nodes
//!   without the model layer knowing about it.
//! * **`num`**: by-value saturating arithmetic used for objective
//!   accumulation, so cost sums degrade to the type bounds instead of
//!   wrapping.

pub mod num;
pub mod utils;
