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

//! # PNS Search
//!
//! Generic search plumbing shared by the solving engines, independent of any
//! particular branching or bounding scheme:
//!
//! * **`pool`**: the n-best solution retention structure and the network
//!   comparator seam.
//! * **`monitor`**: pluggable search observers that can also request
//!   termination (time limit, external interrupt, logging, composition).
//! * **`result`**: termination reasons and search outcomes. A timeout is a
//!   reason, never an error; the retained solutions stay valid.
//! * **`stats`**: lightweight event counters with per-worker merging.
//! * **`num`**: the numeric bounds required of objective value types.

pub mod monitor;
pub mod num;
pub mod pool;
pub mod result;
pub mod stats;
