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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use pns_model::problem::Problem;

/// A monitor that prints search progress to stdout. Intended for
/// interactive debugging runs, not for benchmarking: the output cost on
/// every improving solution is significant.
#[derive(Debug, Clone, Default)]
pub struct LogSearchMonitor<N> {
    steps: u64,
    solutions: u64,
    _phantom: std::marker::PhantomData<N>,
}

impl<N> LogSearchMonitor<N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            steps: 0,
            solutions: 0,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<N> SearchMonitor<N> for LogSearchMonitor<N>
where
    N: std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogSearchMonitor"
    }

    fn on_enter_search(&mut self, problem: &Problem) {
        self.steps = 0;
        self.solutions = 0;
        println!(
            "[search] entering: {} materials, {} operating units",
            problem.num_materials(),
            problem.num_units()
        );
    }

    fn on_exit_search(&mut self) {
        println!(
            "[search] exiting after {} steps, {} solutions recorded",
            self.steps, self.solutions
        );
    }

    fn on_solution_found(&mut self, network: &N) {
        self.solutions += 1;
        println!("[search] solution #{}: {}", self.solutions, network);
    }

    fn on_step(&mut self) {
        self.steps += 1;
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
