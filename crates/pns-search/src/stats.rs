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

/// Statistics collected during a search run.
///
/// Workers keep their own instance and the engine merges them after the
/// join, so no counter needs atomic access on the hot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of subproblems taken from the frontier and expanded.
    pub nodes_expanded: u64,
    /// Number of children produced by branching (before any pruning).
    pub children_generated: u64,
    /// Children dropped because an extension or the error-free check
    /// declared them structurally infeasible, or bounding returned the
    /// infeasible marker.
    pub pruned_infeasible: u64,
    /// Children or frontier entries dropped because their bound was
    /// dominated by the retained solutions.
    pub pruned_by_bound: u64,
    /// Leaf networks handed to the solution pool.
    pub solutions_found: u64,
    /// Number of worker threads used.
    pub used_threads: usize,
    /// Total wall-clock duration of the run.
    pub solve_duration: std::time::Duration,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self {
            nodes_expanded: 0,
            children_generated: 0,
            pruned_infeasible: 0,
            pruned_by_bound: 0,
            solutions_found: 0,
            used_threads: 1,
            solve_duration: std::time::Duration::ZERO,
        }
    }
}

impl SearchStatistics {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn on_node_expanded(&mut self) {
        self.nodes_expanded += 1;
    }

    #[inline(always)]
    pub fn on_child_generated(&mut self) {
        self.children_generated += 1;
    }

    #[inline(always)]
    pub fn on_pruned_infeasible(&mut self) {
        self.pruned_infeasible += 1;
    }

    #[inline(always)]
    pub fn on_pruned_by_bound(&mut self) {
        self.pruned_by_bound += 1;
    }

    #[inline(always)]
    pub fn on_solution_found(&mut self) {
        self.solutions_found += 1;
    }

    /// Folds another worker's counters into this instance. Duration and
    /// thread count are run-level values and are set by the engine, not
    /// merged.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.nodes_expanded += other.nodes_expanded;
        self.children_generated += other.children_generated;
        self.pruned_infeasible += other.pruned_infeasible;
        self.pruned_by_bound += other.pruned_by_bound;
        self.solutions_found += other.solutions_found;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes Expanded: {}", self.nodes_expanded)?;
        writeln!(f, "  Children Generated: {}", self.children_generated)?;
        writeln!(f, "  Pruned (infeasible): {}", self.pruned_infeasible)?;
        writeln!(f, "  Pruned (bound): {}", self.pruned_by_bound)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_methods_increment_counters() {
        let mut stats = SearchStatistics::new();
        stats.on_node_expanded();
        stats.on_node_expanded();
        stats.on_child_generated();
        stats.on_pruned_infeasible();
        stats.on_pruned_by_bound();
        stats.on_solution_found();

        assert_eq!(stats.nodes_expanded, 2);
        assert_eq!(stats.children_generated, 1);
        assert_eq!(stats.pruned_infeasible, 1);
        assert_eq!(stats.pruned_by_bound, 1);
        assert_eq!(stats.solutions_found, 1);
    }

    #[test]
    fn test_merge_sums_counters_only() {
        let mut a = SearchStatistics::new();
        a.on_node_expanded();
        a.used_threads = 4;

        let mut b = SearchStatistics::new();
        b.on_node_expanded();
        b.on_solution_found();
        b.used_threads = 2;

        a.merge(&b);
        assert_eq!(a.nodes_expanded, 2);
        assert_eq!(a.solutions_found, 1);
        // Run-level values are untouched by merging.
        assert_eq!(a.used_threads, 4);
    }
}
