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

//! # Branch-and-Bound Engine
//!
//! The generic driver combining a root initializer, a branching function, a
//! bounding function, an extension pipeline, and the n-best retention pool
//! into one search. The engine is generic over the subproblem and network
//! types; everything domain-specific flows in through the four functional
//! seams.
//!
//! ## Traversal strategies
//!
//! * **Recursive**: classic depth-first via direct recursion. Always
//!   single-threaded.
//! * **BestFirst**: an ordered open list; the frontier entry with the best
//!   bound is always expanded next, so under admissible bounds the optimum
//!   is found first.
//! * **DepthFirst**: the same open-list machinery with head insertion, an
//!   explicit-stack depth-first search that keeps the frontier small.
//!
//! The open-list strategies optionally run on a pool of worker threads.
//! Exactly two shared resources exist, the frontier and the solution pool,
//! each behind its own lock held only for single push/pop/insert
//! operations; branching and bounding always run unlocked. An idle worker
//! blocks on a condition variable; the last live worker facing an empty
//! frontier declares completion and wakes the rest. This termination
//! handshake is required because the frontier can be transiently empty
//! while another worker is still expanding and about to refill it.
//!
//! ## Limits
//!
//! A wall-clock time limit is checked cooperatively at the top of every
//! expansion through per-worker monitors. On expiry the engine returns
//! whatever the pool retains, a valid but possibly incomplete n-best
//! approximation, reported as `Aborted`, not as an error.

use crate::bound::BoundingFunction;
use crate::branching::Brancher;
use crate::extension::{BranchingExtension, ExtensionResult};
use crate::msg::maximal_structure;
use crate::open_list::{Discipline, OpenEntry, OpenList};
use crate::subproblem::{RootInitializer, Subproblem};
use pns_model::{network::Network, problem::Problem, set::UnitSet};
use pns_search::monitor::composite::CompositeMonitor;
use pns_search::monitor::interrupt::InterruptMonitor;
use pns_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
use pns_search::monitor::time_limit::TimeLimitMonitor;
use pns_search::pool::{ByNetworkOrd, NetworkComparator, SolutionPool};
use pns_search::result::{SearchOutcome, TerminationReason};
use pns_search::stats::SearchStatistics;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// How the engine walks the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalStrategy {
    /// Depth-first via direct recursion; single-threaded.
    Recursive,
    /// Ordered open list; always expands the best-bound frontier entry.
    #[default]
    BestFirst,
    /// LIFO open list; explicit-stack depth-first.
    DepthFirst,
}

/// The memoized result of a finished run.
struct SolvedState<N> {
    networks: Vec<N>,
    outcome: SearchOutcome,
}

/// The generic branch-and-bound driver.
///
/// Configure through the consuming `with_*` methods, then call
/// [`BranchAndBound::solve`] or access [`BranchAndBound::solution_networks`]
/// directly; the first access runs the search, later accesses return the
/// memoized result.
pub struct BranchAndBound<'p, S, N, B, F, R, C = ByNetworkOrd> {
    problem: &'p Problem,
    brancher: B,
    bounder: F,
    root_initializer: R,
    comparator: C,
    extensions: Vec<Box<dyn BranchingExtension<S>>>,
    strategy: TraversalStrategy,
    max_solutions: Option<usize>,
    base_units: Option<UnitSet>,
    time_limit: Option<Duration>,
    thread_count: usize,
    solved: Option<SolvedState<N>>,
}

impl<'p, S, N, B, F, R, C> BranchAndBound<'p, S, N, B, F, R, C>
where
    S: Subproblem,
    N: Network,
    B: Brancher<S>,
    F: BoundingFunction<S, N>,
    R: RootInitializer<S>,
    C: NetworkComparator<N> + Clone,
{
    /// Creates an engine with the default comparator and configuration:
    /// best-first traversal, single-threaded, unbounded retention, no
    /// limits, no extensions.
    pub fn new(problem: &'p Problem, brancher: B, bounder: F, root_initializer: R) -> Self
    where
        C: Default,
    {
        Self::with_comparator(problem, brancher, bounder, root_initializer, C::default())
    }

    /// Creates an engine with an explicit network comparator.
    pub fn with_comparator(
        problem: &'p Problem,
        brancher: B,
        bounder: F,
        root_initializer: R,
        comparator: C,
    ) -> Self {
        Self {
            problem,
            brancher,
            bounder,
            root_initializer,
            comparator,
            extensions: Vec::new(),
            strategy: TraversalStrategy::default(),
            max_solutions: None,
            base_units: None,
            time_limit: None,
            thread_count: 1,
            solved: None,
        }
    }

    /// Selects the traversal strategy.
    #[inline]
    pub fn with_strategy(mut self, strategy: TraversalStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Retains only the best `max_solutions` networks; `None` keeps all.
    #[inline]
    pub fn with_max_solutions(mut self, max_solutions: Option<usize>) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    /// Restricts the search to the given base unit set.
    #[inline]
    pub fn with_base_units(mut self, base_units: UnitSet) -> Self {
        self.base_units = Some(base_units);
        self
    }

    /// Caps the wall-clock runtime. Checked cooperatively; on expiry the
    /// retained networks so far are returned with an `Aborted` reason.
    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Sets the number of worker threads for the open-list strategies. The
    /// recursive strategy always runs single-threaded.
    #[inline]
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count.max(1);
        self
    }

    /// Installs the subproblem-tightening passes applied to every child.
    #[inline]
    pub fn with_extensions(mut self, extensions: Vec<Box<dyn BranchingExtension<S>>>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Runs the search. A no-op when a result is already memoized.
    pub fn solve(&mut self) {
        if self.solved.is_some() {
            return;
        }
        let start_time = std::time::Instant::now();

        let mut statistics = SearchStatistics::new();
        statistics.used_threads = match self.strategy {
            TraversalStrategy::Recursive => 1,
            _ => self.thread_count,
        };

        let allowed = match &self.base_units {
            Some(base_units) => base_units.clone(),
            None => self.problem.operating_units().clone(),
        };
        let universe = maximal_structure(self.problem, &allowed);

        let pool = SolutionPool::with_comparator(self.max_solutions, self.comparator.clone());
        let mut reason = TerminationReason::Completed;

        // An empty maximal structure means no feasible network exists; the
        // root is not even built in that case.
        let feasible_root = if universe.is_empty() && !self.problem.products().is_empty() {
            None
        } else {
            let root = self.root_initializer.root(self.problem, &universe);
            if root.is_error_free(self.problem) {
                self.bounder
                    .bound(self.problem, &root)
                    .map(|bound| (root, bound))
            } else {
                None
            }
        };

        if let Some((root, bound)) = feasible_root {
            if root.is_leaf() {
                statistics.on_solution_found();
                pool.insert(bound);
            } else {
                let entry = OpenEntry {
                    subproblem: root,
                    bound,
                };
                reason = match self.strategy {
                    TraversalStrategy::Recursive => {
                        self.recursive_search(entry, &pool, &mut statistics)
                    }
                    TraversalStrategy::BestFirst => {
                        self.open_list_search(entry, Discipline::Ordered, &pool, &mut statistics)
                    }
                    TraversalStrategy::DepthFirst => {
                        self.open_list_search(entry, Discipline::Lifo, &pool, &mut statistics)
                    }
                };
            }
        }

        statistics.solve_duration = start_time.elapsed();
        self.solved = Some(SolvedState {
            networks: pool.into_sorted_vec(),
            outcome: SearchOutcome::new(reason, statistics),
        });
    }

    /// Returns the retained networks in ascending comparator order,
    /// running the search on first access.
    pub fn solution_networks(&mut self) -> &[N] {
        self.solve();
        &self
            .solved
            .as_ref()
            .expect("`solve` always memoizes a result")
            .networks
    }

    /// Returns the termination reason and statistics, running the search
    /// on first access.
    pub fn outcome(&mut self) -> &SearchOutcome {
        self.solve();
        &self
            .solved
            .as_ref()
            .expect("`solve` always memoizes a result")
            .outcome
    }

    fn recursive_search(
        &self,
        root: OpenEntry<S, N>,
        pool: &SolutionPool<N, C>,
        statistics: &mut SearchStatistics,
    ) -> TerminationReason {
        let mut monitor: CompositeMonitor<'_, N> = CompositeMonitor::new();
        if let Some(limit) = self.time_limit {
            // An expansion step is heavyweight (bounding may call external
            // solvers), so the clock is checked on every step instead of
            // the default throttled mask.
            monitor.add_monitor(TimeLimitMonitor::with_clock_check_mask(limit, 0));
        }
        monitor.on_enter_search(self.problem);

        let mut aborted = None;
        self.recurse(&root.subproblem, pool, statistics, &mut monitor, &mut aborted);

        monitor.on_exit_search();
        match aborted {
            Some(message) => TerminationReason::Aborted(message),
            None => TerminationReason::Completed,
        }
    }

    fn recurse(
        &self,
        subproblem: &S,
        pool: &SolutionPool<N, C>,
        statistics: &mut SearchStatistics,
        monitor: &mut CompositeMonitor<'_, N>,
        aborted: &mut Option<String>,
    ) {
        monitor.on_step();
        if let SearchCommand::Terminate(message) = monitor.search_command() {
            *aborted = Some(message);
            return;
        }

        let children = expand_children(
            self.problem,
            &self.brancher,
            &self.bounder,
            &self.extensions,
            pool,
            subproblem,
            statistics,
            monitor,
        );
        for entry in children {
            self.recurse(&entry.subproblem, pool, statistics, monitor, aborted);
            if aborted.is_some() {
                return;
            }
        }
    }

    fn open_list_search(
        &self,
        root: OpenEntry<S, N>,
        discipline: Discipline,
        pool: &SolutionPool<N, C>,
        statistics: &mut SearchStatistics,
    ) -> TerminationReason {
        let problem = self.problem;
        let brancher = &self.brancher;
        let bounder = &self.bounder;
        let extensions = &self.extensions[..];
        let comparator = &self.comparator;
        let time_limit = self.time_limit;
        let workers = self.thread_count;

        let mut open = OpenList::new(discipline);
        open.push(root, comparator);
        let state = Mutex::new(FrontierState {
            open,
            active: 0,
            done: false,
        });
        let wake = Condvar::new();
        let stop_flag = AtomicBool::new(false);
        let abort_reason: Mutex<Option<String>> = Mutex::new(None);

        if workers == 1 {
            let worker_statistics = worker_loop(
                problem,
                brancher,
                bounder,
                extensions,
                comparator,
                pool,
                &state,
                &wake,
                &stop_flag,
                &abort_reason,
                time_limit,
            );
            statistics.merge(&worker_statistics);
        } else {
            std::thread::scope(|scope| {
                let handles: Vec<_> = (0..workers)
                    .map(|_| {
                        scope.spawn(|| {
                            worker_loop(
                                problem,
                                brancher,
                                bounder,
                                extensions,
                                comparator,
                                pool,
                                &state,
                                &wake,
                                &stop_flag,
                                &abort_reason,
                                time_limit,
                            )
                        })
                    })
                    .collect();
                for handle in handles {
                    let worker_statistics =
                        handle.join().expect("search worker thread panicked");
                    statistics.merge(&worker_statistics);
                }
            });
        }

        match abort_reason.into_inner().unwrap() {
            Some(message) => TerminationReason::Aborted(message),
            None => TerminationReason::Completed,
        }
    }
}

/// The shared frontier of the worker pool, protected by a single lock.
///
/// `active` counts workers currently expanding an entry they popped: the
/// frontier being empty does not mean the search is over while any of them
/// might still push children.
struct FrontierState<S, N> {
    open: OpenList<S, N>,
    active: usize,
    done: bool,
}

/// One worker of the open-list search. Runs until the frontier is globally
/// exhausted or a monitor requests termination.
#[allow(clippy::too_many_arguments)]
fn worker_loop<S, N, B, F, C>(
    problem: &Problem,
    brancher: &B,
    bounder: &F,
    extensions: &[Box<dyn BranchingExtension<S>>],
    comparator: &C,
    pool: &SolutionPool<N, C>,
    state: &Mutex<FrontierState<S, N>>,
    wake: &Condvar,
    stop_flag: &AtomicBool,
    abort_reason: &Mutex<Option<String>>,
    time_limit: Option<Duration>,
) -> SearchStatistics
where
    S: Subproblem,
    N: Network,
    B: Brancher<S>,
    F: BoundingFunction<S, N>,
    C: NetworkComparator<N>,
{
    let mut statistics = SearchStatistics::new();

    let mut monitor: CompositeMonitor<'_, N> = CompositeMonitor::new();
    monitor.add_monitor(InterruptMonitor::new(stop_flag));
    if let Some(limit) = time_limit {
        // Expansion steps are heavyweight; check the clock on every step.
        monitor.add_monitor(TimeLimitMonitor::with_clock_check_mask(limit, 0));
    }
    monitor.on_enter_search(problem);

    loop {
        monitor.on_step();
        if let SearchCommand::Terminate(message) = monitor.search_command() {
            stop_flag.store(true, Ordering::Relaxed);
            {
                let mut reason = abort_reason.lock().unwrap();
                if reason.is_none() {
                    *reason = Some(message);
                }
            }
            let mut guard = state.lock().unwrap();
            guard.done = true;
            wake.notify_all();
            break;
        }

        let entry = {
            let mut guard = state.lock().unwrap();
            loop {
                if guard.done {
                    break None;
                }
                if let Some(entry) = guard.open.pop() {
                    guard.active += 1;
                    break Some(entry);
                }
                if guard.active == 0 {
                    // Last one out turns off the lights: nobody holds work
                    // anymore, so the frontier can never refill.
                    guard.done = true;
                    wake.notify_all();
                    break None;
                }
                guard = wake.wait(guard).unwrap();
            }
        };
        let Some(entry) = entry else {
            break;
        };

        // Branching and bounding run outside of any lock.
        let children = if pool.is_dominated(&entry.bound) {
            statistics.on_pruned_by_bound();
            Vec::new()
        } else {
            expand_children(
                problem,
                brancher,
                bounder,
                extensions,
                pool,
                &entry.subproblem,
                &mut statistics,
                &mut monitor,
            )
        };

        let mut guard = state.lock().unwrap();
        for child in children {
            guard.open.push(child, comparator);
            wake.notify_one();
        }
        guard.active -= 1;
        if guard.active == 0 && guard.open.is_empty() {
            guard.done = true;
            wake.notify_all();
        }
    }

    monitor.on_exit_search();
    statistics
}

/// Branches `parent`, runs every child through the extension pipeline, the
/// error-free check, and the bounding function, records leaves in the
/// pool, and returns the intermediate children worth scheduling.
#[allow(clippy::too_many_arguments)]
fn expand_children<S, N, B, F, C, M>(
    problem: &Problem,
    brancher: &B,
    bounder: &F,
    extensions: &[Box<dyn BranchingExtension<S>>],
    pool: &SolutionPool<N, C>,
    parent: &S,
    statistics: &mut SearchStatistics,
    monitor: &mut M,
) -> Vec<OpenEntry<S, N>>
where
    S: Subproblem,
    N: Network,
    B: Brancher<S>,
    F: BoundingFunction<S, N>,
    C: NetworkComparator<N>,
    M: SearchMonitor<N>,
{
    statistics.on_node_expanded();

    let mut promising = Vec::new();
    'children: for mut child in brancher.branch(problem, parent) {
        statistics.on_child_generated();

        for extension in extensions {
            if extension.apply(problem, &mut child) == ExtensionResult::Infeasible {
                statistics.on_pruned_infeasible();
                continue 'children;
            }
        }
        if !child.is_error_free(problem) {
            statistics.on_pruned_infeasible();
            continue;
        }
        let Some(bound) = bounder.bound(problem, &child) else {
            statistics.on_pruned_infeasible();
            continue;
        };

        if child.is_leaf() {
            if pool.insert(bound.clone()) {
                statistics.on_solution_found();
                monitor.on_solution_found(&bound);
            } else {
                statistics.on_pruned_by_bound();
            }
        } else if pool.is_dominated(&bound) {
            statistics.on_pruned_by_bound();
        } else {
            promising.push(OpenEntry {
                subproblem: child,
                bound,
            });
        }
    }
    promising
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::UnitCostBounder;
    use crate::branching::abb::AbbBrancher;
    use crate::branching::binary::BinaryBrancher;
    use crate::extension::{abb_default_extensions, default_extensions};
    use crate::subproblem::abb::{AbbRootInitializer, AbbSubproblem};
    use crate::subproblem::binary::{BinaryDecisionSubproblem, BinaryRootInitializer};
    use crate::test_fixtures::{seven_unit_problem, unproducible_product_problem, SevenUnitFixture};
    use pns_model::network::CostNetwork;
    use pns_model::set::UnitSet;

    type AbbEngine<'p> = BranchAndBound<
        'p,
        AbbSubproblem,
        CostNetwork<i64>,
        AbbBrancher,
        UnitCostBounder<i64>,
        AbbRootInitializer,
    >;
    type BinaryEngine<'p> = BranchAndBound<
        'p,
        BinaryDecisionSubproblem,
        CostNetwork<i64>,
        BinaryBrancher,
        UnitCostBounder<i64>,
        BinaryRootInitializer,
    >;

    fn abb_engine(f: &SevenUnitFixture) -> AbbEngine<'_> {
        BranchAndBound::new(
            &f.problem,
            AbbBrancher::new(),
            UnitCostBounder::new(f.unit_costs()),
            AbbRootInitializer,
        )
    }

    fn binary_engine(f: &SevenUnitFixture) -> BinaryEngine<'_> {
        BranchAndBound::new(
            &f.problem,
            BinaryBrancher::new(),
            UnitCostBounder::new(f.unit_costs()),
            BinaryRootInitializer,
        )
    }

    fn costs(networks: &[CostNetwork<i64>]) -> Vec<i64> {
        networks.iter().map(CostNetwork::cost).collect()
    }

    #[test]
    fn test_best_first_returns_solutions_sorted_ascending() {
        let f = seven_unit_problem();
        let mut engine = abb_engine(&f);

        let networks = engine.solution_networks().to_vec();
        assert_eq!(costs(&networks), vec![185, 207]);

        let cheap: UnitSet = [f.o1, f.o3, f.o4, f.o7].into_iter().collect();
        let pricey: UnitSet = [f.o1, f.o3, f.o4, f.o6].into_iter().collect();
        assert_eq!(networks[0].unit_set(), &cheap);
        assert_eq!(networks[1].unit_set(), &pricey);

        assert!(engine.outcome().is_completed());
    }

    #[test]
    fn test_all_strategies_agree_on_the_solution_set() {
        let f = seven_unit_problem();
        for strategy in [
            TraversalStrategy::Recursive,
            TraversalStrategy::BestFirst,
            TraversalStrategy::DepthFirst,
        ] {
            let mut engine = abb_engine(&f).with_strategy(strategy);
            assert_eq!(
                costs(engine.solution_networks()),
                vec![185, 207],
                "strategy {:?} returned a different solution set",
                strategy
            );
        }
    }

    #[test]
    fn test_binary_variant_finds_the_same_networks() {
        let f = seven_unit_problem();
        let mut engine = binary_engine(&f);

        let networks = engine.solution_networks().to_vec();
        assert_eq!(costs(&networks), vec![185, 207]);

        // No structure may be reported twice.
        let mut listings: Vec<Vec<u64>> = networks
            .iter()
            .map(|n| n.unit_set().ordered().iter().map(|id| id.get()).collect())
            .collect();
        listings.sort();
        listings.dedup();
        assert_eq!(listings.len(), networks.len());
    }

    #[test]
    fn test_extensions_do_not_change_the_result() {
        let f = seven_unit_problem();

        let mut with_abb_extensions = abb_engine(&f).with_extensions(abb_default_extensions());
        assert_eq!(costs(with_abb_extensions.solution_networks()), vec![185, 207]);

        let mut with_generic_extensions = binary_engine(&f)
            .with_extensions(default_extensions::<BinaryDecisionSubproblem>());
        assert_eq!(
            costs(with_generic_extensions.solution_networks()),
            vec![185, 207]
        );
    }

    #[test]
    fn test_n_best_retention_keeps_the_best() {
        let f = seven_unit_problem();
        let mut engine = abb_engine(&f).with_max_solutions(Some(1));

        let networks = engine.solution_networks();
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].cost(), 185);
        assert!(engine.outcome().is_completed());
    }

    #[test]
    fn test_solution_networks_is_idempotent() {
        let f = seven_unit_problem();
        let mut engine = abb_engine(&f);

        let first = engine.solution_networks().to_vec();
        let first_statistics = engine.outcome().statistics().clone();

        let second = engine.solution_networks().to_vec();
        assert_eq!(first, second);
        // No recomputation happened.
        assert_eq!(engine.outcome().statistics(), &first_statistics);
    }

    #[test]
    fn test_thread_count_invariance() {
        let f = seven_unit_problem();

        let mut single = abb_engine(&f).with_thread_count(1);
        let mut parallel = abb_engine(&f).with_thread_count(4);

        assert_eq!(
            costs(single.solution_networks()),
            costs(parallel.solution_networks())
        );
        assert_eq!(parallel.outcome().statistics().used_threads, 4);
    }

    #[test]
    fn test_depth_first_multithreaded_matches() {
        let f = seven_unit_problem();
        let mut engine = abb_engine(&f)
            .with_strategy(TraversalStrategy::DepthFirst)
            .with_thread_count(4);
        assert_eq!(costs(engine.solution_networks()), vec![185, 207]);
    }

    #[test]
    fn test_zero_time_limit_aborts_with_partial_result() {
        let f = seven_unit_problem();
        let mut engine = abb_engine(&f).with_time_limit(Duration::ZERO);

        engine.solve();
        assert!(engine.outcome().is_aborted());
        // Whatever was retained before expiry is still a valid prefix.
        assert!(engine.solution_networks().len() <= 2);
    }

    #[test]
    fn test_unproducible_problem_completes_without_solutions() {
        let problem = unproducible_product_problem();
        let mut engine: BranchAndBound<'_, _, CostNetwork<i64>, _, _, _, ByNetworkOrd> =
            BranchAndBound::new(
                &problem,
                AbbBrancher::new(),
                UnitCostBounder::<i64>::new(Default::default()),
                AbbRootInitializer,
            );

        let networks: &[CostNetwork<i64>] = engine.solution_networks();
        assert!(networks.is_empty());
        assert!(engine.outcome().is_completed());
    }

    #[test]
    fn test_base_unit_restriction_limits_the_search() {
        let f = seven_unit_problem();
        let base = f
            .problem
            .operating_units()
            .except(&[f.o6].into_iter().collect());
        let mut engine = abb_engine(&f).with_base_units(base);

        let networks = engine.solution_networks();
        assert_eq!(costs(networks), vec![185]);
        assert!(!networks[0].unit_set().contains(f.o6));
    }
}
