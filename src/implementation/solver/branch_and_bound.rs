// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the implementation of the branch-and-bound solver.
//! That is a solver that explores a binary search tree of partial
//! assignments, using one single thread of execution, and prunes the
//! subtrees whose relaxation bound cannot beat the incumbent.

use log::{debug, info, warn};

use crate::{Completion, Cutoff, Frontier, Knapsack, Reason, Relaxation, SearchTree, Solution, Solver};

/// The default tolerance used to decide whether a relaxed solution is integral
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// What is to be done with a node once it has been bounded
#[derive(Debug, Clone, PartialEq)]
enum Verdict {
    /// The bound cannot beat the incumbent
    Prune,
    /// The relaxation is integral and its rounding reaches the bound: no
    /// better solution lies in the subtree
    Accept { solution: Solution, value: isize },
    /// The bound is promising. The rounded relaxation (if any) is a feasible
    /// solution which does not close the gap to the bound.
    Branch { ub: f64, candidate: Option<(Solution, isize)> },
}

/// The branch-and-bound solver. Each iteration of its main loop selects an
/// active node, bounds it with the relaxation and then decides to either
/// prune it, accept its (integral) relaxation as new incumbent, or branch on
/// it. The search ends when the frontier is exhausted (the incumbent is then
/// proved optimal) or when the cutoff tells it to stop (the incumbent is
/// then a best effort solution).
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let problem    = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
/// let relaxation = FractionalRelaxation::new(&problem);
/// let cutoff     = NoCutoff;
/// let mut frontier = DepthFirstFrontier::new();
///
/// let mut solver = BranchAndBoundSolver::new(&problem, &relaxation, &cutoff, &mut frontier);
/// let Completion { is_exact, best_value } = solver.maximize();
///
/// assert!(is_exact);
/// assert_eq!(220, best_value);
/// assert_eq!(vec![false, true, true], solver.best_solution());
/// ```
pub struct BranchAndBoundSolver<'a> {
    /// A reference to the problem being solved
    problem: &'a Knapsack,
    /// The relaxation used to bound the nodes
    relaxation: &'a dyn Relaxation,
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    cutoff: &'a dyn Cutoff,
    /// The active nodes, the current node and the incumbent
    tree: SearchTree<'a>,
    /// How far from an integer can a relaxed value be and still be deemed integral
    tolerance: f64,
    /// This is a counter that tracks the number of nodes that have effectively
    /// been explored. That is, the number of nodes that have been popped from
    /// the frontier and bounded.
    explored: usize,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
}

impl <'a> BranchAndBoundSolver<'a> {
    pub fn new(
        problem: &'a Knapsack,
        relaxation: &'a dyn Relaxation,
        cutoff: &'a dyn Cutoff,
        frontier: &'a mut dyn Frontier,
    ) -> Self {
        BranchAndBoundSolver {
            problem,
            relaxation,
            cutoff,
            tree: SearchTree::new(frontier, problem.nb_items()),
            tolerance: DEFAULT_TOLERANCE,
            explored: 0,
            abort_proof: None,
        }
    }
    /// Changes the integrality tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
    /// The number of nodes explored during the last maximization
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method posts the root node onto the frontier so that the processing
    /// can be bootstrapped.
    fn initialize(&mut self) {
        self.explored    = 0;
        self.abort_proof = None;
        self.tree.reset(self.problem.nb_items());
    }

    /// Bounds the current node and decides what to do with it.
    fn evaluate_current(&self) -> Verdict {
        let relaxed = match self.tree.current() {
            Some(node) => self.relaxation.relax(node),
            None => return Verdict::Prune,
        };
        let incumbent = self.tree.incumbent_value();
        let ub = match relaxed.bound().value() {
            Some(ub) if relaxed.bound().can_improve(incumbent) => ub,
            _ => return Verdict::Prune,
        };

        if relaxed.is_integer_feasible(self.tolerance) {
            // values within tolerance of 1 are rounded up (which may overflow
            // the sack) and those within tolerance of 0 are rounded down
            // (which may leave room for other items). The rounded solution
            // only closes the subtree when it fits and reaches the bound.
            let solution = relaxed.to_solution();
            if self.problem.is_feasible(&solution) {
                let value = self.problem.evaluate(&solution).value;
                if relaxed.bound().can_improve(value) {
                    return Verdict::Branch { ub, candidate: Some((solution, value)) };
                }
                return Verdict::Accept { solution, value };
            }
        }
        Verdict::Branch { ub, candidate: None }
    }

    /// Offers a solution to the search tree and logs the improvements.
    fn offer(&mut self, solution: Solution, value: isize) {
        if self.tree.accept_incumbent(solution, value) {
            info!("New incumbent: {} (at iteration {})", value, self.explored);
        }
    }

    /// This method processes the current node: it bounds it and then either
    /// prunes it, accepts it as a new incumbent or branches on it.
    fn process_current(&mut self) {
        match self.evaluate_current() {
            Verdict::Prune => {
                self.tree.prune();
            },
            Verdict::Accept { solution, value } => {
                self.offer(solution, value);
                self.tree.prune();
            },
            Verdict::Branch { ub, candidate } => {
                if let Some((solution, value)) = candidate {
                    self.offer(solution, value);
                }
                if let Some(node) = self.tree.current() {
                    debug!("branching on {} (ub = {:.3})", node, ub);
                }
                self.tree.expand_current(ub);
            }
        }
    }

    fn abort_search(&mut self, reason: Reason) {
        self.abort_proof = Some(reason);
        self.tree.clear();
    }
}

impl Solver for BranchAndBoundSolver<'_> {
    fn maximize(&mut self) -> Completion {
        self.initialize();

        loop {
            if self.tree.is_exhausted() {
                break;
            }
            if self.cutoff.must_stop() {
                self.abort_search(Reason::CutoffOccurred);
                break;
            }
            if self.tree.pop_current().is_none() {
                break;
            }
            self.explored += 1;
            self.process_current();
        }

        if self.abort_proof.is_some() {
            warn!("Search stopped by its cutoff: the solution might not be optimal");
        }
        info!("Total of nodes visited: {}", self.explored);

        Completion { is_exact: self.abort_proof.is_none(), best_value: self.tree.incumbent_value() }
    }

    fn best_value(&self) -> isize {
        self.tree.incumbent_value()
    }

    fn best_solution(&self) -> Solution {
        self.tree.incumbent().clone()
    }

    fn set_primal(&mut self, value: isize, solution: Solution) {
        if !self.problem.is_feasible(&solution) {
            warn!("Ignoring a primal solution which does not fit the sack");
            return;
        }
        let actual = self.problem.evaluate(&solution).value;
        if actual != value {
            warn!("The primal solution is worth {} (not {})", actual, value);
        }
        self.tree.accept_incumbent(solution, actual);
    }
}

#[cfg(test)]
mod test_branch_and_bound {
    use std::cell::Cell;

    use crate::*;

    /// A simulated clock: lets the solver select `budget` nodes then stops.
    struct StopAfter {
        budget: Cell<usize>,
    }
    impl StopAfter {
        fn new(budget: usize) -> Self {
            Self { budget: Cell::new(budget) }
        }
    }
    impl Cutoff for StopAfter {
        fn must_stop(&self) -> bool {
            let left = self.budget.get();
            if left == 0 {
                true
            } else {
                self.budget.set(left - 1);
                false
            }
        }
    }

    fn solve(problem: &Knapsack, frontier: &mut dyn Frontier) -> (Completion, Solution, usize) {
        let relaxation = FractionalRelaxation::new(problem);
        let cutoff     = NoCutoff;
        let mut solver = BranchAndBoundSolver::new(problem, &relaxation, &cutoff, frontier);
        let completion = solver.maximize();
        (completion, solver.best_solution(), solver.explored())
    }

    #[test]
    fn textbook_instance() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let (completion, solution, _) = solve(&pb, &mut DepthFirstFrontier::new());
        assert!(completion.is_exact);
        assert_eq!(220, completion.best_value);
        assert_eq!(vec![false, true, true], solution);
    }
    #[test]
    fn textbook_instance_best_bound() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let (completion, solution, _) = solve(&pb, &mut BestBoundFrontier::new());
        assert!(completion.is_exact);
        assert_eq!(220, completion.best_value);
        assert_eq!(vec![false, true, true], solution);
    }
    #[test]
    fn zero_capacity_takes_nothing() {
        let pb = Knapsack::new(0, &[(60, 10), (100, 20), (120, 30)]);
        let (completion, solution, _) = solve(&pb, &mut DepthFirstFrontier::new());
        assert_eq!(0, completion.best_value);
        assert_eq!(vec![false; 3], solution);
    }
    #[test]
    fn an_item_heavier_than_the_sack_is_left_out() {
        let pb = Knapsack::new(10, &[(1000, 11)]);
        let (completion, solution, _) = solve(&pb, &mut DepthFirstFrontier::new());
        assert_eq!(0, completion.best_value);
        assert_eq!(vec![false], solution);
    }
    #[test]
    fn everything_fits_in_a_large_sack() {
        let pb = Knapsack::new(100, &[(5, 10), (7, 20), (3, 30)]);
        let (completion, solution, explored) = solve(&pb, &mut DepthFirstFrontier::new());
        assert_eq!(15, completion.best_value);
        assert_eq!(vec![true; 3], solution);
        // the root relaxation is already integral
        assert_eq!(1, explored);
    }
    #[test]
    fn an_instance_without_items() {
        let pb = Knapsack::new(10, &[]);
        let (completion, solution, explored) = solve(&pb, &mut DepthFirstFrontier::new());
        assert!(completion.is_exact);
        assert_eq!(0, completion.best_value);
        assert!(solution.is_empty());
        assert_eq!(1, explored);
    }
    #[test]
    fn a_cutoff_before_the_first_node_is_inexact() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = StopAfter::new(0);
        let mut frontier = DepthFirstFrontier::new();
        let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, &mut frontier);
        let completion = solver.maximize();

        assert!(!completion.is_exact);
        assert_eq!(0, completion.best_value);
        assert_eq!(vec![false; 3], solver.best_solution());
        assert_eq!(0, solver.explored());
    }
    #[test]
    fn an_interrupted_search_keeps_a_feasible_incumbent() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = StopAfter::new(4);
        let mut frontier = DepthFirstFrontier::new();
        let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, &mut frontier);
        let completion = solver.maximize();

        // root, [0 _ _] (integral: 220), [1 _ _], [1 0 _] (integral: 180 < 220)
        // and then the cutoff strikes while [1 1 _] is still active.
        assert!(!completion.is_exact);
        assert_eq!(4, solver.explored());
        assert_eq!(220, completion.best_value);
        assert!(pb.is_feasible(&solver.best_solution()));
    }
    #[test]
    fn a_cutoff_that_strikes_after_exhaustion_is_harmless() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let (_, _, explored) = solve(&pb, &mut DepthFirstFrontier::new());

        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = StopAfter::new(explored);
        let mut frontier = DepthFirstFrontier::new();
        let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, &mut frontier);
        assert!(solver.maximize().is_exact);
    }
    #[test]
    fn set_primal_seeds_the_incumbent() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = StopAfter::new(0);
        let mut frontier = DepthFirstFrontier::new();
        let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, &mut frontier);

        solver.set_primal(180, vec![true, false, true]);
        solver.set_primal(100, vec![false, true, false]); // ignored
        let completion = solver.maximize();
        assert_eq!(180, completion.best_value);
        assert_eq!(180, solver.best_value());
        assert_eq!(vec![true, false, true], solver.best_solution());
    }
    #[test]
    fn a_primal_is_checked_against_the_instance() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = StopAfter::new(0);
        let mut frontier = DepthFirstFrontier::new();
        let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, &mut frontier);

        // overweight: ignored
        solver.set_primal(280, vec![true, true, true]);
        assert_eq!(0, solver.best_value());
        assert_eq!(vec![false; 3], solver.best_solution());
        // wrong length: ignored
        solver.set_primal(60, vec![true]);
        assert_eq!(0, solver.best_value());
        // overstated: the actual value is kept
        solver.set_primal(240, vec![false, true, true]);
        assert_eq!(220, solver.best_value());
        assert_eq!(220, solver.maximize().best_value);
    }
    #[test]
    fn an_optimal_primal_is_proved_optimal() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = NoCutoff;
        let mut frontier = DepthFirstFrontier::new();
        let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, &mut frontier);

        solver.set_primal(220, vec![false, true, true]);
        let completion = solver.maximize();
        assert!(completion.is_exact);
        assert_eq!(220, completion.best_value);
        assert_eq!(vec![false, true, true], solver.best_solution());
    }
    #[test]
    fn maximize_can_be_called_twice() {
        let pb = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = NoCutoff;
        let mut frontier = BestBoundFrontier::new();
        let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, &mut frontier);

        let first  = solver.maximize();
        let second = solver.maximize();
        assert_eq!(first, second);
    }
    #[test]
    fn a_rounded_up_fraction_that_overflows_is_branched_on() {
        // the root relaxation takes 1 - 1e-7 of the first item, which is
        // within a loose tolerance of 1 but does not fit once rounded.
        let pb = Knapsack::new(9_999_999, &[(10_000_000, 10_000_000), (1, 10_000_000)]);
        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = NoCutoff;
        let mut frontier = DepthFirstFrontier::new();
        let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, &mut frontier)
            .with_tolerance(1e-3);
        let completion = solver.maximize();
        assert_eq!(0, completion.best_value);
        assert!(pb.is_feasible(&solver.best_solution()));
    }
    #[test]
    fn a_rounded_down_fraction_does_not_close_the_subtree() {
        // the root relaxation takes 1e-7 of the second item, which rounds
        // down to a feasible solution leaving room for the third item.
        let pb = Knapsack::new(10_000_001, &[(30_000_000, 10_000_000), (20_000_000, 10_000_000), (1, 1)]);
        let expected = ExhaustiveSolver::new(&pb).maximize();
        assert_eq!(30_000_001, expected.best_value);

        let relaxation = FractionalRelaxation::new(&pb);
        let cutoff     = NoCutoff;
        let (mut dfs, mut bfs) = (DepthFirstFrontier::new(), BestBoundFrontier::new());
        for frontier in [&mut dfs as &mut dyn Frontier, &mut bfs as &mut dyn Frontier] {
            let mut solver = BranchAndBoundSolver::new(&pb, &relaxation, &cutoff, frontier);
            let completion = solver.maximize();
            assert!(completion.is_exact);
            assert_eq!(expected, completion);
            assert_eq!(vec![true, false, true], solver.best_solution());
        }
    }
    #[test]
    fn weights_summing_past_usize_max_do_not_fit() {
        let pb = Knapsack::new(10, &[(5, usize::MAX), (5, 1)]);
        let (completion, solution, _) = solve(&pb, &mut DepthFirstFrontier::new());
        assert!(completion.is_exact);
        assert_eq!(5, completion.best_value);
        assert_eq!(vec![false, true], solution);

        // the root relaxation rounds to taking both items
        let pb = Knapsack::new(usize::MAX, &[(5, usize::MAX), (5, 1)]);
        let (completion, solution, _) = solve(&pb, &mut BestBoundFrontier::new());
        assert!(completion.is_exact);
        assert_eq!(5, completion.best_value);
        assert!(pb.is_feasible(&solution));
    }
}
