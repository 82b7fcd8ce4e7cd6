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

//! This module provides the solver implementations. The `branch_and_bound`
//! module provides the `BranchAndBoundSolver` which is the workhorse of this
//! crate; the `exhaustive` one provides the `ExhaustiveSolver` which is better
//! suited for tiny instances. Both implement the `Solver` trait and `solve`
//! picks one of them based on the size of the instance.
mod branch_and_bound;
mod exhaustive;

pub use branch_and_bound::*;
pub use exhaustive::*;

use log::info;

use crate::{BestBoundFrontier, Completion, Cutoff, DepthFirstFrontier, FractionalRelaxation,
            Knapsack, NoCutoff, Solution, Solver, SolverConfig, Strategy, TimeBudget};

/// The result of a call to `solve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Is the solution proved optimal ? What is its value ?
    pub completion: Completion,
    /// The best assignment that was found (one flag per item)
    pub solution: Solution,
}

/// Solves the given instance with the algorithm that best suits its size:
/// instances having at most `config.exhaustive_threshold` items are solved by
/// enumeration. All others are solved by branch-and-bound, exploring the
/// tree with `config.strategy` and giving up after `config.time_budget`.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let problem = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
/// let outcome = solve(&problem, &SolverConfig::default());
///
/// assert!(outcome.completion.is_exact);
/// assert_eq!(220, outcome.completion.best_value);
/// assert_eq!(vec![false, true, true], outcome.solution);
/// ```
pub fn solve(problem: &Knapsack, config: &SolverConfig) -> Outcome {
    if problem.nb_items() <= config.exhaustive_threshold {
        info!("Solving {} items exhaustively", problem.nb_items());
        let mut solver = ExhaustiveSolver::new(problem);
        return run(&mut solver);
    }

    info!("Solving {} items by branch-and-bound ({})", problem.nb_items(), config.strategy);
    let relaxation = FractionalRelaxation::new(problem);
    let cutoff: Box<dyn Cutoff> = match config.time_budget {
        Some(budget) => Box::new(TimeBudget::new(budget)),
        None => Box::new(NoCutoff),
    };

    match config.strategy {
        Strategy::DepthFirst => {
            let mut frontier = DepthFirstFrontier::new();
            let mut solver = BranchAndBoundSolver::new(problem, &relaxation, cutoff.as_ref(), &mut frontier)
                .with_tolerance(config.tolerance);
            run(&mut solver)
        },
        Strategy::BestBound => {
            let mut frontier = BestBoundFrontier::new();
            let mut solver = BranchAndBoundSolver::new(problem, &relaxation, cutoff.as_ref(), &mut frontier)
                .with_tolerance(config.tolerance);
            run(&mut solver)
        },
    }
}

fn run(solver: &mut dyn Solver) -> Outcome {
    let completion = solver.maximize();
    Outcome { completion, solution: solver.best_solution() }
}

#[cfg(test)]
mod test_solve {
    use std::time::Duration;

    use crate::*;

    fn textbook() -> Knapsack {
        Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)])
    }

    #[test]
    fn every_configuration_agrees_on_the_textbook_instance() {
        for strategy in [Strategy::DepthFirst, Strategy::BestBound] {
            for threshold in [0, 24] {
                let config = SolverConfigBuilder::default()
                    .strategy(strategy)
                    .exhaustive_threshold(threshold)
                    .build()
                    .unwrap();
                let outcome = solve(&textbook(), &config);
                assert!(outcome.completion.is_exact);
                assert_eq!(220, outcome.completion.best_value);
                assert_eq!(vec![false, true, true], outcome.solution);
            }
        }
    }
    #[test]
    fn an_exhausted_time_budget_yields_an_inexact_outcome() {
        let config = SolverConfigBuilder::default()
            .exhaustive_threshold(0)
            .time_budget(Duration::ZERO)
            .build()
            .unwrap();
        let outcome = solve(&textbook(), &config);
        assert!(!outcome.completion.is_exact);
        assert_eq!(0, outcome.completion.best_value);
        assert_eq!(vec![false; 3], outcome.solution);
    }
    #[test]
    fn the_time_budget_does_not_apply_to_enumeration() {
        let config = SolverConfigBuilder::default()
            .time_budget(Duration::ZERO)
            .build()
            .unwrap();
        let outcome = solve(&textbook(), &config);
        assert!(outcome.completion.is_exact);
        assert_eq!(220, outcome.completion.best_value);
    }
}
