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

//! This module provides the implementation of the exhaustive solver. It
//! enumerates every possible assignment and is hence only meant to be used on
//! small instances where it beats the branch-and-bound machinery.

use log::{info, warn};

use crate::{Completion, Knapsack, Solution, Solver};

/// The exhaustive solver enumerates the assignments in lexicographic order
/// (item 0 decided first, leaving an item out before taking it) and keeps the
/// first one reaching the best value among those that fit the sack. A
/// partial assignment which already overflows is not extended since none of
/// its completions can fit.
///
/// The completion it returns is always exact.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let problem    = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
/// let mut solver = ExhaustiveSolver::new(&problem);
///
/// let completion = solver.maximize();
/// assert!(completion.is_exact);
/// assert_eq!(220, completion.best_value);
/// assert_eq!(vec![false, true, true], solver.best_solution());
/// ```
pub struct ExhaustiveSolver<'a> {
    problem: &'a Knapsack,
    best_value: isize,
    best_sol: Solution,
    /// the number of complete assignments that were evaluated
    explored: usize,
}

impl <'a> ExhaustiveSolver<'a> {
    pub fn new(problem: &'a Knapsack) -> Self {
        ExhaustiveSolver {
            problem,
            best_value: 0,
            best_sol  : vec![false; problem.nb_items()],
            explored  : 0,
        }
    }
    /// The number of complete assignments evaluated by the last maximization
    pub fn explored(&self) -> usize {
        self.explored
    }

    fn enumerate(&mut self, current: &mut Solution, depth: usize, value: isize, weight: usize) {
        if weight > self.problem.capacity {
            return;
        }
        if depth == current.len() {
            self.explored += 1;
            if value > self.best_value {
                self.best_value = value;
                self.best_sol.copy_from_slice(current);
            }
            return;
        }

        let item = self.problem.items[depth];
        current[depth] = false;
        self.enumerate(current, depth + 1, value, weight);
        if let Some(weight) = weight.checked_add(item.weight) {
            current[depth] = true;
            self.enumerate(current, depth + 1, value + item.value, weight);
            current[depth] = false;
        }
    }
}

impl Solver for ExhaustiveSolver<'_> {
    fn maximize(&mut self) -> Completion {
        self.explored = 0;
        let mut current = vec![false; self.problem.nb_items()];
        self.enumerate(&mut current, 0, 0, 0);

        info!("Total of assignments enumerated: {}", self.explored);
        Completion { is_exact: true, best_value: self.best_value }
    }

    fn best_value(&self) -> isize {
        self.best_value
    }

    fn best_solution(&self) -> Solution {
        self.best_sol.clone()
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
        if actual > self.best_value {
            self.best_value = actual;
            self.best_sol   = solution;
        }
    }
}
