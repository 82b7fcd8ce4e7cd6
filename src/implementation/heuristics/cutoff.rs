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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to tune the behavior of a solver.

use std::time::{Duration, Instant};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It imposes that the search goes
/// proves optimality before to stop.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}

/// This cutoff allows one to specify a maximum time budget to solve the problem.
/// Once the deadline is passed, the optimization stops and the best solution
/// that has been found (so far) is returned.
///
/// The clock is only read when the solver asks whether it must stop, that is
/// once per node. The node being evaluated when the deadline passes runs to
/// completion.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// use std::time::Duration;
///
/// let problem    = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
/// let relaxation = FractionalRelaxation::new(&problem);
/// let cutoff     = TimeBudget::new(Duration::from_secs(10));
/// let mut frontier = DepthFirstFrontier::new();
///
/// let mut solver = BranchAndBoundSolver::new(&problem, &relaxation, &cutoff, &mut frontier);
/// let outcome    = solver.maximize(); // will run for maximum 10 seconds
/// assert!(outcome.is_exact);
/// assert_eq!(220, outcome.best_value);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    /// None when the budget is too large to be represented
    deadline: Option<Instant>,
}
impl TimeBudget {
    /// Grants `budget` to the search, starting now.
    pub fn new(budget: Duration) -> Self {
        TimeBudget { deadline: Instant::now().checked_add(budget) }
    }
    /// Lets the search run until the given instant.
    pub fn until(deadline: Instant) -> Self {
        TimeBudget { deadline: Some(deadline) }
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod test_cutoff {
    use std::time::{Duration, Instant};

    use crate::*;

    #[test]
    fn no_cutoff_never_stops() {
        assert!(!NoCutoff.must_stop());
    }
    #[test]
    fn a_generous_budget_does_not_stop() {
        let cutoff = TimeBudget::new(Duration::from_secs(3600));
        assert!(!cutoff.must_stop());
    }
    #[test]
    fn a_past_deadline_stops() {
        let cutoff = TimeBudget::until(Instant::now());
        assert!(cutoff.must_stop());
        let cutoff = TimeBudget::new(Duration::ZERO);
        assert!(cutoff.must_stop());
    }
    #[test]
    fn an_unrepresentable_budget_never_stops() {
        let cutoff = TimeBudget::new(Duration::MAX);
        assert_eq!(None, cutoff.deadline());
        assert!(!cutoff.must_stop());
    }
}
