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

//! This module defines the `Solver` trait.

use crate::{Completion, Solution};

/// This is the solver abstraction. It is implemented by the structures that
/// search for the best assignment of some knapsack instance (branch-and-bound
/// and exhaustive enumeration). Both can be used interchangeably by a client
/// which picks the algorithm based on the size of the problem.
pub trait Solver {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the attempted maximization. Such a `Completion` may either be marked
    /// **exact** if the maximization has been carried out until optimality was
    /// proved. Or it can be inexact, in which case it means that the
    /// maximization process was stopped because of the satisfaction of some
    /// cutoff criterion. The `best_value` of an inexact completion is the best
    /// value that was known at the time of cutoff (possibly suboptimal).
    fn maximize(&mut self) -> Completion;
    /// This method returns the value of the objective function for the best
    /// solution that has been found. The empty sack is always feasible, so
    /// there always is one.
    fn best_value(&self) -> isize;
    /// This method returns the best solution that has been found. That is,
    /// one flag per item telling whether the item goes in the sack.
    fn best_solution(&self) -> Solution;
    /// Sets a primal (best known value and solution) of the problem. A
    /// solution that does not fit the sack is ignored. Otherwise its exact
    /// value is used, and it is kept only when it strictly improves the
    /// current best value.
    fn set_primal(&mut self, value: isize, solution: Solution);
}
