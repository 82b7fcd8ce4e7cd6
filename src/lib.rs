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

//! # knapsack-bnb
//! knapsack-bnb solves the 0/1 knapsack problem: given a set of items, each
//! having a value and a weight, pick the subset of items with the highest
//! total value whose total weight does not exceed the capacity of the sack.
//!
//! Small instances are solved by plain enumeration. Larger ones are solved by
//! branch-and-bound: the solver explores a binary tree of partial
//! assignments and prunes every subtree whose bound cannot beat the best
//! solution found so far. The bound of a node is the optimum of the
//! fractional relaxation of the knapsack (items may be split) restricted to
//! the items which are not decided yet. That relaxation is solved greedily,
//! taking the items by decreasing value per unit of weight.
//!
//! ## Quick Example
//! The following presents a minimalistic use of the library: it solves a
//! small textbook instance with the default configuration.
//!
//! ```
//! use knapsack_bnb::*;
//!
//! // capacity 50, three items given as (value, weight)
//! let problem = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
//! let outcome = solve(&problem, &SolverConfig::default());
//!
//! // the optimum is proved and it leaves the first item out
//! assert!(outcome.completion.is_exact);
//! assert_eq!(220, outcome.completion.best_value);
//! assert_eq!(vec![false, true, true], outcome.solution);
//! ```
//!
//! ## Going further
//! The building blocks of the branch-and-bound search can also be assembled
//! by hand. This lets you pick the exploration strategy (`Frontier`), the
//! stopping criterion (`Cutoff`) or even swap the `Relaxation` used to bound
//! the nodes.
//!
//! ```
//! use std::time::Duration;
//! use knapsack_bnb::*;
//!
//! let problem    = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
//! let relaxation = FractionalRelaxation::new(&problem);
//! let cutoff     = TimeBudget::new(Duration::from_secs(30));
//! let mut frontier = BestBoundFrontier::new();
//!
//! let mut solver = BranchAndBoundSolver::new(&problem, &relaxation, &cutoff, &mut frontier);
//! let Completion { is_exact, best_value } = solver.maximize();
//!
//! // `is_exact` is false when the time budget ran out before the optimum
//! // could be proved. `best_value` is then the best value found so far.
//! assert!(is_exact);
//! assert_eq!(220, best_value);
//! for (item, taken) in problem.items.iter().zip(solver.best_solution()) {
//!     if taken {
//!         println!("{}", item.index);
//!     }
//! }
//! ```

mod common;
mod abstraction;
mod implementation;
mod config;
mod timing;
pub mod io_utils;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
pub use config::*;
pub use timing::*;
pub use io_utils::{format_solution, parse_instance, read_instance};
