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

//! This module provides the search tree bookkeeping: the set of active nodes,
//! the node currently under evaluation and the incumbent (the best fully
//! decided, feasible solution found so far).

use crate::{Frontier, PartialAssignment, Solution};

/// The state of a branch-and-bound search.
///
/// A node is owned either by the frontier (it is active) or by the tree as
/// the `current` node (it is not). Once it is pruned or consumed by
/// branching, it is simply dropped: the children are independent copies
/// so there is no need to keep any history.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let mut frontier = DepthFirstFrontier::new();
/// let mut tree     = SearchTree::new(&mut frontier, 2);
///
/// assert!(tree.pop_current().is_some());   // the root
/// tree.expand_current(f64::INFINITY);      // its two children become active
/// assert_eq!(2, tree.nb_active());
///
/// assert!(tree.accept_incumbent(vec![true, false], 5));
/// assert!(!tree.accept_incumbent(vec![false, true], 5)); // not strictly better
/// assert_eq!(5, tree.incumbent_value());
/// ```
pub struct SearchTree<'a> {
    /// The active nodes
    frontier: &'a mut dyn Frontier,
    /// The node under evaluation (detached from the frontier)
    current: Option<PartialAssignment>,
    /// The best known solution
    incumbent: Solution,
    /// The value of the best known solution. It never decreases.
    incumbent_value: isize,
}
impl <'a> SearchTree<'a> {
    /// Creates a new tree whose frontier is seeded with the root. The initial
    /// incumbent is the empty sack.
    pub fn new(frontier: &'a mut dyn Frontier, nb_items: usize) -> Self {
        let mut tree = SearchTree {
            frontier,
            current        : None,
            incumbent      : vec![false; nb_items],
            incumbent_value: 0,
        };
        tree.reset(nb_items);
        tree
    }
    /// Restarts the exploration from the root. The incumbent is kept.
    pub fn reset(&mut self, nb_items: usize) {
        self.current = None;
        self.frontier.clear();
        self.frontier.push(PartialAssignment::root(nb_items), f64::INFINITY);
    }
    /// Returns true iff there is no active node left
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }
    /// The number of active nodes
    pub fn nb_active(&self) -> usize {
        self.frontier.len()
    }
    /// Selects the next node to explore, detaches it from the frontier and
    /// makes it the current node.
    pub fn pop_current(&mut self) -> Option<&PartialAssignment> {
        self.current = self.frontier.pop().map(|mut node| {
            node.set_inactive();
            node
        });
        self.current.as_ref()
    }
    /// The node under evaluation
    pub fn current(&self) -> Option<&PartialAssignment> {
        self.current.as_ref()
    }
    /// Discards the current node without producing any child.
    pub fn prune(&mut self) {
        self.current = None;
    }
    /// Replaces the incumbent iff `value` is strictly better. Returns true
    /// when the incumbent was replaced.
    pub fn accept_incumbent(&mut self, solution: Solution, value: isize) -> bool {
        if value > self.incumbent_value {
            self.incumbent       = solution;
            self.incumbent_value = value;
            true
        } else {
            false
        }
    }
    /// Branches on the current node (which is consumed) and activates its
    /// children. The `ub` is the bound of the current node, it is inherited
    /// by its children. Expanding a leaf produces nothing.
    pub fn expand_current(&mut self, ub: f64) {
        if let Some((left, right)) = self.current.take().and_then(|node| node.branch(true)) {
            self.frontier.push(left, ub);
            self.frontier.push(right, ub);
        }
    }
    /// Drops all the active nodes as well as the current one.
    pub fn clear(&mut self) {
        self.current = None;
        self.frontier.clear();
    }
    /// The best solution known so far
    pub fn incumbent(&self) -> &Solution {
        &self.incumbent
    }
    /// The value of the best solution known so far
    pub fn incumbent_value(&self) -> isize {
        self.incumbent_value
    }
}
