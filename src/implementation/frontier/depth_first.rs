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

//! This module provides the implementation of a depth first frontier.

use std::cmp::Reverse;
use std::collections::VecDeque;

use crate::{Frontier, PartialAssignment};

/// The depth first frontier selects the deepest active node. Before each
/// selection, the active nodes are stably sorted by decreasing depth and the
/// head is popped. Because of the stability of that sort, the children of a
/// node (which are always pushed left then right) come out in that order:
/// the branch which leaves the item out is explored first.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let mut frontier = DepthFirstFrontier::default();
/// let (left, right) = PartialAssignment::root(2).branch(true).unwrap();
/// let (deep, _)     = right.branch(true).unwrap();
///
/// frontier.push(left.clone(), 10.0);
/// frontier.push(deep.clone(), 5.0);
/// frontier.push(right.clone(), 7.0);
///
/// assert_eq!(Some(deep), frontier.pop());  // deepest
/// assert_eq!(Some(left), frontier.pop());  // first pushed among depth 1
/// assert_eq!(Some(right), frontier.pop());
/// assert_eq!(None, frontier.pop());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DepthFirstFrontier {
    nodes: VecDeque<PartialAssignment>
}
impl DepthFirstFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}
impl Frontier for DepthFirstFrontier {
    fn push(&mut self, node: PartialAssignment, _ub: f64) {
        self.nodes.push_back(node)
    }

    fn pop(&mut self) -> Option<PartialAssignment> {
        self.nodes.make_contiguous().sort_by_key(|n| Reverse(n.depth()));
        self.nodes.pop_front()
    }

    fn clear(&mut self) {
        self.nodes.clear()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod test_depth_first_frontier {
    use crate::*;

    fn child(node: &PartialAssignment, take: bool) -> PartialAssignment {
        let (l, r) = node.branch(true).unwrap();
        if take { r } else { l }
    }

    #[test]
    fn by_default_it_is_empty() {
        let frontier = DepthFirstFrontier::new();
        assert!(frontier.is_empty());
        assert_eq!(0, frontier.len());
    }
    #[test]
    fn when_i_push_a_node_the_length_increases() {
        let mut frontier = DepthFirstFrontier::new();
        frontier.push(PartialAssignment::root(3), f64::INFINITY);
        assert_eq!(1, frontier.len());
        assert!(!frontier.is_empty());
    }
    #[test]
    fn when_i_pop_a_node_the_length_decreases() {
        let mut frontier = DepthFirstFrontier::new();
        let root = PartialAssignment::root(3);
        frontier.push(child(&root, false), 1.0);
        frontier.push(child(&root, true), 1.0);
        frontier.pop();
        assert_eq!(1, frontier.len());
        frontier.pop();
        assert!(frontier.is_empty());
    }
    #[test]
    fn when_i_pop_an_empty_frontier_i_get_none() {
        let mut frontier = DepthFirstFrontier::new();
        assert!(frontier.pop().is_none());
    }
    #[test]
    fn the_deepest_node_pops_first_regardless_of_the_bound() {
        let mut frontier = DepthFirstFrontier::new();
        let root  = PartialAssignment::root(4);
        let one   = child(&root, true);
        let two   = child(&one, false);
        let three = child(&two, true);

        frontier.push(one.clone(), 100.0);
        frontier.push(three.clone(), 1.0);
        frontier.push(two.clone(), 50.0);

        assert_eq!(Some(three), frontier.pop());
        assert_eq!(Some(two), frontier.pop());
        assert_eq!(Some(one), frontier.pop());
    }
    #[test]
    fn siblings_pop_in_insertion_order() {
        let mut frontier = DepthFirstFrontier::new();
        let root = PartialAssignment::root(2);
        let (left, right) = root.branch(true).unwrap();
        frontier.push(left.clone(), 1.0);
        frontier.push(right.clone(), 1.0);

        assert_eq!(Some(left), frontier.pop());
        assert_eq!(Some(right), frontier.pop());
    }
    #[test]
    fn when_i_clear_the_frontier_it_becomes_empty() {
        let mut frontier = DepthFirstFrontier::new();
        frontier.push(PartialAssignment::root(2), 0.0);
        frontier.clear();
        assert!(frontier.is_empty());
    }
}
