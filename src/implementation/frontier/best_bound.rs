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

//! This module provides the implementation of a best bound frontier (priority
//! queue ordered by upper bound).

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;
use ordered_float::OrderedFloat;

use crate::{Frontier, PartialAssignment};

/// An active node along with the information needed to rank it.
#[derive(Debug, Clone)]
struct Entry {
    /// the bound of the parent node (+inf for the root)
    ub: OrderedFloat<f64>,
    /// the depth of the node (cached)
    depth: usize,
    /// insertion rank, used to make the order total and deterministic
    seq: usize,
    node: PartialAssignment,
}

/// Greater means popped first: highest bound, then deepest node, then the
/// earliest insertion.
#[derive(Debug, Clone, Copy, Default)]
struct MaxUB;
impl Compare<Entry> for MaxUB {
    fn compare(&self, l: &Entry, r: &Entry) -> Ordering {
        l.ub.cmp(&r.ub)
            .then_with(|| l.depth.cmp(&r.depth))
            .then_with(|| r.seq.cmp(&l.seq))
    }
}

/// The best bound frontier always selects the node whose parent had the
/// highest upper bound. In case of equalities, the ties are broken by
/// picking the deepest node, and eventually the node that was pushed first.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let mut frontier = BestBoundFrontier::new();
/// let (left, right) = PartialAssignment::root(2).branch(true).unwrap();
///
/// frontier.push(left.clone(), 10.0);
/// frontier.push(right.clone(), 70.0);
///
/// assert_eq!(Some(right), frontier.pop()); // because 70 > 10
/// assert_eq!(Some(left), frontier.pop());
/// ```
pub struct BestBoundFrontier {
    heap: BinaryHeap<Entry, MaxUB>,
    seq: usize,
}
impl BestBoundFrontier {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::from_vec_cmp(vec![], MaxUB), seq: 0 }
    }
}
impl Default for BestBoundFrontier {
    fn default() -> Self {
        Self::new()
    }
}
impl Frontier for BestBoundFrontier {
    fn push(&mut self, node: PartialAssignment, ub: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { ub: OrderedFloat(ub), depth: node.depth(), seq, node })
    }

    fn pop(&mut self) -> Option<PartialAssignment> {
        self.heap.pop().map(|e| e.node)
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod test_best_bound_frontier {
    use crate::*;

    fn child(node: &PartialAssignment, take: bool) -> PartialAssignment {
        let (l, r) = node.branch(true).unwrap();
        if take { r } else { l }
    }

    #[test]
    fn by_default_it_is_empty() {
        let frontier = BestBoundFrontier::default();
        assert!(frontier.is_empty());
    }
    #[test]
    fn when_i_push_and_pop_the_length_follows() {
        let mut frontier = BestBoundFrontier::new();
        frontier.push(PartialAssignment::root(2), f64::INFINITY);
        assert_eq!(1, frontier.len());
        assert!(frontier.pop().is_some());
        assert_eq!(0, frontier.len());
        assert!(frontier.pop().is_none());
    }
    #[test]
    fn the_highest_bound_pops_first() {
        let mut frontier = BestBoundFrontier::new();
        let root = PartialAssignment::root(3);
        let a = child(&root, false);
        let b = child(&root, true);
        let c = child(&b, true);

        frontier.push(a.clone(), 12.5);
        frontier.push(c.clone(), 3.0);
        frontier.push(b.clone(), 40.0);

        assert_eq!(Some(b), frontier.pop());
        assert_eq!(Some(a), frontier.pop());
        assert_eq!(Some(c), frontier.pop());
    }
    #[test]
    fn ties_are_broken_by_depth_then_insertion_order() {
        let mut frontier = BestBoundFrontier::new();
        let root = PartialAssignment::root(3);
        let (l, r) = root.branch(true).unwrap();
        let deep = child(&r, false);

        frontier.push(l.clone(), 10.0);
        frontier.push(r.clone(), 10.0);
        frontier.push(deep.clone(), 10.0);

        assert_eq!(Some(deep), frontier.pop());
        assert_eq!(Some(l), frontier.pop());
        assert_eq!(Some(r), frontier.pop());
    }
    #[test]
    fn when_i_clear_the_frontier_it_becomes_empty() {
        let mut frontier = BestBoundFrontier::new();
        frontier.push(PartialAssignment::root(2), 1.0);
        frontier.push(PartialAssignment::root(2), 2.0);
        frontier.clear();
        assert!(frontier.is_empty());
    }
}
