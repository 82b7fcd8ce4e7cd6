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

//! This module defines the `Frontier` trait. That is the abstraction of the
//! set of active nodes: the partial assignments that must still be explored
//! (or pruned) before the problem is considered solved (by exhaustion).

use crate::PartialAssignment;

/// The `Frontier` holds the active nodes of the search tree. The order in
/// which the nodes are popped is what distinguishes one exploration strategy
/// from another.
pub trait Frontier {
    /// This is how you push a node onto the frontier. The `ub` is the bound
    /// that was computed for the parent of the node (`+inf` for the root).
    fn push(&mut self, node: PartialAssignment, ub: f64);
    /// This method selects the next node to explore and removes it from
    /// the frontier.
    fn pop(&mut self) -> Option<PartialAssignment>;
    /// This method clears the frontier: it removes all nodes from the queue.
    fn clear(&mut self);
    /// Yields the length of the queue.
    fn len(&self) -> usize;
    /// Returns true iff the frontier is empty (len == 0)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
