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

//! This module provides the partial assignment: the nodes of the
//! branch-and-bound search tree.

use std::fmt;

/// The state of one item in a partial assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// No decision has been made about the item yet
    Unassigned,
    /// The item is in the sack (true) or not (false)
    Decided(bool),
}
impl Slot {
    #[inline]
    pub fn is_decided(self) -> bool {
        matches!(self, Slot::Decided(_))
    }
}

/// A point in the search tree: some items are decided, the others remain
/// open. Nodes are *left-filled*: all decided slots precede all unassigned
/// ones. This holds because branching always resolves the lowest-index
/// unassigned slot, hence the depth of a node is also the index of its first
/// open slot.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let root = PartialAssignment::root(3);
/// assert_eq!(0, root.depth());
///
/// let (left, right) = root.branch(true).unwrap();
/// assert_eq!(vec![Some(false), None, None], left.to_vector());
/// assert_eq!(vec![Some(true),  None, None], right.to_vector());
/// assert_eq!(1, right.depth());
/// assert!(right.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialAssignment {
    slots: Vec<Slot>,
    /// number of decided slots (= index of the first unassigned one)
    depth: usize,
    /// is the node a member of the frontier ?
    active: bool,
}
impl PartialAssignment {
    /// Creates the root of the search tree: nothing is decided and the node
    /// sits on the frontier.
    pub fn root(nb_items: usize) -> Self {
        PartialAssignment {
            slots : vec![Slot::Unassigned; nb_items],
            depth : 0,
            active: true,
        }
    }
    /// Resolves the lowest unassigned slot, yielding the child which leaves
    /// the item out (left) and the one that takes it (right). Both children
    /// carry the requested `active` flag. A fully decided node has no
    /// children.
    pub fn branch(&self, active: bool) -> Option<(Self, Self)> {
        if self.is_leaf() {
            return None;
        }
        let k = self.depth;

        let mut left = PartialAssignment {
            slots : self.slots.clone(),
            depth : k + 1,
            active,
        };
        let mut right = left.clone();
        left.slots[k]  = Slot::Decided(false);
        right.slots[k] = Slot::Decided(true);

        Some((left, right))
    }
    /// The number of decided slots
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// The number of items (decided or not)
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    /// Returns true iff the assignment bears on zero item
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    /// Returns true iff every slot is decided
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.depth == self.slots.len()
    }
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn set_active(&mut self) {
        self.active = true;
    }
    pub fn set_inactive(&mut self) {
        self.active = false;
    }
    /// The state of each item, in index order
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
    /// The decided values in order, `None` standing for the open slots
    pub fn to_vector(&self) -> Vec<Option<bool>> {
        self.slots.iter()
            .map(|s| match s {
                Slot::Unassigned => None,
                Slot::Decided(x) => Some(*x),
            })
            .collect()
    }
}
impl fmt::Display for PartialAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Slot::Unassigned      => write!(f, "_")?,
                Slot::Decided(false)  => write!(f, "0")?,
                Slot::Decided(true)   => write!(f, "1")?,
            }
        }
        write!(f, "]")
    }
}
