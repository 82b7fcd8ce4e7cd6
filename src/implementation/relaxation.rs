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

//! This module provides the implementation of the continuous (fractional)
//! relaxation of the knapsack problem which is used to bound the nodes of the
//! search tree.

use log::trace;

use crate::{Bound, Knapsack, PartialAssignment, Relaxation, RelaxedSolution, Slot};

/// The fractional relaxation lets the items be split. Its optimum is found
/// greedily: the open items are considered by decreasing density and each is
/// taken wholly as long as it fits; the first item that does not fit is
/// taken partially so as to fill the sack; all the others are left out.
///
/// That greedy solution is the optimum of the LP relaxation, and hence an
/// admissible upper bound on any integer completion of the node.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let problem = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
/// let relax   = FractionalRelaxation::new(&problem);
///
/// let root    = PartialAssignment::root(problem.nb_items());
/// let relaxed = relax.relax(&root);
/// assert_eq!(vec![1.0, 1.0, 2.0 / 3.0], relaxed.values);
/// assert_eq!(Bound::Feasible(240.0), relaxed.bound);
/// ```
#[derive(Debug, Clone)]
pub struct FractionalRelaxation<'a> {
    problem: &'a Knapsack,
    /// item indices by decreasing density (ties broken by increasing index)
    order: Vec<usize>,
}
impl <'a> FractionalRelaxation<'a> {
    pub fn new(problem: &'a Knapsack) -> Self {
        let items = &problem.items;
        let mut order = (0..problem.nb_items()).collect::<Vec<_>>();
        order.sort_by(|a, b| {
            items[*b].density.total_cmp(&items[*a].density)
                .then_with(|| a.cmp(b))
        });
        Self { problem, order }
    }
}
impl Relaxation for FractionalRelaxation<'_> {
    fn relax(&self, node: &PartialAssignment) -> RelaxedSolution {
        let items    = &self.problem.items;
        let capacity = self.problem.capacity;
        let slots    = node.slots();

        let mut values = vec![0.0; items.len()];
        let mut used   = Some(0_usize);
        let mut base   = 0_isize;
        for (i, slot) in slots.iter().enumerate() {
            if let Slot::Decided(true) = slot {
                values[i] = 1.0;
                used      = used.and_then(|w| w.checked_add(items[i].weight));
                base     += items[i].value;
            }
        }

        // a weight that overflows usize exceeds any capacity
        let used = match used {
            Some(used) if used <= capacity => used,
            _ => {
                trace!("{} overflows the sack ({:?} > {})", node, used, capacity);
                return RelaxedSolution { values, bound: Bound::Infeasible };
            }
        };

        let remaining = capacity - used;
        let mut cum   = 0_usize;
        let mut value = base as f64;
        for i in self.order.iter().copied() {
            if slots[i].is_decided() {
                continue;
            }
            let item = &items[i];
            // the remaining items are not worth any room in the sack
            if item.value <= 0 {
                break;
            }
            if item.weight <= remaining - cum {
                values[i] = 1.0;
                cum      += item.weight;
                value    += item.value as f64;
            } else {
                let fraction = (remaining - cum) as f64 / item.weight as f64;
                values[i] = fraction;
                value    += fraction * item.value as f64;
                break;
            }
        }

        RelaxedSolution { values, bound: Bound::Feasible(value) }
    }
}
