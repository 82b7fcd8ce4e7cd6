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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An indivisible unit of the knapsack problem. It is either taken as a whole
/// (1) or left out (0). The density of an item is its value per unit of weight
/// and is computed once, when the item is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// The position of the item in the instance (0 based)
    pub index: usize,
    /// The profit one earns by putting the item in the sack
    pub value: isize,
    /// The amount of capacity the item consumes
    pub weight: usize,
    /// value / weight
    pub density: f64,
}
impl Item {
    /// Creates a new item and computes its density.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_bnb::Item;
    /// let item = Item::new(0, 60, 10);
    /// assert_eq!(6.0, item.density);
    ///
    /// // a weightless item is infinitely dense as long as it brings a profit
    /// assert_eq!(f64::INFINITY, Item::new(1, 5, 0).density);
    /// assert_eq!(0.0, Item::new(2, 0, 0).density);
    /// ```
    pub fn new(index: usize, value: isize, weight: usize) -> Self {
        let density = if weight > 0 {
            value as f64 / weight as f64
        } else if value > 0 {
            f64::INFINITY
        } else {
            0.0
        };
        Item { index, value, weight, density }
    }
}

// ----------------------------------------------------------------------------
// --- KNAPSACK ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A solution assigns one flag per item (in index order). An item whose flag
/// is `true` is put in the sack.
pub type Solution = Vec<bool>;

/// The total value and weight of some solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub value: isize,
    pub weight: usize,
}

/// An instance of the 0/1 knapsack problem: a capacity and the list of items
/// (which is fixed for the complete duration of a resolution).
#[derive(Debug, Clone, PartialEq)]
pub struct Knapsack {
    /// The weight budget of the sack
    pub capacity: usize,
    /// The items, indexed from 0 to `nb_items() - 1`
    pub items: Vec<Item>,
}
impl Knapsack {
    /// Creates a new instance from a list of `(value, weight)` pairs.
    pub fn new(capacity: usize, items: &[(isize, usize)]) -> Self {
        let items = items.iter().copied()
            .enumerate()
            .map(|(i, (value, weight))| Item::new(i, value, weight))
            .collect();
        Knapsack { capacity, items }
    }
    /// The number of items in the instance
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    /// Computes the total value and weight of the given solution. The weight
    /// saturates at `usize::MAX`.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_bnb::*;
    /// let problem = Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]);
    /// let eval    = problem.evaluate(&vec![false, true, true]);
    /// assert_eq!(220, eval.value);
    /// assert_eq!(50,  eval.weight);
    /// ```
    pub fn evaluate(&self, solution: &[bool]) -> Evaluation {
        self.items.iter()
            .zip(solution.iter().copied())
            .filter(|(_, taken)| *taken)
            .fold(Evaluation::default(), |acc, (item, _)| Evaluation {
                value : acc.value + item.value,
                weight: acc.weight.saturating_add(item.weight),
            })
    }
    /// Returns true iff the solution has one flag per item and its weight
    /// fits in the sack.
    pub fn is_feasible(&self, solution: &[bool]) -> bool {
        solution.len() == self.nb_items() && self.weight_of(solution).map_or(false, |w| w <= self.capacity)
    }
    /// The total weight of the taken items or None when it overflows.
    fn weight_of(&self, solution: &[bool]) -> Option<usize> {
        self.items.iter()
            .zip(solution.iter().copied())
            .filter(|(_, taken)| *taken)
            .try_fold(0_usize, |acc, (item, _)| acc.checked_add(item.weight))
    }
}

// ----------------------------------------------------------------------------
// --- RELAXATION -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The bound computed by a relaxation for some partial assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// The decided items already exceed the capacity: no completion of the
    /// partial assignment can ever be feasible.
    Infeasible,
    /// An upper bound on the value of any feasible completion
    Feasible(f64),
}
impl Bound {
    /// Returns true iff a subtree with this bound might hold a solution
    /// strictly better than `incumbent`.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_bnb::Bound;
    /// assert!(Bound::Feasible(10.5).can_improve(10));
    /// assert!(!Bound::Feasible(10.0).can_improve(10));
    /// assert!(!Bound::Infeasible.can_improve(isize::MIN));
    /// ```
    pub fn can_improve(self, incumbent: isize) -> bool {
        match self {
            Bound::Infeasible => false,
            Bound::Feasible(z) => z > incumbent as f64,
        }
    }
    /// The numeric value of the bound (if any)
    pub fn value(self) -> Option<f64> {
        match self {
            Bound::Infeasible => None,
            Bound::Feasible(z) => Some(z),
        }
    }
}

/// The optimum of a relaxed sub problem: a full length vector where each item
/// is taken with a ratio in [0, 1]. This is *not* a node of the search tree;
/// it only serves to report a bound and to test for integrality.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxedSolution {
    /// The ratio of each item (in index order) that is put in the sack
    pub values: Vec<f64>,
    /// The objective value of the relaxed solution
    pub bound: Bound,
}
impl RelaxedSolution {
    /// Returns true iff every value is within `tolerance` of its rounded
    /// integer.
    pub fn is_integer_feasible(&self, tolerance: f64) -> bool {
        self.values.iter().all(|x| (x - x.round()).abs() < tolerance)
    }
    pub fn bound(&self) -> Bound {
        self.bound
    }
    /// Rounds each ratio to the nearest decision.
    pub fn to_solution(&self) -> Solution {
        self.values.iter().map(|x| x.round() >= 1.0).collect()
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the search stopped before proving optimality
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred
}

/// The outcome of a maximization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// is the given solution exact (proved optimal)? or is it a best-effort
    /// approximation because the search was cut off ?
    pub is_exact: bool,
    /// the value of the best solution that was found
    pub best_value: isize,
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_item {
    use crate::Item;

    #[test]
    fn density_is_value_per_unit_of_weight() {
        assert_eq!(5.0, Item::new(0, 100, 20).density);
        assert_eq!(4.0, Item::new(1, 120, 30).density);
    }
    #[test]
    fn weightless_items_do_not_divide_by_zero() {
        assert_eq!(f64::INFINITY, Item::new(0, 1, 0).density);
        assert_eq!(0.0, Item::new(0, 0, 0).density);
        assert_eq!(0.0, Item::new(0, -3, 0).density);
    }
}
