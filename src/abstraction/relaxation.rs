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

//! This module defines the `Relaxation` trait.

use crate::{PartialAssignment, RelaxedSolution};

/// A relaxation computes an upper bound on the best value that can be reached
/// by completing some partial assignment.
///
/// # Note:
/// The bound *must* be admissible: it may never be lower than the value of
/// the best feasible integer completion of the node. An inadmissible bound
/// makes the solver prune subtrees which hold better solutions and silently
/// return a suboptimal answer.
pub trait Relaxation {
    /// Solves the relaxed problem rooted in the given node. The returned
    /// solution keeps the decisions of the node and completes the open slots
    /// with a (possibly fractional) ratio.
    fn relax(&self, node: &PartialAssignment) -> RelaxedSolution;
}
