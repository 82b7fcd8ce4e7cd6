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

//! This module provides a tiny utility to report how long a call took.

use std::time::Instant;

use log::info;

/// Runs `f`, logs the wall time it took (labelled with `label`) and returns
/// its result unchanged.
///
/// # Example
/// ```
/// # use knapsack_bnb::timed;
/// let answer = timed("answer", || 6 * 7);
/// assert_eq!(42, answer);
/// ```
pub fn timed<T, F: FnOnce() -> T>(label: &str, f: F) -> T {
    let start  = Instant::now();
    let result = f();
    info!("{}: runtime {:.2} seconds", label, start.elapsed().as_secs_f64());
    result
}

#[cfg(test)]
mod test_timing {
    use crate::*;

    #[test]
    fn timed_is_transparent() {
        let outcome = timed("solve", || solve(&Knapsack::new(5, &[(3, 5)]), &SolverConfig::default()));
        assert_eq!(3, outcome.completion.best_value);
        assert_eq!(vec![true], outcome.solution);
    }
    #[test]
    fn timed_calls_the_closure_once() {
        let mut calls = 0;
        timed("count", || calls += 1);
        assert_eq!(1, calls);
    }
}
