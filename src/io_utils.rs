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

//! This module provides the text format of the knapsack instances and
//! solutions.
//!
//! An instance starts with a header line `<item_count> <capacity>` which is
//! followed by one `<value> <weight>` line per item (in index order).
//! A solution is printed as a line `<objective_value> <flag>` followed by a
//! line holding one `0`/`1` per item.

use std::{fs, num::ParseIntError, path::Path};

use crate::{Completion, Knapsack, Solution};

/// This enumeration simply groups the kind of errors that might occur when parsing a
/// knapsack instance. There can be io errors (file unavailable ?), format error
/// (e.g. a missing item line), or parse int errors (the parser expected an
/// integer number but got ... something else).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The instance was not properly formatted.
    #[error("ill formed instance: {0}")]
    Format(String),
}

/// Splits the line in exactly two whitespace separated tokens.
fn two_tokens<'a>(line: Option<&'a str>, what: &str) -> Result<(&'a str, &'a str), Error> {
    let line = line.ok_or_else(|| Error::Format(format!("missing {}", what)))?;
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(Error::Format(format!("{} must consist of two integers (got '{}')", what, line.trim()))),
    }
}

/// Parses the text of an instance.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let problem = parse_instance("3 50\n60 10\n100 20\n120 30\n").unwrap();
/// assert_eq!(Knapsack::new(50, &[(60, 10), (100, 20), (120, 30)]), problem);
/// ```
pub fn parse_instance(text: &str) -> Result<Knapsack, Error> {
    let mut lines = text.lines();

    let (n, capacity) = two_tokens(lines.next(), "header line")?;
    let n        = n.parse::<usize>()?;
    let capacity = capacity.parse::<usize>()?;

    // each item takes at least four bytes of text
    let mut items = Vec::with_capacity(n.min(text.len() / 4));
    for i in 0..n {
        let (value, weight) = two_tokens(lines.next(), &format!("line of item {}", i))?;
        items.push((value.parse::<isize>()?, weight.parse::<usize>()?));
    }

    Ok(Knapsack::new(capacity, &items))
}

/// This function is used to read a knapsack instance from file. It returns either a
/// knapsack instance if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Knapsack, Error> {
    let text = fs::read_to_string(fname)?;
    parse_instance(&text)
}

/// Renders the solution in the output text format. The flag of the first line
/// is `1` iff `report_optimality` is set and the completion is exact. It is
/// `0` otherwise.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let completion = Completion { is_exact: true, best_value: 220 };
/// let solution   = vec![false, true, true];
/// assert_eq!("220 0\n0 1 1", format_solution(&completion, &solution, false));
/// assert_eq!("220 1\n0 1 1", format_solution(&completion, &solution, true));
/// ```
pub fn format_solution(completion: &Completion, solution: &Solution, report_optimality: bool) -> String {
    let flag = u8::from(report_optimality && completion.is_exact);
    let taken = solution.iter()
        .map(|x| if *x { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {}\n{}", completion.best_value, flag, taken)
}
