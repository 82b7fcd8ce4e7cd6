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

//! This module defines the configuration of a resolution: which algorithm is
//! used, how the search tree is explored and when the search must give up.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use derive_builder::Builder;
use thiserror::Error;

use crate::DEFAULT_TOLERANCE;

/// The number of items up to which an instance is solved by enumeration
pub const DEFAULT_EXHAUSTIVE_THRESHOLD: usize = 24;

/// The order in which the active nodes of the search tree are explored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Deepest node first. Finds feasible solutions quickly and keeps the
    /// frontier small.
    #[default]
    DepthFirst,
    /// Node with the highest (parent) bound first. Ties go to the deepest
    /// node, then to the oldest one.
    BestBound,
}

/// The error raised when a strategy name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy '{0}' (expected 'depth-first' or 'best-bound')")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth" | "depth-first" => Ok(Strategy::DepthFirst),
            "best"  | "best-bound"  => Ok(Strategy::BestBound),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::BestBound  => write!(f, "best-bound"),
        }
    }
}

/// The parameters of a call to `solve`.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// # use std::time::Duration;
/// let config = SolverConfigBuilder::default()
///     .strategy(Strategy::BestBound)
///     .time_budget(Duration::from_secs(60))
///     .build()
///     .unwrap();
///
/// assert_eq!(Strategy::BestBound, config.strategy);
/// assert_eq!(Some(Duration::from_secs(60)), config.time_budget);
/// assert_eq!(24, config.exhaustive_threshold);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SolverConfig {
    /// The exploration strategy of the branch-and-bound search
    #[builder(default)]
    pub strategy: Strategy,
    /// The wall-clock time the branch-and-bound search may use (None means
    /// no limit). The exhaustive enumeration is never interrupted.
    #[builder(setter(strip_option), default)]
    pub time_budget: Option<Duration>,
    /// Instances with at most this number of items are solved exhaustively
    #[builder(default = "DEFAULT_EXHAUSTIVE_THRESHOLD")]
    pub exhaustive_threshold: usize,
    /// How far from an integer a relaxed value may be and still be deemed
    /// integral
    #[builder(default = "DEFAULT_TOLERANCE")]
    pub tolerance: f64,
}

impl SolverConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.tolerance {
            Some(tol) if !(tol > 0.0 && tol < 0.5) =>
                Err(format!("the tolerance must lie in ]0, 0.5[ (got {})", tol)),
            _ => Ok(()),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            strategy: Strategy::default(),
            time_budget: None,
            exhaustive_threshold: DEFAULT_EXHAUSTIVE_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}
