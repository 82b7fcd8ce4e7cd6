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

//! This is the command line entry point: it reads an instance file, solves it
//! and prints the solution on the standard output.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env};
use knapsack_bnb::{format_solution, read_instance, solve, timed, SolverConfigBuilder, Strategy};

/// Solves a 0/1 knapsack instance, exhaustively when it is small and by
/// branch-and-bound otherwise.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The path to the instance file
    fname: String,
    /// The maximum amount of time (in seconds) the branch-and-bound search may run
    #[arg(short, long, default_value_t = 16_200)]
    duration: u64,
    /// The order in which the search tree is explored (depth-first or best-bound)
    #[arg(short, long, default_value_t = Strategy::DepthFirst)]
    strategy: Strategy,
    /// Instances with at most this number of items are solved exhaustively
    #[arg(short, long, default_value_t = 24)]
    threshold: usize,
    /// Print 1 instead of 0 after the objective value when optimality is proved
    #[arg(short, long)]
    report_optimality: bool,
}

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    let problem = read_instance(&args.fname)
        .with_context(|| format!("cannot read instance {}", args.fname))?;
    let config = SolverConfigBuilder::default()
        .strategy(args.strategy)
        .time_budget(Duration::from_secs(args.duration))
        .exhaustive_threshold(args.threshold)
        .build()?;

    let outcome = timed("solve", || solve(&problem, &config));
    if !outcome.completion.is_exact {
        log::warn!("the time budget was exhausted: the solution might not be optimal");
    }

    println!("{}", format_solution(&outcome.completion, &outcome.solution, args.report_optimality));
    Ok(())
}
