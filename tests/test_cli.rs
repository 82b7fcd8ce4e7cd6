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

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;

fn resource(id: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/")
        .join(id)
}

fn knapsack() -> Command {
    let mut cmd = Command::cargo_bin("knapsack-bnb").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn prints_the_value_and_the_allocation() {
    knapsack()
        .arg(resource("ks_4_0"))
        .assert()
        .success()
        .stdout("19 0\n0 0 1 1\n");
}

#[test]
fn the_optimality_flag_is_zero_by_default_even_for_branch_and_bound() {
    knapsack()
        .arg(resource("ks_4_0"))
        .args(["--threshold", "0"])
        .assert()
        .success()
        .stdout("19 0\n0 0 1 1\n");
}

#[test]
fn report_optimality_sets_the_flag() {
    knapsack()
        .arg(resource("ks_4_0"))
        .args(["--threshold", "0", "--strategy", "best-bound", "--report-optimality"])
        .assert()
        .success()
        .stdout("19 1\n0 0 1 1\n");
}

#[test]
fn an_exhausted_budget_is_not_reported_optimal() {
    knapsack()
        .arg(resource("ks_30_0"))
        .args(["--duration", "0", "--report-optimality"])
        .assert()
        .success()
        .stdout(format!("0 0\n{}\n", vec!["0"; 30].join(" ")));
}

#[test]
fn solves_a_larger_instance() {
    let output = knapsack()
        .arg(resource("ks_50_0"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();
    let mut lines = output.lines();
    assert_eq!(Some("11005 0"), lines.next());
    assert_eq!(50, lines.next().unwrap().split_whitespace().count());
}

#[test]
fn reads_instances_from_any_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "3 50").unwrap();
    writeln!(file, "60 10").unwrap();
    writeln!(file, "100 20").unwrap();
    writeln!(file, "120 30").unwrap();

    knapsack()
        .arg(file.path())
        .assert()
        .success()
        .stdout("220 0\n0 1 1\n");
}

#[test]
fn a_malformed_instance_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "3 50").unwrap();
    writeln!(file, "60 10").unwrap();

    knapsack()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn a_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    knapsack()
        .arg(dir.path().join("missing"))
        .assert()
        .failure();
}

#[test]
fn an_unknown_strategy_is_an_error() {
    knapsack()
        .arg(resource("ks_4_0"))
        .args(["--strategy", "breadth-first"])
        .assert()
        .failure();
}
