//! Argument-surface tests that run without AWS credentials.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn lspot() -> Command {
    Command::cargo_bin("lspot").unwrap()
}

#[test]
fn help_lists_the_output_modes() {
    lspot()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--json"))
        .stdout(contains("--table"))
        .stdout(contains("--one"))
        .stdout(contains("--region"));
}

#[test]
fn instance_type_is_required() {
    lspot()
        .assert()
        .failure()
        .stderr(contains("instance_type").or(contains("INSTANCE_TYPE")));
}

#[test]
fn unknown_flags_are_rejected() {
    lspot()
        .args(["p3.8xlarge", "--cheapest"])
        .assert()
        .failure()
        .stderr(contains("unexpected argument"));
}
