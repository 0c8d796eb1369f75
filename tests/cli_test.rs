// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! CLI integration tests.
//!
//! Tests the `leafbase` binary's non-interactive subcommands with
//! assert_cmd and predicates.

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Exec command
// ============================================================================

#[test]
fn test_cli_exec_basic_flow() {
    Command::cargo_bin("leafbase")
        .unwrap()
        .args(["exec", "mkdir a", "cd a", "touch x.txt", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory '/a' created"))
        .stdout(predicate::str::contains("Moved to /a"))
        .stdout(predicate::str::contains("x.txt"));
}

#[test]
fn test_cli_exec_quiet_suppresses_echo() {
    Command::cargo_bin("leafbase")
        .unwrap()
        .args(["exec", "--quiet", "mkdir a", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a/"))
        .stdout(predicate::str::contains("$ mkdir").not());
}

#[test]
fn test_cli_exec_stat_json() {
    Command::cargo_bin("leafbase")
        .unwrap()
        .args(["exec", "--quiet", "touch n.txt", "stat n.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"path":"/n.txt","type":"file"}"#,
        ));
}

#[test]
fn test_cli_exec_failure_exits_nonzero() {
    Command::cargo_bin("leafbase")
        .unwrap()
        .args(["exec", "cd missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn test_cli_exec_rejects_invalid_order() {
    Command::cargo_bin("leafbase")
        .unwrap()
        .args(["exec", "--order", "2", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("order"));
}

// ============================================================================
// Demo command
// ============================================================================

#[test]
fn test_cli_demo_prints_sample_tree() {
    Command::cargo_bin("leafbase")
        .unwrap()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filesystem ready"))
        .stdout(predicate::str::contains("houses/"))
        .stdout(predicate::str::contains("stark/"))
        .stdout(predicate::str::contains("arya.txt"))
        .stdout(predicate::str::contains("tyrion.txt"));
}
