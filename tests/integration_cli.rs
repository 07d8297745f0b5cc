//! Integration tests for the goman CLI argument surface.
//!
//! These tests exercise parsing, help text, and flag validation only. No
//! network access and no toolchain mutation happens here.

use assert_cmd::Command;
use predicates::prelude::*;

fn goman() -> Command {
    Command::cargo_bin("goman").unwrap()
}

#[test]
fn test_help_lists_all_commands() {
    goman()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("available"))
        .stdout(predicate::str::contains("uninstall"));
}

#[test]
fn test_version_flag() {
    goman()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_fails() {
    goman()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_fails() {
    goman()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    goman()
        .args(["--verbose", "--quiet", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_install_requires_path() {
    goman()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn test_install_rejects_invalid_version() {
    // Version validation happens before any network access.
    goman()
        .args(["install", "--version", "not-a-version", "/tmp/goman-test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a recognizable go version"));
}

#[test]
fn test_check_help_mentions_preview() {
    goman()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--preview"));
}

#[test]
fn test_available_rejects_bad_count() {
    goman()
        .args(["available", "--count", "lots"])
        .assert()
        .failure();
}

#[test]
fn test_status_runs_without_network() {
    // Status only inspects PATH; it must succeed whether or not a
    // toolchain is present.
    goman().arg("status").assert().success();
}
