//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("articles").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("articles").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_serve_requires_database_url() {
    let mut cmd = Command::cargo_bin("articles").unwrap();
    cmd.env_remove("DATABASE_URL")
        .current_dir(std::env::temp_dir())
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("articles").unwrap();
    cmd.arg("migrate");

    cmd.assert().failure();
}
