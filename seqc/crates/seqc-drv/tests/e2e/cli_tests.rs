//! CLI Interface E2E Tests
//!
//! Help, version, input selection, exit status and error reporting.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("e2e")
        .join("fixtures")
}

/// Get the path to the seqc binary
pub fn seqc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_seqc"))
}

/// A command running in an empty directory so no stray `seqc.toml` is
/// picked up, with environment overrides cleared.
pub fn seqc_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(seqc_bin());
    cmd.current_dir(dir.path())
        .env_remove("SEQC_CONFIG")
        .env_remove("SEQC_VERBOSE")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".xdg"))
        .arg("--no-color");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(seqc_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--output")));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(seqc_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("seqc").and(predicate::str::contains(env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_cli_clean_input_exits_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    seqc_in(&temp_dir)
        .arg(fixtures_dir().join("clean.hl"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<Keyword, \"register_sequencial\">\n<Identifier, \"seq_a\">\n",
        ))
        .stdout(predicate::str::contains("<Quotation, \"\"\">"))
        .stdout(predicate::str::ends_with("<Keyword, \"report\">\n<Right Curly Brace, \"}\">\n"))
        .stderr(predicate::str::contains("Warning").not())
        .stderr(predicate::str::contains("writing tokens to stdout"));
}

#[test]
fn test_cli_faulty_input_exits_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    seqc_in(&temp_dir)
        .arg(fixtures_dir().join("faulty.hl"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("<Keyword, \"register_op\">"))
        .stdout(predicate::str::contains("<Identifier, \"y\">"))
        .stdout(predicate::str::contains("<Keyword, \"break\">"))
        .stdout(predicate::str::contains("12ab").not())
        .stderr(predicate::str::contains("Warning -- Unknown token: \"12ab\""))
        .stderr(predicate::str::contains("Warning: Unknown character: @"))
        .stderr(predicate::str::contains("Warning -- Unknown token: \"=-\""))
        .stderr(predicate::str::contains(
            "Error: Scanner encountered an error during lexical analysis",
        ));
}

#[test]
fn test_cli_warnings_in_source_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = seqc_in(&temp_dir)
        .arg(fixtures_dir().join("faulty.hl"))
        .output()
        .expect("Failed to run seqc");
    let stderr = String::from_utf8_lossy(&output.stderr);

    let number = stderr.find("\"12ab\"").expect("malformed number warning");
    let stray = stderr.find("Unknown character: @").expect("stray warning");
    let operator = stderr.find("\"=-\"").expect("malformed operator warning");
    assert!(number < stray && stray < operator);
}

#[test]
fn test_cli_comments_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    seqc_in(&temp_dir)
        .arg(fixtures_dir().join("comments_only.hl"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_default_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("input1.hl"), "report x\n").unwrap();

    seqc_in(&temp_dir)
        .assert()
        .success()
        .stdout("<Keyword, \"report\">\n<Identifier, \"x\">\n")
        .stderr(predicate::str::contains("input file not specified"))
        .stderr(predicate::str::contains("input1.hl"));
}

#[test]
fn test_cli_missing_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    seqc_in(&temp_dir)
        .arg("does_not_exist.hl")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Could not open `does_not_exist.hl`"))
        .stderr(predicate::str::contains("caused by"));
}

#[test]
fn test_cli_unknown_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    seqc_in(&temp_dir)
        .arg(fixtures_dir().join("clean.hl"))
        .args(["--format", "yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown output format `yaml`"));
}

#[test]
fn test_cli_unknown_option() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    seqc_in(&temp_dir)
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_cli_verbose_logs_faults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    seqc_in(&temp_dir)
        .arg("-v")
        .arg(fixtures_dir().join("faulty.hl"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("W1002"));
}
