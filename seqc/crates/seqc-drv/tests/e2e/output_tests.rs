//! Output Destination and Format E2E Tests
//!
//! `--output`, `--format` and configuration-file driven output.

use predicates::prelude::*;
use seqc_drv::Config;
use seqc_lex::render::read_token_stream;
use seqc_lex::{RenderFormat, TokenKind};
use std::path::PathBuf;
use tempfile::TempDir;

use super::cli_tests::{fixtures_dir, seqc_in};

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("tokens.txt");

    seqc_in(&temp_dir)
        .arg(fixtures_dir().join("clean.hl"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("writing tokens to stdout").not());

    let written = std::fs::read_to_string(&output_path).expect("output file should exist");
    let tokens = read_token_stream(written.as_bytes()).expect("output should parse");
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].lexeme, "register_sequencial");
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Colon));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::RightBrace));
}

#[test]
fn test_output_file_with_faults_keeps_valid_tokens() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("tokens.txt");

    seqc_in(&temp_dir)
        .arg(fixtures_dir().join("faulty.hl"))
        .arg("--output")
        .arg(&output_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Warning -- Unknown token"));

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(!written.contains("Warning"));
    let tokens = read_token_stream(written.as_bytes()).unwrap();
    assert!(tokens.iter().all(|t| !t.kind.is_unknown()));
    assert!(tokens.iter().any(|t| t.lexeme == "break"));
}

#[test]
fn test_json_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("prog.hl");
    std::fs::write(&input, "if (x==10) { report }").unwrap();

    let output = seqc_in(&temp_dir)
        .arg(&input)
        .args(["--format", "json"])
        .output()
        .expect("Failed to run seqc");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0]["kind"], "Keyword");
    assert_eq!(lines[3]["lexeme"], "==");
    assert_eq!(lines[6]["kind"], "Left Curly Brace");
}

#[test]
fn test_config_file_sets_format_and_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("custom.toml");
    let output_path = temp_dir.path().join("from_config.jsonl");

    Config {
        output: Some(output_path.clone()),
        format: RenderFormat::Json,
        ..Config::default()
    }
    .save_to_path(&config_path)
    .unwrap();

    seqc_in(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg(fixtures_dir().join("clean.hl"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.starts_with(r#"{"kind":"Keyword","lexeme":"register_sequencial"}"#));
}

#[test]
fn test_cli_flags_override_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("seqc.toml"), "format = \"json\"\n").unwrap();

    seqc_in(&temp_dir)
        .arg(fixtures_dir().join("clean.hl"))
        .args(["-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<Keyword, \"register_sequencial\">"));
}

#[test]
fn test_config_in_current_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        temp_dir.path().join("seqc.toml"),
        "default_input = \"main.hl\"\nformat = \"json\"\n",
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("main.hl"), "break").unwrap();

    seqc_in(&temp_dir)
        .assert()
        .success()
        .stdout("{\"kind\":\"Keyword\",\"lexeme\":\"break\"}\n")
        .stderr(predicate::str::contains("main.hl"));
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path: PathBuf = temp_dir.path().join("env.json");
    std::fs::write(&config_path, r#"{"format": "json"}"#).unwrap();

    seqc_in(&temp_dir)
        .env("SEQC_CONFIG", &config_path)
        .arg(fixtures_dir().join("clean.hl"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"kind\":"));
}

#[test]
fn test_unwritable_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    seqc_in(&temp_dir)
        .arg(fixtures_dir().join("clean.hl"))
        .args(["-o", "missing_dir/tokens.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not open `missing_dir/tokens.txt`"));
}
