//! Integration tests for the `yamltrim` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to run the actual binary,
//! covering stdin/stdout piping, file I/O, JSON output, multi-document
//! streams and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to a fixture under tests/fixtures.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn yamltrim() -> Command {
    Command::cargo_bin("yamltrim").unwrap()
}

/// Run with `--format json --compact` on the given fixture and parse stdout.
fn trimmed_json(name: &str) -> serde_json::Value {
    let output = yamltrim()
        .args(["--format", "json", "--compact", "-i", &fixture(name)])
        .output()
        .expect("yamltrim should run");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("stdout must be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// stdin → stdout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn trims_stdin_to_stdout() {
    yamltrim()
        .write_stdin("a: b\nc: \"\"\n")
        .assert()
        .success()
        .stdout("a: b\n");
}

#[test]
fn fully_empty_document_prints_null() {
    yamltrim()
        .write_stdin("a: \"\"\nb: [0, false]\n")
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn empty_stdin_prints_null() {
    yamltrim().write_stdin("").assert().success().stdout("null\n");
}

#[test]
fn partial_reduction_keeps_survivors() {
    yamltrim()
        .write_stdin("top:\n  middle:\n    deep: \"\"\n  other:\n  - \"\"\n  - two\n")
        .assert()
        .success()
        .stdout("top:\n  other:\n  - two\n");
}

#[test]
fn stdout_has_no_log_noise() {
    yamltrim()
        .env("RUST_LOG", "debug")
        .write_stdin("a: b\n")
        .assert()
        .success()
        .stdout("a: b\n")
        .stderr(predicate::str::contains("trimmed document"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn trims_file_to_stdout() {
    yamltrim()
        .args(["-i", &fixture("sample.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Alice"))
        .stdout(predicate::str::contains("theme: dark"))
        .stdout(predicate::str::contains("nickname").not())
        .stdout(predicate::str::contains("address").not())
        .stdout(predicate::str::contains("notifications").not());
}

#[test]
fn trims_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("trimmed.yaml");

    yamltrim()
        .args(["-i", &fixture("sample.yaml"), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains("name: Alice"));
    assert!(!content.contains("archived"));
    assert!(content.ends_with('\n'));
}

#[test]
fn full_reduction_fixture_prints_null() {
    yamltrim()
        .args(["-i", &fixture("all_empty.yaml")])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn missing_input_file_fails() {
    yamltrim()
        .args(["-i", "/nonexistent/path/values.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON output
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn json_output_matches_trimmed_structure() {
    let value = trimmed_json("sample.yaml");
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Alice",
            "age": 30,
            "active": true,
            "tags": ["rust", "yaml"],
            "settings": {"theme": "dark"}
        })
    );
}

#[test]
fn json_output_preserves_key_order() {
    let output = yamltrim()
        .args(["--format", "json", "--compact", "-i", &fixture("sample.yaml")])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(r#"{"name":"Alice","age":30,"active":true,"#));
}

#[test]
fn json_output_is_pretty_by_default() {
    yamltrim()
        .args(["--format", "json"])
        .write_stdin("a: b\n")
        .assert()
        .success()
        .stdout("{\n  \"a\": \"b\"\n}\n");
}

#[test]
fn json_output_for_empty_document_is_null() {
    yamltrim()
        .args(["-f", "json"])
        .write_stdin("a: 0\n")
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn compact_without_json_is_rejected() {
    yamltrim()
        .arg("--compact")
        .write_stdin("a: b\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--compact is only valid with --format json"));
}

#[test]
fn unknown_format_is_rejected() {
    yamltrim()
        .args(["--format", "toml"])
        .write_stdin("a: b\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiple documents
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn trims_each_document_in_stream() {
    yamltrim()
        .args(["-i", &fixture("multi.yaml")])
        .assert()
        .success()
        .stdout("kind: first\n---\nnull\n---\n- one\n");
}

#[test]
fn json_output_one_line_per_document() {
    yamltrim()
        .args(["-f", "json", "--compact", "-i", &fixture("multi.yaml")])
        .assert()
        .success()
        .stdout("{\"kind\":\"first\"}\nnull\n[\"one\"]\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors and help
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_yaml_fails() {
    yamltrim()
        .write_stdin("a: [unclosed\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to trim input"))
        .stderr(predicate::str::contains("YAML error"));
}

#[test]
fn complex_key_fails() {
    yamltrim()
        .write_stdin("? [a, b]\n: value\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported mapping key"));
}

#[test]
fn help_flag_shows_usage() {
    yamltrim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--format"));
}
