//! Tests for the `nfa-star` binary: exit status, stderr diagnostics and
//! `--stdout` output.

#![cfg(feature = "cli")]

use nfa_star::render_file;
use serde_json::json;
use std::process::{Command, Output};

fn write_doc(dir: &tempfile::TempDir, filename: &str, doc: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(filename);
    std::fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
    path
}

fn reference_doc() -> serde_json::Value {
    json!({
        "States": ["q0", "q1"],
        "Alphabet": ["a"],
        "Transitions": [["q0", "a", ["q1"]]],
        "Start State": ["q0"],
        "Accept States": ["q1"]
    })
}

fn nfa_star(dir: &tempfile::TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nfa-star"))
        .args(args)
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn error_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|l| l.starts_with("error:"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_writes_default_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_doc(&dir, "DFA1.json", &reference_doc());

    let output = nfa_star(&dir, &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let written = std::fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert_eq!(written, render_file(&input).unwrap());
}

#[test]
fn test_cli_honours_output_flag() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(&dir, "machine.json", &reference_doc());

    let output = nfa_star(&dir, &["machine.json", "-o", "star.txt"]);
    assert!(output.status.success());
    assert!(dir.path().join("star.txt").exists());
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn test_cli_rejected_document_exits_one_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = reference_doc();
    doc["Start State"] = json!(["q0", "q1"]);
    write_doc(&dir, "DFA1.json", &doc);

    let output = nfa_star(&dir, &["DFA1.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("output.txt").exists());

    let errors = error_lines(&output);
    assert_eq!(errors.len(), 1, "expected one diagnostic, got: {errors:?}");
    assert!(errors[0].contains("Incorrect number of start states"));
}

#[test]
fn test_cli_missing_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = nfa_star(&dir, &["absent.json"]);
    assert_eq!(output.status.code(), Some(1));

    let errors = error_lines(&output);
    assert_eq!(errors.len(), 1, "expected one diagnostic, got: {errors:?}");
    assert!(errors[0].contains("absent.json"));
}

#[test]
fn test_cli_stdout_prints_rendering_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_doc(&dir, "DFA1.json", &reference_doc());

    let output = nfa_star(&dir, &["DFA1.json", "--stdout"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        render_file(&input).unwrap()
    );
    assert!(!dir.path().join("output.txt").exists());
}
