//! End-to-end tests for the tgf binary

use assert_cmd::Command;
use predicates::prelude::*;

const TGF_SIMPLE: &str = "1 A\n2 B\n#\n1 2 a\n";

fn tgf() -> Command {
    Command::cargo_bin("tgf").expect("binary builds")
}

#[test]
fn test_stdin_to_puml_stdout() {
    tgf()
        .arg("--puml")
        .write_stdin(TGF_SIMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("node \"A\" as 1"))
        .stdout(predicate::str::contains("node \"B\" as 2"))
        .stdout(predicate::str::contains("1 --> 2 : a"))
        .stderr(predicate::str::contains(">>> input: stdin, format: puml"));
}

#[test]
fn test_multiple_formats_to_stdout() {
    tgf()
        .arg("--puml")
        .arg("--csv")
        .write_stdin(TGF_SIMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("@startuml"))
        .stdout(predicate::str::contains("\"edge\",\"1\",\"2\",\"a\""));
}

#[test]
fn test_no_format_flag_fails() {
    // The format check runs before any input is read.
    tgf()
        .arg("ignored.tgf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No conversion format specified."));
}

#[test]
fn test_list_formats() {
    tgf()
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("--puml (.puml)"))
        .stdout(predicate::str::contains("--datalog-value (.dl)"))
        .stdout(predicate::str::contains("--yaml (.yaml)"));
}

#[test]
fn test_file_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.tgf");
    std::fs::write(&input, TGF_SIMPLE).unwrap();

    tgf()
        .arg(input.to_str().unwrap())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{\"from\":\"1\",\"to\":\"2\",\"label\":\"a\"}",
        ));
}

#[test]
fn test_missing_input_file_fails() {
    tgf()
        .arg("does-not-exist.tgf")
        .arg("--puml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read does-not-exist.tgf"));
}

#[test]
fn test_malformed_edge_line_fails_with_line_number() {
    tgf()
        .arg("--puml")
        .write_stdin("1 A\n2 B\n#\nbroken\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed edge line 4"));
}

#[test]
fn test_single_format_writes_output_file_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.puml");

    tgf()
        .arg("--puml")
        .arg("-o")
        .arg(output.to_str().unwrap())
        .write_stdin(TGF_SIMPLE)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("@startuml\n"));
    assert!(written.contains("1 --> 2 : a"));
}

#[test]
fn test_multiple_formats_append_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("graph");

    tgf()
        .arg("--csv")
        .arg("--json")
        .arg("-o")
        .arg(base.to_str().unwrap())
        .write_stdin(TGF_SIMPLE)
        .assert()
        .success();

    assert!(dir.path().join("graph.csv").exists());
    assert!(dir.path().join("graph.json").exists());
}

#[test]
fn test_existing_output_is_not_overwritten_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    std::fs::write(&output, "precious").unwrap();

    tgf()
        .arg("--csv")
        .arg("-o")
        .arg(output.to_str().unwrap())
        .write_stdin(TGF_SIMPLE)
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "precious");
}

#[test]
fn test_overwrite_flag_replaces_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    std::fs::write(&output, "precious").unwrap();

    tgf()
        .arg("--csv")
        .arg("--overwrite")
        .arg("-o")
        .arg(output.to_str().unwrap())
        .write_stdin(TGF_SIMPLE)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("\"type\","));
}

#[test]
fn test_dump_model() {
    let output = tgf()
        .arg("--dump-model")
        .write_stdin(TGF_SIMPLE)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["nodes"][0]["id"], "1");
    assert_eq!(value["edges"][0]["label"], "a");
}
