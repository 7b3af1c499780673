//! Integration tests for the desk-calc CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given input file and return stdout
fn run_calc(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("desk-calc").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Split a transcript into non-empty lines. Order is significant.
fn transcript_lines(csv: &str) -> Vec<String> {
    csv.lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn assert_matches_expected(sample: &str, expected: &str) {
    let output = run_calc(&test_data_path(sample));
    let expected = fs::read_to_string(test_data_path(expected)).unwrap();

    assert_eq!(transcript_lines(&output), transcript_lines(&expected));
}

#[test]
fn test_sample_a_simple_multiplication() {
    assert_matches_expected("sample_a.csv", "expected_a.csv");
}

#[test]
fn test_sample_b_chained_operations() {
    assert_matches_expected("sample_b_chained.csv", "expected_b.csv");
}

#[test]
fn test_sample_c_whitespace_handling() {
    assert_matches_expected("sample_c_whitespace.csv", "expected_c.csv");
}

#[test]
fn test_sample_d_edge_cases() {
    assert_matches_expected("sample_d_edge_cases.csv", "expected_d.csv");
}

#[test]
fn test_ad_hoc_input_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "key\n8\n1\n√\n+\n1\n=").unwrap();

    let output = run_calc(file.path().to_str().unwrap());
    let last = transcript_lines(&output).pop().unwrap();
    assert_eq!(last, "6,=,10,√(81) + 1 = ,false");
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("desk-calc").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("desk-calc").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_output_has_correct_header() {
    let output = run_calc(&test_data_path("sample_a.csv"));
    assert!(output.starts_with("step,key,display,history,pending"));
}

#[test]
fn test_pending_column_tracks_binary_operator() {
    let output = run_calc(&test_data_path("sample_b_chained.csv"));

    let pending: Vec<String> = transcript_lines(&output)
        .iter()
        .skip(1)
        .map(|line| line.rsplit(',').next().unwrap().to_string())
        .collect();
    assert_eq!(pending, ["false", "true", "true", "true", "true", "false"]);
}
