//! CLI integration tests driving the compiled binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn soft_compare() -> Command {
    Command::cargo_bin("soft-compare").unwrap()
}

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".txt").unwrap();
    write!(file, "{contents}").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn compare_reports_a_positive_rating() {
    soft_compare()
        .args(["compare", "kitten", "sitting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results"))
        .stdout(predicate::str::contains("Rating:"));
}

#[test]
fn compare_alignment_masks_the_shared_run() {
    soft_compare()
        .args(["compare", "kitten", "sitting", "--min-length", "2", "--show-alignment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: kitten"))
        .stdout(predicate::str::contains("++ _itt__"))
        .stdout(predicate::str::contains("-- _itt___"))
        .stdout(predicate::str::contains("2: sitting"));
}

#[test]
fn compare_matrix_rendering_includes_headers() {
    soft_compare()
        .args(["compare", "ab", "ab", "--show-matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Substring matrix:"))
        .stdout(predicate::str::contains("2"));
}

#[test]
fn compare_comparison_matrix_shows_byte_equality() {
    soft_compare()
        .args(["compare", "ab", "ba", "--show-comparison"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison matrix:"))
        .stdout(predicate::str::contains("1"));
}

#[test]
fn compare_json_output_carries_the_matches() {
    let output = soft_compare()
        .args(["compare", "kitten", "sitting", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["string_a"], "kitten");
    assert_eq!(parsed["longest_run"], 3);
    assert!(parsed["rating"].as_f64().unwrap() > 0.0);
    let matches = parsed["matches"].as_array().unwrap();
    assert!(matches
        .iter()
        .any(|m| m["start_a"] == 1 && m["start_b"] == 1 && m["length"] == 3));
}

#[test]
fn compare_tsv_output_is_one_row() {
    soft_compare()
        .args(["compare", "kitten", "sitting", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "string_a\tstring_b\tmatches\tlongest_run\trating",
        ));
}

#[test]
fn compare_handles_disjoint_strings() {
    soft_compare()
        .args(["compare", "abc", "xyz", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0000"));
}

#[test]
fn rate_without_document_succeeds() {
    soft_compare()
        .args(["rate", "cat dog", "cat dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word Rating Results"))
        .stdout(predicate::str::contains("Rating:"));
}

#[test]
fn rate_with_document_uses_its_frequencies() {
    let doc = write_fixture("the quick brown fox\nthe lazy dog\n");

    let output = soft_compare()
        .args(["rate", "quick fox", "quick fox", "--format", "json"])
        .arg("--document")
        .arg(doc.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["distinct_words"], 6);
    assert!(parsed["rating"].as_f64().unwrap() > 0.0);
}

#[test]
fn rate_rejects_an_invalid_pattern() {
    soft_compare()
        .args(["rate", "a", "b", "--pattern", "["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid word pattern"));
}

#[test]
fn rate_fails_cleanly_on_missing_document() {
    soft_compare()
        .args(["rate", "a", "b", "--document", "/nonexistent/corpus.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read document"));
}

#[test]
fn frequencies_counts_match_the_document() {
    let doc = write_fixture("a a b\n");

    soft_compare()
        .arg("frequencies")
        .arg(doc.path())
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a\t2"))
        .stdout(predicate::str::contains("b\t1"));
}

#[test]
fn fixtures_are_unique_and_removed_on_drop() {
    // Same-length contents must not land in the same file, and nothing may
    // be left behind once a fixture goes out of scope.
    let first = write_fixture("aaa\n");
    let second = write_fixture("bbb\n");
    assert_ne!(first.path(), second.path());

    let path = first.path().to_path_buf();
    drop(first);
    assert!(!path.exists());
}

#[test]
fn frequencies_top_limits_the_output() {
    let doc = write_fixture("one two two three three three\n");

    soft_compare()
        .arg("frequencies")
        .arg(doc.path())
        .args(["--top", "1", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("three\t3"))
        .stdout(predicate::str::contains("one").not());
}
