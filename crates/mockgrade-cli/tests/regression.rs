//! Record comparison integration tests.
//!
//! Tests the compare workflow end-to-end: records written by `grade`,
//! loaded back, and diffed by `compare`.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use mockgrade_core::model::Submission;
use mockgrade_core::report::GradedSubmission;
use predicates::prelude::*;
use tempfile::TempDir;

fn mockgrade() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("mockgrade").unwrap();
    cmd.env_remove("MOCKGRADE_DELAY_MS")
        .env("HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

fn ideal_text() -> String {
    (0..10)
        .map(|_| format!("{}.", vec!["word"; 30].join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_record(dir: &Path, name: &str, title: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    GradedSubmission::grade(Submission::new(title, text))
        .save_json(&path)
        .unwrap();
    path
}

#[test]
fn grade_output_loads_as_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.json");

    mockgrade()
        .args(["grade", "--delay-ms", "0", "--format", "json", "--title", "Draft"])
        .args(["--text", "too short", "--output"])
        .arg(&path)
        .assert()
        .success();

    let record = GradedSubmission::load_json(&path).unwrap();
    assert_eq!(record.result.title, "Draft");
    assert_eq!(record.submission.text, "too short");
}

#[test]
fn compare_reports_improvement() {
    let dir = TempDir::new().unwrap();
    let baseline = write_record(dir.path(), "draft.json", "Draft", "too short");
    let current = write_record(dir.path(), "final.json", "Final", &ideal_text());

    mockgrade()
        .arg("compare")
        .arg("--baseline")
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .assert()
        .success()
        .stdout(predicate::str::contains("-> 100%"))
        .stdout(predicate::str::contains("Resolved:"));
}

#[test]
fn compare_fail_on_regression() {
    let dir = TempDir::new().unwrap();
    let baseline = write_record(dir.path(), "final.json", "Final", &ideal_text());
    let current = write_record(dir.path(), "draft.json", "Draft", "too short");

    mockgrade()
        .arg("compare")
        .arg("--baseline")
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .arg("--fail-on-regression")
        .assert()
        .failure();
}

#[test]
fn compare_markdown_and_json() {
    let dir = TempDir::new().unwrap();
    let baseline = write_record(dir.path(), "a.json", "A", "too short");
    let current = write_record(dir.path(), "b.json", "B", &ideal_text());

    mockgrade()
        .args(["compare", "--format", "markdown", "--baseline"])
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .assert()
        .success()
        .stdout(predicate::str::contains("| Aspect | Baseline | Current | Delta |"));

    let output = mockgrade()
        .args(["compare", "--format", "json", "--baseline"])
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .assert()
        .success()
        .get_output()
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["current_score"], 100);
    assert!(value["score_delta"].as_i64().unwrap() > 0);
}

#[test]
fn compare_nonexistent_record() {
    mockgrade()
        .args(["compare", "--baseline", "no_such_file.json"])
        .args(["--current", "also_no_file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read record"));
}
