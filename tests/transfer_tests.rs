//! Integration tests for export and import

mod common;

use common::{gradecase, init_suite, payload_weights, read_payload, suite_weights};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_export_to_stdout() {
    let dir = tempdir().unwrap();
    init_suite(dir.path(), 3);

    let output = gradecase(dir.path()).arg("export").output().unwrap();
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["count"], 3);
    assert_eq!(payload["1"]["id"], 1);
    assert_eq!(payload_weights(&payload), vec![34, 33, 33]);
}

#[test]
fn test_export_refuses_unbalanced_suite() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("tests.json"),
        r#"{"count": 1, "1": {"id": 1, "value": 90, "input": "", "output": "", "explanation": ""}}"#,
    )
    .unwrap();

    gradecase(dir.path())
        .arg("export")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("weights sum to 90"));
}

#[test]
fn test_export_import_round_trip() {
    let source = tempdir().unwrap();
    init_suite(source.path(), 3);
    gradecase(source.path())
        .args(["weight", "1", "50"])
        .assert()
        .success();
    gradecase(source.path())
        .args(["edit", "1", "--input", "line one\nline two", "--output", "ok"])
        .assert()
        .success();

    let exported = source.path().join("out/payload.json");
    gradecase(source.path())
        .args(["export", "--out", exported.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 tests"));

    let target = tempdir().unwrap();
    gradecase(target.path())
        .args(["init", "--count", "1"])
        .assert()
        .success();
    gradecase(target.path())
        .args(["import", "--replace", exported.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(suite_weights(target.path()), vec![50, 25, 25]);
    let payload = read_payload(&target.path().join("tests.json"));
    assert_eq!(payload["1"]["input"], "line one\nline two");
    assert_eq!(payload["1"]["output"], "ok");
}

#[test]
fn test_import_appends_and_recalculates() {
    let source = tempdir().unwrap();
    init_suite(source.path(), 2);
    let exported = source.path().join("payload.json");
    gradecase(source.path())
        .args(["export", "--out", exported.to_str().unwrap()])
        .assert()
        .success();

    let target = tempdir().unwrap();
    init_suite(target.path(), 2);
    gradecase(target.path())
        .args(["import", exported.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(suite_weights(target.path()), vec![25, 25, 25, 25]);
}

#[test]
fn test_import_from_stdin() {
    let dir = tempdir().unwrap();
    init_suite(dir.path(), 1);

    gradecase(dir.path())
        .args(["import", "--replace", "-"])
        .write_stdin(
            r#"{"count": 2, "1": {"id": 1, "value": 70, "input": "a\r\nb", "output": "c", "explanation": ""}, "2": {"id": 2, "value": 30, "input": "", "output": "", "explanation": ""}}"#,
        )
        .assert()
        .success();

    assert_eq!(suite_weights(dir.path()), vec![70, 30]);
    let payload = read_payload(&dir.path().join("tests.json"));
    assert_eq!(payload["1"]["input"], "a\nb");
}

#[test]
fn test_import_rejects_count_mismatch() {
    let dir = tempdir().unwrap();
    init_suite(dir.path(), 1);
    let bad = dir.path().join("bad.json");
    fs::write(
        &bad,
        r#"{"count": 3, "1": {"id": 1, "value": 100, "input": "", "output": "", "explanation": ""}}"#,
    )
    .unwrap();

    gradecase(dir.path())
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid wire payload"));

    assert_eq!(suite_weights(dir.path()), vec![100]);
}

#[test]
fn test_import_generated_with_surrounding_prose() {
    let dir = tempdir().unwrap();
    init_suite(dir.path(), 3);
    let generated = dir.path().join("generated.txt");
    fs::write(
        &generated,
        "Here are the tests you asked for:\n```json\n[\n  {\"input\": \"1 2\", \"output\": \"3\", \"explanation\": \"small numbers\", \"difficulty\": 1},\n  {\"input\": \"-4 4\", \"output\": \"0\", \"explanation\": \"negatives\", \"difficulty\": 3},\n  {\"input\": \"1000000 1000000\", \"output\": \"2000000\", \"explanation\": \"large values\", \"difficulty\": 5}\n]\n```\nLet me know if you need more.",
    )
    .unwrap();

    gradecase(dir.path())
        .args(["import", "--generated", "--replace", generated.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(suite_weights(dir.path()), vec![14, 29, 57]);
    let payload = read_payload(&dir.path().join("tests.json"));
    assert_eq!(payload["count"], 3);
    assert_eq!(payload["2"]["explanation"], "negatives");
    assert_eq!(payload["3"]["difficulty"], 5);
}

#[test]
fn test_import_generated_appends() {
    let dir = tempdir().unwrap();
    init_suite(dir.path(), 3);

    gradecase(dir.path())
        .args(["import", "--generated", "-"])
        .write_stdin(r#"[{"input": "x", "output": "y", "explanation": "hard one", "difficulty": 5}]"#)
        .assert()
        .success();

    assert_eq!(suite_weights(dir.path()), vec![20, 20, 20, 40]);
}

#[test]
fn test_import_generated_garbage_fails() {
    let dir = tempdir().unwrap();
    init_suite(dir.path(), 2);

    gradecase(dir.path())
        .args(["--format", "json", "import", "--generated", "-"])
        .write_stdin("Sorry, I can't help with that.")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid_generated"));

    assert_eq!(suite_weights(dir.path()), vec![50, 50]);
}
