//! Integration tests for `udyam validate`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `udyam` binary.
fn udyam_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("udyam");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn udyam() -> Command {
    let mut cmd = Command::new(udyam_bin());
    cmd.env_remove("RUST_LOG")
        .env_remove("UDYAM_GSTIN_THRESHOLD")
        .env_remove("UDYAM_MAX_FILE_SIZE")
        .args(["--today", "2026-03-10", "--no-color"]);
    cmd
}

fn validate_fixture(name: &str, extra: &[&str]) -> Output {
    udyam()
        .arg("validate")
        .arg(fixture(name))
        .args(extra)
        .output()
        .expect("run udyam validate")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn proprietor_fixture_exits_0() {
    let out = validate_fixture("proprietor-valid.json", &[]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert!(out.stdout.is_empty(), "validate writes nothing to stdout");
    assert!(stderr(&out).contains("accepted, 0 defects"));
}

#[test]
fn company_fixture_exits_0() {
    let out = validate_fixture("company-valid.json", &[]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
}

#[test]
fn invalid_pan_exits_1_with_defect_line() {
    let out = validate_fixture("company-invalid-pan.json", &[]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(
        err.contains("[E] pan-number  pan: Invalid PAN format (e.g., ABCDE1234F)."),
        "stderr: {err}"
    );
    assert!(err.contains("1 defect"), "stderr: {err}");
}

#[test]
fn many_defects_are_all_reported() {
    let out = validate_fixture("many-defects.json", &[]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    let defect_lines = err.lines().filter(|l| l.starts_with("[E] ")).count();
    assert_eq!(defect_lines, 7, "stderr: {err}");
    assert!(err.contains("7 defects"), "stderr: {err}");
}

#[test]
fn json_mode_emits_one_object_per_defect_and_a_summary() {
    let out = validate_fixture("many-defects.json", &["--format", "json"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    let values: Vec<serde_json::Value> = err
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("NDJSON line"))
        .collect();
    assert_eq!(values.len(), 8, "stderr: {err}");
    for v in &values[..7] {
        for key in ["rule", "kind", "field", "message"] {
            assert!(v.get(key).is_some(), "missing {key} in {v}");
        }
    }
    assert_eq!(values[7]["summary"]["defects"], 7);
    assert_eq!(values[7]["summary"]["accepted"], false);
}

#[test]
fn quiet_mode_drops_summary() {
    let out = validate_fixture("company-invalid-pan.json", &["--quiet"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("pan-number"), "stderr: {err}");
    assert!(!err.lines().any(|l| l == "1 defect"), "stderr: {err}");
}

#[test]
fn future_date_depends_on_today() {
    // The fixture's incorporation date is 01/04/2015.
    let out = Command::new(udyam_bin())
        .env_remove("RUST_LOG")
        .args(["validate", "--today", "2015-03-31"])
        .arg(fixture("company-valid.json"))
        .output()
        .expect("run udyam validate");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Date cannot be in the future."));
}

#[test]
fn lower_threshold_triggers_gstin_requirement() {
    let out = validate_fixture("proprietor-valid.json", &["--gstin-threshold", "1000000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("gstin-required  hasGstin:"));
}

#[test]
fn malformed_record_exits_2() {
    let out = validate_fixture("not-a-form.json", &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("parse error"), "stderr: {}", stderr(&out));
}

#[test]
fn missing_file_exits_2() {
    let out = validate_fixture("does-not-exist.json", &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("file not found"));
}

#[test]
fn oversized_file_exits_2() {
    let out = validate_fixture("company-valid.json", &["--max-file-size", "10"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("file too large"));
}

#[test]
fn invalid_utf8_file_exits_2() {
    let mut tmp = tempfile::NamedTempFile::new().expect("temp file");
    tmp.write_all(b"{\"adharno\":\"\xff\"}").expect("write");
    let out = udyam()
        .arg("validate")
        .arg(tmp.path())
        .output()
        .expect("run udyam validate");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("invalid UTF-8"));
}

#[test]
fn stdin_input_is_supported() {
    let content = std::fs::read(fixture("gstin-missing.json")).expect("fixture");
    let mut child = udyam()
        .args(["validate", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn udyam");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(&content)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("GSTIN is mandatory if turnover exceeds ₹40 Lakhs."));
}

#[test]
fn nan_gstin_threshold_exits_2() {
    let out = validate_fixture("proprietor-valid.json", &["--gstin-threshold=NaN"]);
    assert_eq!(out.status.code(), Some(2), "stderr: {}", stderr(&out));
    assert!(stderr(&out).contains("finite"), "stderr: {}", stderr(&out));
}

#[test]
fn negative_gstin_threshold_exits_2() {
    let out = validate_fixture("proprietor-valid.json", &["--gstin-threshold=-0.00001"]);
    assert_eq!(out.status.code(), Some(2), "stderr: {}", stderr(&out));
    assert!(stderr(&out).contains("negative"), "stderr: {}", stderr(&out));
}
