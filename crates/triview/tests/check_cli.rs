use std::fs;
use std::process::Command;

use tempfile::TempDir;

const COMPLETE_SOURCE: &str = "\
#shader vertex
void main() {}
#shader fragment
void main() {}
";

const VERTEX_ONLY_SOURCE: &str = "\
#shader vertex
void main() {}
";

#[test]
fn check_reports_both_stages_for_a_complete_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo.shader");
    fs::write(&path, COMPLETE_SOURCE).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_triview"))
        .arg("check")
        .arg(&path)
        .output()
        .expect("failed to run triview check");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("vertex: 1 line(s)"));
    assert!(stdout.contains("fragment: 1 line(s)"));
    assert!(stdout.contains("ok"));
}

#[test]
fn check_fails_and_names_the_missing_stage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("incomplete.shader");
    fs::write(&path, VERTEX_ONLY_SOURCE).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_triview"))
        .arg("check")
        .arg(&path)
        .output()
        .expect("failed to run triview check");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("fragment"));
}

#[test]
fn check_fails_for_a_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.shader");

    let status = Command::new(env!("CARGO_BIN_EXE_triview"))
        .arg("check")
        .arg(&path)
        .status()
        .expect("failed to run triview check");

    assert!(!status.success());
}
