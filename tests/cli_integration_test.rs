//! End-to-end runs of the compiled binary.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn quicklook() -> Command {
    Command::cargo_bin("quicklook").unwrap()
}

fn write_fixture(dir: &Path) {
    fs::write(
        dir.join("app.py"),
        "import os\n\ndef main():\n    pass\n\nclass Config:\n    def load(self):\n        pass\n",
    )
    .unwrap();
    fs::write(dir.join("util.py"), "import os\nimport sys\n").unwrap();
}

#[test]
fn analyze_renders_a_plain_report() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let assert = quicklook()
        .arg("analyze")
        .arg(dir.path())
        .arg("--plain")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Found 2 Python files"));
    assert!(stdout.contains("* app.py (8 lines)"));
    assert!(stdout.contains("class Config (1 methods)"));
    assert!(stdout.contains("fn main()"));
    assert!(stdout.contains("=== CODEBASE SUMMARY ==="));
    assert!(stdout.contains("Total lines: 10"));
    assert!(stdout.contains("Key imports: os(2), sys(1)"));
}

#[test]
fn json_output_is_parseable_and_complete() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let assert = quicklook()
        .arg("analyze")
        .arg(dir.path())
        .args(["--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["summary"]["files"], 2);
    assert_eq!(value["summary"]["total_lines"], 10);
    assert_eq!(value["summary"]["import_counts"]["os"], 2);
    assert_eq!(value["files"][0]["path"], "app.py");
    assert_eq!(value["files"][0]["classes"][0]["name"], "Config");
}

#[test]
fn output_flag_writes_the_report_to_a_file() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());
    let report = dir.path().join("report.json");

    quicklook()
        .arg("analyze")
        .arg(dir.path())
        .args(["--format", "json"])
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["summary"]["files"], 2);
}

#[test]
fn broken_files_do_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.py"), "def fine():\n    pass\n").unwrap();
    fs::write(dir.path().join("broken.py"), "def nope(:\n").unwrap();

    let assert = quicklook()
        .arg("analyze")
        .arg(dir.path())
        .arg("--plain")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Found 2 Python files"));
    assert!(stdout.contains("fn fine()"));
}

#[test]
fn a_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nowhere");

    let assert = quicklook().arg("analyze").arg(&missing).assert().failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("does not exist"));
}

#[test]
fn repeated_runs_emit_identical_output() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let run = || {
        let assert = quicklook()
            .arg("analyze")
            .arg(dir.path())
            .arg("--plain")
            .assert()
            .success();
        assert.get_output().stdout.clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn sequential_mode_matches_the_default() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let parallel = quicklook()
        .arg("analyze")
        .arg(dir.path())
        .arg("--plain")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let sequential = quicklook()
        .arg("analyze")
        .arg(dir.path())
        .args(["--plain", "--no-parallel"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parallel, sequential);
}
