//! CLI integration tests for the configkit binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ============================================================
// Helper functions
// ============================================================

/// Build an `assert_cmd::Command` for the `configkit` binary reading
/// `config.yaml` from `config_dir`.
fn configkit_cmd(config_dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("configkit");
    cmd.arg("--config-dir").arg(config_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a temp directory holding a `config.yaml` with `contents`.
fn config_dir_with(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.yaml"), contents).unwrap();
    tmp
}

/// Run a command with `--json`, assert success, and return the parsed
/// JSON value from stdout.
fn run_json(config_dir: &Path, args: &[&str]) -> Value {
    let output = configkit_cmd(config_dir)
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output)
        .unwrap_or_else(|e| panic!("Failed to parse JSON from {:?}: {}", args, e))
}

// ============================================================
// Show command tests
// ============================================================

#[test]
fn show_prints_whole_document_as_yaml() {
    let tmp = config_dir_with("a: 1\nb: [2, 3]\n");

    configkit_cmd(tmp.path())
        .arg("show")
        .assert()
        .success()
        .stdout("a: 1\nb:\n- 2\n- 3\n");
}

#[test]
fn show_json_includes_path_and_value() {
    let tmp = config_dir_with("a: 1\nb: [2, 3]\n");

    let json = run_json(tmp.path(), &["show"]);
    assert_eq!(json["value"], serde_json::json!({"a": 1, "b": [2, 3]}));
    assert_eq!(json["key"], Value::Null);
    let path = json["path"].as_str().unwrap();
    assert!(path.ends_with("config.yaml"), "unexpected path {path}");
}

#[test]
fn show_single_key() {
    let tmp = config_dir_with("database:\n  host: localhost\n  port: 5432\nname: demo\n");

    let json = run_json(tmp.path(), &["show", "database"]);
    assert_eq!(json["key"], "database");
    assert_eq!(json["value"], serde_json::json!({"host": "localhost", "port": 5432}));
}

#[test]
fn show_missing_key_fails() {
    let tmp = config_dir_with("name: demo\n");

    configkit_cmd(tmp.path())
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key 'nope' not found"));
}

#[test]
fn show_empty_file_prints_null() {
    let tmp = config_dir_with("");

    let json = run_json(tmp.path(), &["show"]);
    assert_eq!(json["value"], Value::Null);
}

// ============================================================
// Path command tests
// ============================================================

#[test]
fn path_prints_resolved_location() {
    let tmp = config_dir_with("name: demo\n");
    let expected = tmp.path().join("config.yaml");

    configkit_cmd(tmp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}

// ============================================================
// Copy command tests
// ============================================================

#[test]
fn copy_writes_identical_file() {
    let tmp = config_dir_with("foo: bar\n");
    let dest = TempDir::new().unwrap();

    configkit_cmd(tmp.path())
        .arg("copy")
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied"));

    let copied = std::fs::read(dest.path().join("config.yaml")).unwrap();
    assert_eq!(copied, b"foo: bar\n");
}

#[test]
fn copy_json_reports_destination() {
    let tmp = config_dir_with("# keep this comment\nfoo: bar\n");
    let dest = TempDir::new().unwrap();

    let json = run_json(tmp.path(), &["copy", dest.path().to_str().unwrap()]);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["destination"].as_str().unwrap(),
        dest.path().join("config.yaml").to_str().unwrap()
    );
    assert_eq!(
        std::fs::read_to_string(dest.path().join("config.yaml")).unwrap(),
        "# keep this comment\nfoo: bar\n"
    );
}

#[test]
fn copy_into_missing_directory_fails() {
    let tmp = config_dir_with("foo: bar\n");
    let missing = tmp.path().join("missing");

    configkit_cmd(tmp.path())
        .arg("copy")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
    assert!(!missing.exists());
}

#[test]
fn copy_into_config_dir_refuses_and_keeps_file() {
    let tmp = config_dir_with("foo: bar\n");

    configkit_cmd(tmp.path())
        .arg("copy")
        .arg(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("onto itself"));

    let after = std::fs::read(tmp.path().join("config.yaml")).unwrap();
    assert_eq!(after, b"foo: bar\n");
}

// ============================================================
// Startup failure tests
// ============================================================

#[test]
fn missing_config_fails_at_startup() {
    let tmp = TempDir::new().unwrap();

    configkit_cmd(tmp.path())
        .arg("path")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn invalid_yaml_fails_at_startup() {
    let tmp = config_dir_with("title: \"never closed\n");

    configkit_cmd(tmp.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse YAML"));
}

#[test]
fn non_utf8_config_is_a_parse_failure() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.yaml"), b"key: \xc3\x28\n").unwrap();

    configkit_cmd(tmp.path())
        .arg("path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse YAML"));
}

#[test]
fn startup_failure_json_error() {
    let tmp = TempDir::new().unwrap();

    let output = configkit_cmd(tmp.path())
        .args(["--json", "show"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Not found"));
}

#[test]
fn invalid_log_level_fails() {
    let tmp = config_dir_with("name: demo\n");

    configkit_cmd(tmp.path())
        .args(["--log-level", "loud", "path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level"));
}
