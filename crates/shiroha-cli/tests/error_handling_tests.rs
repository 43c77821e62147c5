//! Tests for error messages, suggestions and exit codes.

use std::path::Path;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

const MISSING_PROGRAM: &str = "shiroha-test-no-such-program";

fn shiroha(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("shiroha");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env("SHIROHA_TOOLCHAIN__PROGRAM", MISSING_PROGRAM)
        .env("SHIROHA_DOCS__PROGRAM", MISSING_PROGRAM)
        .env_remove("RUST_LOG")
        .env_remove("SHIROHA_CONFIG");
    cmd
}

#[test]
fn invalid_project_name_touches_nothing() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .args(["new", "../evil", "--no-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn out_of_range_platform_is_rejected_before_building() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .args(["build", "--target", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid choice: 9, please enter 1-5"));

    assert!(!temp.path().join("bin").exists());
}

#[test]
fn platform_menu_reads_stdin() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .arg("build")
        .write_stdin("0\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Enter your choice (1-5)"))
        .stderr(predicate::str::contains("invalid choice: 0"));
}

#[test]
fn missing_compiler_is_a_launch_failure() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .args(["build", "-t", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start"))
        .stderr(predicate::str::contains("go.dev/dl"));
}

#[test]
fn run_without_entrypoint() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("entrypoint not found"));
}

#[test]
fn doc_without_swag_suggests_install() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .arg("doc")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start"));
}

#[test]
fn failed_sync_keeps_generated_files() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .args(["new", "demo", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("go mod tidy failed"));

    assert!(temp.path().join("demo/go.mod").is_file());
}

#[test]
fn unknown_config_key_is_not_found() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .args(["config", "get", "toolchain.colour"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("shiroha config list"));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .args(["--config", "nope.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn bad_default_template_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".shiroha.toml"),
        "[defaults]\ntemplate = \"react\"\n",
    )
    .unwrap();

    shiroha(temp.path())
        .args(["new", "demo", "--no-run"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("react"));
}

#[test]
fn conflicting_flags_are_usage_errors() {
    let temp = TempDir::new().unwrap();
    shiroha(temp.path())
        .args(["new", "demo", "--yes", "--no-run"])
        .assert()
        .code(2);
}
