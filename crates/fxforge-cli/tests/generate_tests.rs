//! Integration tests for fxforge-cli.
//!
//! Drive the real binary with piped answers and inspect the generated tree.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Join interview answers into piped stdin. One line per question, in order:
/// name, author, description, version, client, server, shared, config,
/// subfolders, examples.
fn answers(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn full_interview_creates_complete_resource() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("fxforge").unwrap();

    cmd.current_dir(temp.path())
        .write_stdin(answers(&["myscript", "bob", "", "", "", "", "", "", "", ""]))
        .assert()
        .success()
        .stdout(predicate::str::contains("FiveM Resource Creator"))
        .stdout(predicate::str::contains("Resource generated!"))
        .stdout(predicate::str::contains("ensure myscript"));

    let root = temp.path().join("myscript");
    for file in [
        "fxmanifest.lua",
        "client/main.lua",
        "client/events.lua",
        "client/ui.lua",
        "server/main.lua",
        "server/events.lua",
        "server/database.lua",
        "shared/main.lua",
        "shared/utils.lua",
        "config/config.lua",
        "config/locales.lua",
    ] {
        assert!(root.join(file).exists(), "missing: {file}");
    }

    let manifest = std::fs::read_to_string(root.join("fxmanifest.lua")).unwrap();
    assert!(manifest.contains("fx_version 'cerulean'"));
    assert!(manifest.contains("name 'myscript'"));
    assert!(manifest.contains("author 'bob'"));
    assert!(manifest.contains("description 'fivem script'"));
    assert!(manifest.contains("version '1.0.0'"));
}

#[test]
fn empty_script_name_fails_with_exit_code_one() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("fxforge").unwrap();

    cmd.current_dir(temp.path())
        .write_stdin("\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("script name is required"));

    // No directories were created before the failure.
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn declined_examples_skip_example_files() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("fxforge").unwrap();

    cmd.current_dir(temp.path())
        .write_stdin(answers(&["lean", "", "", "", "", "", "", "", "", "n"]))
        .assert()
        .success();

    let root = temp.path().join("lean");
    assert!(root.join("client/main.lua").exists());
    assert!(!root.join("client/events.lua").exists());
    assert!(!root.join("client/ui.lua").exists());
    assert!(root.join("server/main.lua").exists());
    assert!(!root.join("server/database.lua").exists());
    // Shared and config keep their fixed file sets.
    assert!(root.join("shared/utils.lua").exists());
    assert!(root.join("config/locales.lua").exists());
}

#[test]
fn declined_groups_leave_manifest_only() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("fxforge").unwrap();

    cmd.current_dir(temp.path())
        .write_stdin(answers(&["bare", "", "", "", "n", "n", "n", "n", "", ""]))
        .assert()
        .success();

    let root = temp.path().join("bare");
    assert!(root.join("fxmanifest.lua").exists());
    assert!(!root.join("client").exists());
    assert!(!root.join("server").exists());
    assert!(!root.join("shared").exists());
    assert!(!root.join("config").exists());

    let manifest = std::fs::read_to_string(root.join("fxmanifest.lua")).unwrap();
    assert!(!manifest.contains("shared_scripts"));
    assert!(!manifest.contains("client_scripts"));
    assert!(!manifest.contains("server_scripts"));
}

#[test]
fn rerun_over_existing_resource_succeeds() {
    let temp = TempDir::new().unwrap();
    let input = answers(&["again", "", "", "", "", "", "", "", "", ""]);

    Command::cargo_bin("fxforge")
        .unwrap()
        .current_dir(temp.path())
        .write_stdin(input.clone())
        .assert()
        .success();

    // Second run over the same tree must not fail on existing directories.
    Command::cargo_bin("fxforge")
        .unwrap()
        .current_dir(temp.path())
        .write_stdin(input)
        .assert()
        .success();
}

#[test]
fn eof_after_name_accepts_all_defaults() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("fxforge").unwrap();

    // Only the name is piped; every later read hits EOF and keeps defaults.
    cmd.current_dir(temp.path())
        .write_stdin("solo\n")
        .assert()
        .success();

    let root = temp.path().join("solo");
    assert!(root.join("fxmanifest.lua").exists());
    assert!(root.join("client/ui.lua").exists());
    assert!(root.join("config/locales.lua").exists());
}

#[test]
fn quiet_flag_suppresses_success_report() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("fxforge").unwrap();

    cmd.current_dir(temp.path())
        .arg("--quiet")
        .write_stdin(answers(&["hushed", "", "", "", "", "", "", "", "", ""]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Resource generated!").not());

    assert!(temp.path().join("hushed/fxmanifest.lua").exists());
}

#[test]
fn help_flag_exits_zero() {
    let mut cmd = Command::cargo_bin("fxforge").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fxforge"))
        .stdout(predicate::str::contains("--no-color"));
}

#[test]
fn version_flag_exits_zero() {
    let mut cmd = Command::cargo_bin("fxforge").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_exits_one() {
    let mut cmd = Command::cargo_bin("fxforge").unwrap();
    cmd.arg("--definitely-not-a-flag").assert().failure().code(1);
}
