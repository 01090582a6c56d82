//! CLI integration tests using the REAL cb binary

mod common;

use common::{TestWorkspace, cb_cmd};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    cb_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cb validates module descriptors"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("commit"));
}

#[test]
fn test_short_help_uses_about() {
    cb_cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage Crowdbotics modules"));
}

#[test]
fn test_version_output() {
    cb_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cb "))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    cb_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_cb"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    cb_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_unknown_command_fails() {
    cb_cmd().arg("publish").assert().failure();
}

#[test]
fn test_repository_commands_require_git_repository() {
    let workspace = TestWorkspace::new();

    for args in [
        vec!["parse"],
        vec!["create", "--name", "chat", "--type", "custom"],
        vec!["commit", "chat"],
    ] {
        workspace
            .cb_cmd()
            .args(&args)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("inside a git repository"));
    }
}

#[test]
fn test_first_run_notice_suppressed_in_ci() {
    let workspace = TestWorkspace::new();

    workspace
        .cb_cmd()
        .args(["config", "get", "opted-in"])
        .assert()
        .success()
        .stdout("false\n")
        .stderr(predicate::str::contains("To opt out").not());
}

#[test]
fn test_first_run_notice_shown_once_for_users() {
    let workspace = TestWorkspace::new();

    workspace
        .cb_cmd()
        .env_remove("CI")
        .env_remove("CIRCLE_JOB")
        .args(["config", "get", "opted-in"])
        .assert()
        .success()
        .stdout("true\n")
        .stderr(predicate::str::contains("cb optout"));

    workspace
        .cb_cmd()
        .env_remove("CI")
        .env_remove("CIRCLE_JOB")
        .args(["config", "get", "opted-in"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cb optout").not());
}
