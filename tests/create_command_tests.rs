//! Integration tests for `cb create`

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_create_react_native_module() {
    let workspace = TestWorkspace::with_git();

    workspace
        .cb_cmd()
        .args([
            "create",
            "--name",
            "chat",
            "--type",
            "react-native",
            "--search-description",
            "Realtime chat",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module created"));

    let meta: serde_json::Value =
        serde_json::from_str(&workspace.read_file("modules/react-native-chat/meta.json")).unwrap();
    assert_eq!(meta["name"], "chat");
    assert_eq!(meta["type"], "react-native");
    assert_eq!(meta["root"], "modules/chat");
    assert_eq!(meta["search_description"], "Realtime chat");
    assert!(workspace.file_exists("modules/react-native-chat/package.json"));
}

#[test]
fn test_created_module_passes_parse() {
    let workspace = TestWorkspace::with_git();

    workspace
        .cb_cmd()
        .args(["create", "--name", "blog", "--type", "django"])
        .assert()
        .success();
    workspace.cb_cmd().arg("parse").assert().success();
}

#[test]
fn test_create_existing_slug_fails_and_writes_nothing() {
    let workspace = TestWorkspace::with_git();
    workspace.write_file("modules/react-native-foo/README.md", "existing");

    workspace
        .cb_cmd()
        .args(["create", "--name", "foo", "--type", "react-native"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert!(!workspace.file_exists("modules/react-native-foo/meta.json"));
    assert_eq!(
        workspace.read_file("modules/react-native-foo/README.md"),
        "existing"
    );
}

#[test]
fn test_create_invalid_name_fails() {
    let workspace = TestWorkspace::new();

    workspace
        .cb_cmd()
        .args(["create", "--name", "9lives", "--type", "custom", "--target", "out"])
        .assert()
        .failure()
        .code(1);

    assert!(!workspace.file_exists("out/custom-9lives"));
}
