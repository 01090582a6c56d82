use super::*;
use std::fs;
use tempfile::TempDir;

use crate::error::ModuleError;

fn write_meta(dir: &Path, content: &str) {
    fs::create_dir_all(dir).expect("Failed to create module dir");
    fs::write(dir.join(DESCRIPTOR_FILE), content).expect("Failed to write meta.json");
}

#[test]
fn test_read_descriptor_minimal() {
    let temp = TempDir::new().unwrap();
    let module_dir = temp.path().join("django-a");
    write_meta(
        &module_dir,
        r#"{"name": "a", "type": "django", "root": "backend/modules/a"}"#,
    );

    let descriptor = read_descriptor(&module_dir).unwrap();
    assert_eq!(descriptor.name, "a");
    assert_eq!(descriptor.module_type, ModuleType::Django);
    assert_eq!(descriptor.root, "backend/modules/a");
    assert!(descriptor.dependencies.is_empty());
    assert!(descriptor.extra.is_empty());
}

#[test]
fn test_read_descriptor_full() {
    let temp = TempDir::new().unwrap();
    let module_dir = temp.path().join("react-native-chat");
    write_meta(
        &module_dir,
        r#"{
            "name": "chat",
            "type": "react-native",
            "root": "modules/chat",
            "title": "Chat",
            "search_description": "Realtime chat",
            "acceptance_criteria": "Messages are delivered",
            "x-dependencies": {"pubnub": "^7.0.0", "@modules/login": "*"}
        }"#,
    );

    let descriptor = read_descriptor(&module_dir).unwrap();
    assert_eq!(descriptor.search_description.as_deref(), Some("Realtime chat"));
    assert_eq!(
        descriptor.acceptance_criteria.as_deref(),
        Some("Messages are delivered")
    );
    assert_eq!(descriptor.dependencies.len(), 2);
    assert_eq!(descriptor.extra["title"], serde_json::json!("Chat"));
    assert_eq!(descriptor.sibling_dependencies().collect::<Vec<_>>(), ["login"]);
    assert_eq!(descriptor.package_specs(), ["pubnub@^7.0.0"]);
}

#[test]
fn test_read_descriptor_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = read_descriptor(temp.path());
    match result {
        Err(ModuleError::MalformedDescriptor { detail, .. }) => {
            assert!(detail.contains("meta.json not found"));
        }
        other => panic!("Expected MalformedDescriptor, got {other:?}"),
    }
}

#[test]
fn test_read_descriptor_invalid_json() {
    let temp = TempDir::new().unwrap();
    write_meta(temp.path(), "{ name: ");
    assert!(matches!(
        read_descriptor(temp.path()),
        Err(ModuleError::MalformedDescriptor { .. })
    ));
}

#[test]
fn test_read_descriptor_missing_required_field() {
    let temp = TempDir::new().unwrap();
    write_meta(temp.path(), r#"{"name": "a", "type": "django"}"#);
    match read_descriptor(temp.path()) {
        Err(ModuleError::MalformedDescriptor { detail, .. }) => {
            assert!(detail.contains("root"), "unexpected detail: {detail}");
        }
        other => panic!("Expected MalformedDescriptor, got {other:?}"),
    }
}

#[test]
fn test_read_descriptor_unknown_type() {
    let temp = TempDir::new().unwrap();
    write_meta(
        temp.path(),
        r#"{"name": "a", "type": "flutter", "root": "modules/a"}"#,
    );
    assert!(matches!(
        read_descriptor(temp.path()),
        Err(ModuleError::MalformedDescriptor { .. })
    ));
}

#[test]
fn test_read_descriptor_empty_name() {
    let temp = TempDir::new().unwrap();
    write_meta(
        temp.path(),
        r#"{"name": " ", "type": "custom", "root": "modules/x"}"#,
    );
    assert!(matches!(
        read_descriptor(temp.path()),
        Err(ModuleError::MalformedDescriptor { .. })
    ));
}

#[test]
fn test_serialization_keeps_wire_keys() {
    let mut descriptor = ModuleDescriptor::new("chat", ModuleType::ReactNative);
    descriptor
        .dependencies
        .insert("pubnub".to_string(), "^7.0.0".to_string());

    let value: serde_json::Value =
        serde_json::from_str(&descriptor.to_json().unwrap()).unwrap();
    assert_eq!(value["type"], "react-native");
    assert_eq!(value["root"], "modules/chat");
    assert_eq!(value["x-dependencies"]["pubnub"], "^7.0.0");
    assert!(value.get("search_description").is_none());
}

#[test]
fn test_read_descriptor_rejects_root_outside_app() {
    for root in ["../x", "modules/../../x", "", "./"] {
        let temp = TempDir::new().unwrap();
        write_meta(
            temp.path(),
            &format!(r#"{{"name": "x", "type": "custom", "root": "{root}"}}"#),
        );
        match read_descriptor(temp.path()) {
            Err(ModuleError::MalformedDescriptor { detail, .. }) => {
                assert!(detail.contains("root"), "root {root:?}: {detail}");
            }
            other => panic!("Expected MalformedDescriptor for {root:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_install_path_stays_inside_base() {
    let base = Path::new("/srv/app");
    let mut descriptor = ModuleDescriptor::new("a", ModuleType::Custom);

    descriptor.root = "/modules/a".to_string();
    assert_eq!(descriptor.install_path(base), base.join("modules").join("a"));

    descriptor.root = "./backend//modules/a/".to_string();
    assert_eq!(
        descriptor.install_path(base),
        base.join("backend").join("modules").join("a")
    );
}

#[test]
fn test_read_snapshot_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("snapshot.json");
    let mut snapshot = Snapshot::new();
    snapshot.insert(
        "chat".to_string(),
        ModuleDescriptor::new("chat", ModuleType::ReactNative),
    );
    fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

    assert_eq!(read_snapshot(&path).unwrap(), snapshot);
}

#[test]
fn test_read_snapshot_rejects_bad_entry() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("snapshot.json");
    fs::write(&path, r#"{"a": {"name": "a", "type": "custom", "root": "../a"}}"#).unwrap();

    match read_snapshot(&path) {
        Err(ModuleError::MalformedDescriptor { path, .. }) => assert!(path.ends_with("#a")),
        other => panic!("Expected MalformedDescriptor, got {other:?}"),
    }
}
