use super::*;
use crate::descriptor::ModuleType;
use crate::error::module;

fn parsed(dir_name: &str, name: &str, module_type: ModuleType, root: &str) -> ModuleEntry {
    let mut descriptor = ModuleDescriptor::new(name, module_type);
    descriptor.root = root.to_string();
    ModuleEntry::Parsed {
        dir_name: dir_name.to_string(),
        descriptor,
    }
}

fn with_dependency(mut entry: ModuleEntry, package: &str) -> ModuleEntry {
    if let ModuleEntry::Parsed { descriptor, .. } = &mut entry {
        descriptor
            .dependencies
            .insert(package.to_string(), "*".to_string());
    }
    entry
}

fn rules(violations: &[Violation]) -> Vec<Rule> {
    violations.iter().map(|v| v.rule).collect()
}

#[test]
fn test_valid_modules_all_kept() {
    let entries = vec![
        parsed("django-a", "a", ModuleType::Django, "backend/modules/a"),
        parsed("react-native-b", "b", ModuleType::ReactNative, "modules/b"),
        parsed("c", "c", ModuleType::All, "modules/c"),
    ];

    let result = validate(&entries);
    assert!(!result.has_errors());
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.modules.keys().collect::<Vec<_>>(),
        ["a", "b", "c"]
    );
}

#[test]
fn test_duplicate_names_single_error_and_both_excluded() {
    let entries = vec![
        parsed("moduleA", "a", ModuleType::Django, "backend/modules/a"),
        parsed("moduleB", "a", ModuleType::ReactNative, "modules/a"),
    ];

    let result = validate(&entries);
    let duplicates: Vec<&Violation> = result
        .errors
        .iter()
        .filter(|v| v.rule == Rule::DuplicateName)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].module, "a");
    assert!(duplicates[0].message.contains("moduleA"));
    assert!(duplicates[0].message.contains("moduleB"));
    assert!(result.modules.is_empty());
}

#[test]
fn test_nested_root_collision_references_both() {
    let entries = vec![
        parsed("outer", "outer", ModuleType::Custom, "modules/outer"),
        parsed("inner", "inner", ModuleType::Custom, "./modules/outer/inner/"),
        parsed("other", "other", ModuleType::Custom, "modules/other"),
    ];

    let result = validate(&entries);
    assert_eq!(rules(&result.errors), [Rule::RootCollision]);
    let error = &result.errors[0];
    assert_eq!(error.module, "outer");
    assert!(error.message.contains("\"inner\""));
    assert_eq!(result.modules.keys().collect::<Vec<_>>(), ["other"]);
}

#[test]
fn test_sibling_prefix_is_component_wise() {
    let entries = vec![
        parsed("chat", "chat", ModuleType::Custom, "modules/chat"),
        parsed("chatbot", "chatbot", ModuleType::Custom, "modules/chatbot"),
    ];

    let result = validate(&entries);
    assert!(!result.has_errors());
    assert_eq!(result.modules.len(), 2);
}

#[test]
fn test_missing_sibling_dependency_is_warning() {
    let entries = vec![
        with_dependency(
            parsed("react-native-a", "a", ModuleType::ReactNative, "modules/a"),
            "@modules/missing",
        ),
        with_dependency(
            parsed("react-native-b", "b", ModuleType::ReactNative, "modules/b"),
            "@modules/a",
        ),
    ];

    let result = validate(&entries);
    assert!(!result.has_errors());
    assert_eq!(rules(&result.warnings), [Rule::MissingDependency]);
    assert_eq!(result.warnings[0].module, "a");
    assert!(result.modules.contains_key("a"));
}

#[test]
fn test_external_dependency_not_checked() {
    let entries = vec![with_dependency(
        parsed("react-native-a", "a", ModuleType::ReactNative, "modules/a"),
        "react-native-gesture-handler",
    )];

    let result = validate(&entries);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_sibling_dependency_resolves_by_directory_slug() {
    let entries = vec![
        parsed("django-a", "a", ModuleType::Django, "backend/modules/a"),
        with_dependency(
            parsed("react-native-b", "b", ModuleType::ReactNative, "modules/b"),
            "@modules/django-a",
        ),
    ];

    assert!(validate(&entries).warnings.is_empty());
}

#[test]
fn test_slug_mismatch_is_warning() {
    let entries = vec![parsed("login", "login", ModuleType::Django, "backend/modules/login")];

    let result = validate(&entries);
    assert!(!result.has_errors());
    assert_eq!(rules(&result.warnings), [Rule::SlugMismatch]);
    assert!(result.warnings[0].message.contains("django-login"));
    assert!(result.modules.contains_key("login"));
}

#[test]
fn test_malformed_entry_excluded_siblings_kept() {
    let entries = vec![
        ModuleEntry::Malformed {
            dir_name: "broken".to_string(),
            error: module::malformed("broken/meta.json", "missing field `root`"),
        },
        parsed("ok", "ok", ModuleType::Custom, "modules/ok"),
    ];

    let result = validate(&entries);
    assert_eq!(rules(&result.errors), [Rule::MalformedDescriptor]);
    assert_eq!(result.errors[0].module, "broken");
    assert_eq!(result.modules.keys().collect::<Vec<_>>(), ["ok"]);
}

#[test]
fn test_violations_follow_discovery_order() {
    let entries = vec![
        parsed("a-dir", "a", ModuleType::Custom, "modules/a"),
        ModuleEntry::Malformed {
            dir_name: "b".to_string(),
            error: module::malformed("b/meta.json", "invalid"),
        },
        parsed("c", "c", ModuleType::Custom, "modules/c"),
        parsed("d", "d", ModuleType::Custom, "modules/c/d"),
    ];

    let result = validate(&entries);
    let owners: Vec<&str> = result.errors.iter().map(|v| v.module.as_str()).collect();
    assert_eq!(owners, ["b", "c"]);
    assert_eq!(
        rules(&result.errors),
        [Rule::MalformedDescriptor, Rule::RootCollision]
    );
    assert_eq!(rules(&result.warnings), [Rule::SlugMismatch]);
    assert_eq!(result.modules.keys().collect::<Vec<_>>(), ["a"]);
}

#[test]
fn test_roots_collide() {
    assert!(rules::roots_collide("modules/a", "modules/a"));
    assert!(rules::roots_collide("/modules/a/", "modules/a"));
    assert!(rules::roots_collide("modules", "modules/a"));
    assert!(!rules::roots_collide("modules/a", "modules/ab"));
    assert!(!rules::roots_collide("backend/modules/a", "modules/a"));
}
