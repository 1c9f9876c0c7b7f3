use custodian::context::Context;
use custodian::interpreter::TagRegistry;
use custodian::manifest::Manifest;
use serde_json::json;
use std::path::PathBuf;

#[test]
fn test_with_default_keeps_existing_binding() {
    let outer = Context::new().with_default("k", json!("outer"));
    let merged = outer.with_default("k", json!("inner")).with_default("other", json!(1));

    assert_eq!(merged.get("k"), Some(&json!("outer")));
    assert_eq!(merged.get("other"), Some(&json!(1)));
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_with_default_leaves_original_untouched() {
    let original = Context::new();
    let extended = original.with_default("k", json!("v"));

    assert!(original.is_empty());
    assert_eq!(extended.get("k"), Some(&json!("v")));
    assert_eq!(extended.len(), 1);
}

fn manifest(name: &str, root: &str) -> Manifest {
    Manifest { name: name.to_string(), root: PathBuf::from(root), steps: vec![], no_dest: false }
}

#[test]
fn test_registry_first_manifest_wins() {
    let registry = TagRegistry::from_manifests(vec![
        manifest("lib", "/first"),
        manifest("base", "/base"),
        manifest("lib", "/second"),
    ]);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("lib").unwrap().root, PathBuf::from("/first"));
    assert_eq!(registry.tags().collect::<Vec<_>>(), vec!["base", "lib"]);
}

#[test]
fn test_registry_without_is_a_copy() {
    let registry = TagRegistry::from_manifests(vec![manifest("lib", "/lib")]);
    let narrowed = registry.without("lib");

    assert!(narrowed.get("lib").is_none());
    assert!(narrowed.is_empty());
    assert!(registry.get("lib").is_some());
}
