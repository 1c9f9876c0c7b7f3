use custodian::error::Error;
use custodian::manifest::{parse_manifest, Step};
use serde_json::json;
use std::path::PathBuf;

fn copy(src: &str, dest: &str, conditional: bool) -> Step {
    Step::Copy { src: PathBuf::from(src), dest: PathBuf::from(dest), conditional }
}

fn template(src: &str, dest: &str, conditional: bool) -> Step {
    Step::Template { src: PathBuf::from(src), dest: PathBuf::from(dest), conditional }
}

#[test]
fn test_parse_all_step_kinds() {
    let content = r#"
        {:name "lib"
         :steps [(copy "a.txt" "b.txt")
                 (xcopy "dir")
                 (template "t.tmpl" "t.out")
                 (xtemplate "README.md")
                 (arg "name" "x")
                 (from "base")]}
    "#;
    let manifest = parse_manifest(content, "/packs/lib").unwrap();

    assert_eq!(manifest.name, "lib");
    assert_eq!(manifest.root, PathBuf::from("/packs/lib"));
    assert!(!manifest.no_dest);
    assert_eq!(
        manifest.steps,
        vec![
            copy("a.txt", "b.txt", false),
            copy("dir", "dir", true),
            template("t.tmpl", "t.out", false),
            template("README.md", "README.md", true),
            Step::Arg { name: "name".to_string(), value: json!("x") },
            Step::Import { tag: "base".to_string() },
        ]
    );
}

#[test]
fn test_step_type_is_case_insensitive() {
    let content = r#"{:steps [(COPY "a") (XCopy "b") ("Template" "c") (:from "lib")]}"#;
    let manifest = parse_manifest(content, "/p").unwrap();

    assert_eq!(
        manifest.steps,
        vec![
            copy("a", "a", false),
            copy("b", "b", true),
            template("c", "c", false),
            Step::Import { tag: "lib".to_string() },
        ]
    );
    assert!(manifest.steps[1].is_conditional());
    assert!(!manifest.steps[0].is_conditional());
}

#[test]
fn test_vector_steps_are_accepted() {
    let manifest = parse_manifest(r#"{:steps ([copy "a"])}"#, "/p").unwrap();
    assert_eq!(manifest.steps, vec![copy("a", "a", false)]);
}

#[test]
fn test_name_defaults_to_normalized_root() {
    let manifest = parse_manifest(r#"{:steps []}"#, "/packs/./lib/").unwrap();
    assert_eq!(manifest.root, PathBuf::from("/packs/lib"));
    assert_eq!(manifest.name, "/packs/lib");

    let manifest = parse_manifest(r#"{:name "  " :steps []}"#, "/packs/lib").unwrap();
    assert_eq!(manifest.name, "/packs/lib");
}

#[test]
fn test_nodest_flag() {
    let manifest = parse_manifest(r#"{:nodest true :steps []}"#, "/p").unwrap();
    assert!(manifest.no_dest);

    let manifest = parse_manifest(r#"{:nodest false :steps []}"#, "/p").unwrap();
    assert!(!manifest.no_dest);

    let manifest = parse_manifest(r#"{:nodest nil :steps []}"#, "/p").unwrap();
    assert!(!manifest.no_dest);
}

#[test]
fn test_arg_value_positions() {
    let content = r#"
        {:steps [(arg "short" "value")
                 (arg "long" "default" "value")
                 (arg "fallback" nil "value")
                 (arg "bare")]}
    "#;
    let manifest = parse_manifest(content, "/p").unwrap();

    let values: Vec<_> = manifest
        .steps
        .iter()
        .map(|step| match step {
            Step::Arg { name, value } => (name.as_str(), value.clone()),
            other => panic!("Expected Arg step, got {:?}", other),
        })
        .collect();
    assert_eq!(
        values,
        vec![
            ("short", json!("value")),
            ("long", json!("default")),
            ("fallback", json!("value")),
            ("bare", json!(null)),
        ]
    );
}

#[test]
fn test_arg_values_convert_to_json() {
    let content = r#"
        {:steps [(arg "n" 42)
                 (arg "flag" true)
                 (arg "list" ["a" 1])
                 (arg "map" {:k "v"})
                 (arg "kw" :thing)
                 (arg "set" #{"a"})]}
    "#;
    let manifest = parse_manifest(content, "/p").unwrap();
    let values: Vec<_> = manifest
        .steps
        .iter()
        .filter_map(|step| match step {
            Step::Arg { value, .. } => Some(value.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(
        values,
        vec![json!(42), json!(true), json!(["a", 1]), json!({"k": "v"}), json!(":thing"), json!(["a"])]
    );
}

#[test]
fn test_missing_steps_is_invalid() {
    let result = parse_manifest(r#"{:name "lib"}"#, "/p");
    assert!(matches!(result, Err(Error::InvalidManifest(_))));

    let result = parse_manifest(r#"{:steps "copy"}"#, "/p");
    assert!(matches!(result, Err(Error::InvalidManifest(_))));
}

#[test]
fn test_top_level_must_be_map() {
    let result = parse_manifest(r#"[(copy "a")]"#, "/p");
    assert!(matches!(result, Err(Error::InvalidManifest(_))));
}

#[test]
fn test_unknown_step_type_carries_raw_step() {
    let result = parse_manifest(r#"{:steps [(copy "a") (bogus "b")]}"#, "/p");
    match result {
        Err(Error::UnknownStepType { step }) => assert!(step.contains("bogus")),
        other => panic!("Expected UnknownStepType, got {:?}", other),
    }
}

#[test]
fn test_malformed_steps_are_invalid() {
    for content in [r#"{:steps [()]}"#, r#"{:steps [(copy)]}"#, r#"{:steps [(from)]}"#, r#"{:steps ["copy"]}"#] {
        let result = parse_manifest(content, "/p");
        assert!(matches!(result, Err(Error::InvalidManifest(_))), "{}", content);
    }
}

#[test]
fn test_syntax_error() {
    let result = parse_manifest(r#"{:steps [(copy "a")"#, "/p");
    assert!(matches!(result, Err(Error::ManifestSyntax { .. })));
}
