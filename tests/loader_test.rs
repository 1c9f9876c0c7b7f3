use custodian::constants::MANIFEST_FILE;
use custodian::error::Error;
use custodian::loader::load_manifest;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_manifest_is_none() {
    let temp_dir = TempDir::new().unwrap();
    assert!(load_manifest(temp_dir.path()).unwrap().is_none());
}

#[test]
fn test_missing_root_is_none() {
    let temp_dir = TempDir::new().unwrap();
    assert!(load_manifest(temp_dir.path().join("nowhere")).unwrap().is_none());
}

#[test]
fn test_load_manifest() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(MANIFEST_FILE),
        r#"{:name "lib" :nodest true :steps [(copy "a.txt")]}"#,
    )
    .unwrap();

    let manifest = load_manifest(temp_dir.path()).unwrap().unwrap();
    assert_eq!(manifest.name, "lib");
    assert_eq!(manifest.root, temp_dir.path());
    assert!(manifest.no_dest);
    assert_eq!(manifest.steps.len(), 1);
}

#[test]
fn test_load_invalid_manifest() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(MANIFEST_FILE), r#"{:name "lib"}"#).unwrap();

    assert!(matches!(load_manifest(temp_dir.path()), Err(Error::InvalidManifest(_))));
}
