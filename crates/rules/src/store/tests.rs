//! Tests for the rule store module.

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::name::RuleName;

fn temp_store() -> (TempDir, RuleStore) {
    let dir = TempDir::new().expect("create tempdir");
    let store = RuleStore::new(dir.path());
    (dir, store)
}

fn name(s: &str) -> RuleName {
    RuleName::parse(s).expect("valid rule name")
}

fn dir_listing(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn create_then_get_returns_exact_bytes() {
    let (dir, store) = temp_store();
    let body = b"k: v\nlist:\n  - 1\n  - 2\n";

    let path = store.create(&name("alpha"), body).unwrap();

    assert_eq!(path, dir.path().join("alpha.yaml"));
    assert_eq!(store.get(&name("alpha")).unwrap(), body);
}

#[test]
fn create_overwrites_existing_rule() {
    let (_dir, store) = temp_store();
    store.create(&name("alpha"), b"first").unwrap();
    store.create(&name("alpha"), b"second").unwrap();

    assert_eq!(store.get(&name("alpha")).unwrap(), b"second");
    assert_eq!(store.list().unwrap(), vec!["alpha"]);
}

#[test]
fn create_accepts_non_utf8_content() {
    let (_dir, store) = temp_store();
    let body = [0xff, 0x00, 0xfe, b'\n'];
    store.create(&name("blob"), &body).unwrap();
    assert_eq!(store.get(&name("blob")).unwrap(), body);
}

#[test]
fn update_missing_rule_is_not_found_and_writes_nothing() {
    let (dir, store) = temp_store();
    store.create(&name("alpha"), b"k: v").unwrap();
    let before = dir_listing(&dir);

    let err = store.update(&name("beta"), b"k: x").unwrap_err();

    assert!(matches!(err, RuleError::NotFound(ref n) if n == "beta"));
    assert_eq!(dir_listing(&dir), before);
}

#[test]
fn update_replaces_whole_content() {
    let (_dir, store) = temp_store();
    store.create(&name("alpha"), b"a much longer previous body").unwrap();

    store.update(&name("alpha"), b"k: v2").unwrap();

    assert_eq!(store.get(&name("alpha")).unwrap(), b"k: v2");
}

#[test]
fn get_missing_rule_is_not_found() {
    let (_dir, store) = temp_store();
    let err = store.get(&name("nope")).unwrap_err();
    assert!(matches!(err, RuleError::NotFound(_)));
}

#[test]
fn list_empty_directory() {
    let (_dir, store) = temp_store();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn list_is_sorted_and_only_yaml_files() {
    let (dir, store) = temp_store();
    fs::write(dir.path().join("zeta.yaml"), "z").unwrap();
    fs::write(dir.path().join("alpha.yaml"), "a").unwrap();
    fs::write(dir.path().join("beta.yml"), "b").unwrap();
    fs::write(dir.path().join("readme.txt"), "r").unwrap();
    fs::write(dir.path().join("alpha.yaml.bak"), "old").unwrap();
    fs::write(dir.path().join(".alpha.yaml.7.0.tmp"), "partial").unwrap();
    fs::write(dir.path().join(".yaml"), "no stem").unwrap();
    fs::create_dir(dir.path().join("nested.yaml")).unwrap();

    assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
}

#[test]
fn list_includes_hand_placed_files_with_unaddressable_names() {
    let (dir, store) = temp_store();
    fs::write(dir.path().join("my rule.yaml"), "a").unwrap();
    fs::write(dir.path().join(".hidden.yaml"), "h").unwrap();
    fs::write(dir.path().join("règle.yaml"), "r").unwrap();
    fs::write(dir.path().join("plain.yaml"), "p").unwrap();

    assert_eq!(
        store.list().unwrap(),
        vec![".hidden", "my rule", "plain", "règle"]
    );
}

#[test]
fn list_reflects_new_rule_without_touching_others() {
    let (_dir, store) = temp_store();
    store.create(&name("alpha"), b"a").unwrap();
    store.create(&name("gamma"), b"g").unwrap();

    store.create(&name("foo"), b"f").unwrap();

    assert_eq!(store.list().unwrap(), vec!["alpha", "foo", "gamma"]);
    assert_eq!(store.get(&name("alpha")).unwrap(), b"a");
}

#[test]
fn writes_leave_no_temp_files_behind() {
    let (dir, store) = temp_store();
    store.create(&name("alpha"), b"1").unwrap();
    store.update(&name("alpha"), b"2").unwrap();

    assert_eq!(dir_listing(&dir), vec!["alpha.yaml"]);
}

#[test]
fn list_missing_directory_is_read_dir_error() {
    let (dir, _) = temp_store();
    let store = RuleStore::new(dir.path().join("does-not-exist"));

    let err = store.list().unwrap_err();

    assert!(matches!(err, RuleError::ReadDir { .. }));
}

#[test]
fn create_in_missing_directory_is_write_error() {
    let (dir, _) = temp_store();
    let store = RuleStore::new(dir.path().join("does-not-exist"));

    let err = store.create(&name("alpha"), b"k: v").unwrap_err();

    assert!(matches!(err, RuleError::Write { .. }));
}

#[test]
fn failed_rename_leaves_no_temp_file() {
    let (dir, store) = temp_store();
    // A directory in the way makes the final rename fail after the temp
    // file has been written.
    fs::create_dir(dir.path().join("alpha.yaml")).unwrap();

    let err = store.create(&name("alpha"), b"k: v").unwrap_err();

    assert!(matches!(err, RuleError::Write { .. }));
    assert_eq!(dir_listing(&dir), vec!["alpha.yaml"]);
}

#[test]
fn ensure_dir_creates_missing_directory() {
    let (dir, _) = temp_store();
    let store = RuleStore::new(dir.path().join("nested").join("rules"));

    store.ensure_dir().unwrap();
    store.ensure_dir().unwrap();

    assert!(store.rules_dir().is_dir());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn exists_tracks_backing_file() {
    let (dir, store) = temp_store();
    assert!(!store.exists(&name("alpha")).unwrap());

    fs::write(dir.path().join("alpha.yaml"), "k: v").unwrap();

    assert!(store.exists(&name("alpha")).unwrap());
    assert_eq!(store.path_for(&name("alpha")), dir.path().join("alpha.yaml"));
}
