// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for listing the catalogs available in a directory

use po_lingo::i18n::{list_available, EnglishLabels, NativeLabels, TranslationEngine};
use po_lingo::Error;
use std::fs;
use tempfile::TempDir;

fn touch(dir: &std::path::Path, name: &str) {
    fs::write(dir.join(name), "").unwrap();
}

#[test]
fn test_reserved_files_excluded() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "en.po");
    touch(dir.path(), "default.po");
    touch(dir.path(), "README.po");

    let languages = list_available(dir.path(), &EnglishLabels).unwrap();
    assert_eq!(languages.len(), 1);
    assert_eq!(languages.get("English").map(String::as_str), Some("en"));
}

#[test]
fn test_non_catalog_entries_ignored() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "fr.po");
    touch(dir.path(), "README");
    touch(dir.path(), "README.md");
    touch(dir.path(), "notes.txt");
    fs::create_dir(dir.path().join("de.po")).unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    touch(&dir.path().join("nested"), "es.po");

    let languages = list_available(dir.path(), &EnglishLabels).unwrap();
    let codes: Vec<&str> = languages.values().map(String::as_str).collect();
    assert_eq!(codes, vec!["fr"]);
}

#[test]
fn test_labels_with_regions() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "pt_BR.po");
    touch(dir.path(), "de.po");
    touch(dir.path(), "tlh.po");

    let languages = list_available(dir.path(), &NativeLabels).unwrap();
    assert_eq!(languages.get("Português (BR)").map(String::as_str), Some("pt_BR"));
    assert_eq!(languages.get("Deutsch").map(String::as_str), Some("de"));
    assert_eq!(languages.get("tlh").map(String::as_str), Some("tlh"));
}

#[test]
fn test_label_collision_last_file_wins() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "nb.po");
    touch(dir.path(), "no.po");

    let languages = list_available(dir.path(), &EnglishLabels).unwrap();
    assert_eq!(languages.len(), 1);
    assert_eq!(languages.get("Norwegian").map(String::as_str), Some("no"));
}

#[test]
fn test_custom_label_lookup() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "es.po");

    let labels = |code: &str| format!("lang:{}", code);
    let languages = list_available(dir.path(), &labels).unwrap();
    assert_eq!(languages.get("lang:es").map(String::as_str), Some("es"));
}

#[test]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();
    let result = list_available(&dir.path().join("gone"), &EnglishLabels);
    assert!(matches!(result, Err(Error::DirectoryNotFound(_))));
}

#[test]
fn test_engine_lists_its_own_directory() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "ja.po");
    touch(dir.path(), "en.po");

    let engine = TranslationEngine::new(dir.path(), Some("ja")).unwrap();
    let languages = engine.available(&EnglishLabels).unwrap();
    let labels: Vec<&str> = languages.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["English", "Japanese"]);
}
