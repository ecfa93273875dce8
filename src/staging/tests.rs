//! Tests for staging directory lifecycle and materialization.

use super::*;
use crate::bundle::{BundleEntry, TemplateBundle};
use crate::exit_codes;
use std::fs;
use tempfile::TempDir;

const ENTRIES: &[BundleEntry<'static>] = &[
    BundleEntry::new("tpl/a/", b""),
    BundleEntry::new("tpl/a/b.txt", b"hello"),
    BundleEntry::new("tpl/a/deeper/nested.yaml", b"kind: Deployment\n"),
    BundleEntry::new("tpl/root.md", b"# root\n"),
];

fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

// ============================================================================
// StagingDirectory
// ============================================================================

#[test]
fn test_staging_directory_has_prefix_and_is_empty() {
    let root = TempDir::new().unwrap();
    let staging = create_staging_in(root.path(), "kublo-").unwrap();

    assert!(staging.path().is_dir());
    assert!(staging.path().is_absolute());
    assert_eq!(staging.path().parent().unwrap(), root.path());
    let name = staging.path().file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("kublo-"));
    assert!(name.len() > "kublo-".len());
    assert_eq!(entry_count(staging.path()), 0);
}

#[test]
fn test_staging_directories_are_unique() {
    let root = TempDir::new().unwrap();
    let first = create_staging_in(root.path(), "kublo-").unwrap();
    let second = create_staging_in(root.path(), "kublo-").unwrap();

    assert_ne!(first.path(), second.path());
}

#[test]
fn test_drop_removes_directory_recursively() {
    let root = TempDir::new().unwrap();
    let staging = create_staging_in(root.path(), "kublo-").unwrap();
    let path = staging.path().to_path_buf();
    fs::create_dir_all(path.join("x").join("y")).unwrap();
    fs::write(path.join("x").join("y").join("z.txt"), "z").unwrap();

    drop(staging);

    assert!(!path.exists());
    assert_eq!(entry_count(root.path()), 0);
}

#[test]
fn test_close_removes_directory() {
    let root = TempDir::new().unwrap();
    let staging = create_staging_in(root.path(), "kublo-").unwrap();
    let path = staging.path().to_path_buf();

    staging.close().unwrap();

    assert!(!path.exists());
}

#[test]
fn test_drop_after_external_removal_is_silent() {
    let root = TempDir::new().unwrap();
    let staging = create_staging_in(root.path(), "kublo-").unwrap();
    fs::remove_dir_all(staging.path()).unwrap();

    // Must not panic.
    drop(staging);
}

#[test]
fn test_missing_root_is_staging_error() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("does-not-exist");

    let err = create_staging_in(&missing, "kublo-").unwrap_err();

    assert!(matches!(err, KubloError::Staging { .. }));
    assert_eq!(err.exit_code(), exit_codes::STAGING_FAILURE);
    assert!(err.to_string().contains("does-not-exist"));
    assert!(!missing.exists());
}

#[test]
fn test_relative_root_yields_absolute_path() {
    let root = TempDir::new().unwrap();
    let relative = relative_to_cwd(root.path());

    let staging = create_staging_in(&relative, "kublo-").unwrap();

    assert!(staging.path().is_absolute());
    assert_eq!(
        staging.path().parent().unwrap().canonicalize().unwrap(),
        root.path().canonicalize().unwrap()
    );
}

/// Express `target` relative to the current directory via `..` hops.
fn relative_to_cwd(target: &Path) -> std::path::PathBuf {
    let cwd = std::env::current_dir().unwrap();
    let mut relative = std::path::PathBuf::new();
    for _ in cwd.components().skip(1) {
        relative.push("..");
    }
    for component in target.components().skip(1) {
        relative.push(component);
    }
    relative
}

#[test]
fn test_create_staging_uses_system_temp_dir() {
    let staging = create_staging("kublo-test-").unwrap();
    assert!(staging.path().starts_with(std::env::temp_dir()));
}

// ============================================================================
// materialize
// ============================================================================

#[test]
fn test_materialize_writes_relative_tree() {
    let dest = TempDir::new().unwrap();
    let bundle = TemplateBundle::new("tpl", ENTRIES);

    let report = materialize(&bundle, dest.path()).unwrap();

    assert_eq!(
        fs::read_to_string(dest.path().join("a").join("b.txt")).unwrap(),
        "hello"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("a/deeper/nested.yaml")).unwrap(),
        "kind: Deployment\n"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("root.md")).unwrap(),
        "# root\n"
    );
    assert!(!dest.path().join("tpl").exists());
    assert_eq!(report.files, 3);
    assert_eq!(report.bytes, 5 + 17 + 7);
}

#[test]
fn test_materialize_embedded_bundle_is_byte_identical() {
    let dest = TempDir::new().unwrap();
    let bundle = TemplateBundle::embedded();

    let report = materialize(&bundle, dest.path()).unwrap();

    assert_eq!(report.files, bundle.files().count());
    for entry in bundle.files() {
        let written = fs::read(dest.path().join(bundle.relative_path(entry).unwrap())).unwrap();
        assert_eq!(written, entry.contents, "{}", entry.path);
    }
}

#[test]
fn test_materialize_empty_bundle() {
    let dest = TempDir::new().unwrap();
    let bundle = TemplateBundle::new("tpl", &[]);

    let report = materialize(&bundle, dest.path()).unwrap();

    assert_eq!(report, MaterializeReport::default());
    assert_eq!(entry_count(dest.path()), 0);
}

#[test]
fn test_materialize_stops_at_invalid_entry_keeping_earlier_files() {
    const BAD: &[BundleEntry<'static>] = &[
        BundleEntry::new("tpl/first.txt", b"1"),
        BundleEntry::new("tpl/../escape.txt", b"2"),
        BundleEntry::new("tpl/third.txt", b"3"),
    ];
    let parent = TempDir::new().unwrap();
    let dest = parent.path().join("staging");
    fs::create_dir(&dest).unwrap();

    let err = materialize(&TemplateBundle::new("tpl", BAD), &dest).unwrap_err();

    assert!(matches!(err, KubloError::InvalidEntry { .. }));
    assert!(dest.join("first.txt").exists());
    assert!(!parent.path().join("escape.txt").exists());
    assert!(!dest.join("third.txt").exists());
}

#[test]
fn test_materialize_write_failure_is_reported_with_path() {
    const CLASH: &[BundleEntry<'static>] = &[
        BundleEntry::new("tpl/a", b"file where a directory is needed"),
        BundleEntry::new("tpl/a/b.txt", b"hello"),
    ];
    let dest = TempDir::new().unwrap();

    let err = materialize(&TemplateBundle::new("tpl", CLASH), dest.path()).unwrap_err();

    assert_eq!(err.exit_code(), exit_codes::MATERIALIZE_FAILURE);
    match err {
        KubloError::Materialize { path, .. } => {
            assert_eq!(path, dest.path().join("a").join("b.txt"));
        }
        other => panic!("expected Materialize error, got {:?}", other),
    }
    assert_eq!(fs::read(dest.path().join("a")).unwrap(), b"file where a directory is needed");
}
