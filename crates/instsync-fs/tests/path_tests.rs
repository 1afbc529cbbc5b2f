use assert_fs::prelude::*;
use instsync_fs::resolve_dir;

#[test]
fn test_resolve_existing_directory_is_absolute() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("docs").create_dir_all().unwrap();

    let resolved = resolve_dir(temp.path().join("docs")).unwrap();
    assert!(resolved.is_absolute());
    assert!(resolved.is_dir());
    assert_eq!(resolved.file_name().unwrap(), "docs");
}

#[test]
fn test_resolve_collapses_dot_segments() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a").create_dir_all().unwrap();

    let resolved = resolve_dir(temp.path().join("a").join("..").join("a")).unwrap();
    assert_eq!(resolved.file_name().unwrap(), "a");
    assert!(!resolved.components().any(|c| c == std::path::Component::ParentDir));
}

#[cfg(unix)]
#[test]
fn test_resolve_keeps_backslash_in_directory_name() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("we\\ird").create_dir_all().unwrap();

    let resolved = resolve_dir(temp.path().join("we\\ird")).unwrap();
    assert_eq!(resolved.file_name().unwrap(), "we\\ird");
    assert!(resolved.join("AGENTS.md").parent().unwrap().is_dir());
}

#[test]
fn test_resolve_missing_directory_still_absolute() {
    let temp = assert_fs::TempDir::new().unwrap();

    let resolved = resolve_dir(temp.path().join("missing")).unwrap();
    assert!(resolved.is_absolute());
    assert!(!resolved.exists());
}

#[test]
fn test_resolve_relative_directory() {
    let resolved = resolve_dir(".").unwrap();
    assert!(resolved.is_absolute());
}

#[test]
fn test_resolve_empty_path_fails() {
    assert!(resolve_dir("").is_err());
}
