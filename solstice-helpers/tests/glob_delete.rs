use pretty_assertions::assert_eq;
use solstice_helpers::files::resolve_glob;
use solstice_helpers::{HelpersError, glob_delete};
use std::fs;
use std::path::Path;

fn touch(dir: &Path, name: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"x").unwrap();
}

#[tokio::test]
async fn test_glob_delete_removes_only_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "trades-1.log");
    touch(dir.path(), "trades-2.log");
    touch(dir.path(), "keep.json");
    touch(dir.path(), "nested/trades-3.log");

    let pattern = format!("{}/*.log", dir.path().display());
    let deleted = glob_delete(&pattern).await.unwrap();

    assert_eq!(deleted, 2);
    assert!(!dir.path().join("trades-1.log").exists());
    assert!(!dir.path().join("trades-2.log").exists());
    assert!(dir.path().join("keep.json").exists());
    // '*' не спускается в подкаталоги
    assert!(dir.path().join("nested/trades-3.log").exists());
}

#[tokio::test]
async fn test_glob_delete_recursive_pattern() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.log");
    touch(dir.path(), "x/b.log");
    touch(dir.path(), "x/y/c.log");
    touch(dir.path(), "x/y/c.txt");

    let pattern = format!("{}/**/*.log", dir.path().display());
    assert_eq!(glob_delete(&pattern).await.unwrap(), 3);
    assert!(dir.path().join("x/y/c.txt").exists());
}

#[tokio::test]
async fn test_glob_delete_without_matches_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "keep.json");

    let pattern = format!("{}/*.csv", dir.path().display());
    assert_eq!(glob_delete(&pattern).await.unwrap(), 0);

    let missing = format!("{}/no-such-dir/*.csv", dir.path().display());
    assert_eq!(glob_delete(&missing).await.unwrap(), 0);
}

#[tokio::test]
async fn test_glob_delete_rejects_bad_pattern() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "keep.log");

    let pattern = format!("{}/[*.log", dir.path().display());
    assert!(matches!(
        glob_delete(&pattern).await,
        Err(HelpersError::Pattern(_))
    ));
    assert!(dir.path().join("keep.log").exists());
}

#[test]
fn test_resolve_glob_literal_path_and_directories() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "one.log");
    fs::create_dir_all(dir.path().join("dir.log")).unwrap();

    let literal = format!("{}/one.log", dir.path().display());
    assert_eq!(resolve_glob(&literal).unwrap(), vec![dir.path().join("one.log")]);

    // каталоги под шаблон не попадают
    let pattern = format!("{}/*.log", dir.path().display());
    assert_eq!(resolve_glob(&pattern).unwrap(), vec![dir.path().join("one.log")]);
}

#[test]
fn test_resolve_glob_skips_hidden_names_unless_named() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.log");
    touch(dir.path(), ".hidden.log");
    touch(dir.path(), ".cache/b.log");
    touch(dir.path(), "x/.c.log");

    let plain = format!("{}/*.log", dir.path().display());
    assert_eq!(resolve_glob(&plain).unwrap(), vec![dir.path().join("a.log")]);

    let recursive = format!("{}/**/*.log", dir.path().display());
    assert_eq!(resolve_glob(&recursive).unwrap(), vec![dir.path().join("a.log")]);

    let dotted = format!("{}/.*.log", dir.path().display());
    assert_eq!(resolve_glob(&dotted).unwrap(), vec![dir.path().join(".hidden.log")]);

    let inside = format!("{}/.cache/*.log", dir.path().display());
    assert_eq!(resolve_glob(&inside).unwrap(), vec![dir.path().join(".cache/b.log")]);

    let nested = format!("{}/*/.c.log", dir.path().display());
    assert_eq!(resolve_glob(&nested).unwrap(), vec![dir.path().join("x/.c.log")]);
}
