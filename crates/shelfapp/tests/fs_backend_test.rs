use shelfapp::store::fs_backend::FsBackend;
use shelfapp::store::KeyValueStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_missing_key_is_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.read_raw("library-books").unwrap(), None);
}

#[test]
fn test_fs_backend_write_creates_data_dir() {
    let (dir, backend) = setup();
    assert!(!dir.path().join("data").exists());

    backend.write_raw("dark-mode", "true").unwrap();

    let expected = dir.path().join("data").join("dark-mode.json");
    assert!(expected.exists());
    assert_eq!(fs::read_to_string(expected).unwrap(), "true");
}

#[test]
fn test_fs_backend_round_trip_and_overwrite() {
    let (_dir, backend) = setup();
    backend.write_raw("library-books", "[]").unwrap();
    backend.write_raw("library-books", "[1]").unwrap();
    assert_eq!(
        backend.read_raw("library-books").unwrap(),
        Some("[1]".to_string())
    );
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.write_raw("library-books", "[]").unwrap();

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path().join("data")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    assert!(backend.write_raw("../escape", "x").is_err());
    assert!(backend.write_raw("nested/key", "x").is_err());
    assert!(backend.write_raw(".hidden", "x").is_err());
    assert!(backend.write_raw("", "x").is_err());
    assert!(backend.read_raw("../escape").is_err());
}

#[test]
fn test_fs_backend_keys_are_independent() {
    let (_dir, backend) = setup();
    backend.write_raw("library-books", "[]").unwrap();
    backend.write_raw("dark-mode", "false").unwrap();
    assert_eq!(
        backend.read_raw("library-books").unwrap(),
        Some("[]".to_string())
    );
    assert_eq!(
        backend.read_raw("dark-mode").unwrap(),
        Some("false".to_string())
    );
}
