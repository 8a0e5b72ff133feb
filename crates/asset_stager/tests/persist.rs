use std::fs;

use asset_stager::{ensure_output_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("www").join("js");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_creates_parents_and_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().join("www"));

    let first = writer.write("css/app.css", b"body{}").unwrap();
    assert!(first.ends_with("www/css/app.css"));
    assert_eq!(fs::read(&first).unwrap(), b"body{}");

    let second = writer.write("css/app.css", b"html{}").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"html{}");
}

#[test]
fn no_partial_file_when_destination_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("app.js", b"data");
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}
