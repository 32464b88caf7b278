//! File-level conversion tests.

use std::fs;
use std::io::Cursor;

use mdox::{Error, convert_file};

#[test]
fn test_convert_file_creates_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.md");
    let output = dir.path().join("notes.docx");

    fs::write(&input, "# Title\n\nSome text.\n").unwrap();
    convert_file(&input, &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    // Must be a readable ZIP package with the main document part.
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert!(archive.by_name("word/document.xml").is_ok());
}

#[test]
fn test_missing_input_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.md");
    let output = dir.path().join("out.docx");

    let err = convert_file(&input, &output).unwrap_err();
    assert!(matches!(err, Error::InputNotFound(path) if path == input));
    assert!(!output.exists(), "no output may be written on failure");
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.md");
    let output = dir.path().join("notes.docx");

    fs::write(&input, "# First\n").unwrap();
    fs::write(&output, b"stale bytes").unwrap();

    convert_file(&input, &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_ne!(bytes, b"stale bytes");
    assert!(zip::ZipArchive::new(Cursor::new(bytes)).is_ok());
}

#[test]
fn test_rerun_produces_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.md");
    let output = dir.path().join("notes.docx");

    fs::write(
        &input,
        "# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n- point\n",
    )
    .unwrap();

    convert_file(&input, &output).unwrap();
    let first = fs::read(&output).unwrap();

    convert_file(&input, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_non_utf8_input_degrades_to_windows_1252() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("legacy.md");
    let output = dir.path().join("legacy.docx");

    // "caf\xe9" is Windows-1252; invalid as UTF-8.
    fs::write(&input, b"caf\xe9\n").unwrap();
    convert_file(&input, &output).unwrap();

    assert!(output.exists());
}
