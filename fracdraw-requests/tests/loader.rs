//! Unit tests for the request file loader.

use camino::{Utf8Path, Utf8PathBuf};
use fracdraw_requests::{LineError, LoadOptions, RequestLoadError, load_requests};
use fracdraw_types::{PatternKind, Request};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

fn write_file(temp: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(temp.path().join(name)).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn load(path: &Utf8Path) -> Result<Vec<Request>, RequestLoadError> {
    load_requests(path, &LoadOptions::default())
}

#[test]
fn test_valid_file() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "input.csv", "1,2\n2,3\n3,1\n");

    let requests = load(&path).unwrap();
    assert_eq!(
        requests,
        vec![
            Request::new(PatternKind::Carpet, 2),
            Request::new(PatternKind::Triangle, 3),
            Request::new(PatternKind::Vicsek, 1),
        ]
    );
}

#[test]
fn test_file_without_trailing_newline() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "input.csv", "2,1");

    let requests = load(&path).unwrap();
    assert_eq!(requests, vec![Request::new(PatternKind::Triangle, 1)]);
}

#[test]
fn test_empty_file_yields_no_requests() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "empty.csv", "");

    assert!(load(&path).unwrap().is_empty());
}

#[test]
fn test_missing_file() {
    let temp = create_temp_dir();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("absent.csv")).unwrap();

    let err = load(&path).unwrap_err();
    assert_eq!(err, RequestLoadError::Missing { path });
}

#[test]
fn test_wrong_extension_rejected() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "input.txt", "1,1\n");

    let err = load(&path).unwrap_err();
    assert!(matches!(err, RequestLoadError::WrongExtension { .. }));
}

#[test]
fn test_extension_is_case_sensitive() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "input.CSV", "1,1\n");

    assert!(matches!(
        load(&path),
        Err(RequestLoadError::WrongExtension { .. })
    ));
}

#[test]
fn test_extension_check_can_be_disabled() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "input.txt", "1,1\n");

    let opts = LoadOptions {
        require_csv_extension: false,
    };
    let requests = load_requests(&path, &opts).unwrap();
    assert_eq!(requests, vec![Request::new(PatternKind::Carpet, 1)]);
}

#[test]
fn test_directory_is_an_io_error() {
    let temp = create_temp_dir();
    let dir = Utf8PathBuf::from_path_buf(temp.path().join("dir.csv")).unwrap();
    fs::create_dir_all(&dir).unwrap();

    assert!(matches!(load(&dir), Err(RequestLoadError::Io { .. })));
}

#[test]
fn test_first_bad_line_rejects_whole_file() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "input.csv", "1,1\n2,2\n3,9\n1,1\n");

    let err = load(&path).unwrap_err();
    assert_eq!(
        err,
        RequestLoadError::Line {
            line: 3,
            source: LineError::DepthOutOfRange { value: 9 },
        }
    );
}
