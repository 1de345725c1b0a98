#![allow(clippy::unwrap_used, clippy::expect_used)]
use super::*;

#[test]
fn read_bounded_returns_full_contents_under_the_limit() {
    let bytes = read_bounded(&b"hello"[..], 16).unwrap();
    assert_eq!(bytes, b"hello");
}

#[test]
fn read_bounded_returns_exact_contents_at_the_limit() {
    let bytes = read_bounded(&b"12345"[..], 5).unwrap();
    assert_eq!(bytes, b"12345");
}

#[test]
fn read_bounded_errors_when_stream_exceeds_the_limit() {
    let err = read_bounded(&b"123456"[..], 5).unwrap_err();
    assert!(matches!(err, Error::ReaderTooLarge { limit: 5 }));
}

#[test]
fn max_file_len_tracks_the_largest_file() {
    let archive = MemoryArchive::from_files([
        ("a.txt", b"short".to_vec()),
        ("b.txt", b"a much longer file body".to_vec()),
    ]);
    assert_eq!(archive.max_file_len(), "a much longer file body".len());
    assert_eq!(archive.files().len(), 2);
}

#[test]
fn empty_archive_has_zero_max_len() {
    let archive = MemoryArchive::from_files(Vec::<(&str, Vec<u8>)>::new());
    assert_eq!(archive.max_file_len(), 0);
    assert!(archive.files().is_empty());
}
