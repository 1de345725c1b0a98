#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn default_limits_match_spec_constants() {
    let limits = Limits::default();
    assert_eq!(limits.max_file_matches, 1000);
    assert_eq!(limits.max_line_matches, 100);
    assert_eq!(limits.max_offsets, 10);
    assert_eq!(limits.max_line_size, 500);
    assert_eq!(limits.num_workers, 8);
}

#[test]
fn parse_overrides_subset_of_fields() {
    let doc = r#"
        version = 1
        [limits]
        num_workers = 4
    "#;
    let limits = Limits::parse(doc).unwrap();
    assert_eq!(limits.num_workers, 4);
    assert_eq!(limits.max_file_matches, 1000);
}

#[test]
fn parse_rejects_unsupported_version() {
    let doc = "version = 2\n";
    let err = Limits::parse(doc).unwrap_err();
    assert!(err.to_string().contains("unsupported limits document version"));
}

#[test]
fn parse_rejects_missing_version() {
    let doc = "[limits]\nnum_workers = 2\n";
    assert!(Limits::parse(doc).is_err());
}
