#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::config::Limits;
use crate::pattern::{MatcherProgram, PatternInfo};
use crate::store::MemoryFile;

fn program_for(pattern: &str, is_reg_exp: bool, is_case_sensitive: bool, is_word_match: bool) -> MatcherProgram {
    let info = PatternInfo {
        pattern: pattern.to_string(),
        is_reg_exp,
        is_case_sensitive,
        is_word_match,
        ..PatternInfo::default()
    };
    MatcherProgram::build(&info).unwrap()
}

#[test]
fn simple_literal_two_lines() {
    let mut program = program_for("foo", false, true, false);
    let file = MemoryFile::new("a.txt", b"foo bar\nbaz foo\n".to_vec());
    let (matches, limit_hit) = scan_file(&mut program, &file, &Limits::default());

    assert!(!limit_hit);
    let expected = vec![
        LineMatch {
            line_number: 1,
            preview: "foo bar".to_string(),
            offset_and_lengths: vec![(0, 3)],
            limit_hit: false,
        },
        LineMatch {
            line_number: 2,
            preview: "baz foo".to_string(),
            offset_and_lengths: vec![(4, 3)],
            limit_hit: false,
        },
    ];
    similar_asserts::assert_eq!(matches, expected);
}

#[test]
fn case_insensitive_preserves_original_case_in_preview() {
    let mut program = program_for("Foo", false, false, false);
    let file = MemoryFile::new("a.txt", b"foo\nFOO\n".to_vec());
    let (matches, _) = scan_file(&mut program, &file, &Limits::default());

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].preview, "foo");
    assert_eq!(matches[1].preview, "FOO");
}

#[test]
fn word_match_excludes_substring_occurrences() {
    let mut program = program_for("cat", false, true, true);
    let file = MemoryFile::new("a.txt", b"cat\nconcatenate\n".to_vec());
    let (matches, _) = scan_file(&mut program, &file, &Limits::default());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].line_number, 1);
    assert_eq!(matches[0].preview, "cat");
}

#[test]
fn multiline_regex_crossing_newline_splits_into_two_line_matches() {
    let mut program = program_for(r"a\nb", true, true, false);
    let file = MemoryFile::new("a.txt", b"xa\nbz\n".to_vec());
    let (matches, _) = scan_file(&mut program, &file, &Limits::default());

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].line_number, 1);
    assert_eq!(matches[0].preview, "xa");
    assert_eq!(matches[0].offset_and_lengths, vec![(1, 1)]);
    assert_eq!(matches[1].line_number, 2);
    assert_eq!(matches[1].preview, "bz");
    assert_eq!(matches[1].offset_and_lengths, vec![(0, 1)]);
}

#[test]
fn literal_prefilter_skips_non_containing_file_without_matching() {
    let mut program = program_for("needle", true, true, false);
    let file = MemoryFile::new("a.txt", b"nothing to see here\n".to_vec());
    let (matches, limit_hit) = scan_file(&mut program, &file, &Limits::default());
    assert!(matches.is_empty());
    assert!(!limit_hit);
}

#[test]
fn absent_regex_produces_no_line_matches() {
    let mut program = MatcherProgram::build(&PatternInfo::default()).unwrap();
    let file = MemoryFile::new("a.txt", b"anything\n".to_vec());
    let (matches, limit_hit) = scan_file(&mut program, &file, &Limits::default());
    assert!(matches.is_empty());
    assert!(!limit_hit);
}

#[test]
fn line_limit_hit_caps_at_max_line_matches() {
    let mut program = program_for("x", false, true, false);
    let body = "x\n".repeat(150);
    let file = MemoryFile::new("a.txt", body.into_bytes());
    let (matches, limit_hit) = scan_file(&mut program, &file, &Limits::default());
    assert_eq!(matches.len(), 100);
    assert!(limit_hit);
    assert!(matches.iter().all(|m| m.limit_hit));
}

#[test]
fn exactly_max_offsets_matches_trips_limit_hit_prematurely() {
    // The reference scanner sets `limitHit` once the collected offset count
    // equals `max_offsets` (10), not once emitted `LineMatch`es reach
    // `max_line_matches` (100) — reproduced verbatim per spec.md §9. Ten
    // single-line matches is well under `max_line_matches`, so this proves
    // the offset-count branch fires on its own, independent of the line
    // count branch (which `line_limit_hit_caps_at_max_line_matches` above
    // already covers with 150 matches, all absorbed by the 100 branch).
    let mut program = program_for("x", false, true, false);
    let body = "x\n".repeat(10);
    let file = MemoryFile::new("a.txt", body.into_bytes());
    let (matches, limit_hit) = scan_file(&mut program, &file, &Limits::default());
    assert_eq!(matches.len(), 10);
    assert!(limit_hit);
}

#[test]
fn rune_offsets_count_code_points_not_bytes() {
    let mut program = program_for("foo", false, true, false);
    let file = MemoryFile::new("a.txt", "caf\u{e9} foo\n".as_bytes().to_vec());
    let (matches, _) = scan_file(&mut program, &file, &Limits::default());
    assert_eq!(matches.len(), 1);
    // "café " is 5 code points even though "é" is 2 bytes in UTF-8.
    assert_eq!(matches[0].offset_and_lengths, vec![(5, 3)]);
}
