#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

fn info_with(include: &[&str], exclude: &str) -> PatternInfo {
    PatternInfo {
        include_patterns: include.iter().map(|s| s.to_string()).collect(),
        exclude_pattern: exclude.to_string(),
        ..PatternInfo::default()
    }
}

#[test]
fn empty_filters_match_everything() {
    let m = GlobPathMatcher::build(&info_with(&[], "")).unwrap();
    assert!(m.match_path("anything.go"));
}

#[test]
fn include_glob_restricts_to_matching_paths() {
    let m = GlobPathMatcher::build(&info_with(&["*.go"], "")).unwrap();
    assert!(m.match_path("main.go"));
    assert!(!m.match_path("main.rs"));
}

#[test]
fn exclude_glob_wins_over_include() {
    let info = info_with(&["**/*.go"], "**/vendor/**");
    let m = GlobPathMatcher::build(&info).unwrap();
    assert!(m.match_path("pkg/foo.go"));
    assert!(!m.match_path("vendor/foo.go"));
}

#[test]
fn regex_mode_compiles_include_as_regex() {
    let mut info = info_with(&["^src/.*\\.rs$"], "");
    info.path_patterns_are_reg_exps = true;
    let m = GlobPathMatcher::build(&info).unwrap();
    assert!(m.match_path("src/lib.rs"));
    assert!(!m.match_path("tests/lib.rs"));
}

#[test]
fn case_insensitive_glob_ignores_case() {
    let mut info = info_with(&["*.GO"], "");
    info.path_patterns_are_case_sensitive = false;
    let m = GlobPathMatcher::build(&info).unwrap();
    assert!(m.match_path("main.go"));
}

#[test]
fn invalid_regex_path_pattern_errors() {
    let mut info = info_with(&["(unclosed"], "");
    info.path_patterns_are_reg_exps = true;
    assert!(GlobPathMatcher::build(&info).is_err());
}

#[test]
fn dyn_clone_preserves_behavior() {
    let m = GlobPathMatcher::build(&info_with(&["*.go"], "")).unwrap();
    let cloned = m.dyn_clone();
    assert!(cloned.match_path("main.go"));
    assert!(!cloned.match_path("main.rs"));
}
