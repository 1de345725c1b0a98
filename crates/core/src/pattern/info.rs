//! `PatternInfo`: the caller-supplied, per-request input (spec.md §3).

/// Per-request pattern and path-filter configuration. Immutable once
/// constructed; consumed once by [`super::MatcherProgram::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternInfo {
    /// The search pattern. Empty means "every file whose path passes the
    /// path filters matches" (spec.md §3 invariant).
    pub pattern: String,
    /// Treat `pattern` as a regular expression rather than a literal.
    pub is_reg_exp: bool,
    /// Wrap `pattern` in word-boundary anchors.
    pub is_word_match: bool,
    /// Case-sensitive content matching.
    pub is_case_sensitive: bool,
    /// Ordered include globs/regexes.
    pub include_patterns: Vec<String>,
    /// A single exclude glob/regex (empty = no exclusion).
    pub exclude_pattern: String,
    /// Whether `include_patterns`/`exclude_pattern` are regexes (true) or
    /// globs (false).
    pub path_patterns_are_reg_exps: bool,
    /// Case sensitivity for path pattern matching.
    pub path_patterns_are_case_sensitive: bool,
    /// Whether a file can match by its content.
    pub pattern_matches_content: bool,
    /// Whether a file can match by its path (regex-on-path).
    pub pattern_matches_paths: bool,
    /// Caller's requested cap on the number of `FileMatch`es returned.
    pub file_match_limit: usize,
}

impl Default for PatternInfo {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            is_reg_exp: false,
            is_word_match: false,
            is_case_sensitive: true,
            include_patterns: Vec::new(),
            exclude_pattern: String::new(),
            path_patterns_are_reg_exps: false,
            path_patterns_are_case_sensitive: true,
            pattern_matches_content: true,
            pattern_matches_paths: false,
            file_match_limit: 1000,
        }
    }
}
