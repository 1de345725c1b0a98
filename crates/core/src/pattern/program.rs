//! `MatcherProgram` construction (spec.md §4.3): the compiled bundle a
//! worker runs the [`crate::scanner`] against.

use crate::error::Result;
use crate::pattern::case_fold::case_fold_pattern;
use crate::pattern::info::PatternInfo;
use crate::pattern::literal::extract_required_literal;
use crate::pattern::path::{GlobPathMatcher, PathMatcher};

/// A compiled, per-request matching program. Holds the content regex (or
/// none, for a match-any program), the path matcher, the literal
/// pre-filter, and a scratch buffer reused across calls to
/// [`crate::scanner::scan_file`].
pub struct MatcherProgram {
    regex: Option<regex::bytes::Regex>,
    ignore_case: bool,
    path_matcher: Box<dyn PathMatcher>,
    /// Guaranteed to occur in every match of `regex`; empty means "no
    /// pre-filter available".
    literal_prefilter: String,
    /// Reused, grown-as-needed buffer for the ASCII-folded copy of a
    /// file's bytes. Empty until the first call that needs it.
    scratch: Vec<u8>,
}

impl MatcherProgram {
    /// Build a program from `info`. Fails if the content pattern or either
    /// path pattern does not compile (spec.md §4.3 step 6).
    pub fn build(info: &PatternInfo) -> Result<Self> {
        let path_matcher: Box<dyn PathMatcher> = Box::new(GlobPathMatcher::build(info)?);

        if info.pattern.is_empty() {
            return Ok(Self {
                regex: None,
                ignore_case: false,
                path_matcher,
                literal_prefilter: String::new(),
                scratch: Vec::new(),
            });
        }

        let mut expr = if info.is_reg_exp {
            info.pattern.clone()
        } else {
            regex::escape(&info.pattern)
        };
        if info.is_word_match {
            expr = format!(r"\b(?:{expr})\b");
        }
        if info.is_reg_exp {
            expr = format!("(?m:{expr})");
        }

        let ignore_case = !info.is_case_sensitive;
        if ignore_case {
            expr = case_fold_pattern(&expr)?;
        }

        let regex = regex::bytes::Regex::new(&expr)?;

        // `regex::bytes::Regex` doesn't expose its internal literal-prefix
        // optimizer, so rather than guess at whether the engine already
        // has one, we always derive our own pre-filter over the same
        // expression it compiled from.
        let literal_prefilter = {
            let hir = regex_syntax::ParserBuilder::new().build().parse(&expr)?;
            extract_required_literal(&hir)
        };

        Ok(Self {
            regex: Some(regex),
            ignore_case,
            path_matcher,
            literal_prefilter,
            scratch: Vec::new(),
        })
    }

    pub fn regex(&self) -> Option<&regex::bytes::Regex> {
        self.regex.as_ref()
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn literal_prefilter(&self) -> &str {
        &self.literal_prefilter
    }

    pub fn path_matcher(&self) -> &dyn PathMatcher {
        self.path_matcher.as_ref()
    }

    /// Grow the scratch buffer to at least `len` bytes, zeroing it. Called
    /// once per worker with the archive's maximum file length.
    pub fn reserve_scratch(&mut self, len: usize) {
        self.scratch.clear();
        self.scratch.resize(len, 0);
    }

    pub(crate) fn scratch_mut(&mut self) -> &mut Vec<u8> {
        &mut self.scratch
    }

    /// Disjoint-field access for [`crate::scanner::scan_file`], which needs
    /// to mutate `scratch` while holding a shared borrow of `regex` and
    /// `literal_prefilter` at the same time; splitting fields here (rather
    /// than through the individual accessor methods above) is what lets
    /// the borrow checker see the two borrows as non-overlapping.
    pub(crate) fn parts_mut(&mut self) -> (Option<&regex::bytes::Regex>, bool, &str, &mut Vec<u8>) {
        (
            self.regex.as_ref(),
            self.ignore_case,
            &self.literal_prefilter,
            &mut self.scratch,
        )
    }

    /// A thread-local clone: deep-copies the regex and path matcher (their
    /// internal caches are not safe to share across threads) and starts
    /// the new scratch buffer empty. The literal pre-filter is plain data
    /// and is copied, not shared, since `String` is cheap here relative to
    /// the regex/path-matcher state this exists to isolate.
    pub fn copy(&self) -> Self {
        Self {
            regex: self.regex.clone(),
            ignore_case: self.ignore_case,
            path_matcher: self.path_matcher.dyn_clone(),
            literal_prefilter: self.literal_prefilter.clone(),
            scratch: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
