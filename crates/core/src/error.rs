//! Error types for matcher construction and scanning.

use crate::driver::FindOutcome;

/// Errors produced while building a [`crate::pattern::MatcherProgram`] or
/// running the [`crate::driver`] over an archive.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The content pattern failed to parse or compile as a regex.
    #[error("pattern compilation error: {0}")]
    PatternCompilation(#[from] regex::Error),

    /// The content pattern's AST failed to parse (case-folding path).
    #[error("pattern syntax error: {0}")]
    PatternSyntax(#[from] regex_syntax::ast::Error),

    /// An include/exclude path pattern failed to compile.
    #[error("path pattern error: {0}")]
    PathPattern(#[from] globset::Error),

    /// Re-serializing a case-folded pattern AST back to source failed.
    /// Unreachable in practice since we always print into a `String`, whose
    /// `fmt::Write` impl is infallible, but the printer's API is fallible.
    #[error("pattern re-serialization error: {0}")]
    PatternPrint(#[from] std::fmt::Error),

    /// A bounded reader did not reach EOF within its fixed capacity.
    #[error("reader too large: exceeded {limit} byte buffer")]
    ReaderTooLarge { limit: usize },

    /// A lower-level I/O failure surfaced by a [`crate::store`] bounded-read
    /// helper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A `Limits` TOML document failed to load, parse, or pass version
    /// validation.
    #[error("config error ({path}): {message}")]
    Config { path: String, message: String },

    /// The File Scanner returned an error for some file; latched by the
    /// Concurrent Driver and returned verbatim.
    #[error("scanner error on {path}: {message}")]
    Scanner { path: String, message: String },

    /// The scan's deadline fired before all workers drained. Carries
    /// whatever partial results had already been collected at that point,
    /// since callers must receive those alongside the error rather than
    /// have them silently dropped (spec.md §5/§7).
    #[error("deadline exceeded")]
    Deadline { partial: FindOutcome },
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
