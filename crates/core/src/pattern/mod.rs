//! Pattern compilation: turning a [`PatternInfo`] into a [`MatcherProgram`]
//! a worker can run against file bytes (spec.md §4.1–§4.3).

mod case_fold;
mod info;
mod literal;
mod path;
mod program;

pub use info::PatternInfo;
pub use path::{GlobPathMatcher, PathMatcher};
pub use program::MatcherProgram;
