//! Literal Extractor (spec.md §4.1): the longest literal substring that
//! MUST appear in every match of a parsed regex, used as a cheap pre-filter
//! ahead of the regex engine itself.

use regex_syntax::hir::{Hir, HirKind};

/// Extract the longest literal substring guaranteed to occur in every match
/// of `hir`. Conservative by design: a longer common substring across
/// alternation branches is never computed (spec.md §4.1 Rationale) — the
/// pre-filter only needs to be *correct*, not maximal.
pub fn extract_required_literal(hir: &Hir) -> String {
    match hir.kind() {
        HirKind::Literal(lit) => String::from_utf8_lossy(&lit.0).into_owned(),
        HirKind::Capture(cap) => extract_required_literal(&cap.sub),
        HirKind::Repetition(rep) if rep.min >= 1 => extract_required_literal(&rep.sub),
        HirKind::Concat(subs) => subs
            .iter()
            .map(extract_required_literal)
            .max_by_key(|s| s.chars().count())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
