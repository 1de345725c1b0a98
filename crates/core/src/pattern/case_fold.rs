//! Case-Folder (spec.md §4.2): lower-cases a regex AST so that matching
//! against ASCII-folded input bytes is equivalent to case-insensitive
//! matching against the original bytes, without relying on the regex
//! engine's own `(?i)` flag (which defeats literal-prefix optimizations on
//! some engines).

use regex_syntax::ast::{self, Ast};

use crate::error::Result;

/// Parse `expr`, case-fold its literals and character classes, and
/// re-serialize to a pattern string ready for compilation.
///
/// `regex-syntax`'s AST keeps an explicit `negated` flag on bracketed
/// classes, so unlike a representation that has already resolved negation
/// into a concrete list of ranges, there's no need to detect negation
/// heuristically: folding a negated class's ranges in place already
/// produces the intended result (`[^A-Z]` becomes `[^a-z]`, not
/// `[^A-Za-z]` — negation is a flag on the class, not baked into ranges).
pub fn case_fold_pattern(expr: &str) -> Result<String> {
    let mut tree = ast::parse::Parser::new().parse(expr)?;
    fold_ast(&mut tree);
    let mut out = String::new();
    ast::print::Printer::new().print(&tree, &mut out)?;
    Ok(out)
}

fn fold_ast(node: &mut Ast) {
    match node {
        Ast::Literal(lit) => fold_literal(lit),
        Ast::Class(class) => fold_class(class),
        Ast::Repetition(rep) => fold_ast(&mut rep.ast),
        Ast::Group(group) => fold_ast(&mut group.ast),
        Ast::Alternation(alt) => alt.asts.iter_mut().for_each(fold_ast),
        Ast::Concat(concat) => concat.asts.iter_mut().for_each(fold_ast),
        Ast::Empty(_) | Ast::Dot(_) | Ast::Assertion(_) | Ast::Flags(_) => {}
    }
}

fn fold_literal(lit: &mut ast::Literal) {
    lit.c = lit.c.to_ascii_lowercase();
}

fn fold_class(class: &mut ast::Class) {
    match class {
        ast::Class::Bracketed(bracketed) => fold_class_set(&mut bracketed.kind),
        // `\d`, `\w`, `\p{L}` and friends already span both cases or
        // neither; left untouched.
        ast::Class::Perl(_) | ast::Class::Unicode(_) => {}
    }
}

fn fold_class_set(set: &mut ast::ClassSet) {
    match set {
        ast::ClassSet::Item(item) => fold_set_item_at_class_root(item),
        ast::ClassSet::BinaryOp(op) => {
            fold_class_set(&mut op.lhs);
            fold_class_set(&mut op.rhs);
        }
    }
}

/// A [`ast::ClassSetItem::Range`] sitting directly under a class (not
/// nested in a union) has nowhere to grow a sibling, so a partial overlap
/// with `[A, Z]` promotes the item in place into a two-element union.
fn fold_set_item_at_class_root(item: &mut ast::ClassSetItem) {
    if let ast::ClassSetItem::Range(range) = item {
        if let Some(extra) = fold_range(range) {
            let span = range.span;
            let original = item.clone();
            *item = ast::ClassSetItem::Union(ast::ClassSetUnion {
                span,
                items: vec![original, extra],
            });
        }
        return;
    }
    fold_set_item(item);
}

fn fold_set_item(item: &mut ast::ClassSetItem) -> Option<ast::ClassSetItem> {
    match item {
        ast::ClassSetItem::Literal(lit) => {
            fold_literal(lit);
            None
        }
        ast::ClassSetItem::Range(range) => fold_range(range),
        ast::ClassSetItem::Bracketed(bracketed) => {
            fold_class_set(&mut bracketed.kind);
            None
        }
        ast::ClassSetItem::Union(union) => {
            fold_union(union);
            None
        }
        ast::ClassSetItem::Empty(_)
        | ast::ClassSetItem::Ascii(_)
        | ast::ClassSetItem::Perl(_)
        | ast::ClassSetItem::Unicode(_) => None,
    }
}

fn fold_union(union: &mut ast::ClassSetUnion) {
    let mut extras = Vec::new();
    for item in union.items.iter_mut() {
        if let Some(extra) = fold_set_item(item) {
            extras.push(extra);
        }
    }
    union.items.extend(extras);
}

/// Fold `range`, mutating it in place if it lies entirely within `[A, Z]`.
/// A range that only partially overlaps `[A, Z]` is left untouched (folding
/// it in place would change which out-of-range characters it matches) and
/// its lowered intersection is returned as a sibling to append instead.
fn fold_range(range: &mut ast::ClassSetRange) -> Option<ast::ClassSetItem> {
    let (start, end) = (range.start.c, range.end.c);
    if start > 'Z' || end < 'A' {
        return None;
    }
    if start >= 'A' && end <= 'Z' {
        range.start.c = start.to_ascii_lowercase();
        range.end.c = end.to_ascii_lowercase();
        return None;
    }
    let mut lo = range.start.clone();
    lo.c = start.max('A').to_ascii_lowercase();
    let mut hi = range.end.clone();
    hi.c = end.min('Z').to_ascii_lowercase();
    Some(ast::ClassSetItem::Range(ast::ClassSetRange {
        span: range.span,
        start: lo,
        end: hi,
    }))
}

#[cfg(test)]
#[path = "case_fold_tests.rs"]
mod tests;
