// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ASCII-only byte transforms used on the matching fast path.
//!
//! spec.md §4.2 is explicit that the input byte stream is folded with a
//! non-Unicode ASCII lower-case rather than a full Unicode case fold, trading
//! correctness for non-ASCII locales for throughput. This is the only place
//! in the crate that performs that fold; the regex side of the equation is
//! folded once, ahead of time, by [`crate::pattern::case_fold`].

/// Lower-case `input` into `out` using the ASCII `'A'..='Z'` range only.
/// `out` is resized to `input.len()` and overwritten.
pub fn ascii_lowercase_into(input: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(input.len());
    out.extend(input.iter().map(|&b| if b.is_ascii_uppercase() { b + 32 } else { b }));
}

#[cfg(test)]
#[path = "ascii_tests.rs"]
mod tests;
