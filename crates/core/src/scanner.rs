// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File Scanner (spec.md §4.4): given a matcher program and one file's
//! bytes, produces the file's line matches and a `limitHit` flag.

use crate::ascii::ascii_lowercase_into;
use crate::config::Limits;
use crate::model::{ArchiveFile, LineMatch};
use crate::pattern::MatcherProgram;

/// Scan `file` against `program`, returning its line matches and whether
/// `limits.max_line_matches` was hit. Not safe to call concurrently on the
/// same `program`, which owns a shared case-fold scratch buffer.
pub fn scan_file<F: ArchiveFile + ?Sized>(
    program: &mut MatcherProgram,
    file: &F,
    limits: &Limits,
) -> (Vec<LineMatch>, bool) {
    let file_buf = file.bytes();
    let (regex, ignore_case, prefilter, scratch) = program.parts_mut();

    if ignore_case {
        ascii_lowercase_into(file_buf, scratch);
    }
    let match_buf: &[u8] = if ignore_case { scratch } else { file_buf };

    let Some(regex) = regex else {
        return (Vec::new(), false);
    };

    if !prefilter.is_empty() && memchr::memmem::find(match_buf, prefilter.as_bytes()).is_none() {
        return (Vec::new(), false);
    }
    if regex.find(match_buf).is_none() {
        return (Vec::new(), false);
    }

    let mut offsets: Vec<(usize, usize)> = Vec::with_capacity(16);
    for m in regex.find_iter(match_buf) {
        if offsets.len() == limits.max_file_matches {
            break;
        }
        offsets.push((m.start(), m.end()));
    }
    let offset_limit_hit = offsets.len() == limits.max_offsets;

    let mut results = Vec::new();
    let mut cursor = 0usize;
    let mut line_number: u64 = 1;

    'matches: for (start, end) in offsets {
        line_number += count_newlines(&match_buf[cursor..start]) as u64;
        cursor = start;

        let line_start = line_start_of(match_buf, start);
        let line_end = line_end_of(match_buf, end);

        if memchr::memchr(b'\n', &match_buf[start..end]).is_some() {
            if !emit_multiline(
                &mut results,
                file_buf,
                match_buf,
                start,
                end,
                line_start,
                line_end,
                line_number,
                limits.max_line_matches,
            ) {
                break 'matches;
            }
        } else {
            if results.len() == limits.max_line_matches {
                break 'matches;
            }
            results.push(LineMatch {
                line_number,
                preview: String::from_utf8_lossy(&file_buf[line_start..line_end]).into_owned(),
                offset_and_lengths: vec![(
                    rune_count(&match_buf[line_start..start]),
                    rune_count(&match_buf[start..end]),
                )],
                limit_hit: false,
            });
        }
    }

    let limit_hit = results.len() == limits.max_line_matches || offset_limit_hit;
    // Every LineMatch in a file carries the same file-level flag, mirroring
    // the data model (spec.md §3), which lists `limitHit` on both LineMatch
    // and FileMatch rather than only the latter.
    for r in &mut results {
        r.limit_hit = limit_hit;
    }
    (results, limit_hit)
}

fn line_start_of(buf: &[u8], pos: usize) -> usize {
    match memchr::memrchr(b'\n', &buf[..pos]) {
        Some(nl) => nl + 1,
        None => 0,
    }
}

fn line_end_of(buf: &[u8], pos: usize) -> usize {
    match memchr::memchr(b'\n', &buf[pos..]) {
        Some(nl) => pos + nl,
        None => buf.len(),
    }
}

/// Split a match that crosses one or more newlines into one LineMatch per
/// physical line (spec.md §4.4 step 8). Returns `false` if it stopped
/// early because `max_line_matches` was hit.
#[allow(clippy::too_many_arguments)]
fn emit_multiline(
    results: &mut Vec<LineMatch>,
    file_buf: &[u8],
    match_buf: &[u8],
    start: usize,
    end: usize,
    first_line_start: usize,
    last_line_end: usize,
    first_line_number: u64,
    max_line_matches: usize,
) -> bool {
    let mut seg_start = start;
    let mut seg_line_start = first_line_start;
    let mut seg_line_number = first_line_number;

    loop {
        if results.len() == max_line_matches {
            return false;
        }
        let (seg_end, seg_line_end, is_last) = match memchr::memchr(b'\n', &match_buf[seg_start..end]) {
            Some(rel) => (seg_start + rel, seg_start + rel, false),
            None => (end, last_line_end, true),
        };
        let offset = rune_count(&match_buf[seg_line_start..seg_start]);
        let length = rune_count(&match_buf[seg_start..seg_end]);
        results.push(LineMatch {
            line_number: seg_line_number,
            preview: String::from_utf8_lossy(&file_buf[seg_line_start..seg_line_end]).into_owned(),
            offset_and_lengths: vec![(offset, length)],
            limit_hit: false,
        });
        if is_last {
            return true;
        }
        seg_start = seg_end + 1;
        seg_line_start = seg_start;
        seg_line_number += 1;
    }
}

fn count_newlines(buf: &[u8]) -> usize {
    memchr::memchr_iter(b'\n', buf).count()
}

fn rune_count(buf: &[u8]) -> usize {
    String::from_utf8_lossy(buf).chars().count()
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
