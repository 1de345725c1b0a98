// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent Driver (spec.md §4.5): owns the worker pool, the shared file
//! queue, the shared result list, deadline/cancellation, and error
//! propagation.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crate::config::Limits;
use crate::error::{Error, Result};
use crate::model::{ArchiveFile, FileMatch, Store};
use crate::pattern::MatcherProgram;
use crate::scanner::scan_file;

/// The result of a [`concurrent_find`] call.
#[derive(Debug, Default)]
pub struct FindOutcome {
    /// Order is not stable — result order depends on worker scheduling
    /// (spec.md §5). Callers must treat this as a set keyed by path.
    pub file_matches: Vec<FileMatch>,
    pub limit_hit: bool,
}

fn lock_or_recover<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Search `archive` for files/lines matching `program`, distributing work
/// across a fixed pool of `limits.num_workers` threads.
///
/// `deadline` is the remaining time budget, if any; a sub-budget of 90% of
/// it is used internally so the driver has room to collect partial results
/// before the caller's own deadline fires (spec.md §4.5 pre-processing). If
/// the deadline fires, the partial [`FindOutcome`] collected so far travels
/// with the returned [`Error::Deadline`] rather than being dropped (spec.md
/// §5/§7).
pub fn concurrent_find<S: Store>(
    program: &MatcherProgram,
    archive: &S,
    file_match_limit: usize,
    pattern_matches_content: bool,
    pattern_matches_paths: bool,
    deadline: Option<Duration>,
    limits: &Limits,
) -> Result<FindOutcome> {
    let pattern_matches_content = pattern_matches_content || !pattern_matches_paths;
    let file_match_limit = file_match_limit.clamp(1, limits.max_file_matches);

    let cancel = AtomicBool::new(false);
    let deadline_fired = AtomicBool::new(false);
    let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
    let files = archive.files();
    let regex_tag = program.regex().map(|re| re.as_str()).unwrap_or("");
    let concurrent_find_timeout_ms = deadline.map(|d| d.as_millis() as u64).unwrap_or(0);

    let outcome = thread::scope(|scope| {
        // Moved in here (rather than dropped after `thread::scope` returns)
        // so it goes out of scope — closing the channel and waking the
        // deadline watcher below immediately — before `scope` joins that
        // watcher thread, instead of after.
        let stop_tx = stop_tx;

        if let Some(remaining) = deadline {
            let timeout = remaining.mul_f64(0.9);
            let stop_rx = stop_rx.clone();
            let cancel = &cancel;
            let deadline_fired = &deadline_fired;
            scope.spawn(move || {
                crossbeam_channel::select! {
                    recv(crossbeam_channel::after(timeout)) -> _ => {
                        cancel.store(true, Ordering::SeqCst);
                        deadline_fired.store(true, Ordering::SeqCst);
                    }
                    recv(stop_rx) -> _ => {}
                }
            });
        }

        // Path-only fast path: no file is ever handed to the File Scanner.
        if pattern_matches_paths && (!pattern_matches_content || program.regex().is_none()) {
            let mut file_matches = Vec::new();
            let mut limit_hit = false;
            for file in files {
                if cancel.load(Ordering::SeqCst) {
                    break;
                }
                let name = file.name();
                let path_ok = program.path_matcher().match_path(name);
                let content_ok = program
                    .regex()
                    .map(|re| re.is_match(name.as_bytes()))
                    .unwrap_or(true);
                if !(path_ok && content_ok) {
                    continue;
                }
                if file_matches.len() < file_match_limit {
                    file_matches.push(FileMatch::path_only(name));
                } else {
                    limit_hit = true;
                    break;
                }
            }
            tracing::info!(
                component = "concurrent_driver",
                regex = regex_tag,
                path_pattern = %program.path_matcher(),
                files_matched = file_matches.len(),
                concurrent_find_timeout = concurrent_find_timeout_ms,
                "concurrent_find finished (path-only fast path)"
            );
            return FindOutcome { file_matches, limit_hit };
        }

        let queue: Mutex<VecDeque<usize>> = Mutex::new((0..files.len()).collect());
        let results: Mutex<Vec<FileMatch>> = Mutex::new(Vec::new());
        let limit_hit = AtomicBool::new(false);
        let files_skipped = AtomicUsize::new(0);
        let files_searched = AtomicUsize::new(0);

        for _ in 0..limits.num_workers {
            let cancel = &cancel;
            let limit_hit = &limit_hit;
            let files_skipped = &files_skipped;
            let files_searched = &files_searched;
            let queue = &queue;
            let results = &results;
            let mut worker_program = program.copy();
            worker_program.reserve_scratch(archive.max_file_len());

            scope.spawn(move || loop {
                if cancel.load(Ordering::SeqCst) {
                    return;
                }
                let idx = lock_or_recover(queue).pop_front();
                let Some(idx) = idx else {
                    return;
                };
                let file = &files[idx];

                if !worker_program.path_matcher().match_path(file.name()) {
                    files_skipped.fetch_add(1, Ordering::Relaxed);
                    continue;
                }
                files_searched.fetch_add(1, Ordering::Relaxed);

                let (line_matches, scanner_limit_hit) = scan_file(&mut worker_program, file, limits);

                let path_matched = pattern_matches_paths
                    && worker_program
                        .regex()
                        .map(|re| re.is_match(file.name().as_bytes()))
                        .unwrap_or(false);
                let matched =
                    !line_matches.is_empty() || path_matched || worker_program.regex().is_none();
                if !matched {
                    continue;
                }

                let mut locked = lock_or_recover(results);
                if locked.len() < file_match_limit {
                    locked.push(FileMatch {
                        path: file.name().to_string(),
                        line_matches,
                        limit_hit: scanner_limit_hit,
                    });
                } else {
                    limit_hit.store(true, Ordering::SeqCst);
                    cancel.store(true, Ordering::SeqCst);
                }
            });
        }

        tracing::info!(
            component = "concurrent_driver",
            regex = regex_tag,
            path_pattern = %program.path_matcher(),
            files_searched = files_searched.load(Ordering::Relaxed),
            files_skipped = files_skipped.load(Ordering::Relaxed),
            concurrent_find_timeout = concurrent_find_timeout_ms,
            "concurrent_find finished"
        );

        FindOutcome {
            file_matches: results.into_inner().unwrap_or_else(|p| p.into_inner()),
            limit_hit: limit_hit.load(Ordering::SeqCst),
        }
    });

    if deadline_fired.load(Ordering::SeqCst) {
        tracing::warn!(
            component = "concurrent_driver",
            regex = regex_tag,
            error = true,
            concurrent_find_timeout = concurrent_find_timeout_ms,
            "concurrent_find deadline exceeded"
        );
        return Err(Error::Deadline { partial: outcome });
    }
    Ok(outcome)
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
