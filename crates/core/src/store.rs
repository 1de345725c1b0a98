// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A simple in-memory [`Store`] implementation for callers who already hold
//! file bytes in memory (e.g. after unzipping an uploaded archive) and for
//! this crate's own tests.

use std::io::Read;

use crate::error::{Error, Result};
use crate::model::{ArchiveFile, Store};

/// Reads all of `reader` into a buffer capped at `limit` bytes. Returns
/// [`Error::ReaderTooLarge`] if `reader` has not reached EOF once the
/// buffer is full, rather than silently truncating (spec.md §7) — intended
/// for a disk- or network-backed [`Store`] loading one file's bytes at a
/// time, where an unexpectedly huge file should fail loudly instead of
/// being read in full into memory.
pub fn read_bounded<R: Read>(mut reader: R, limit: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; limit];
    let mut len = 0;
    while len < buf.len() {
        let n = reader.read(&mut buf[len..]).map_err(Error::Io)?;
        if n == 0 {
            buf.truncate(len);
            return Ok(buf);
        }
        len += n;
    }
    let mut probe = [0u8; 1];
    if reader.read(&mut probe).map_err(Error::Io)? == 0 {
        Ok(buf)
    } else {
        Err(Error::ReaderTooLarge { limit })
    }
}

/// One file held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl ArchiveFile for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// An archive whose files are already resident in memory.
#[derive(Debug, Default)]
pub struct MemoryArchive {
    files: Vec<MemoryFile>,
    max_file_len: usize,
}

impl MemoryArchive {
    /// Build an archive from `(name, contents)` pairs.
    pub fn from_files<I, N, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, B)>,
        N: Into<String>,
        B: Into<Vec<u8>>,
    {
        let files: Vec<MemoryFile> = entries
            .into_iter()
            .map(|(name, bytes)| MemoryFile::new(name, bytes))
            .collect();
        let max_file_len = files.iter().map(|f| f.bytes.len()).max().unwrap_or(0);
        Self { files, max_file_len }
    }
}

impl Store for MemoryArchive {
    type File = MemoryFile;

    fn files(&self) -> &[MemoryFile] {
        &self.files
    }

    fn max_file_len(&self) -> usize {
        self.max_file_len
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
