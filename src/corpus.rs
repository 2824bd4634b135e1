// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus reader for the line-pair format.
//!
//! A corpus is a plain text file read two lines at a time: an identifier line
//! (usually a URL) followed by a body line. Nothing else is interpreted.
//!
//! ```text
//! www.shoppinglist.com        <- identifier
//! EGGS! milk, fish, @  bread  <- body
//! www.rainbow.org             <- identifier
//! red ~green~ orange ...      <- body
//! ```
//!
//! A trailing identifier with no body is dropped. Bytes that are not UTF-8 are
//! replaced, never rejected. An I/O error ends the stream early; the records already yielded stand and the error is kept for the
//! caller to inspect via [`CorpusReader::take_error`].

use crate::error::CorpusError;
use crate::types::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Streams [`Record`]s out of a line-pair corpus.
///
/// Lines are read as raw bytes. Invalid UTF-8 is replaced with U+FFFD rather
/// than ending the stream, so only genuine I/O failures stop it.
pub struct CorpusReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    error: Option<CorpusError>,
    finished: bool,
}

impl<R: BufRead> CorpusReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
            error: None,
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// The read error that ended the stream, if any.
    pub fn take_error(&mut self) -> Option<CorpusError> {
        self.error.take()
    }

    fn next_line(&mut self) -> Option<String> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                Some(decode_line(&self.buf))
            }
            Err(source) => {
                let line = self.line_no + 1;
                tracing::warn!(line, error = %source, "corpus read failed, stopping");
                self.error = Some(CorpusError::Read { line, source });
                self.finished = true;
                None
            }
        }
    }
}

/// Strip one trailing `\n` (and a `\r` before it) and decode lossily.
pub(crate) fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

impl<R: BufRead> Iterator for CorpusReader<R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.finished {
            return None;
        }

        let Some(id) = self.next_line() else {
            self.finished = true;
            return None;
        };

        let Some(body) = self.next_line() else {
            if self.error.is_none() {
                tracing::debug!(id = %id, "discarding trailing identifier without body");
            }
            self.finished = true;
            return None;
        };

        Some(Record { id, body })
    }
}

/// Open a corpus file for streaming.
pub fn open_corpus(path: impl AsRef<Path>) -> Result<CorpusReader<BufReader<File>>, CorpusError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorpusError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CorpusReader::new(BufReader::new(file)))
}

/// Read every record of an in-memory corpus.
pub fn parse_corpus(text: &str) -> Vec<Record> {
    CorpusReader::new(text.as_bytes()).collect()
}
