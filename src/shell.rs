// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive query loop.
//!
//! The shell borrows a finished index and answers one query per input line
//! until it reads an empty line or reaches end of input. Input and output are
//! generic so tests can drive it with byte buffers.
//!
//! ```text
//! Enter query sentence (press enter to quit): fish +red
//! Found 1 matching pages
//! www.dr.seuss.net
//!
//! Enter query sentence (press enter to quit):
//! Thank you for searching!
//! ```

use crate::corpus::decode_line;
use crate::query::find_query_matches;
use crate::types::{BuildOutcome, InvertedIndex, ResultSet};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Enter query sentence (press enter to quit): ";
pub const FAREWELL: &str = "Thank you for searching!";
pub const INVALID_CORPUS: &str = "Invalid filename.";
pub const STAND_BY: &str = "Stand by while building index...";

/// Write the post-build report shown before the first prompt.
///
/// A build that processed no pages is reported as an invalid filename, but the
/// report still follows so the user sees the (empty) index size.
pub fn print_banner<W: Write>(outcome: &BuildOutcome, out: &mut W) -> io::Result<()> {
    if outcome.pages_processed == 0 {
        writeln!(out, "{}", INVALID_CORPUS)?;
    }
    writeln!(out, "{}", STAND_BY)?;
    writeln!(
        out,
        "Indexed {} pages containing {} unique terms",
        outcome.pages_processed,
        outcome.unique_terms()
    )?;
    writeln!(out)
}

/// Write one query's answer: the count, each identifier, then a blank line.
pub fn print_matches<W: Write>(results: &ResultSet, out: &mut W) -> io::Result<()> {
    writeln!(out, "Found {} matching pages", results.len())?;
    for id in results {
        writeln!(out, "{}", id)?;
    }
    writeln!(out)
}

/// Read-eval-print loop over a borrowed index.
pub struct Shell<'a> {
    index: &'a InvertedIndex,
}

impl<'a> Shell<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Run until an empty line or end of input. Returns the number of queries
    /// answered.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> io::Result<usize> {
        let mut answered = 0;
        let mut line = Vec::new();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            let read = input.read_until(b'\n', &mut line)?;
            let query = decode_line(&line);

            if read == 0 || query.is_empty() {
                writeln!(out, "{}", FAREWELL)?;
                break;
            }

            let results = find_query_matches(self.index, &query);
            print_matches(&results, &mut out)?;
            answered += 1;
        }

        out.flush()?;
        tracing::debug!(answered, "shell finished");
        Ok(answered)
    }
}
