// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for corpus I/O.
//!
//! Query evaluation has no error type: unknown terms and empty queries are
//! answered with empty sets. Only opening and reading the corpus can fail, and
//! even that is folded into an empty build by [`crate::build_index_from_path`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening or reading a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be opened.
    #[error("failed to open corpus {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed part-way through the corpus.
    #[error("failed to read corpus at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl CorpusError {
    /// Path of the corpus, when the error carries one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            CorpusError::Open { path, .. } => Some(path),
            CorpusError::Read { .. } => None,
        }
    }
}
