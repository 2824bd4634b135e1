// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexis command-line interface.
//!
//! Three subcommands: `shell` builds an index and answers queries
//! interactively, `search` answers one query and exits, and `inspect` prints
//! index statistics together with an invariant check. `search` and `inspect`
//! can emit JSON for scripting.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use lexis::{CorpusError, InvariantError, QueryTerm};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "lexis",
    about = "Inverted-index keyword search with +/- boolean queries",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index and query it interactively
    Shell {
        /// Corpus file: identifier and body lines, alternating
        corpus: PathBuf,
    },

    /// Answer a single query and exit
    Search {
        /// Corpus file: identifier and body lines, alternating
        corpus: PathBuf,

        /// Query: plain terms union, +term intersects, -term excludes
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show index statistics and check index invariants
    Inspect {
        /// Corpus file: identifier and body lines, alternating
        corpus: PathBuf,

        /// Number of most frequent terms to list
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Log filter directive selected by `-v` flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Errors surfaced by the one-shot commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("index failed verification with {} violation(s); first: {}", .0.len(), .0[0])]
    Verification(Vec<InvariantError>),
}

/// JSON shape of `lexis search --json`.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub terms: Vec<QueryTerm>,
    pub count: usize,
    pub matches: Vec<&'a str>,
}

/// One row of the most-frequent-terms table.
#[derive(Debug, Serialize)]
pub struct TermFrequency<'a> {
    pub term: &'a str,
    pub pages: usize,
}

/// JSON shape of `lexis inspect --json`.
#[derive(Debug, Serialize)]
pub struct InspectReport<'a> {
    pub pages: usize,
    pub unique_terms: usize,
    pub postings: usize,
    pub top_terms: Vec<TermFrequency<'a>>,
    pub verification: &'a lexis::VerificationReport,
}
