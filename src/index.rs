//! Inverted index construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **PRODUCED_KEYS**: a token is a key only if some body tokenized to it
//! 2. **NON_EMPTY**: every token maps to at least one identifier
//! 3. **PAGE_COUNT**: `pages_processed` equals the number of complete records consumed

use crate::corpus::open_corpus;
use crate::tokenize::gather_tokens;
use crate::types::{BuildOutcome, InvertedIndex, Record};
use std::path::Path;

/// Build an inverted index from a stream of records.
///
/// Each body is tokenized with [`gather_tokens`] and the record's identifier is
/// added to the set of every token found. Duplicate identifiers merge into the
/// same entries.
pub fn build_index<I>(records: I) -> BuildOutcome
where
    I: IntoIterator<Item = Record>,
{
    let mut index = InvertedIndex::new();
    let mut pages_processed = 0;

    for record in records {
        let tokens = gather_tokens(&record.body);
        tracing::trace!(id = %record.id, tokens = tokens.len(), "indexing record");

        // INVARIANT: PRODUCED_KEYS, NON_EMPTY - keys come from the body, each with this id
        for token in tokens {
            index.insert(token, &record.id);
        }

        // INVARIANT: PAGE_COUNT
        pages_processed += 1;
    }

    tracing::debug!(
        pages = pages_processed,
        terms = index.term_count(),
        "index built"
    );

    BuildOutcome {
        index,
        pages_processed,
    }
}

/// Build an inverted index from a corpus file.
///
/// An unreadable file is not an error here: the outcome has zero pages and an
/// empty index, and the caller decides how to report it. A read failure part
/// way through keeps the records indexed before it.
pub fn build_index_from_path(path: impl AsRef<Path>) -> BuildOutcome {
    let path = path.as_ref();

    let mut reader = match open_corpus(path) {
        Ok(reader) => reader,
        Err(e) => {
            tracing::warn!(error = %e, "corpus unavailable, using empty index");
            return BuildOutcome::default();
        }
    };

    let outcome = build_index(reader.by_ref());
    if let Some(e) = reader.take_error() {
        tracing::warn!(
            path = %path.display(),
            error = %e,
            pages = outcome.pages_processed,
            "corpus truncated by read error"
        );
    }

    tracing::info!(
        path = %path.display(),
        pages = outcome.pages_processed,
        terms = outcome.unique_terms(),
        "indexed corpus"
    );
    outcome
}
