//! Inverted-index keyword search with left-to-right boolean queries.
//!
//! This crate builds a token → identifier-set index from a corpus of
//! (identifier, body) records and answers queries made of plain, `+` and `-`
//! terms against it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│   index.rs   │────▶│   query.rs   │
//! │ (Record     │     │ (build_index)│     │ (parse_query,│
//! │  stream)    │     │              │     │  evaluate)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    ▲
//!                            ▼                    │
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  verify.rs   │     │   shell.rs   │
//!                     │ (invariants) │     │ (REPL loop)  │
//!                     └──────────────┘     └──────────────┘
//!
//!             tokenize.rs (clean_token, gather_tokens) feeds both
//!             the builder and the query parser.
//! ```
//!
//! The index is immutable once built. Queries borrow it, so any number of
//! readers can share one index.
//!
//! # Usage
//!
//! ```
//! use lexis::{build_index, find_query_matches, parse_corpus};
//!
//! let corpus = "www.shoppinglist.com\nEGGS! milk, fish\nwww.dr.seuss.net\nOne fish two fish red fish\n";
//! let outcome = build_index(parse_corpus(corpus));
//! assert_eq!(outcome.pages_processed, 2);
//!
//! let hits = find_query_matches(&outcome.index, "fish -red");
//! assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec!["www.shoppinglist.com"]);
//! ```

// Module declarations
mod corpus;
mod error;
mod index;
mod query;
pub mod shell;
mod tokenize;
mod types;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use corpus::{open_corpus, parse_corpus, CorpusReader};
pub use error::CorpusError;
pub use index::{build_index, build_index_from_path};
pub use query::{evaluate, find_query_matches, parse_query};
pub use shell::{print_banner, print_matches, Shell};
pub use tokenize::{clean_token, gather_tokens, is_canonical_token};
pub use types::{BuildOutcome, InvertedIndex, Modifier, QueryTerm, Record, ResultSet};
pub use verify::{check_index, verify_all, InvariantError, VerificationReport, WellFormedIndex};
