// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean keyword queries.
//!
//! A query is a flat list of whitespace-separated terms folded left to right
//! into a running result set. There is no precedence and no grouping.
//!
//! | Prefix | Modifier  | Fold step            |
//! |--------|-----------|----------------------|
//! | (none) | `Union`   | `results ∪ ids(t)`   |
//! | `+`    | `Require` | `results ∩ ids(t)`   |
//! | `-`    | `Exclude` | `results \ ids(t)`   |
//!
//! Modifiers belong to a single term. `fish +red blue` unions `blue` after
//! narrowing by `red`; the `+` does not carry over.
//!
//! Because the fold starts from the empty set, a leading `+term` or `-term`
//! operates on nothing and leaves the result empty. Later union terms can
//! still add to it:
//!
//! ```
//! use lexis::{find_query_matches, InvertedIndex};
//!
//! let index: InvertedIndex = [
//!     ("fish", vec!["seuss", "shopping"]),
//!     ("red", vec!["rainbow", "seuss"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let hits = find_query_matches(&index, "fish +red");
//! assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec!["seuss"]);
//!
//! assert!(find_query_matches(&index, "+red").is_empty());
//! assert_eq!(find_query_matches(&index, "-red fish").len(), 2);
//! ```

use crate::tokenize::clean_token;
use crate::types::{InvertedIndex, Modifier, QueryTerm, ResultSet};

/// Split a query into modifier/term instructions, in order.
///
/// The modifier character is removed before the term is cleaned, so `+Fish!`
/// becomes `(Require, "fish")`. A term with no letters keeps its modifier and
/// gets empty text; it matches nothing.
pub fn parse_query(query: &str) -> Vec<QueryTerm> {
    query.split_whitespace().map(parse_term).collect()
}

fn parse_term(raw: &str) -> QueryTerm {
    let mut chars = raw.chars();
    let (modifier, rest) = match chars.next().and_then(Modifier::from_prefix) {
        Some(modifier) => (modifier, chars.as_str()),
        None => (Modifier::Union, raw),
    };

    QueryTerm {
        modifier,
        text: clean_token(rest).unwrap_or_default(),
    }
}

/// Fold parsed terms against the index.
///
/// Lookups never touch the index: a missing token reads as an empty set.
pub fn evaluate(index: &InvertedIndex, terms: &[QueryTerm]) -> ResultSet {
    let mut results = ResultSet::new();

    for term in terms {
        // INVARIANT: READ_ONLY - a missing token reads as the shared empty set
        let ids = index.get_or_empty(&term.text);

        match term.modifier {
            Modifier::Union => {
                results.extend(ids.iter().cloned());
            }
            Modifier::Require => {
                results.retain(|id| ids.contains(id));
            }
            Modifier::Exclude => {
                results.retain(|id| !ids.contains(id));
            }
        }

        tracing::trace!(
            modifier = ?term.modifier,
            term = %term.text,
            hits = ids.len(),
            running = results.len(),
            "folded query term"
        );
    }

    results
}

/// Answer a query string against the index.
///
/// Always succeeds. Empty queries, unknown terms and terms that clean to
/// nothing all contribute empty sets.
pub fn find_query_matches(index: &InvertedIndex, query: &str) -> ResultSet {
    let terms = parse_query(query);
    let results = evaluate(index, &terms);
    tracing::debug!(query, terms = terms.len(), matches = results.len(), "query answered");
    results
}
