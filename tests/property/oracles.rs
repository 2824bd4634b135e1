//! Reference oracles for differential testing.
//!
//! Each oracle answers from the raw records without an index. They are slow
//! and obviously correct; when the index disagrees with them, the oracle wins.

use lexis::{clean_token, Record, ResultSet};

/// Does `body` contain `term` as one of its cleaned whitespace chunks?
///
/// Linear scan over the body, no set building.
pub fn oracle_contains(body: &str, term: &str) -> bool {
    body.split_whitespace()
        .any(|chunk| clean_token(chunk).as_deref() == Some(term))
}

/// Identifiers of records whose body contains `term`.
pub fn oracle_pages_with(records: &[Record], term: &str) -> ResultSet {
    records
        .iter()
        .filter(|r| oracle_contains(&r.body, term))
        .map(|r| r.id.clone())
        .collect()
}

/// Answer a query by rescanning `records` for every term.
///
/// Reads the modifier off the first character, cleans the remainder and folds
/// the per-term page sets into the running result in query order.
pub fn oracle_query(records: &[Record], query: &str) -> ResultSet {
    let mut result = ResultSet::new();

    for raw in query.split_whitespace() {
        let (op, rest) = match raw.chars().next() {
            Some(c @ ('+' | '-')) => (c, &raw[1..]),
            _ => (' ', raw),
        };
        let term = clean_token(rest).unwrap_or_default();
        let pages = if term.is_empty() {
            ResultSet::new()
        } else {
            oracle_pages_with(records, &term)
        };

        result = match op {
            '+' => result.intersection(&pages).cloned().collect(),
            '-' => result.difference(&pages).cloned().collect(),
            _ => result.union(&pages).cloned().collect(),
        };
    }

    result
}

/// Every identifier in the corpus.
pub fn oracle_all_ids(records: &[Record]) -> ResultSet {
    records.iter().map(|r| r.id.clone()).collect()
}
