//! Differential testing: compare the index against oracles.
//!
//! Each indexed answer is checked against a scan of the raw records. If they
//! disagree, the oracle is right.

use super::oracles::{oracle_all_ids, oracle_pages_with, oracle_query};
use super::strategies::{corpus_strategy, query_strategy, word_strategy};
use lexis::{build_index, clean_token, find_query_matches};
use proptest::prelude::*;

// =============================================================================
// LOOKUP: index vs record scan
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Differential test: a single-token lookup equals the pages containing it.
    #[test]
    fn diff_single_lookup(records in corpus_strategy(), word in word_strategy()) {
        let index = build_index(records.clone()).index;
        let term = clean_token(&word).unwrap_or_default();

        prop_assert_eq!(
            index.get_or_empty(&term).clone(),
            oracle_pages_with(&records, &term),
            "lookup of '{}' differs from oracle", term
        );
    }
}

// =============================================================================
// QUERIES: evaluator vs oracle fold
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: full query answers match the oracle.
    #[test]
    fn diff_query(records in corpus_strategy(), query in query_strategy()) {
        let index = build_index(records.clone()).index;

        prop_assert_eq!(
            find_query_matches(&index, &query),
            oracle_query(&records, &query),
            "query {:?} differs from oracle", query
        );
    }

    /// Differential test: a plain-term query over every vocabulary word that
    /// occurs returns every page with at least one token.
    #[test]
    fn diff_union_of_everything(records in corpus_strategy()) {
        let index = build_index(records.clone()).index;
        let query: Vec<&str> = index.tokens().collect();
        let query = query.join(" ");

        let with_tokens: lexis::ResultSet = records
            .iter()
            .filter(|r| !lexis::gather_tokens(&r.body).is_empty())
            .map(|r| r.id.clone())
            .collect();

        let answer = find_query_matches(&index, &query);
        prop_assert_eq!(&answer, &with_tokens);
        prop_assert!(answer.is_subset(&oracle_all_ids(&records)));
    }
}
