// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query evaluation.
//!
//! Throws arbitrary byte sequences at the evaluator over the four-page fixture
//! corpus. Queries must never panic and must only ever name indexed pages.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexis::testing::tiny_index;
use lexis::{evaluate, find_query_matches, parse_query, InvertedIndex, Modifier};
use std::collections::BTreeSet;

fuzz_target!(|query: &[u8]| {
    static INDEX: std::sync::OnceLock<InvertedIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(tiny_index);

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    let all_pages: BTreeSet<&str> = index
        .iter()
        .flat_map(|(_, ids)| ids.iter().map(String::as_str))
        .collect();

    // INVARIANT 1: never panics
    let results = find_query_matches(index, &query);

    // INVARIANT 2: results are a subset of indexed pages
    for id in &results {
        assert!(all_pages.contains(id.as_str()), "unknown page {}", id);
    }

    // INVARIANT 3: parse + evaluate agrees with the one-shot call
    let terms = parse_query(&query);
    assert_eq!(evaluate(index, &terms), results);

    // INVARIANT 4: no plain term means nothing is ever added
    if terms.iter().all(|t| t.modifier != Modifier::Union) {
        assert!(results.is_empty(), "{:?} matched without a plain term", query);
    }

    // INVARIANT 5: lookups leave the index untouched
    assert_eq!(index.term_count(), 20);
});
