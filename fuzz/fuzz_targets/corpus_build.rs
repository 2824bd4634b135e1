// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus parsing and index construction.
//!
//! Arbitrary bytes are read as a line-pair corpus. Whatever comes out must be a
//! well-formed index whose page count matches the whole pairs in the input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexis::{build_index, check_index, parse_corpus};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let records = parse_corpus(&text);
    let pairs = text.lines().count() / 2;

    // INVARIANT 1: one record per whole line pair
    assert_eq!(records.len(), pairs);

    let outcome = build_index(records.iter().cloned());

    // INVARIANT 2: every record counts as a page
    assert_eq!(outcome.pages_processed, records.len());

    // INVARIANT 3: the index is well-formed
    if let Err(e) = check_index(&outcome.index) {
        panic!("built index failed verification: {}", e);
    }

    // INVARIANT 4: postings only name records from the input
    for (_, ids) in outcome.index.iter() {
        for id in ids {
            assert!(records.iter().any(|r| &r.id == id), "unknown page {}", id);
        }
    }
});
