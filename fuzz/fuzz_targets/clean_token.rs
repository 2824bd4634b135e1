// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for token cleaning.
//!
//! Any string either cleans to a canonical token or to nothing. Canonical
//! tokens are fixed points of the cleaner.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexis::{clean_token, gather_tokens, is_canonical_token};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);

    if let Some(token) = clean_token(&raw) {
        // INVARIANT 1: a cleaned token has at least one letter
        assert!(token.chars().any(char::is_alphabetic), "no letter in {:?}", token);

        // INVARIANT 2: cleaning is idempotent
        assert_eq!(clean_token(&token).as_deref(), Some(token.as_str()));
        assert!(is_canonical_token(&token));
    }

    // INVARIANT 3: gathered tokens are non-empty and canonical
    for token in gather_tokens(&raw) {
        assert!(!token.is_empty());
        assert!(is_canonical_token(&token), "non-canonical {:?} from {:?}", token, raw);
    }
});
