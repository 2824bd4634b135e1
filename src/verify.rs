// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index invariant checks and a wrapper type that carries them.
//!
//! The builder upholds these invariants by construction. This module checks
//! them anyway for indexes that arrive some other way (`FromIterator`,
//! deserialization) and for the `inspect` command.
//!
//! | Invariant        | Check                                    |
//! |------------------|------------------------------------------|
//! | `NON_EMPTY`      | every identifier set has a member         |
//! | `CANONICAL_KEYS` | every key is a fixed point of clean_token |
//!
//! # Example
//!
//! ```
//! use lexis::{build_index, Record, WellFormedIndex};
//!
//! let outcome = build_index(vec![Record::new("a.com", "Fish, fish!")]);
//! let index = WellFormedIndex::new(outcome.index).unwrap();
//! assert_eq!(index.term_count(), 1);
//! ```

use crate::tokenize::is_canonical_token;
use crate::types::InvertedIndex;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A token maps to no identifiers.
    EmptyIdentifierSet { token: String },
    /// A key is not in cleaned form (uppercase, edge punctuation, no letters).
    NonCanonicalToken { token: String },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyIdentifierSet { token } => {
                write!(f, "identifier set for '{}' is empty", token)
            }
            InvariantError::NonCanonicalToken { token } => {
                write!(f, "key '{}' is not a cleaned token", token)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

fn check_entry(token: &str, ids_len: usize) -> Result<(), InvariantError> {
    if ids_len == 0 {
        return Err(InvariantError::EmptyIdentifierSet {
            token: token.to_string(),
        });
    }
    if !is_canonical_token(token) {
        return Err(InvariantError::NonCanonicalToken {
            token: token.to_string(),
        });
    }
    Ok(())
}

/// Check all invariants, stopping at the first violation.
pub fn check_index(index: &InvertedIndex) -> Result<(), InvariantError> {
    for (token, ids) in index.iter() {
        check_entry(token, ids.len())?;
    }
    Ok(())
}

/// Summary of a full pass over the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub terms_checked: usize,
    pub postings_checked: usize,
    #[serde(serialize_with = "serialize_errors")]
    pub violations: Vec<InvariantError>,
}

impl VerificationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

fn serialize_errors<S>(errors: &[InvariantError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

/// Check every entry and collect all violations.
pub fn verify_all(index: &InvertedIndex) -> VerificationReport {
    let mut report = VerificationReport::default();

    for (token, ids) in index.iter() {
        report.terms_checked += 1;
        report.postings_checked += ids.len();
        if let Err(e) = check_entry(token, ids.len()) {
            report.violations.push(e);
        }
    }

    report
}

/// An index whose invariants were checked at construction.
#[derive(Debug, Clone)]
pub struct WellFormedIndex(InvertedIndex);

impl WellFormedIndex {
    pub fn new(index: InvertedIndex) -> Result<Self, InvariantError> {
        check_index(&index)?;
        Ok(Self(index))
    }

    pub fn into_inner(self) -> InvertedIndex {
        self.0
    }
}

impl Deref for WellFormedIndex {
    type Target = InvertedIndex;

    fn deref(&self) -> &InvertedIndex {
        &self.0
    }
}
