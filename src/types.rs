// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared by the builder, the evaluator and the shell.
//!
//! The index is a sorted map from token to a sorted set of identifiers. Sorted
//! containers keep every listing (index dumps, result sets, inspect output)
//! reproducible without a separate sort step.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Answer to a query: matching identifiers in lexicographic order.
pub type ResultSet = BTreeSet<String>;

/// Shared empty set handed out for lookups that miss.
static EMPTY_IDS: BTreeSet<String> = BTreeSet::new();

/// One corpus entry: an identifier line followed by a body line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier, typically a URL.
    pub id: String,
    /// Free text, a single line.
    pub body: String,
}

impl Record {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }
}

/// Inverted index: token → identifiers whose body contains the token.
///
/// # Invariants
///
/// 1. **PRODUCED_KEYS**: every key was produced by tokenizing some body
/// 2. **NON_EMPTY**: no identifier set is empty
///
/// Both hold by construction because the only mutator is [`InvertedIndex::insert`],
/// which always adds an identifier. See `verify.rs` for the runtime check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    terms: BTreeMap<String, BTreeSet<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` contains `token`.
    pub fn insert(&mut self, token: String, id: &str) {
        // INVARIANT: NON_EMPTY - a key is only ever created together with an id
        self.terms.entry(token).or_default().insert(id.to_string());
    }

    /// Non-mutating lookup. Misses return an empty set and never create a key.
    pub fn get_or_empty(&self, token: &str) -> &BTreeSet<String> {
        self.terms.get(token).unwrap_or(&EMPTY_IDS)
    }

    /// Lookup that distinguishes a miss from a hit.
    pub fn get(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.terms.get(token)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.terms.contains_key(token)
    }

    /// Number of unique tokens.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Sum of identifier-set sizes over all tokens.
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Tokens with their identifier sets, in lexicographic token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.terms.iter().map(|(t, ids)| (t.as_str(), ids))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }
}

impl<T, I> FromIterator<(T, I)> for InvertedIndex
where
    T: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    /// Build an index directly from token/identifier pairs.
    ///
    /// Tokens with no identifiers are dropped so NON_EMPTY still holds.
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut terms: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (token, ids) in iter {
            let ids: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
            if !ids.is_empty() {
                terms.entry(token.into()).or_default().extend(ids);
            }
        }
        Self { terms }
    }
}

/// Per-term query operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// No prefix: `results ∪ ids`.
    #[default]
    Union,
    /// `+` prefix: `results ∩ ids`.
    Require,
    /// `-` prefix: `results \ ids`.
    Exclude,
}

impl Modifier {
    /// Modifier selected by a leading character, if it is one.
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            '+' => Some(Modifier::Require),
            '-' => Some(Modifier::Exclude),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Modifier::Union => "",
            Modifier::Require => "+",
            Modifier::Exclude => "-",
        }
    }
}

/// One parsed query instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTerm {
    pub modifier: Modifier,
    /// Cleaned term text. Empty when the raw term had no letters; it then
    /// matches nothing.
    pub text: String,
}

impl QueryTerm {
    pub fn new(modifier: Modifier, text: impl Into<String>) -> Self {
        Self {
            modifier,
            text: text.into(),
        }
    }
}

/// Result of one build pass over a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutcome {
    pub index: InvertedIndex,
    /// Complete records consumed. Zero when the source could not be read.
    pub pages_processed: usize,
}

impl BuildOutcome {
    pub fn unique_terms(&self) -> usize {
        self.index.term_count()
    }
}
