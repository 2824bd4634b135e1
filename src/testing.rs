//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::corpus::parse_corpus;
use crate::index::build_index;
use crate::types::{InvertedIndex, Record};

/// Four-page corpus: a shopping list, a rainbow, Dr. Seuss and a wolf.
pub const TINY_CORPUS: &str = include_str!("../data/tiny.txt");

pub const SHOPPING: &str = "www.shoppinglist.com";
pub const RAINBOW: &str = "www.rainbow.org";
pub const SEUSS: &str = "www.dr.seuss.net";
pub const WOLF: &str = "www.bigbadwolf.com";

/// Create a record.
pub fn make_record(id: &str, body: &str) -> Record {
    Record::new(id, body)
}

/// Index built from [`TINY_CORPUS`].
pub fn tiny_index() -> InvertedIndex {
    build_index(parse_corpus(TINY_CORPUS)).index
}

/// The expected 20-term index of [`TINY_CORPUS`], written out by hand.
pub fn tiny_index_expected() -> InvertedIndex {
    [
        ("eggs", vec![SHOPPING]),
        ("milk", vec![SHOPPING]),
        ("fish", vec![SHOPPING, SEUSS]),
        ("bread", vec![SHOPPING]),
        ("cheese", vec![SHOPPING]),
        ("red", vec![RAINBOW, SEUSS]),
        ("green", vec![RAINBOW]),
        ("orange", vec![RAINBOW]),
        ("yellow", vec![RAINBOW]),
        ("blue", vec![RAINBOW, SEUSS]),
        ("indigo", vec![RAINBOW]),
        ("violet", vec![RAINBOW]),
        ("one", vec![SEUSS]),
        ("two", vec![SEUSS]),
        ("i'm", vec![WOLF]),
        ("not", vec![WOLF]),
        ("trying", vec![WOLF]),
        ("to", vec![WOLF]),
        ("eat", vec![WOLF]),
        ("you", vec![WOLF]),
    ]
    .into_iter()
    .collect()
}

/// Three-token index `{eggs→{S}, fish→{S,D}, red→{R,D}}`.
pub fn scenario_index() -> InvertedIndex {
    [
        ("eggs", vec![SHOPPING]),
        ("fish", vec![SHOPPING, SEUSS]),
        ("red", vec![RAINBOW, SEUSS]),
    ]
    .into_iter()
    .collect()
}
