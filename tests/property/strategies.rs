//! Input generators shared by the property suites.
//!
//! Words come from a small vocabulary so that random queries hit the index
//! often enough to exercise intersections and exclusions.

use lexis::Record;
use proptest::prelude::*;

pub const VOCABULARY: &[&str] = &[
    "fish", "Fish", "red", "RED", "blue", "eggs", "milk", "one", "two", "i'm", "café", "naïve",
];

/// A vocabulary word, possibly wrapped in edge punctuation.
pub fn word_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(VOCABULARY),
        prop::string::string_regex("[!,.~\"(]{0,2}").unwrap(),
        prop::string::string_regex("[!,.?\")]{0,2}").unwrap(),
    )
        .prop_map(|(word, pre, post)| format!("{}{}{}", pre, word, post))
}

/// Noise that never survives cleaning.
pub fn noise_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9!@#~.,]{1,4}").unwrap()
}

/// Body text: words and noise separated by mixed whitespace.
pub fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop_oneof![4 => word_strategy(), 1 => noise_strategy()],
            prop::sample::select(vec![" ", "  ", "\t", " \t "]),
        ),
        0..8,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(chunk, sep)| format!("{}{}", chunk, sep))
            .collect()
    })
}

/// A corpus with distinct identifiers.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(body_strategy(), 0..6).prop_map(|bodies| {
        bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| Record::new(format!("page{}.example.com", i), body))
            .collect()
    })
}

/// One query term: vocabulary or an unknown word, optionally prefixed.
pub fn query_term_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "", "+", "-"]),
        prop_oneof![5 => word_strategy(), 1 => Just("unicorn".to_string())],
    )
        .prop_map(|(prefix, word)| format!("{}{}", prefix, word))
}

/// A whole query line.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(query_term_strategy(), 0..5).prop_map(|terms| terms.join(" "))
}

/// Printable ASCII plus Latin-1 letters.
pub fn raw_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~À-ÿ]{0,16}").unwrap()
}
