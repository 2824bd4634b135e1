//! Token cleaning and extraction.
//!
//! A token is what survives after trimming punctuation off both ends of a
//! whitespace-delimited chunk and lowercasing it. Only the edges are trimmed:
//! `"!hel!lo?"` becomes `"hel!lo"`. A chunk with no letters left (`"123"`,
//! `"--"`) is not a token.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **LOWERCASE**: every returned token equals its own lowercase form
//! 2. **HAS_LETTER**: every returned token contains an alphabetic character
//! 3. **TRIMMED**: no returned token starts or ends with ASCII punctuation

use std::collections::BTreeSet;

/// Edge characters removed by [`clean_token`]: the ASCII punctuation class
/// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
#[inline]
fn is_edge_punct(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Clean a raw chunk into a token.
///
/// # Algorithm
///
/// 1. Trim ASCII punctuation from the start and the end
/// 2. Reject the remainder if it has no alphabetic character
/// 3. Lowercase what is left
///
/// Interior characters, punctuation and whitespace included, pass through
/// unchanged apart from case folding.
///
/// ```
/// use lexis::clean_token;
///
/// assert_eq!(clean_token("!Hello?").as_deref(), Some("hello"));
/// assert_eq!(clean_token("hel!lo").as_deref(), Some("hel!lo"));
/// assert_eq!(clean_token("123!?"), None);
/// ```
pub fn clean_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(is_edge_punct);

    // INVARIANT: HAS_LETTER
    if !trimmed.chars().any(char::is_alphabetic) {
        return None;
    }

    // INVARIANT: LOWERCASE, TRIMMED (lowercasing never yields ASCII punctuation)
    Some(trimmed.to_lowercase())
}

/// Split text on whitespace and collect the distinct tokens.
///
/// Runs of whitespace count as one separator and leading or trailing
/// whitespace produces nothing. Chunks that clean to nothing are skipped.
pub fn gather_tokens(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .filter_map(|chunk| clean_token(&chunk.to_lowercase()))
        .collect()
}

/// Whether `token` is already in the form [`clean_token`] produces.
pub fn is_canonical_token(token: &str) -> bool {
    clean_token(token).as_deref() == Some(token)
}
