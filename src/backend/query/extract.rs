//! Locating planet names and fallback candidates in question text.

use crate::backend::catalogue::Catalogue;
use crate::text::{normalise, padded};

/// Words that only shape the question and never name a planet.
///
/// Skipped when picking a candidate token, so "is pluto in the list of
/// planets" yields `pluto` rather than `planets`.
const FILLER_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "in", "of", "on", "to", "about", "does", "do", "have",
    "has", "it", "me", "list", "planet", "planets",
];

/// First catalogue name appearing as a whole token sequence in `cleaned`.
///
/// Names are tried in sorted display order. Both sides are padded with a
/// space so "mars" matches "... mars ..." but not "marsupial".
pub fn extract_planet_name<'c>(cleaned: &str, catalogue: &'c Catalogue) -> Option<&'c str> {
    let haystack = padded(cleaned);
    catalogue
        .names()
        .iter()
        .find(|name| haystack.contains(&padded(&normalise(name))))
        .map(String::as_str)
}

/// Last purely alphabetic, non-filler token of `cleaned`.
///
/// Tokens containing digits or punctuation ("mars?", "x1") are skipped.
pub fn candidate_token(cleaned: &str) -> Option<&str> {
    cleaned
        .split(' ')
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
        .filter(|token| !FILLER_WORDS.contains(token))
        .last()
}
