//! Fuzzy string matching for "Did you mean?" suggestions.
//!
//! Scores candidates with the gestalt similarity ratio from `difflib`
//! (longest common block, applied recursively) rather than a raw edit
//! distance, so the score is normalised by length and a single cutoff works
//! for short and long names.

mod suggestions;


pub use suggestions::{format_did_you_mean, FuzzyMatcher, DEFAULT_CUTOFF};
