//! Close-match search and "Did you mean?" rendering.

use std::cmp::Ordering;

use difflib::sequencematcher::SequenceMatcher;
use itertools::Itertools;
use tracing::trace;

/// Minimum similarity for a term to count as a close match.
pub const DEFAULT_CUTOFF: f32 = 0.6;

/// Fuzzy matcher over a fixed set of terms.
///
/// Terms are split into characters once, up front, so each lookup only
/// indexes the query.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    terms: Vec<(String, Vec<char>)>,
}

impl FuzzyMatcher {
    /// Create a fuzzy matcher from an iterator of terms
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|s| (s.as_ref().to_string(), s.as_ref().chars().collect()))
                .collect(),
        }
    }

    /// Up to `limit` terms close to `query`, best first.
    ///
    /// Returns `(term, ratio)` pairs with ratio at least [`DEFAULT_CUTOFF`],
    /// ordered by descending ratio; equal ratios are ordered by descending
    /// term. Exact matches are included with ratio 1.0.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<(String, f32)> {
        if limit == 0 {
            return Vec::new();
        }

        // The query is the indexed side; each term is swapped in against it.
        let query_chars: Vec<char> = query.chars().collect();
        let no_chars: Vec<char> = Vec::new();
        let mut matcher = SequenceMatcher::new(&no_chars, &query_chars);

        let mut scored: Vec<(String, f32)> = Vec::new();
        for (term, term_chars) in &self.terms {
            matcher.set_first_seq(term_chars);
            let score = matcher.ratio();
            if score >= DEFAULT_CUTOFF {
                scored.push((term.clone(), score));
            }
        }

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.0.cmp(&a.0))
        });
        scored.truncate(limit);

        trace!(query, candidates = scored.len(), "fuzzy suggestions");
        scored
    }
}

/// `Did you mean: a, b, c?`, or `None` for an empty list.
pub fn format_did_you_mean<S: AsRef<str>>(suggestions: &[S]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }
    Some(format!(
        "Did you mean: {}?",
        suggestions.iter().map(|s| s.as_ref()).join(", ")
    ))
}
