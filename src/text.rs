//! Text normalisation shared by catalogue keys and question text.

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static whitespace pattern is valid"))
}

/// Normalise a name or question for matching.
///
/// Lower-cases, trims both ends and collapses every internal whitespace run
/// to a single space: `"  saTUrN \t Rings "` becomes `"saturn rings"`.
pub fn normalise(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    whitespace_run().replace_all(&lowered, " ").into_owned()
}

/// Pad text with one space on each side for whole-token containment checks.
pub fn padded(text: &str) -> String {
    format!(" {} ", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_lowercases_and_trims() {
        assert_eq!(normalise("  SaTuRn  "), "saturn");
    }

    #[test]
    fn test_normalise_collapses_internal_whitespace() {
        assert_eq!(normalise("how   many\tmoons\n does  Mars have"), "how many moons does mars have");
    }

    #[test]
    fn test_normalise_empty_and_blank() {
        assert_eq!(normalise(""), "");
        assert_eq!(normalise(" \t\n "), "");
    }

    #[test]
    fn test_normalise_is_idempotent() {
        let once = normalise("  Is PLUTO   a planet ");
        assert_eq!(normalise(&once), once);
    }

    #[test]
    fn test_padded() {
        assert_eq!(padded("mars"), " mars ");
    }
}
