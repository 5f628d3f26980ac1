//! Intent classification by ordered keyword rules.
//!
//! Rules are checked top to bottom and the first match wins, so a question
//! like "how many moons and what mass" is a moon count, never a mass query.

/// What a question is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Details,
    Mass,
    Distance,
    MoonCount,
    MoonList,
    Membership,
    Unknown,
}

impl Intent {
    /// Stable lower-case label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Details => "details",
            Intent::Mass => "mass",
            Intent::Distance => "distance",
            Intent::MoonCount => "moon_count",
            Intent::MoonList => "moon_list",
            Intent::Membership => "membership",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One classification rule: a predicate over normalised question text.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub matches: fn(&str) -> bool,
}

/// Classification rules in priority order.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::MoonCount,
        matches: asks_moon_count,
    },
    IntentRule {
        intent: Intent::MoonList,
        matches: asks_moon_list,
    },
    IntentRule {
        intent: Intent::Mass,
        matches: asks_mass,
    },
    IntentRule {
        intent: Intent::Distance,
        matches: asks_distance,
    },
    IntentRule {
        intent: Intent::Details,
        matches: asks_details,
    },
    IntentRule {
        intent: Intent::Membership,
        matches: asks_membership,
    },
];

/// Classify normalised question text. Falls back to [`Intent::Unknown`].
pub fn detect_intent(cleaned: &str) -> Intent {
    INTENT_RULES
        .iter()
        .find(|rule| (rule.matches)(cleaned))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unknown)
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Substring match, so "moonlight" counts too.
fn mentions_moons(text: &str) -> bool {
    contains_any(text, &["moon", "moons"])
}

fn asks_moon_count(text: &str) -> bool {
    contains_any(text, &["how many", "number of"]) && mentions_moons(text)
}

fn asks_moon_list(text: &str) -> bool {
    mentions_moons(text) && contains_any(text, &["list", "what are", "which", "name"])
}

fn asks_mass(text: &str) -> bool {
    contains_any(text, &["mass", "massive", "weigh", "weight"])
}

fn asks_distance(text: &str) -> bool {
    contains_any(text, &["distance", "far", "from the sun"])
}

fn asks_details(text: &str) -> bool {
    contains_any(text, &["everything", "tell me", "all about", "details"])
}

fn asks_membership(text: &str) -> bool {
    text.contains("is ") && contains_any(text, &["in the list", "a planet", "planet"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let order: Vec<Intent> = INTENT_RULES.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::MoonCount,
                Intent::MoonList,
                Intent::Mass,
                Intent::Distance,
                Intent::Details,
                Intent::Membership,
            ]
        );
    }

    #[test]
    fn test_moon_count_rule() {
        assert!(asks_moon_count("how many moons does earth have"));
        assert!(asks_moon_count("number of moons of mars"));
        assert!(!asks_moon_count("how many planets are there"));
        assert!(!asks_moon_count("moons of mars"));
    }

    #[test]
    fn test_moon_list_rule() {
        assert!(asks_moon_list("list the moons of mars"));
        assert!(asks_moon_list("what are the moons of saturn"));
        assert!(asks_moon_list("which moons orbit jupiter"));
        assert!(asks_moon_list("name the moon of earth"));
        assert!(!asks_moon_list("list the planets"));
    }

    #[test]
    fn test_mass_rule() {
        for q in ["mass of mars", "how massive is neptune", "how much does earth weigh", "weight of venus"] {
            assert!(asks_mass(q), "{}", q);
        }
        assert!(!asks_mass("how big is mars"));
    }

    #[test]
    fn test_distance_rule() {
        for q in ["distance of mars", "how far is saturn", "mars from the sun"] {
            assert!(asks_distance(q), "{}", q);
        }
    }

    #[test]
    fn test_details_rule() {
        for q in ["tell me everything about saturn", "all about mars", "details for earth"] {
            assert!(asks_details(q), "{}", q);
        }
    }

    #[test]
    fn test_membership_rule() {
        assert!(asks_membership("is pluto in the list of planets"));
        assert!(asks_membership("is pluto a planet"));
        assert!(!asks_membership("pluto planet"));
        assert!(!asks_membership("is pluto cold"));
    }

    #[test]
    fn test_first_match_wins() {
        // moon count beats mass even though "mass" appears
        assert_eq!(detect_intent("how many moons and what mass does mars have"), Intent::MoonCount);
        // moon list beats membership
        assert_eq!(detect_intent("which moons is the planet mars hiding"), Intent::MoonList);
        // mass beats distance
        assert_eq!(detect_intent("how far and how massive is mars"), Intent::Mass);
        // distance beats details; "far" matches inside "farther"
        assert_eq!(detect_intent("tell me how much farther neptune is"), Intent::Distance);
    }

    #[test]
    fn test_detect_intent_examples() {
        assert_eq!(detect_intent("tell me everything about saturn"), Intent::Details);
        assert_eq!(detect_intent("how massive is neptune"), Intent::Mass);
        assert_eq!(detect_intent("how many moons does earth have"), Intent::MoonCount);
        assert_eq!(detect_intent("list the moons of mars"), Intent::MoonList);
        assert_eq!(detect_intent("is pluto in the list of planets"), Intent::Membership);
        assert_eq!(detect_intent("hello there"), Intent::Unknown);
        assert_eq!(detect_intent(""), Intent::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Intent::MoonCount.to_string(), "moon_count");
        assert_eq!(Intent::Unknown.label(), "unknown");
    }
}
