//! Answering free-text questions.

use itertools::Itertools;
use tracing::{debug, warn};

use super::extract::{candidate_token, extract_planet_name};
use super::intent::{detect_intent, Intent};
use crate::backend::catalogue::{Catalogue, DEFAULT_SUGGESTION_LIMIT};
use crate::backend::formatter::{
    format_membership_result, format_planet_details, format_planet_distance, format_planet_mass,
    format_planet_moon_count, format_planet_moon_list,
};
use crate::backend::fuzzy_match::format_did_you_mean;
use crate::text::normalise;

pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";

pub const MISSING_NAME_MESSAGE: &str = "Please provide a name to check.";

pub const UNKNOWN_QUESTION_MESSAGE: &str = "I did not understand that question.\n\
Try examples like:\n\
- Tell me everything about Saturn\n\
- How massive is Neptune\n\
- How many moons does Earth have\n\
- Is Pluto in the list of planets";

/// Turns a question into a formatted answer using a catalogue.
///
/// The engine holds no per-question state: answering the same question
/// against the same catalogue always produces the same text. Free text never
/// produces an error; anything the engine cannot resolve degrades to a help
/// or suggestion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryEngine {
    suggestion_limit: usize,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryEngine {
    pub fn new() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Cap the number of "Did you mean" names in fallback answers.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Answer a raw question.
    pub fn answer(&self, question: &str, catalogue: &Catalogue) -> String {
        let cleaned = normalise(question);
        if cleaned.is_empty() {
            return EMPTY_QUESTION_MESSAGE.to_string();
        }

        let intent = detect_intent(&cleaned);
        let planet_name = extract_planet_name(&cleaned, catalogue);
        debug!(intent = %intent, planet = ?planet_name, "answering question");

        if intent == Intent::Membership {
            return self.answer_membership(&cleaned, planet_name, catalogue);
        }

        let Some(planet_name) = planet_name else {
            return self.planet_not_found(&cleaned, catalogue);
        };

        let planet = match catalogue.get(planet_name) {
            Ok(planet) => planet,
            Err(e) => {
                warn!(error = %e, "extracted planet name missing from catalogue");
                return self.planet_not_found(&cleaned, catalogue);
            }
        };

        match intent {
            Intent::Details => format_planet_details(planet),
            Intent::Mass => format_planet_mass(planet),
            Intent::Distance => format_planet_distance(planet),
            Intent::MoonCount => format_planet_moon_count(planet),
            Intent::MoonList => format_planet_moon_list(planet),
            Intent::Membership | Intent::Unknown => UNKNOWN_QUESTION_MESSAGE.to_string(),
        }
    }

    /// "Is X a planet / in the list" questions.
    fn answer_membership(
        &self,
        cleaned: &str,
        planet_name: Option<&str>,
        catalogue: &Catalogue,
    ) -> String {
        // Extraction only returns names taken from the catalogue.
        if let Some(name) = planet_name {
            return format_membership_result(name, true);
        }

        let Some(candidate) = candidate_token(cleaned) else {
            return MISSING_NAME_MESSAGE.to_string();
        };

        if let Ok(planet) = catalogue.get(candidate) {
            return format_membership_result(planet.name(), true);
        }

        let answer = format_membership_result(candidate, false);
        match format_did_you_mean(&catalogue.suggest(candidate, self.suggestion_limit)) {
            Some(hint) => format!("{} {}", answer, hint),
            None => answer,
        }
    }

    /// Fallback when no catalogue name appears in the question.
    fn planet_not_found(&self, cleaned: &str, catalogue: &Catalogue) -> String {
        let suggestions = self.suggest_from_text(cleaned, catalogue);
        match format_did_you_mean(&suggestions) {
            Some(hint) => format!("Planet not found. {}", hint),
            None => format!(
                "Planet not found. Try one of: {}",
                catalogue.names().iter().join(", ")
            ),
        }
    }

    fn suggest_from_text(&self, cleaned: &str, catalogue: &Catalogue) -> Vec<String> {
        candidate_token(cleaned)
            .map(|token| catalogue.suggest(token, self.suggestion_limit))
            .unwrap_or_default()
    }
}
