//! Planet catalogue indexed by normalised name.
//!
//! The catalogue is built once and never mutated afterwards, so it can be
//! shared by reference (including across threads) without locking. Lookups
//! normalise the requested name, which makes them case and spacing
//! insensitive.

mod loader;

use std::collections::HashMap;

use tracing::warn;

use crate::backend::errors::{PlanetError, PlanetResult};
use crate::backend::fuzzy_match::FuzzyMatcher;
use crate::backend::models::Planet;
use crate::text::normalise;

/// Number of "Did you mean" names offered unless configured otherwise.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Read-only collection of validated planets.
#[derive(Debug, Clone)]
pub struct Catalogue {
    by_key: HashMap<String, Planet>,
    /// Display names in ascending order
    sorted_names: Vec<String>,
    matcher: FuzzyMatcher,
}

impl Catalogue {
    /// Index planets by normalised name.
    ///
    /// When two planets normalise to the same key the later one replaces the
    /// earlier one and a warning is logged.
    pub fn new(planets: Vec<Planet>) -> Self {
        let mut by_key: HashMap<String, Planet> = HashMap::with_capacity(planets.len());
        for planet in planets {
            let key = normalise(planet.name());
            if let Some(previous) = by_key.insert(key.clone(), planet) {
                warn!(
                    key = %key,
                    replaced = previous.name(),
                    "duplicate planet name in catalogue; keeping the later entry"
                );
            }
        }

        let mut sorted_names: Vec<String> = by_key.values().map(|p| p.name().to_string()).collect();
        sorted_names.sort();

        let matcher = FuzzyMatcher::from_terms(by_key.keys());

        Self {
            by_key,
            sorted_names,
            matcher,
        }
    }

    /// Check whether a planet exists by name.
    pub fn exists(&self, name: &str) -> bool {
        self.by_key.contains_key(&normalise(name))
    }

    /// Fetch a planet by name.
    ///
    /// # Errors
    /// `NotFound` carrying `name` exactly as given.
    pub fn get(&self, name: &str) -> PlanetResult<&Planet> {
        self.by_key
            .get(&normalise(name))
            .ok_or_else(|| PlanetError::NotFound {
                name: name.to_string(),
            })
    }

    /// All display names, sorted ascending.
    pub fn all_names(&self) -> Vec<String> {
        self.sorted_names.clone()
    }

    /// Display names sorted ascending, without copying.
    pub fn names(&self) -> &[String] {
        &self.sorted_names
    }

    /// Up to `limit` display names close to `name`, best match first.
    ///
    /// Empty when nothing reaches the similarity cutoff.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<String> {
        self.matcher
            .suggest(&normalise(name), limit)
            .into_iter()
            .filter_map(|(key, _)| self.by_key.get(&key).map(|p| p.name().to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
