// Backend module for the planet catalogue and question engine
//
// This module provides the pieces the console front end is built on:
// - `catalogue`: validated planets loaded from JSON, indexed by normalised name
// - `formatter`: fixed-layout answer strings
// - `query`: intent detection, name extraction and answer dispatch

pub mod catalogue;
pub mod errors;
pub mod formatter;
pub mod fuzzy_match;
pub mod models;
pub mod query;

pub use catalogue::{Catalogue, DEFAULT_SUGGESTION_LIMIT};
pub use errors::{PlanetError, PlanetResult};
pub use formatter::{
    format_membership_result, format_planet_details, format_planet_distance, format_planet_mass,
    format_planet_moon_count, format_planet_moon_list,
};
pub use fuzzy_match::FuzzyMatcher;
pub use models::Planet;
pub use query::{Intent, QueryEngine};
