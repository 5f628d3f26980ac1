//! Loading the catalogue from a JSON data file.
//!
//! Loading is all-or-nothing: the first invalid entry fails the whole load
//! and no partial catalogue is returned.
//!
//! ```json
//! [
//!   { "name": "Mars", "mass_kg": 6.417e23, "distance_from_sun_km": 227900000,
//!     "moons": ["Phobos", "Deimos"] }
//! ]
//! ```

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::Catalogue;
use crate::backend::errors::{PlanetError, PlanetResult};
use crate::backend::models::Planet;

/// Name used in error messages for data that did not come from a file.
const INLINE_SOURCE: &str = "<inline data>";

impl Catalogue {
    /// Load and validate planet data from a JSON file.
    ///
    /// # Errors
    /// - `SourceUnavailable` if the file cannot be read
    /// - `Malformed` if the content is not JSON
    /// - `DataValidation` if the JSON is not a list of valid planet objects
    pub fn from_json_path(path: impl AsRef<Path>) -> PlanetResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PlanetError::SourceUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load and validate planet data from JSON text.
    pub fn from_json_str(content: &str) -> PlanetResult<Self> {
        Self::parse(content, INLINE_SOURCE)
    }

    /// Validate an already parsed JSON document.
    pub fn from_json_value(raw: &Value) -> PlanetResult<Self> {
        let entries = raw
            .as_array()
            .ok_or_else(|| PlanetError::invalid_data("Planet data must be a list of planet objects"))?;

        let planets = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| Planet::from_json_value(entry).map_err(|e| e.at_index(idx)))
            .collect::<PlanetResult<Vec<Planet>>>()?;

        debug!(count = planets.len(), "loaded planet records");
        Ok(Catalogue::new(planets))
    }

    fn parse(content: &str, source_name: &str) -> PlanetResult<Self> {
        let raw: Value = serde_json::from_str(content).map_err(|e| PlanetError::Malformed {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_value(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_PLANETS: &str = r#"[
        {"name": "Earth", "mass_kg": 5.972e24, "distance_from_sun_km": 149600000, "moons": ["Moon"]},
        {"name": "Saturn", "mass_kg": 5.683e26, "distance_from_sun_km": 1433500000, "moons": ["Titan"]}
    ]"#;

    #[test]
    fn test_from_json_str_valid() {
        let cat = Catalogue::from_json_str(TWO_PLANETS).unwrap();
        assert!(cat.exists("earth"));
        assert!(cat.exists("SATURN"));
        assert_eq!(cat.all_names().len(), 2);
    }

    #[test]
    fn test_from_json_path_valid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_PLANETS.as_bytes()).unwrap();

        let cat = Catalogue::from_json_path(file.path()).unwrap();
        assert_eq!(cat.len(), 2);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalogue::from_json_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PlanetError::SourceUnavailable { .. }));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_bad_json_is_malformed() {
        let err = Catalogue::from_json_str("[{\"name\": ").unwrap_err();
        assert!(matches!(err, PlanetError::Malformed { .. }));
    }

    #[test]
    fn test_top_level_not_list() {
        let err = Catalogue::from_json_str(r#"{"name": "Earth"}"#).unwrap_err();
        assert!(matches!(err, PlanetError::DataValidation { index: None, .. }));
    }

    #[test]
    fn test_entry_not_object_names_index() {
        let err = Catalogue::from_json_str(r#"[{"name": "Earth", "mass_kg": 1, "distance_from_sun_km": 1}, 5]"#)
            .unwrap_err();
        assert!(matches!(err, PlanetError::DataValidation { index: Some(1), .. }));
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_missing_required_field_names_entry_and_field() {
        let err = Catalogue::from_json_str(
            r#"[{"name": "Earth", "distance_from_sun_km": 149600000, "moons": ["Moon"]}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PlanetError::DataValidation {
                index: Some(0),
                field: Some("mass_kg"),
                ..
            }
        ));
    }

    #[test]
    fn test_one_bad_entry_fails_whole_load() {
        let err = Catalogue::from_json_str(
            r#"[
                {"name": "Earth", "mass_kg": 5.972e24, "distance_from_sun_km": 149600000},
                {"name": "Mars", "mass_kg": -1, "distance_from_sun_km": 227900000}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PlanetError::DataValidation {
                index: Some(1),
                field: Some("mass_kg"),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_list_loads_empty_catalogue() {
        let cat = Catalogue::from_json_str("[]").unwrap();
        assert!(cat.is_empty());
    }
}
