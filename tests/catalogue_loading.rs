//! Integration tests for loading the planet catalogue from JSON files.
//!
//! These tests verify:
//! - The shipped data file loads and is complete
//! - Missing files, bad JSON and invalid entries fail with distinct errors
//! - Lookups and suggestions behave the same on loaded data

mod common;

use common::{shipped_catalogue, write_temp_json};
use orrery::backend::{Catalogue, PlanetError};

// ============================================================
// Shipped data
// ============================================================

#[test]
fn test_shipped_data_loads_all_planets() {
    let catalogue = shipped_catalogue();
    assert_eq!(
        catalogue.all_names(),
        vec!["Earth", "Jupiter", "Mars", "Mercury", "Neptune", "Saturn", "Uranus", "Venus"]
    );
}

#[test]
fn test_shipped_data_names_sorted() {
    let names = shipped_catalogue().all_names();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_shipped_data_lookup_insensitive() {
    let catalogue = shipped_catalogue();
    let expected = catalogue.exists("saturn");
    assert!(expected);
    for variant in ["SATURN", "Saturn", "  Saturn ", "sAtUrN"] {
        assert_eq!(catalogue.exists(variant), expected, "{}", variant);
    }
    assert_eq!(catalogue.get("JUPITER").unwrap().moon_count(), 4);
}

#[test]
fn test_shipped_data_suggests_typo() {
    let suggestions = shipped_catalogue().suggest("saturnn", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("Saturn"));
}

// ============================================================
// Failure modes
// ============================================================

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalogue::from_json_path(dir.path().join("planets.json")).unwrap_err();
    assert!(matches!(err, PlanetError::SourceUnavailable { .. }));
    assert!(err.to_string().contains("planets.json"));
}

#[test]
fn test_malformed_json() {
    let file = write_temp_json("[{\"name\": \"Earth\",]");
    let err = Catalogue::from_json_path(file.path()).unwrap_err();
    assert!(matches!(err, PlanetError::Malformed { .. }));
    assert!(err.is_load_failure());
}

#[test]
fn test_missing_required_field_identifies_entry() {
    let file = write_temp_json(
        r#"[
            {"name": "Earth", "mass_kg": 5.972e24, "distance_from_sun_km": 149600000},
            {"name": "Mars", "mass_kg": 6.417e23}
        ]"#,
    );
    let err = Catalogue::from_json_path(file.path()).unwrap_err();
    match &err {
        PlanetError::DataValidation { index, field, .. } => {
            assert_eq!(*index, Some(1));
            assert_eq!(*field, Some("distance_from_sun_km"));
        }
        other => panic!("expected DataValidation, got {:?}", other),
    }
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn test_invalid_values_rejected() {
    for entry in [
        r#"{"name": "", "mass_kg": 1, "distance_from_sun_km": 1}"#,
        r#"{"name": "X", "mass_kg": 0, "distance_from_sun_km": 1}"#,
        r#"{"name": "X", "mass_kg": 1, "distance_from_sun_km": -5}"#,
        r#"{"name": "X", "mass_kg": 1, "distance_from_sun_km": 1, "moons": "Moon"}"#,
        r#"{"name": "X", "mass_kg": 1, "distance_from_sun_km": 1, "moons": ["  "]}"#,
    ] {
        let err = Catalogue::from_json_str(&format!("[{}]", entry)).unwrap_err();
        assert!(
            matches!(err, PlanetError::DataValidation { index: Some(0), .. }),
            "{} -> {:?}",
            entry,
            err
        );
    }
}

#[test]
fn test_not_a_list() {
    let err = Catalogue::from_json_str("{\"planets\": []}").unwrap_err();
    assert!(matches!(err, PlanetError::DataValidation { index: None, .. }));
}

#[test]
fn test_duplicate_normalised_names_keep_last() {
    let catalogue = Catalogue::from_json_str(
        r#"[
            {"name": "Mars", "mass_kg": 1, "distance_from_sun_km": 1},
            {"name": "  MARS", "mass_kg": 2, "distance_from_sun_km": 2}
        ]"#,
    )
    .unwrap();
    assert_eq!(catalogue.len(), 1);
    assert_eq!(catalogue.get("mars").unwrap().mass_kg(), 2.0);
}
