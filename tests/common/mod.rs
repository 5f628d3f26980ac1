/// Shared helpers for integration tests
///
/// This module provides:
/// - The path to the shipped planet data file
/// - A small in-memory catalogue matching the examples used in the tests
/// - Writing planet data to a temporary file

use orrery::backend::{Catalogue, Planet};
use std::io::Write;
use std::path::PathBuf;

/// Path to `data/planets.json`
pub fn shipped_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/planets.json")
}

/// Catalogue loaded from the shipped data file
pub fn shipped_catalogue() -> Catalogue {
    Catalogue::from_json_path(shipped_data_path()).expect("shipped planet data must load")
}

/// Earth, Mars, Saturn and Neptune with a few moons each
pub fn sample_catalogue() -> Catalogue {
    let planet = |name: &str, mass: f64, distance: f64, moons: &[&str]| {
        Planet::new(
            name,
            mass,
            distance,
            moons.iter().map(|m| m.to_string()).collect(),
        )
        .expect("sample planet must be valid")
    };

    Catalogue::new(vec![
        planet("Earth", 5.972e24, 149_600_000.0, &["Moon"]),
        planet("Mars", 6.417e23, 227_900_000.0, &["Phobos", "Deimos"]),
        planet("Saturn", 5.683e26, 1_433_500_000.0, &["Titan"]),
        planet("Neptune", 1.024e26, 4_495_100_000.0, &["Triton"]),
    ])
}

/// Write JSON text to a fresh temporary file
pub fn write_temp_json(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
