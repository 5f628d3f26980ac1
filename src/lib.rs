//! Orrery - Planet Catalogue Library
//!
//! This library answers questions about a small, fixed catalogue of planets
//! loaded from a JSON data file. It backs both a numbered console menu and a
//! free-text question interpreter.
//!
//! # Architecture
//!
//! 1. **Text normalisation** (`text` module)
//!    - Lower-cases and collapses whitespace for names and questions
//!
//! 2. **Backend** (`backend` module)
//!    - Validated `Planet` records and the read-only `Catalogue`
//!    - Gestalt similarity matching for "Did you mean?" suggestions
//!    - Answer formatting
//!    - The `QueryEngine`: intent rules, name extraction and dispatch
//!
//! 3. **Console** (`repl` module)
//!    - Configuration, menu parsing, line editing and the interaction loop
//!
//! # Example
//!
//! ```rust
//! use orrery::backend::*;
//!
//! let catalogue = Catalogue::from_json_str(r#"[
//!     {"name": "Mars", "mass_kg": 6.417e23, "distance_from_sun_km": 227900000,
//!      "moons": ["Phobos", "Deimos"]}
//! ]"#).unwrap();
//!
//! let engine = QueryEngine::new();
//! assert_eq!(
//!     engine.answer("List the moons of Mars", &catalogue),
//!     "Mars moons: Phobos, Deimos"
//! );
//! ```

pub mod backend;
pub mod repl;
pub mod text;

pub use backend::{Catalogue, Intent, Planet, PlanetError, PlanetResult, QueryEngine};
pub use text::normalise;
