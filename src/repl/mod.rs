//! Console front end for the planet catalogue
//!
//! This module provides:
//! - TOML configuration with per-user defaults
//! - Numbered menu with keyword synonyms
//! - Rustyline line editing with planet-name completion and history hints
//! - The interaction loop, usable with any buffered reader

pub mod config;
pub mod helper;
pub mod menu;
pub mod session;

// Re-exports for convenience
pub use config::{ConfigError, ReplConfig};
pub use helper::PlanetHelper;
pub use menu::{parse_menu_input, MenuChoice, MenuInput};
pub use session::{EditorSource, LineSource, ReaderSource, Session};
