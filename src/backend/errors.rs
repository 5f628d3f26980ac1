//! Error family for catalogue loading and lookup.

use std::path::PathBuf;

/// Result type for catalogue and planet operations.
pub type PlanetResult<T> = Result<T, PlanetError>;

/// Errors raised while building or querying the planet catalogue.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanetError {
    /// Data file could not be read.
    SourceUnavailable { path: PathBuf, reason: String },
    /// Data could not be parsed as JSON.
    Malformed { source_name: String, reason: String },
    /// Data parsed but violates the planet schema or invariants.
    DataValidation {
        index: Option<usize>,
        field: Option<&'static str>,
        message: String,
    },
    /// Requested planet is not in the catalogue. Carries the name as asked.
    NotFound { name: String },
    /// Any other domain failure.
    Domain(String),
}

impl PlanetError {
    /// Validation failure for a single field, not yet tied to an entry.
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        PlanetError::DataValidation {
            index: None,
            field: Some(field),
            message: message.into(),
        }
    }

    /// Validation failure about the data as a whole.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        PlanetError::DataValidation {
            index: None,
            field: None,
            message: message.into(),
        }
    }

    /// Attach the entry index to a validation failure. Other variants pass through.
    pub fn at_index(self, idx: usize) -> Self {
        match self {
            PlanetError::DataValidation { field, message, .. } => PlanetError::DataValidation {
                index: Some(idx),
                field,
                message,
            },
            other => other,
        }
    }

    /// True for the failures that abort catalogue construction.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            PlanetError::SourceUnavailable { .. }
                | PlanetError::Malformed { .. }
                | PlanetError::DataValidation { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PlanetError::NotFound { .. })
    }
}

impl std::fmt::Display for PlanetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanetError::SourceUnavailable { path, reason } => {
                write!(f, "Failed to read '{}': {}", path.display(), reason)
            }
            PlanetError::Malformed { source_name, reason } => {
                write!(f, "Invalid JSON in {}: {}", source_name, reason)
            }
            PlanetError::DataValidation {
                index,
                field,
                message,
            } => {
                match (index, field) {
                    (Some(idx), Some(field)) => {
                        write!(f, "Invalid planet entry at index {} (field '{}'): ", idx, field)?
                    }
                    (Some(idx), None) => write!(f, "Invalid planet entry at index {}: ", idx)?,
                    (None, Some(field)) => write!(f, "Invalid field '{}': ", field)?,
                    (None, None) => {}
                }
                write!(f, "{}", message)
            }
            PlanetError::NotFound { name } => write!(f, "Planet not found: {}", name),
            PlanetError::Domain(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PlanetError {}
