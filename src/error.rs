//! Error types for the machine object model.

use crate::merge::ModelPath;
use std::fmt;
use thiserror::Error;

/// Errors that abort an apply or registration call.
///
/// Any of these leaves the canonical tree exactly as it was before the call.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Schema mismatch at {path}: expected {expected}, found {found}")]
    SchemaMismatch {
        path: ModelPath,
        expected: &'static str,
        found: String,
    },

    #[error("Delta document is not valid JSON: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Plugin id must not be empty")]
    InvalidPluginId,
}

impl ModelError {
    /// Path of the offending field, when the error is tied to one.
    pub fn path(&self) -> Option<&ModelPath> {
        match self {
            ModelError::SchemaMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Non-fatal conditions reported alongside a successful apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyWarning {
    /// Kinematics named a variant outside the discriminant table; the base shape was used.
    UnknownDiscriminant { path: ModelPath, name: String },
    /// Field not present in the schema; ignored.
    UnknownField { path: ModelPath, field: String },
}

impl fmt::Display for ApplyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyWarning::UnknownDiscriminant { path, name } => {
                write!(f, "Unknown kinematics '{}' at {}, using base shape", name, path)
            }
            ApplyWarning::UnknownField { path, field } => {
                write!(f, "Ignored unknown field '{}' at {}", field, path)
            }
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
