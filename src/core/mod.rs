use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the netstopwatch application.
///
/// Covers failures while loading the settings file and preparing the
/// directories the application writes to. Traffic monitoring itself never
/// surfaces these; see [`crate::services::traffic::TrafficError`].
#[derive(Error, Debug)]
pub enum NetStopwatchError {
    /// Configuration field missing or invalid
    #[error("invalid config field '{field}' in {component}: {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Component containing the field
        component: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// I/O error without path context
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for netstopwatch operations.
pub type Result<T> = result::Result<T, NetStopwatchError>;

impl NetStopwatchError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        NetStopwatchError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        NetStopwatchError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
