use std::path::PathBuf;

/// Errors that can occur while tracking interface traffic
///
/// Kernel reads never produce these; they degrade to absent values instead.
/// Only session-state persistence and caller-supplied names can fail.
#[derive(thiserror::Error, Debug)]
pub enum TrafficError {
    /// An interface name was empty
    #[error("Interface name must not be empty")]
    EmptyInterfaceName,

    /// The persisted session state could not be read
    #[error("Failed to read session state '{path}': {details}")]
    StateRead {
        /// State file location
        path: PathBuf,
        /// Underlying error
        details: String,
    },

    /// The persisted session state is not a JSON object
    #[error("Malformed session state '{path}': {details}")]
    StateParse {
        /// State file location
        path: PathBuf,
        /// Underlying error
        details: String,
    },

    /// The session state could not be written
    #[error("Failed to write session state '{path}': {details}")]
    StateWrite {
        /// State file location
        path: PathBuf,
        /// Underlying error
        details: String,
    },
}
