use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from critical errors only
/// to per-poll trace information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only show errors.
    Error,

    /// Show warnings and errors, including swallowed storage faults.
    Warn,

    /// Show user actions, warnings and errors (default level).
    #[default]
    Info,

    /// Show every poll outcome.
    Debug,

    /// Show raw counter samples and route table rows.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
