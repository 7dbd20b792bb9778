mod log_level;

pub use log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// General configuration settings for netstopwatch.
///
/// Contains global settings that affect the overall behavior of the
/// application, such as logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Logging level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,
}
