//! Configuration schema definitions and loading.
//!
//! Defines the settings file for netstopwatch: general settings and the
//! traffic monitor section. All configurations are serializable to/from
//! TOML format.

mod general;
mod loading;
mod monitor;
mod paths;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use monitor::{FALLBACK_INTERFACE, MonitorConfig};
pub use paths::ConfigPaths;

use serde::{Deserialize, Serialize};

/// Main configuration structure for netstopwatch.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Traffic monitor settings.
    #[serde(default)]
    pub monitor: MonitorConfig,
}
