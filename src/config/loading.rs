use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, info, instrument};

use super::Config;
use crate::{NetStopwatchError, Result};

const DEFAULT_HEADER: &str = "# netstopwatch configuration file\n\n";

impl Config {
    /// Loads the settings file at `path`.
    ///
    /// A missing file yields the default configuration. Unknown keys are
    /// ignored and missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The TOML content is invalid
    /// - A field fails validation
    #[instrument]
    pub fn load(path: &Path) -> Result<Config> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No settings file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(NetStopwatchError::io(e, path)),
        };

        let config = Self::from_toml_str(&content, Some(path))?;
        config.validate()?;

        Ok(config)
    }

    /// Loads the settings file, writing a default one first if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the default file cannot be written or the
    /// existing file fails to load.
    pub fn load_or_create(path: &Path) -> Result<Config> {
        if !path.exists() {
            create_default_config_file(path)?;
        }

        Self::load(path)
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `NetStopwatchError::TomlParseError` if the text is not a
    /// valid configuration.
    pub fn from_toml_str(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| NetStopwatchError::toml_parse(e, path))
    }

    fn validate(&self) -> Result<()> {
        if self.monitor.fallback_interface.trim().is_empty() {
            return Err(NetStopwatchError::InvalidConfigField {
                field: "fallback_interface".to_string(),
                component: "monitor".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.monitor.interval_ms == 0 {
            return Err(NetStopwatchError::InvalidConfigField {
                field: "interval_ms".to_string(),
                component: "monitor".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Creates a default configuration file if it doesn't exist
fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| NetStopwatchError::io(e, parent))?;
    }

    let body = toml::to_string(&Config::default())
        .map_err(|e| NetStopwatchError::toml_parse(e, Some(path)))?;

    fs::write(path, format!("{DEFAULT_HEADER}{body}"))
        .map_err(|e| NetStopwatchError::io(e, path))?;

    info!("Created default settings file at {}", path.display());
    Ok(())
}
