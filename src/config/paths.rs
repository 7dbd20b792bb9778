use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_DIR: &str = "netstopwatch";

/// Utility struct for managing configuration file paths
///
/// Provides methods to locate configuration, cache and log directories
/// following the XDG Base Directory specification
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// Follows the XDG Base Directory specification:
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "netstopwatch" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(APP_DIR))
    }

    /// Returns the cache directory holding the persisted session state
    ///
    /// Checks `XDG_CACHE_HOME` first and falls back to `$HOME/.cache`.
    /// The directory is not created here; the session store creates it
    /// on first save.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CACHE_HOME` nor `HOME` environment variables are set
    pub fn cache_dir() -> Result<PathBuf, Error> {
        let cache_home = env::var("XDG_CACHE_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.cache")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CACHE_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(cache_home).join(APP_DIR))
    }

    /// Returns the application data directory path
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if HOME environment variable is not set or directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let data_dir = env::var("HOME")
            .map(|home| format!("{home}/.{APP_DIR}"))
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        let app_dir = PathBuf::from(data_dir);

        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let app_dir = Self::app_data_dir()?;
        let log_dir = app_dir.join("logs");

        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    /// Returns the path to the main configuration file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default path of the persisted session state
    ///
    /// # Errors
    /// Returns an error if the cache directory cannot be determined
    pub fn state_file() -> Result<PathBuf, Error> {
        Ok(Self::cache_dir()?.join("store.json"))
    }
}
