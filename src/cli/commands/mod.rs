pub mod iface;
pub mod session;

use std::sync::{MutexGuard, PoisonError};

use crate::services::traffic::{SharedMonitor, TrafficMonitor};

use super::CliError;

/// Locks the monitor, recovering it if a poll panicked while holding it.
fn lock(monitor: &SharedMonitor) -> MutexGuard<'_, TrafficMonitor> {
    monitor.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Parses the boolean spellings accepted on the command line.
///
/// # Errors
///
/// Returns `CliError::InvalidArguments` for anything else.
fn parse_bool(arg: &str, value: &str) -> Result<bool, CliError> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" => Ok(false),
        _ => Err(CliError::InvalidArguments(format!(
            "{arg} must be 'true', 'false', 'on' or 'off', got '{value}'"
        ))),
    }
}
