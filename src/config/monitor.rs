use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

/// Interface used when the routing table names no default route.
pub const FALLBACK_INTERFACE: &str = "enp0s31f6";

/// Settings for the traffic monitor.
///
/// The kernel paths are configurable so the monitor can be pointed at a
/// container's view of `/sys` or `/proc`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    /// Polling period in milliseconds.
    pub interval_ms: u64,

    /// Interface chosen when no default route can be found.
    pub fallback_interface: String,

    /// Directory listing one entry per network interface.
    pub net_class_dir: PathBuf,

    /// IPv4 routing table snapshot.
    pub route_table: PathBuf,

    /// Location of the persisted session state. Defaults to the cache dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            fallback_interface: FALLBACK_INTERFACE.to_string(),
            net_class_dir: PathBuf::from("/sys/class/net"),
            route_table: PathBuf::from("/proc/net/route"),
            state_file: None,
        }
    }
}

impl MonitorConfig {
    /// Polling period, never shorter than 100ms.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(100))
    }
}
