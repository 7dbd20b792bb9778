use std::path::Path;

use tracing::{debug, trace};

use super::{InterfaceName, SysFs};

const LOOPBACK: &str = "lo";

/// Virtual and bridge devices hidden unless all interfaces are shown.
const HIDDEN_PREFIXES: &[&str] = &["veth", "br-", "docker", "virbr", "hassio"];

/// Physical, wireless and VPN devices always listed.
const LISTED_PREFIXES: &[&str] = &[
    "en",
    "eth",
    "wl",
    "wlan",
    "wlp",
    "tailscale",
    "ppp",
    "bond",
    "team",
];

/// Enumerates interfaces below the kernel's network class directory.
pub struct InterfaceCatalog<'a> {
    fs: &'a dyn SysFs,
    net_dir: &'a Path,
}

impl<'a> InterfaceCatalog<'a> {
    /// Catalog over `net_dir` (normally `/sys/class/net`)
    pub fn new(fs: &'a dyn SysFs, net_dir: &'a Path) -> Self {
        Self { fs, net_dir }
    }

    /// Candidate interfaces, sorted and without duplicates.
    ///
    /// Loopback is never listed. Without `show_all`, virtual and bridge
    /// devices are dropped and the rest are kept when their name looks
    /// physical or their operational state is `up` or `unknown`.
    /// An unreadable directory yields an empty list.
    pub fn list(&self, show_all: bool) -> Vec<InterfaceName> {
        let entries = match self.fs.list_dir(self.net_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list {}: {e}", self.net_dir.display());
                return Vec::new();
            }
        };

        let mut names: Vec<InterfaceName> = entries
            .into_iter()
            .filter(|name| name.as_str() != LOOPBACK)
            .filter(|name| show_all || self.is_candidate(name))
            .filter_map(|name| InterfaceName::new(name).ok())
            .collect();

        names.sort();
        names.dedup();
        names
    }

    /// Whether the interface currently exists.
    pub fn exists(&self, name: &InterfaceName) -> bool {
        self.fs.is_dir(&self.net_dir.join(name.as_str()))
    }

    fn is_candidate(&self, name: &str) -> bool {
        if is_hidden(name) {
            return false;
        }
        if is_listed(name) {
            return true;
        }

        let state = self.operstate(name);
        trace!(interface = name, operstate = ?state, "Classifying by operational state");
        matches!(state.as_deref(), Some("up") | Some("unknown"))
    }

    fn operstate(&self, name: &str) -> Option<String> {
        self.fs
            .read_to_string(&self.net_dir.join(name).join("operstate"))
            .ok()
            .map(|state| state.trim().to_string())
    }
}

fn is_hidden(name: &str) -> bool {
    HIDDEN_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

fn is_listed(name: &str) -> bool {
    LISTED_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}
