//! Unit tests for CLI module
//!
//! Commands run against a monitor backed by an in-memory kernel tree and a
//! state file in a temp dir.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use tempfile::TempDir;

use crate::{
    cli::{CliError, CliService, CommandRegistry, formatting::format_error},
    config::MonitorConfig,
    services::traffic::{ManualClock, MemoryFs, SharedMonitor, TrafficMonitor},
};

const NET: &str = "/sys/class/net";

struct Harness {
    fs: Arc<MemoryFs>,
    monitor: SharedMonitor,
    _temp: TempDir,
}

impl Harness {
    fn new() -> Self {
        let fs = Arc::new(MemoryFs::new());
        for (iface, operstate) in [("eth0", "up"), ("wlan0", "up"), ("veth12", "up")] {
            fs.write(format!("{NET}/{iface}/operstate"), operstate);
            fs.write(format!("{NET}/{iface}/statistics/rx_bytes"), "2048");
            fs.write(format!("{NET}/{iface}/statistics/tx_bytes"), "1024");
        }
        fs.write(
            "/proc/net/route",
            "Iface\tDestination\tGateway\nwlan0\t00000000\t0100A8C0\n",
        );

        let temp = TempDir::new().unwrap();
        let monitor = TrafficMonitor::new(
            &MonitorConfig::default(),
            temp.path().join("store.json"),
            fs.clone(),
            Arc::new(ManualClock::new(1_700_000_000_000)),
        )
        .unwrap()
        .into_shared();

        Self {
            fs,
            monitor,
            _temp: temp,
        }
    }

    fn cli(&self) -> CliService {
        CliService::new(self.monitor.clone())
    }

    fn run(&self, category: &str, command: &str, args: &[&str]) -> Result<String, CliError> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        self.cli().execute_command(category, command, &args)
    }
}

#[test]
fn registry_lists_categories_and_commands_sorted() {
    let harness = Harness::new();

    let listing = harness.cli().list_all();

    assert_eq!(
        listing,
        vec![
            (
                "iface".to_string(),
                vec![
                    "detect".to_string(),
                    "list".to_string(),
                    "show-all".to_string(),
                    "use".to_string(),
                ]
            ),
            (
                "session".to_string(),
                vec!["reset".to_string(), "status".to_string()]
            ),
        ]
    );
}

#[test]
fn empty_registry_lists_nothing() {
    let harness = Harness::new();
    let registry = CommandRegistry::new(harness.monitor.clone());

    assert!(registry.list_commands().is_empty());
}

#[test]
fn unknown_category_and_command_are_reported() {
    let harness = Harness::new();

    assert!(matches!(
        harness.run("audio", "mute", &[]),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        harness.run("session", "pause", &[]),
        Err(CliError::CommandNotFound(_))
    ));
}

#[test]
fn argument_count_is_validated() {
    let harness = Harness::new();

    assert!(matches!(
        harness.run("iface", "use", &[]),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        harness.run("session", "status", &["extra"]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn session_status_prints_tooltip_lines() {
    let harness = Harness::new();
    harness
        .fs
        .write(format!("{NET}/wlan0/statistics/rx_bytes"), "17408");

    let output = harness.run("session", "status", &[]).unwrap();

    assert!(output.starts_with("Interface: wlan0\nSession since: "));
    assert!(output.contains("Session RX: 15.00 KB"));
    assert!(output.ends_with("Session Total: 15.00 KB"));
}

#[test]
fn session_reset_fails_on_unreadable_interface() {
    let harness = Harness::new();
    harness.fs.remove(format!("{NET}/wlan0/statistics"));

    let result = harness.run("session", "reset", &[]);

    assert!(matches!(result, Err(CliError::ServiceError(_))));
    assert_eq!(
        harness.run("session", "status", &[]).unwrap(),
        "Interface wlan0 not readable."
    );
}

#[test]
fn session_reset_rebaselines() {
    let harness = Harness::new();
    harness
        .fs
        .write(format!("{NET}/wlan0/statistics/rx_bytes"), "999999");

    assert_eq!(
        harness.run("session", "reset", &[]).unwrap(),
        "Session reset on wlan0"
    );
    let status = harness.run("session", "status", &[]).unwrap();
    assert!(status.contains("Session Total: 0 B"));
}

#[test]
fn iface_list_marks_active_and_hides_virtual() {
    let harness = Harness::new();

    assert_eq!(
        harness.run("iface", "list", &[]).unwrap(),
        "  eth0\n* wlan0"
    );

    harness.run("iface", "show-all", &["on"]).unwrap();
    assert_eq!(
        harness.run("iface", "list", &[]).unwrap(),
        "  eth0\n  veth12\n* wlan0"
    );
}

#[test]
fn iface_list_without_interfaces() {
    let harness = Harness::new();
    for iface in ["eth0", "wlan0", "veth12"] {
        harness.fs.remove(format!("{NET}/{iface}"));
    }

    assert_eq!(
        harness.run("iface", "list", &[]).unwrap(),
        "No interfaces found"
    );
}

#[test]
fn iface_use_switches_monitored_interface() {
    let harness = Harness::new();

    assert_eq!(
        harness.run("iface", "use", &["eth0"]).unwrap(),
        "Monitoring eth0"
    );
    assert_eq!(
        harness.monitor.lock().unwrap().active_interface().as_str(),
        "eth0"
    );
}

#[test]
fn iface_use_rejects_unknown_and_blank_names() {
    let harness = Harness::new();

    assert!(matches!(
        harness.run("iface", "use", &["ppp9"]),
        Err(CliError::ServiceError(_))
    ));
    assert!(matches!(
        harness.run("iface", "use", &["  "]),
        Err(CliError::InvalidArguments(_))
    ));
    assert_eq!(
        harness.monitor.lock().unwrap().active_interface().as_str(),
        "wlan0"
    );
}

#[test]
fn iface_detect_follows_default_route() {
    let harness = Harness::new();
    harness.run("iface", "use", &["eth0"]).unwrap();

    assert_eq!(
        harness.run("iface", "detect", &[]).unwrap(),
        "Monitoring wlan0"
    );
}

#[test]
fn show_all_toggles_without_argument() {
    let harness = Harness::new();

    assert_eq!(
        harness.run("iface", "show-all", &[]).unwrap(),
        "Showing all interfaces"
    );
    assert_eq!(
        harness.run("iface", "show-all", &[]).unwrap(),
        "Showing regular interfaces only"
    );
    assert!(matches!(
        harness.run("iface", "show-all", &["maybe"]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn help_lists_every_command() {
    let harness = Harness::new();

    let help = harness.run("help", "", &[]).unwrap();

    for command in ["status", "reset", "list", "use", "detect", "show-all"] {
        assert!(help.contains(command), "help is missing {command}");
    }
    assert!(help.contains("<interface>"));
    assert!(help.contains("[enabled]"));
}

#[test]
fn errors_are_rendered_in_red() {
    let rendered = format_error("boom");

    assert!(rendered.starts_with("\x1b[1m\x1b[31m"));
    assert!(rendered.contains("boom"));
    assert!(rendered.ends_with("\x1b[0m"));
}
