//! Display strings for rates, byte counts and session summaries.

use chrono::{Local, TimeZone};

use super::{InterfaceName, SessionBaseline, SessionDelta, Throughput};

const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Label shown when no rate is available.
pub const PLACEHOLDER_LABEL: &str = "↓ ? ↑ ?";

/// Format a rate given in bits per second as Mbit/s.
///
/// Precision shrinks as the value grows so the label keeps a bounded width.
pub fn format_rate(bits_per_sec: f64) -> String {
    let mbit = bits_per_sec / 1e6;

    if mbit >= 100.0 {
        format!("{mbit:.0} Mbit/s")
    } else if mbit >= 10.0 {
        format!("{mbit:.1} Mbit/s")
    } else {
        format!("{mbit:.2} Mbit/s")
    }
}

/// Format a byte count with the largest binary unit below 1024.
///
/// Bytes print as an integer and scaled units always with two decimals,
/// so `15360` is `"15.00 KB"` rather than `"15 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} {}", BYTE_UNITS[0])
    } else {
        format!("{value:.2} {}", BYTE_UNITS[unit])
    }
}

/// Panel label for a rate, or the placeholder.
pub fn format_label(rate: Option<Throughput>) -> String {
    match rate {
        Some(rate) => format!(
            "↓ {} ↑ {}",
            format_rate(rate.down_bps),
            format_rate(rate.up_bps)
        ),
        None => PLACEHOLDER_LABEL.to_string(),
    }
}

/// Local `YYYY-MM-DD HH:MM:SS` rendering of a Unix timestamp.
pub fn format_epoch(epoch: i64) -> String {
    match Local.timestamp_opt(epoch, 0).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => epoch.to_string(),
    }
}

/// Multi-line session summary used for the tooltip and status output.
pub fn format_session(
    iface: &InterfaceName,
    baseline: &SessionBaseline,
    delta: &SessionDelta,
) -> String {
    [
        format!("Interface: {iface}"),
        format!("Session since: {}", format_epoch(baseline.epoch)),
        format!("Session RX: {}", format_bytes(delta.rx)),
        format!("Session TX: {}", format_bytes(delta.tx)),
        format!("Session Total: {}", format_bytes(delta.total)),
    ]
    .join("\n")
}
