//! Unit tests for the traffic module
//!
//! Kernel files come from an in-memory tree and time from a manual clock.
//! Only the session store touches the real filesystem, inside temp dirs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

mod rate;

use super::{InterfaceName, MemoryFs};

const NET: &str = "/sys/class/net";
const ROUTE: &str = "/proc/net/route";
const ROUTE_HEADER: &str =
    "Iface\tDestination\tGateway\tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT";

fn name(s: &str) -> InterfaceName {
    InterfaceName::new(s).unwrap()
}

fn add_iface(fs: &MemoryFs, iface: &str, operstate: &str) {
    fs.write(format!("{NET}/{iface}/operstate"), format!("{operstate}\n"));
}

fn set_counters(fs: &MemoryFs, iface: &str, rx: u64, tx: u64) {
    fs.write(format!("{NET}/{iface}/statistics/rx_bytes"), format!("{rx}\n"));
    fs.write(format!("{NET}/{iface}/statistics/tx_bytes"), format!("{tx}\n"));
}

fn route_table(rows: &[(&str, &str)]) -> String {
    let mut table = String::from(ROUTE_HEADER);
    for (iface, destination) in rows {
        table.push_str(&format!(
            "\n{iface}\t{destination}\t0100A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0"
        ));
    }
    table.push('\n');
    table
}
