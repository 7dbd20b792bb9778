use std::path::Path;

use tracing::trace;

use super::{CounterSample, InterfaceName, SysFs};

/// Read the current byte counters of `iface`.
///
/// Returns `None` when either counter is missing, unreadable, or not a
/// non-negative integer. Nothing is cached.
pub fn read_counters(fs: &dyn SysFs, net_dir: &Path, iface: &InterfaceName) -> Option<CounterSample> {
    let stats = net_dir.join(iface.as_str()).join("statistics");

    let rx = read_counter(fs, &stats.join("rx_bytes"))?;
    let tx = read_counter(fs, &stats.join("tx_bytes"))?;
    trace!(%iface, rx, tx, "Read counters");

    Some(CounterSample { rx, tx })
}

fn read_counter(fs: &dyn SysFs, path: &Path) -> Option<u64> {
    fs.read_to_string(path).ok()?.trim().parse::<u64>().ok()
}
