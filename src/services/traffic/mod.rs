//! Network traffic stopwatch for a single interface.
//!
//! Reads kernel byte counters, derives the instantaneous rate, and tracks
//! cumulative traffic against a persisted per-interface session baseline.

/// Interface enumeration and classification
pub mod catalog;
/// Wall-clock abstraction
pub mod clock;
/// Byte counter reads
pub mod counters;
/// Error types
pub mod error;
/// Display formatting
pub mod format;
/// Filesystem abstraction
pub mod fs;
/// Controller tying the components together
pub mod monitor;
/// Instantaneous rate computation
pub mod rate;
/// Default route resolution
pub mod route;
/// Fixed-interval polling driver
pub mod scheduler;
/// Persisted session baselines
pub mod session;
/// Value types
pub mod types;

#[cfg(test)]
mod tests;

pub use catalog::InterfaceCatalog;
pub use clock::{Clock, ManualClock, SystemClock};
pub use counters::read_counters;
pub use error::TrafficError;
pub use fs::{HostFs, MemoryFs, SysFs};
pub use monitor::{
    MenuEntry, MenuModel, SessionReport, SharedMonitor, TrafficMonitor, spawn_polling,
};
pub use rate::{RateEngine, RateState};
pub use route::DefaultRouteResolver;
pub use scheduler::PollScheduler;
pub use session::{PersistedState, SessionStore};
pub use types::{CounterSample, InterfaceName, SessionBaseline, SessionDelta, Throughput};
