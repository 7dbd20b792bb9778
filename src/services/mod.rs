/// Utilities shared by services
pub mod common;
/// Per-interface traffic monitoring
pub mod traffic;

pub use traffic::{TrafficError, TrafficMonitor};
