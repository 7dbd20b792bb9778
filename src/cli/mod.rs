//! Command-line interface for the traffic stopwatch.
//!
//! Commands are organized by category (`session`, `iface`) and act on a
//! shared [`TrafficMonitor`](crate::services::traffic::TrafficMonitor).
//! Help text is generated from command metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
