//! Netstopwatch - per-interface network traffic stopwatch.
//!
//! Watches one network interface at a time and reports two things: the
//! current download/upload rate, and the cumulative traffic since a
//! user-controlled session start. Session baselines survive restarts.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use netstopwatch::{
//!     config::{ConfigPaths, MonitorConfig},
//!     services::traffic::{HostFs, SystemClock, TrafficMonitor},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut monitor = TrafficMonitor::new(
//!     &MonitorConfig::default(),
//!     ConfigPaths::state_file()?,
//!     Arc::new(HostFs),
//!     Arc::new(SystemClock),
//! )?;
//!
//! println!("{}", monitor.tick());
//! println!("{}", monitor.session_report());
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface over the traffic monitor.
pub mod cli;

/// Reactive services for system integration.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{NetStopwatchError, Result};
