use std::env;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigPaths, LogLevel};

const LOG_FORMAT_VAR: &str = "NETSTOPWATCH_LOG_FORMAT";

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Initialize tracing for one-shot CLI commands
///
/// Uses RUST_LOG if set, otherwise the configured level. Output goes to
/// stderr so command output on stdout stays clean. Supports both pretty
/// console output and JSON output based on NETSTOPWATCH_LOG_FORMAT.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    let format = env::var(LOG_FORMAT_VAR).unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter(level));

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize tracing with file output
///
/// Similar to init() but also writes logs to a daily rolling file in the
/// netstopwatch logs directory. The returned guard flushes the file writer
/// and must be held for the lifetime of the process.
///
/// # Errors
/// Returns error if file creation or tracing subscriber initialization fails
pub fn init_with_file(level: LogLevel) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    const DAYS_TO_KEEP: usize = 7;

    let log_dir = ConfigPaths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("netstopwatch")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let format = env::var(LOG_FORMAT_VAR).unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter(level));

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_thread_names(true)
                        .with_writer(std::io::stderr),
                )
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .try_init()?;
        }
    }

    Ok(guard)
}
