//! Netstopwatch entry point.
//!
//! `netstopwatch watch` polls in the foreground and prints the panel label
//! until interrupted. Everything else is dispatched to the command registry.

use std::{
    error::Error,
    path::PathBuf,
    process,
    sync::{Arc, PoisonError},
};

use clap::Parser;
use futures::StreamExt;
use netstopwatch::{
    cli::{CliService, formatting::format_error},
    config::{Config, ConfigPaths, MonitorConfig},
    services::traffic::{HostFs, SharedMonitor, SystemClock, TrafficMonitor, spawn_polling},
    tracing_config,
};
use tracing::{info, instrument};

/// Session traffic stopwatch for one network interface.
#[derive(Parser, Debug)]
#[command(name = "netstopwatch", version, about)]
struct Args {
    /// Settings file, defaults to $XDG_CONFIG_HOME/netstopwatch/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// `watch`, or `<category> <command> [args]`; `help` lists commands
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{}", format_error(&e.to_string()));
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_create(&ConfigPaths::main_config()?)?,
    };

    let watching = args.command.first().map(String::as_str) == Some("watch");
    let _guard = if watching {
        Some(tracing_config::init_with_file(config.general.log_level)?)
    } else {
        tracing_config::init(config.general.log_level)?;
        None
    };

    let state_file = match &config.monitor.state_file {
        Some(path) => path.clone(),
        None => ConfigPaths::state_file()?,
    };
    let monitor = TrafficMonitor::new(
        &config.monitor,
        state_file,
        Arc::new(HostFs),
        Arc::new(SystemClock),
    )?
    .into_shared();

    if watching {
        return watch(monitor, &config.monitor).await;
    }

    run_cli_command(monitor, &args.command)
}

/// Executes a registry command and prints its output.
///
/// # Errors
/// Returns the command's error for the caller to render.
fn run_cli_command(monitor: SharedMonitor, args: &[String]) -> Result<(), Box<dyn Error>> {
    let cli_service = CliService::new(monitor);

    let category = args.first().map(String::as_str).unwrap_or("help");
    let command = args.get(1).map(String::as_str).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    let output = cli_service.execute_command(category, command, command_args)?;
    if !output.trim().is_empty() {
        println!("{output}");
    }

    Ok(())
}

/// Polls until Ctrl-C, printing every label change.
#[instrument(skip_all, fields(interval_ms = config.interval_ms))]
async fn watch(monitor: SharedMonitor, config: &MonitorConfig) -> Result<(), Box<dyn Error>> {
    let label = monitor
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .label()
        .clone();
    let mut updates = Box::pin(label.watch());

    let mut scheduler = spawn_polling(&monitor, config);
    info!(
        period = ?scheduler.period(),
        state_file = %monitor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .store()
            .path()
            .display(),
        "Watching"
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            update = updates.next() => match update {
                Some(label) => println!("{label}"),
                None => break,
            },
            signal = &mut shutdown => {
                signal?;
                break;
            }
        }
    }

    scheduler.stop();
    info!("Stopped watching");

    Ok(())
}
