use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    services::traffic::SharedMonitor,
};

use super::super::lock;

/// Starts a new session on the monitored interface.
pub struct ResetCommand {
    monitor: SharedMonitor,
}

impl ResetCommand {
    /// Creates a new ResetCommand
    pub fn new(monitor: SharedMonitor) -> Self {
        Self { monitor }
    }
}

impl Command for ResetCommand {
    /// Re-baselines the session at the current counters.
    ///
    /// # Errors
    ///
    /// Returns `CliError::ServiceError` if the counters are unreadable. The
    /// previous session is kept in that case.
    fn execute(&self, _args: &[String]) -> CommandResult {
        let mut monitor = lock(&self.monitor);
        let iface = monitor.active_interface().clone();

        if !monitor.reset_session() {
            return Err(CliError::ServiceError(format!(
                "Interface {iface} not readable, session kept"
            )));
        }

        Ok(format!("Session reset on {iface}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reset".to_string(),
            description: "Start a new session from the current counters".to_string(),
            category: "session".to_string(),
            args: vec![],
            examples: vec!["netstopwatch session reset".to_string()],
        }
    }
}
