use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::traffic::SharedMonitor,
};

use super::super::lock;

/// Shows the session figures of the monitored interface.
///
/// Prints the same lines as the panel tooltip, or a notice when the
/// interface counters cannot be read.
///
/// # Example Usage
///
/// ```bash
/// netstopwatch session status
/// ```
pub struct StatusCommand {
    monitor: SharedMonitor,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(monitor: SharedMonitor) -> Self {
        Self { monitor }
    }
}

impl Command for StatusCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(lock(&self.monitor).session_report().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show traffic since the session started".to_string(),
            category: "session".to_string(),
            args: vec![],
            examples: vec!["netstopwatch session status".to_string()],
        }
    }
}
