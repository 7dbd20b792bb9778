use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::traffic::SharedMonitor,
};

use super::super::lock;

/// Switches to the interface carrying the default route.
pub struct DetectCommand {
    monitor: SharedMonitor,
}

impl DetectCommand {
    /// Creates a new DetectCommand
    pub fn new(monitor: SharedMonitor) -> Self {
        Self { monitor }
    }
}

impl Command for DetectCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let iface = lock(&self.monitor).redetect_interface();

        Ok(format!("Monitoring {iface}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "detect".to_string(),
            description: "Monitor the interface of the default route".to_string(),
            category: "iface".to_string(),
            args: vec![],
            examples: vec!["netstopwatch iface detect".to_string()],
        }
    }
}
