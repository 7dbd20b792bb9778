use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::traffic::{InterfaceName, SharedMonitor},
};

use super::super::lock;

/// Switches the monitored interface.
///
/// # Example Usage
///
/// ```bash
/// netstopwatch iface use wlp2s0
/// ```
pub struct UseCommand {
    monitor: SharedMonitor,
}

impl UseCommand {
    /// Creates a new UseCommand
    pub fn new(monitor: SharedMonitor) -> Self {
        Self { monitor }
    }
}

impl Command for UseCommand {
    /// Monitors the named interface from now on.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If the name is missing or blank
    /// * `CliError::ServiceError` - If no such interface exists
    fn execute(&self, args: &[String]) -> CommandResult {
        let name = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <interface> argument for 'use'".to_string())
        })?;
        let iface = InterfaceName::new(name.as_str())
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let mut monitor = lock(&self.monitor);
        if !monitor.interface_exists(&iface) {
            return Err(CliError::ServiceError(format!(
                "Interface {iface} does not exist"
            )));
        }

        monitor.select_interface(iface.clone());

        Ok(format!("Monitoring {iface}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "use".to_string(),
            description: "Monitor another interface".to_string(),
            category: "iface".to_string(),
            args: vec![CommandArg {
                name: "interface".to_string(),
                description: "Interface name as listed by 'iface list'".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec![
                "netstopwatch iface use eth0".to_string(),
                "netstopwatch iface use wlp2s0".to_string(),
            ],
        }
    }
}
