use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::traffic::SharedMonitor,
};

use super::super::{lock, parse_bool};

/// Controls whether virtual and bridge interfaces are listed.
///
/// Without an argument the current setting is flipped.
///
/// # Example Usage
///
/// ```bash
/// netstopwatch iface show-all
/// netstopwatch iface show-all false
/// ```
pub struct ShowAllCommand {
    monitor: SharedMonitor,
}

impl ShowAllCommand {
    /// Creates a new ShowAllCommand
    pub fn new(monitor: SharedMonitor) -> Self {
        Self { monitor }
    }
}

impl Command for ShowAllCommand {
    /// # Errors
    ///
    /// Returns `CliError::InvalidArguments` if the value is not a boolean.
    fn execute(&self, args: &[String]) -> CommandResult {
        let requested = args
            .first()
            .map(|value| parse_bool("enabled", value))
            .transpose()?;

        let mut monitor = lock(&self.monitor);
        let show_all = match requested {
            Some(show_all) => {
                monitor.set_show_all_interfaces(show_all);
                show_all
            }
            None => monitor.toggle_show_all_interfaces(),
        };

        if show_all {
            Ok("Showing all interfaces".to_string())
        } else {
            Ok("Showing regular interfaces only".to_string())
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show-all".to_string(),
            description: "Include Docker, veth and bridge interfaces in listings".to_string(),
            category: "iface".to_string(),
            args: vec![CommandArg {
                name: "enabled".to_string(),
                description: "true/false, omit to toggle".to_string(),
                required: false,
                value_type: ArgType::Boolean,
            }],
            examples: vec![
                "netstopwatch iface show-all".to_string(),
                "netstopwatch iface show-all true".to_string(),
            ],
        }
    }
}
