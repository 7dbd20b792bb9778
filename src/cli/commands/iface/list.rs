use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::traffic::{MenuModel, SharedMonitor},
};

use super::super::lock;

/// Lists the interfaces offered for selection.
///
/// The monitored interface is marked with `*`. Virtual and bridge
/// interfaces only appear while `show-all` is enabled.
pub struct ListCommand {
    monitor: SharedMonitor,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(monitor: SharedMonitor) -> Self {
        Self { monitor }
    }
}

impl Command for ListCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let menu = lock(&self.monitor).menu();

        if menu.interfaces.is_empty() {
            return Ok(MenuModel::NO_INTERFACES.to_string());
        }

        let lines: Vec<String> = menu
            .interfaces
            .iter()
            .map(|entry| {
                let marker = if entry.active { '*' } else { ' ' };
                format!("{marker} {}", entry.name)
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List selectable interfaces".to_string(),
            category: "iface".to_string(),
            args: vec![],
            examples: vec!["netstopwatch iface list".to_string()],
        }
    }
}
