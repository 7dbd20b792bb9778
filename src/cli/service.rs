use crate::services::traffic::SharedMonitor;

use super::{CliError, CommandRegistry, formatting::format_help};

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `monitor` - Traffic monitor shared by every command
    pub fn new(monitor: SharedMonitor) -> Self {
        let mut registry = CommandRegistry::new(monitor);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help` as the category renders the command overview instead.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Returns `CliError::InvalidArguments` if the argument count is wrong.
    /// Other errors come from the command itself.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category == "help" {
            return Ok(self.help());
        }

        self.registry.execute(category, command_name, args)
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Overview of every command with arguments and examples.
    pub fn help(&self) -> String {
        format_help(&self.registry.list_metadata())
    }
}
