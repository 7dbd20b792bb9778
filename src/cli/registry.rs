use std::collections::HashMap;

use crate::services::traffic::SharedMonitor;

use super::{
    CliError, Command,
    commands::{iface, session},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// Commands are grouped by category so the command line reads as
/// `netstopwatch <category> <command> [args]`.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── iface
/// │   ├── detect
/// │   ├── list
/// │   ├── show-all
/// │   └── use
/// └── session
///     ├── reset
///     └── status
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    monitor: SharedMonitor,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands must be added with `register_command` or
    /// `register_all_commands`.
    pub fn new(monitor: SharedMonitor) -> Self {
        Self {
            categories: HashMap::new(),
            monitor,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is used as the key within the category.
    /// A command with the same name replaces the existing one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or the command
    /// within it doesn't exist, and `CliError::InvalidArguments` if the
    /// argument count doesn't match the command's metadata. Other errors
    /// come from the command's execute method.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        self.list_metadata()
            .into_iter()
            .map(|(category, commands)| {
                let names = commands.into_iter().map(|command| command.name).collect();
                (category, names)
            })
            .collect()
    }

    /// Metadata of every registered command, sorted like `list_commands`.
    pub fn list_metadata(&self) -> Vec<(String, Vec<CommandMetadata>)> {
        let mut categories: Vec<(String, Vec<CommandMetadata>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut metadata: Vec<CommandMetadata> =
                    commands.values().map(|command| command.metadata()).collect();
                metadata.sort_by(|a, b| a.name.cmp(&b.name));

                (category.clone(), metadata)
            })
            .collect();

        categories.sort_by(|a, b| a.0.cmp(&b.0));

        categories
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let monitor = self.monitor.clone();
        session::register_commands(self, &monitor);
        iface::register_commands(self, &monitor);
    }
}
