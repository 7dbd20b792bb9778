use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// Each variant carries enough context for the user to understand what
/// went wrong without consulting the logs.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when the argument count does not match the command's
    /// metadata or a value cannot be parsed.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The traffic monitor could not carry out the request.
    ///
    /// Used when counters are unreadable or a requested interface does
    /// not exist.
    #[error("Service error: {0}")]
    ServiceError(String),
}

/// Type alias for command execution results.
///
/// All CLI commands return either the text to print or a CliError.
pub type CommandResult = Result<String, CliError>;

/// Describes a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "interface", "enabled").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
///
/// Shown as a hint in help text.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A boolean value (true/false, yes/no, on/off, 1/0).
    Boolean,
}

impl ArgType {
    /// Short name used in help output
    pub fn hint(&self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Boolean => "bool",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// Single source of truth for a command's identity, arguments, usage
/// examples, and category. Used for help generation and argument count
/// validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "reset", "list").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// All arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "session", "iface").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata; the command validates the values.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values or when the traffic
    /// monitor cannot carry out the request.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
