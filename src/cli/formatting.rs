//! Formatting utilities for CLI output.
//!
//! Styled help text and error output for CLI commands.

use super::types::CommandMetadata;

/// ANSI escape sequences used by the CLI
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage examples with styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Renders the command overview from registry metadata.
///
/// Categories are listed in the order given, each command with its
/// arguments and usage examples.
pub fn format_help(categories: &[(String, Vec<CommandMetadata>)]) -> String {
    let mut out = vec![
        format_header("netstopwatch"),
        format_description("Session traffic stopwatch for one network interface"),
        String::new(),
        format_subheader("Usage:"),
        format!("  netstopwatch {}", format_usage("[--config <path>] <category> <command> [args]")),
        format!("  netstopwatch {}", format_usage("watch")),
    ];

    for (category, commands) in categories {
        out.push(String::new());
        out.push(format_category(category));

        for command in commands {
            let args: Vec<String> = command
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect();

            out.push(format!(
                "  {} {}  {}",
                format_command(&command.name),
                args.join(" "),
                format_description(&command.description)
            ));

            for arg in &command.args {
                out.push(format!(
                    "      {} ({}): {}",
                    arg.name,
                    arg.value_type.hint(),
                    format_description(&arg.description)
                ));
            }

            for example in &command.examples {
                out.push(format!("      {}", format_usage(example)));
            }
        }
    }

    out.join("\n")
}
