//! Session inspection and reset commands.
mod reset;
mod status;

pub use reset::ResetCommand;
pub use status::StatusCommand;

use crate::{cli::CommandRegistry, services::traffic::SharedMonitor};

/// Registers the commands of the "session" category.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `monitor` - Traffic monitor the commands act on
pub fn register_commands(registry: &mut CommandRegistry, monitor: &SharedMonitor) {
    const CATEGORY_NAME: &str = "session";

    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(monitor.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ResetCommand::new(monitor.clone())));
}
