//! Interface listing and selection commands.
mod detect;
mod list;
mod select;
mod show_all;

pub use detect::DetectCommand;
pub use list::ListCommand;
pub use select::UseCommand;
pub use show_all::ShowAllCommand;

use crate::{cli::CommandRegistry, services::traffic::SharedMonitor};

/// Registers the commands of the "iface" category.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `monitor` - Traffic monitor the commands act on
pub fn register_commands(registry: &mut CommandRegistry, monitor: &SharedMonitor) {
    const CATEGORY_NAME: &str = "iface";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(monitor.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(UseCommand::new(monitor.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(DetectCommand::new(monitor.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(ShowAllCommand::new(monitor.clone())),
    );
}
