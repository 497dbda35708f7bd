pub mod chat;

use command_kit::CommandRegistry;

use crate::kernel::CommandDeps;

/// Register every command this crate provides.
pub fn build_registry(deps: &CommandDeps) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(chat::chat_update_command(deps.slack.clone()));
    registry
}
