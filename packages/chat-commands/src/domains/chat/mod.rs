pub mod commands;
pub mod events;
pub mod models;

pub use commands::{chat_update_command, ChatUpdateHandler, CHAT_UPDATE_COMMAND};
pub use events::{ChatUpdateEvent, CHAT_UPDATE_FAIL, CHAT_UPDATE_SUCCESS};
pub use models::{ChatUpdateInput, ValidationError, Violation};
