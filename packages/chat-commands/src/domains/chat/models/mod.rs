pub mod chat_update;

pub use chat_update::{ChatUpdateInput, ValidationError, Violation};
