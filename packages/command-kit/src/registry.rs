//! Registry mapping command names to commands.
//!
//! The engine owns discovery and scheduling. This registry only answers
//! "which command handles this name" so raw input can be dispatched.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = CommandRegistry::new();
//! registry.register(chat_update_command(slack));
//!
//! match registry.dispatch("ChatUpdate", raw).await {
//!     Ok(event) => println!("{}", event.event_def),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use tracing::info;

use crate::command::Command;
use crate::core::Event;
use crate::error::DispatchError;

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Command>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name.
    ///
    /// # Panics
    ///
    /// Panics if a command is already registered under the same name.
    pub fn register(&mut self, command: Command) {
        let name = command.name();
        if self.commands.contains_key(name) {
            panic!("command already registered: {}", name);
        }

        info!(
            command = name,
            outputs = ?command.output_events().iter().map(|def| def.name).collect::<Vec<_>>(),
            "registered command"
        );
        self.commands.insert(name, command);
    }

    /// Route `raw` to the command registered under `name`.
    ///
    /// # Errors
    ///
    /// - `UnknownCommand` if nothing is registered under `name`
    /// - `Fatal` if the command could not interpret `raw`
    pub async fn dispatch(&self, name: &str, raw: &[u8]) -> Result<Event, DispatchError> {
        let command = self
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;

        Ok(command.handle(raw).await?)
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("registered_commands", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::command::CommandHandler;
    use crate::core::EventDef;
    use crate::error::FatalError;

    const NOTED: EventDef = EventDef::new("Noted");

    struct NoteHandler;

    #[async_trait]
    impl CommandHandler for NoteHandler {
        async fn handle(&self, raw: &[u8]) -> Result<Event, FatalError> {
            let value: serde_json::Value =
                serde_json::from_slice(raw).map_err(FatalError::InvalidInput)?;
            Event::new(NOTED, &value)
        }
    }

    fn note_command(name: &'static str) -> Command {
        Command::new(name, vec![NOTED], Arc::new(NoteHandler))
    }

    #[tokio::test]
    async fn test_registry_dispatch_routes_by_name() {
        let mut registry = CommandRegistry::new();
        registry.register(note_command("Note"));

        let event = registry.dispatch("Note", br#"{"x":"y"}"#).await.unwrap();
        assert_eq!(event.event_def, NOTED);
        assert_eq!(event.payload, json!({ "x": "y" }));
    }

    #[tokio::test]
    async fn test_registry_unknown_command() {
        let registry = CommandRegistry::new();
        let result = registry.dispatch("Missing", b"{}").await;
        assert!(matches!(result, Err(DispatchError::UnknownCommand(name)) if name == "Missing"));
    }

    #[tokio::test]
    async fn test_registry_fatal_input() {
        let mut registry = CommandRegistry::new();
        registry.register(note_command("Note"));

        let result = registry.dispatch("Note", b"{").await;
        assert!(matches!(
            result,
            Err(DispatchError::Fatal(FatalError::InvalidInput(_)))
        ));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_registry_duplicate_registration_panics() {
        let mut registry = CommandRegistry::new();
        registry.register(note_command("Note"));
        registry.register(note_command("Note"));
    }

    #[test]
    fn test_registry_names_and_len() {
        let mut registry = CommandRegistry::new();
        assert!(registry.is_empty());

        registry.register(note_command("b"));
        registry.register(note_command("a"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert!(registry.get("a").is_some());
        assert!(registry.get("c").is_none());
    }
}
