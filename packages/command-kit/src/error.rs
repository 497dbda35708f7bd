//! Error types for command handling.
//!
//! # The Error Boundary Rule
//!
//! > **Recoverable failures are events, not errors.**
//!
//! - A command that validated its input and called its backend returns an
//!   [`Event`](crate::Event), even when the call failed. The failure variant
//!   is routable by the engine like any other fact.
//! - [`FatalError`] is reserved for invocations that are broken in
//!   themselves: a payload the handler cannot interpret at all.
//!
//! # Example
//!
//! ```ignore
//! match registry.dispatch("ChatUpdate", raw).await {
//!     Ok(event) => engine.route(event),
//!     Err(DispatchError::UnknownCommand(name)) => reject(name),
//!     Err(DispatchError::Fatal(e)) => engine.mark_broken(e.to_string()),
//! }
//! ```

use thiserror::Error;

/// An unrecoverable handling error, distinct from any business event.
#[derive(Debug, Error)]
pub enum FatalError {
    /// The raw input does not match the shape the command expects.
    #[error("input is not valid: {0}")]
    InvalidInput(#[source] serde_json::Error),

    /// An outcome payload could not be serialized.
    #[error("event payload could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors returned by [`CommandRegistry::dispatch`](crate::CommandRegistry::dispatch).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No command is registered under this name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command could not handle the input.
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn test_invalid_input_includes_diagnostic() {
        let err = FatalError::InvalidInput(decode_error());
        let message = err.to_string();
        assert!(message.starts_with("input is not valid: "));
        assert!(message.contains("EOF"));
    }

    #[test]
    fn test_dispatch_fatal_is_transparent() {
        let err = DispatchError::from(FatalError::InvalidInput(decode_error()));
        assert!(err.to_string().starts_with("input is not valid: "));
    }

    #[test]
    fn test_unknown_command_display() {
        let err = DispatchError::UnknownCommand("Nope".to_string());
        assert_eq!(err.to_string(), "unknown command: Nope");
    }
}
