//! Command handler trait and registration wrapper.
//!
//! Handlers are command functions that interpret raw input, perform IO and
//! return one event. They are **stateless** - the raw input carries all
//! needed data and shared clients are injected at construction.
//!
//! # Key Properties
//!
//! - **One Invocation = One Event** (or one [`FatalError`])
//! - **Stateless**: safe to invoke concurrently from many tasks
//! - **Declared outputs**: a [`Command`] lists every [`EventDef`] it may emit

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::{Event, EventDef};
use crate::error::FatalError;

/// A function from raw structured input to exactly one event.
///
/// # Example
///
/// ```ignore
/// struct PingHandler;
///
/// #[async_trait]
/// impl CommandHandler for PingHandler {
///     async fn handle(&self, raw: &[u8]) -> Result<Event, FatalError> {
///         let input: PingInput = serde_json::from_slice(raw).map_err(FatalError::InvalidInput)?;
///         Event::new(PINGED, &input)
///     }
/// }
/// ```
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, raw: &[u8]) -> Result<Event, FatalError>;
}

/// A handler wrapped together with its routing name and declared outputs.
///
/// `output_events` is static documentation the engine can validate upfront.
/// It is not enforced at runtime; debug builds only warn when a handler
/// emits an undeclared def.
#[derive(Clone)]
pub struct Command {
    name: &'static str,
    output_events: Vec<EventDef>,
    handler: Arc<dyn CommandHandler>,
}

impl Command {
    pub fn new(
        name: &'static str,
        output_events: Vec<EventDef>,
        handler: Arc<dyn CommandHandler>,
    ) -> Self {
        Self {
            name,
            output_events,
            handler,
        }
    }

    /// Stable routing key used by the engine.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every event def this command may emit.
    pub fn output_events(&self) -> &[EventDef] {
        &self.output_events
    }

    /// Check whether `def` is one of the declared outputs.
    pub fn declares(&self, def: &EventDef) -> bool {
        self.output_events.contains(def)
    }

    /// Run the handler once against `raw`.
    pub async fn handle(&self, raw: &[u8]) -> Result<Event, FatalError> {
        debug!(command = self.name, bytes = raw.len(), "handling command");

        let event = self.handler.handle(raw).await?;

        if cfg!(debug_assertions) && !self.declares(&event.event_def) {
            warn!(
                command = self.name,
                event = event.event_def.name,
                "command emitted an undeclared event"
            );
        }

        debug!(command = self.name, event = event.event_def.name, "command handled");
        Ok(event)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("output_events", &self.output_events)
            .finish_non_exhaustive()
    }
}
