//! Core event types.
//!
//! # Schema tags
//!
//! Every event a command can emit is identified by an [`EventDef`]. Event
//! defs are static configuration: they are declared once as constants, listed
//! on the [`Command`](crate::Command) that emits them, and used by the engine
//! for routing and serialization.
//!
//! Typed outcome enums map each variant to its def through an explicit match
//! in [`OutputEvent::event_def`], so the engine never inspects payload types
//! at runtime.

use std::fmt;

use serde::Serialize;

use crate::error::FatalError;

/// Schema tag identifying one kind of event.
///
/// Names must be unique within the engine's event namespace and must not
/// change once workflows route on them.
///
/// # Example
///
/// ```ignore
/// use command_kit::EventDef;
///
/// pub const MESSAGE_SENT: EventDef = EventDef::new("MessageSent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventDef {
    pub name: &'static str,
}

impl EventDef {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl fmt::Display for EventDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An engine-facing event: a schema tag plus its serialized payload.
///
/// This is the only shape that crosses the command boundary. Commands build
/// their outcomes as typed values and convert them here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub event_def: EventDef,
    pub payload: serde_json::Value,
}

impl Event {
    /// Serialize `payload` under `event_def`.
    pub fn new<P: Serialize>(event_def: EventDef, payload: &P) -> Result<Self, FatalError> {
        Ok(Self {
            event_def,
            payload: serde_json::to_value(payload).map_err(FatalError::Encode)?,
        })
    }
}

/// A typed outcome that knows its own schema tag.
///
/// Implement this on a command's closed outcome enum. Serialization of the
/// variant's payload is left to the implementor, since variants usually
/// flatten different structs.
pub trait OutputEvent {
    /// The static tag for this variant.
    fn event_def(&self) -> EventDef;

    /// Convert into an engine-facing [`Event`].
    fn into_event(self) -> Result<Event, FatalError>;
}
