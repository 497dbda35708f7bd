//! # Command Kit
//!
//! The primitives a command plugs into before the orchestration engine can
//! route it.
//!
//! ## Core Concepts
//!
//! - [`Command`] = a named unit of work plus the events it may emit
//! - [`Event`] = a fact, tagged with a static [`EventDef`]
//! - [`FatalError`] = the input could not be interpreted at all
//!
//! The key principle: **One Invocation = One Outcome**. A handler either
//! returns exactly one event or a fatal error, never both and never neither.
//!
//! ## Flow
//!
//! ```text
//! Engine
//!     │
//!     ▼ dispatch(name, raw)
//! CommandRegistry
//!     │
//!     ▼ handle(raw)
//! Command ──► CommandHandler.handle()
//!                 │
//!                 ├─► Ok(Event { event_def, payload })  ──► routed by event_def
//!                 │
//!                 └─► Err(FatalError)                   ──► invocation is broken
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use command_kit::{Command, CommandRegistry, EventDef};
//!
//! const PINGED: EventDef = EventDef::new("Pinged");
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(Command::new("Ping", vec![PINGED], Arc::new(PingHandler)));
//!
//! let event = registry.dispatch("Ping", br#"{}"#).await?;
//! assert_eq!(event.event_def, PINGED);
//! ```

mod command;
mod core;
mod error;
mod registry;

pub use crate::command::{Command, CommandHandler};
pub use crate::core::{Event, EventDef, OutputEvent};
pub use crate::error::{DispatchError, FatalError};
pub use crate::registry::CommandRegistry;

pub use async_trait::async_trait;
