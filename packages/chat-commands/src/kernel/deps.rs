//! Command dependencies (using traits for testability)
//!
//! This module provides the dependency container handed to every command
//! constructor. External services are trait objects so tests can swap in
//! mocks.

use anyhow::Result;
use async_trait::async_trait;
use slack::SlackService;
use std::sync::Arc;

use crate::kernel::BaseSlackService;

// =============================================================================
// SlackService Adapter (implements BaseSlackService trait)
// =============================================================================

/// Wrapper around SlackService that implements BaseSlackService trait
pub struct SlackAdapter(pub Arc<SlackService>);

impl SlackAdapter {
    pub fn new(service: Arc<SlackService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseSlackService for SlackAdapter {
    async fn update_message(&self, channel_id: &str, message_ts: &str, text: &str) -> Result<()> {
        self.0
            .update_message(channel_id, message_ts, text)
            .await
            .map_err(anyhow::Error::from)
    }
}

// =============================================================================
// CommandDeps
// =============================================================================

/// Dependencies shared by all commands
#[derive(Clone)]
pub struct CommandDeps {
    pub slack: Arc<dyn BaseSlackService>,
}

impl CommandDeps {
    pub fn new(slack: Arc<dyn BaseSlackService>) -> Self {
        Self { slack }
    }
}
