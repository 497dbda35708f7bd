// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Validation and event mapping live in the domain commands that use them.
//
// Naming convention: Base* for trait names (e.g., BaseSlackService)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Slack Service Trait (Infrastructure - chat messages)
// =============================================================================

#[async_trait]
pub trait BaseSlackService: Send + Sync {
    /// Replace the text of an existing message.
    ///
    /// `message_ts` is the backend's opaque message identifier. The error's
    /// Display text is reported to the engine verbatim.
    async fn update_message(&self, channel_id: &str, message_ts: &str, text: &str) -> Result<()>;
}
