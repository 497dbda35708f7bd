//! Chat update command - edits a previously sent message
//!
//! Flow (single shot, no retries):
//!   decode → validate → update_message → ChatUpdateSuccess | ChatUpdateFail
//!
//! A payload that cannot be decoded at all is a `FatalError`, not a
//! `ChatUpdateFail`.

use std::sync::Arc;

use async_trait::async_trait;
use command_kit::{Command, CommandHandler, Event, FatalError, OutputEvent};
use tracing::{info, warn};

use crate::domains::chat::events::{ChatUpdateEvent, CHAT_UPDATE_FAIL, CHAT_UPDATE_SUCCESS};
use crate::domains::chat::models::ChatUpdateInput;
use crate::kernel::BaseSlackService;

pub const CHAT_UPDATE_COMMAND: &str = "ChatUpdate";

/// Build the chat update command for registration.
pub fn chat_update_command(slack: Arc<dyn BaseSlackService>) -> Command {
    Command::new(
        CHAT_UPDATE_COMMAND,
        vec![CHAT_UPDATE_SUCCESS, CHAT_UPDATE_FAIL],
        Arc::new(ChatUpdateHandler::new(slack)),
    )
}

pub struct ChatUpdateHandler {
    slack: Arc<dyn BaseSlackService>,
}

impl ChatUpdateHandler {
    pub fn new(slack: Arc<dyn BaseSlackService>) -> Self {
        Self { slack }
    }

    /// Decode `raw` and run the update.
    pub async fn handle(&self, raw: &[u8]) -> Result<ChatUpdateEvent, FatalError> {
        let input = ChatUpdateInput::from_json(raw).map_err(FatalError::InvalidInput)?;

        Ok(self.execute(input).await)
    }

    /// Run the update for an already decoded input.
    pub async fn execute(&self, input: ChatUpdateInput) -> ChatUpdateEvent {
        if let Err(e) = input.validate() {
            warn!(error = %e, "chat update input rejected");
            return ChatUpdateEvent::Failed {
                input,
                reason: e.to_string(),
            };
        }

        let result = self
            .slack
            .update_message(&input.channel_id, &input.message_timestamp, &input.text)
            .await;

        match result {
            Ok(()) => {
                info!(
                    channel_id = %input.channel_id,
                    message_ts = %input.message_timestamp,
                    "chat message updated"
                );
                ChatUpdateEvent::Success { input }
            }
            Err(e) => {
                warn!(
                    channel_id = %input.channel_id,
                    message_ts = %input.message_timestamp,
                    error = %e,
                    "chat message update failed"
                );
                ChatUpdateEvent::Failed {
                    input,
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl CommandHandler for ChatUpdateHandler {
    async fn handle(&self, raw: &[u8]) -> Result<Event, FatalError> {
        ChatUpdateHandler::handle(self, raw).await?.into_event()
    }
}
