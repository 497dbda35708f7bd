//! Shared harness for chat command tests.

#![allow(dead_code)]

use std::sync::Arc;

use chat_commands::domains::chat::ChatUpdateHandler;
use chat_commands::kernel::{CommandDeps, MockSlackService};

pub fn handler_with(slack: &MockSlackService) -> ChatUpdateHandler {
    ChatUpdateHandler::new(Arc::new(slack.clone()))
}

pub fn deps_with(slack: &MockSlackService) -> CommandDeps {
    CommandDeps::new(Arc::new(slack.clone()))
}

pub fn payload(text: &str, message_ts: &str, channel_id: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "text": text,
        "messageTs": message_ts,
        "channelId": channel_id,
    }))
    .unwrap()
}
