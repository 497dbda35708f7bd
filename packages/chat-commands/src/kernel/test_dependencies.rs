// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into CommandDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::BaseSlackService;

// =============================================================================
// Mock Slack Service
// =============================================================================

/// Arguments captured from an update_message call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMessageCall {
    pub channel_id: String,
    pub message_ts: String,
    pub text: String,
}

/// Records every call and answers with a fixed outcome.
#[derive(Clone, Default)]
pub struct MockSlackService {
    calls: Arc<Mutex<Vec<UpdateMessageCall>>>,
    error: Option<String>,
}

impl MockSlackService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            error: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<UpdateMessageCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseSlackService for MockSlackService {
    async fn update_message(&self, channel_id: &str, message_ts: &str, text: &str) -> Result<()> {
        self.calls.lock().unwrap().push(UpdateMessageCall {
            channel_id: channel_id.to_string(),
            message_ts: message_ts.to_string(),
            text: text.to_string(),
        });

        match &self.error {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}
