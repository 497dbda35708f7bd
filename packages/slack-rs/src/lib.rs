// https://api.slack.com/methods/chat.update

pub mod models;

use reqwest::Client;
use thiserror::Error;

use crate::models::{ChatUpdateRequest, SlackResponse};

pub const DEFAULT_API_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone)]
pub struct SlackOptions {
    pub token: String,
    pub api_url: String,
}

impl SlackOptions {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

/// Slack Web API failures.
///
/// `Api` carries Slack's own error code (`channel_not_found`,
/// `message_not_found`, `cant_update_message`, ...) so callers can pass it
/// through unchanged.
#[derive(Debug, Error)]
pub enum SlackError {
    #[error("request to slack failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("slack returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{0}")]
    Api(String),
}

#[derive(Debug, Clone)]
pub struct SlackService {
    options: SlackOptions,
    client: Client,
}

impl SlackService {
    pub fn new(options: SlackOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.options.api_url.trim_end_matches('/'), method)
    }

    /// Replace the text of the message identified by `ts` in `channel`.
    pub async fn update_message(
        &self,
        channel: &str,
        ts: &str,
        text: &str,
    ) -> Result<(), SlackError> {
        let body = ChatUpdateRequest { channel, ts, text };

        let response = self
            .client
            .post(self.method_url("chat.update"))
            .bearer_auth(&self.options.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %body, "slack chat.update returned an error status");
            return Err(SlackError::Status { status, body });
        }

        response.json::<SlackResponse>().await?.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_api_url() {
        let options = SlackOptions::new("xoxb-test");
        assert_eq!(options.token, "xoxb-test");
        assert_eq!(options.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_method_url_trims_trailing_slash() {
        let service =
            SlackService::new(SlackOptions::new("t").with_api_url("http://localhost:9000/api/"));
        assert_eq!(
            service.method_url("chat.update"),
            "http://localhost:9000/api/chat.update"
        );
    }

    #[test]
    fn test_api_error_displays_code_verbatim() {
        let err = SlackError::Api("channel_not_found".to_string());
        assert_eq!(err.to_string(), "channel_not_found");
    }
}
