use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub slack_token: String,
    pub slack_api_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            slack_token: env::var("SLACK_TOKEN").context("SLACK_TOKEN must be set")?,
            slack_api_url: env::var("SLACK_API_URL")
                .unwrap_or_else(|_| slack::DEFAULT_API_URL.to_string()),
        })
    }

    pub fn slack_options(&self) -> slack::SlackOptions {
        slack::SlackOptions::new(&self.slack_token).with_api_url(&self.slack_api_url)
    }
}
