// Run one command invocation against the real Slack backend
//
// Usage:
//   chat-update '{"text":"hi","messageTs":"123.45","channelId":"C1"}'
//   echo '{...}' | chat-update

use std::sync::Arc;

use anyhow::{Context, Result};
use chat_commands::domains::chat::CHAT_UPDATE_COMMAND;
use chat_commands::kernel::{CommandDeps, SlackAdapter};
use chat_commands::{build_registry, Config};
use clap::Parser;
use slack::SlackService;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "chat-update", about = "Dispatch a raw JSON payload to a chat command")]
struct Args {
    /// Raw JSON payload (read from stdin when omitted)
    payload: Option<String>,

    /// Command to dispatch to
    #[arg(long, default_value = CHAT_UPDATE_COMMAND)]
    command: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean event
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chat_commands=debug,command_kit=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api_url = %config.slack_api_url, "Configuration loaded");

    let slack = Arc::new(SlackService::new(config.slack_options()));
    let deps = CommandDeps::new(Arc::new(SlackAdapter::new(slack)));
    let registry = build_registry(&deps);

    let payload = match args.payload {
        Some(payload) => payload,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read payload from stdin")?;
            buf
        }
    };

    let event = registry
        .dispatch(&args.command, payload.as_bytes())
        .await
        .with_context(|| format!("Command {} could not handle the input", args.command))?;

    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
