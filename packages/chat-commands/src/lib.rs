// Chat commands - Slack-backed commands for the automation engine
//
// Each command decodes raw JSON input, performs one backend call and
// returns exactly one schema-tagged event.

pub mod config;
pub mod domains;
pub mod kernel;

pub use config::Config;
pub use domains::build_registry;
