use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Request to replace the text of a previously sent message.
///
/// Wire field names (`text`, `messageTs`, `channelId`) are stable. Absent
/// or null fields decode as empty strings and are rejected by
/// [`ChatUpdateInput::validate`], not by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatUpdateInput {
    /// What the updated message will look like
    #[serde(deserialize_with = "null_as_empty")]
    pub text: String,
    /// Timestamp of the message to update (backend message id)
    #[serde(rename = "messageTs", deserialize_with = "null_as_empty")]
    pub message_timestamp: String,
    #[serde(rename = "channelId", deserialize_with = "null_as_empty")]
    pub channel_id: String,
}

impl ChatUpdateInput {
    pub fn new(
        text: impl Into<String>,
        message_timestamp: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            message_timestamp: message_timestamp.into(),
            channel_id: channel_id.into(),
        }
    }

    /// Decode a raw payload, accepting only a JSON object or `null`.
    ///
    /// `null` decodes as an all-empty input. Arrays and scalars are decode
    /// errors, even when their elements would line up with the fields.
    pub fn from_json(raw: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice(raw)? {
            Value::Null => Ok(Self::default()),
            value @ Value::Object(_) => serde_json::from_value(value),
            other => Err(serde_json::Error::custom(format!(
                "invalid type: {}, expected a chat update object",
                json_kind(&other)
            ))),
        }
    }

    /// Check every required field, collecting all violations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::with_capacity(3);

        if self.text.is_empty() {
            violations.push(Violation::MissingText);
        }
        if self.channel_id.is_empty() {
            violations.push(Violation::MissingChannelId);
        }
        if self.message_timestamp.is_empty() {
            violations.push(Violation::MissingMessageTimestamp);
        }

        if violations.is_empty() {
            return Ok(());
        }
        Err(ValidationError { violations })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("missing text field")]
    MissingText,
    #[error("missing channel id field")]
    MissingChannelId,
    #[error("missing message timestamp field")]
    MissingMessageTimestamp,
}

/// Every violation found in one input, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
