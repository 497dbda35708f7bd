use serde::{Deserialize, Serialize};

use crate::SlackError;

#[derive(Debug, Serialize)]
pub struct ChatUpdateRequest<'a> {
    pub channel: &'a str,
    pub ts: &'a str,
    pub text: &'a str,
}

/// Common envelope of every Web API response.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SlackResponse {
    pub fn into_result(self) -> Result<(), SlackError> {
        if self.ok {
            return Ok(());
        }
        Err(SlackError::Api(
            self.error.unwrap_or_else(|| "unknown_error".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response() {
        let response: SlackResponse =
            serde_json::from_str(r#"{"ok":true,"channel":"C1","ts":"123.45"}"#).unwrap();
        assert!(response.into_result().is_ok());
    }

    #[test]
    fn test_error_response_keeps_code() {
        let response: SlackResponse =
            serde_json::from_str(r#"{"ok":false,"error":"message_not_found"}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(matches!(err, SlackError::Api(ref code) if code == "message_not_found"));
    }

    #[test]
    fn test_error_response_without_code() {
        let response: SlackResponse = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert_eq!(response.into_result().unwrap_err().to_string(), "unknown_error");
    }

    #[test]
    fn test_request_serializes_wire_names() {
        let body = ChatUpdateRequest {
            channel: "C1",
            ts: "123.45",
            text: "hi",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "channel": "C1", "ts": "123.45", "text": "hi" })
        );
    }
}
