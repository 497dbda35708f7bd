use command_kit::{Event, EventDef, FatalError, OutputEvent};
use serde::Serialize;

use crate::domains::chat::models::ChatUpdateInput;

pub const CHAT_UPDATE_SUCCESS: EventDef = EventDef::new("ChatUpdateSuccess");
pub const CHAT_UPDATE_FAIL: EventDef = EventDef::new("ChatUpdateFail");

/// Chat update outcomes - exactly one per handled input.
///
/// Both variants carry the original input so the engine can correlate the
/// outcome with the request that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatUpdateEvent {
    /// The backend accepted the update
    Success { input: ChatUpdateInput },

    /// Validation or the backend call failed
    Failed {
        input: ChatUpdateInput,
        reason: String,
    },
}

impl ChatUpdateEvent {
    pub fn input(&self) -> &ChatUpdateInput {
        match self {
            Self::Success { input } | Self::Failed { input, .. } => input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[derive(Serialize)]
struct ChatUpdateFail<'a> {
    #[serde(flatten)]
    input: &'a ChatUpdateInput,
    reason: &'a str,
}

impl OutputEvent for ChatUpdateEvent {
    fn event_def(&self) -> EventDef {
        match self {
            Self::Success { .. } => CHAT_UPDATE_SUCCESS,
            Self::Failed { .. } => CHAT_UPDATE_FAIL,
        }
    }

    fn into_event(self) -> Result<Event, FatalError> {
        let def = self.event_def();
        match &self {
            Self::Success { input } => Event::new(def, input),
            Self::Failed { input, reason } => Event::new(def, &ChatUpdateFail { input, reason }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input() -> ChatUpdateInput {
        ChatUpdateInput::new("hi", "123.45", "C1")
    }

    #[test]
    fn variants_map_to_distinct_defs() {
        let success = ChatUpdateEvent::Success { input: input() };
        let failed = ChatUpdateEvent::Failed {
            input: input(),
            reason: "nope".to_string(),
        };

        assert_eq!(success.event_def(), CHAT_UPDATE_SUCCESS);
        assert_eq!(failed.event_def(), CHAT_UPDATE_FAIL);
        assert_ne!(CHAT_UPDATE_SUCCESS, CHAT_UPDATE_FAIL);
    }

    #[test]
    fn success_payload_is_the_input() {
        let event = ChatUpdateEvent::Success { input: input() }
            .into_event()
            .unwrap();

        assert_eq!(event.event_def, CHAT_UPDATE_SUCCESS);
        assert_eq!(
            event.payload,
            json!({ "text": "hi", "messageTs": "123.45", "channelId": "C1" })
        );
    }

    #[test]
    fn failed_payload_flattens_input_with_reason() {
        let event = ChatUpdateEvent::Failed {
            input: input(),
            reason: "channel not found".to_string(),
        }
        .into_event()
        .unwrap();

        assert_eq!(event.event_def, CHAT_UPDATE_FAIL);
        assert_eq!(
            event.payload,
            json!({
                "text": "hi",
                "messageTs": "123.45",
                "channelId": "C1",
                "reason": "channel not found",
            })
        );
    }
}
