//! Chat assistant payloads and the session-local message record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /chat/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub reply: String,
}

/// One line of the chat transcript. Never persisted or sent back.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            // v7 ids sort by creation time.
            id: Uuid::now_v7(),
            text: text.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_missing_user_id() {
        let request = ChatRequest {
            message: "hi".into(),
            user_id: None,
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"message":"hi"}"#);
    }

    #[test]
    fn message_ids_are_unique() {
        let first = ChatMessage::user("a");
        let second = ChatMessage::assistant("b");
        assert_ne!(first.id, second.id);
        assert!(first.is_user);
        assert!(!second.is_user);
    }
}
