//! Chat assistant panel. The transcript lives for the whole shell session.

use tracing::warn;

use crate::{
    client::{ApiClient, DataSource},
    domain::ChatMessage,
};

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "How can I save more money?",
    "What's my spending pattern?",
    "Should I adjust my budget?",
    "Explain my financial forecast",
    "Give me budgeting tips",
];

/// Assistant line appended when a message could not be answered at all.
pub const SEND_FAILURE_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn suggested_questions() -> &'static [&'static str] {
        &SUGGESTED_QUESTIONS
    }

    /// Appends the user's line and the assistant's answer, returning the answer.
    /// Blank input is ignored and returns `None`.
    pub fn send(&mut self, client: &ApiClient, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));

        let reply = match client.chat(text) {
            Ok(fetched) => {
                if fetched.source == DataSource::Fallback {
                    warn!("assistant unavailable, showing placeholder reply");
                }
                fetched.data
            }
            Err(err) => {
                warn!(error = %err, "chat request failed");
                SEND_FAILURE_MESSAGE.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(reply));
        self.messages.last()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
