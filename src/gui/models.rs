use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::analytics::{AnalyticsResponse, ChartType};

/// Fixed answer appended when both endpoints reject.
pub const ERROR_ANSWER: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

/// Greeting shown before any question is asked.
pub const WELCOME_ANSWER: &str =
    "Hi! Ask me anything about your analytics data and I'll answer with charts where it helps.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// One entry in the conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
    /// Opaque structured payload for the chart block, if any.
    pub data: Option<serde_json::Value>,
    pub chart_type: Option<ChartType>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            role: MessageRole::User,
            timestamp: Utc::now(),
            data: None,
            chart_type: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            role: MessageRole::Assistant,
            timestamp: Utc::now(),
            data: None,
            chart_type: None,
        }
    }

    /// Assistant message carrying the answer plus the optional chart
    /// payload from an analytics response.
    pub fn from_response(response: AnalyticsResponse) -> Self {
        let chart_type = response.resolved_chart_type();
        Self {
            id: Uuid::new_v4(),
            content: response.answer,
            role: MessageRole::Assistant,
            timestamp: Utc::now(),
            data: response.data,
            chart_type,
        }
    }

    /// Display timestamp in the local wall-clock format the message list
    /// shows next to every entry.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Append-only, insertion-ordered message list for one session.
///
/// Messages are only ever pushed; there is no reordering, no deletion and
/// no persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Starts with the static welcome message.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(WELCOME_ANSWER)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, response: AnalyticsResponse) {
        self.push(ChatMessage::from_response(response));
    }

    /// Appends the fixed error answer used when both endpoints reject.
    pub fn push_error(&mut self) {
        self.push(ChatMessage::assistant(ERROR_ANSWER));
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
