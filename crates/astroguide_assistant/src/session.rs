//! Chat transcript: greeting, user turns and canned replies.

use serde::Serialize;

use crate::delay::ThinkingDelay;
use crate::knowledge::{GREETING, find_answer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Citations are empty for user messages and the
/// greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
}

impl Message {
    fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_string(),
            citations: Vec::new(),
        }
    }

    fn assistant(content: &str, citations: &[&str]) -> Self {
        Self {
            role: Role::Assistant,
            content: content.to_string(),
            citations: citations.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// An in-memory conversation with the canned assistant.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    delay: ThinkingDelay,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Session opened by the greeting, with no reply delay.
    pub fn new() -> Self {
        Self::with_delay(ThinkingDelay::none())
    }

    pub fn with_delay(delay: ThinkingDelay) -> Self {
        Self {
            messages: vec![Message::assistant(GREETING, &[])],
            delay,
        }
    }

    /// Record `query` and the matching reply, pausing for the configured
    /// delay first. Blank queries are ignored and return `None`.
    pub fn ask(&mut self, query: &str) -> Option<&Message> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.messages.push(Message::user(query));
        self.delay.pause();
        let answer = find_answer(query);
        log::debug!("query matched {:?}", answer.topic);
        self.messages
            .push(Message::assistant(answer.text, answer.citations));
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of accepted user queries.
    pub fn turns(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }
}
