//! One-shot status messages shown on the next rendered page.
//!
//! A write handler queues a [`FlashMessage`] before redirecting; the page that
//! renders next drains the queue. The queue is carried between requests as a
//! JSON array (see [`encode`] / [`decode`]).

use serde::{Deserialize, Serialize};

/// Message category. Serialized with the names the front end styles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    #[serde(rename = "danger")]
    Failure,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub category: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn new(category: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Failure, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Info, message)
    }
}

/// Serialize a message queue for transport.
pub fn encode(messages: &[FlashMessage]) -> String {
    serde_json::to_string(messages).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a transported message queue. Garbage yields an empty queue.
pub fn decode(raw: &str) -> Vec<FlashMessage> {
    serde_json::from_str(raw).unwrap_or_default()
}
