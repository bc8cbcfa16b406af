//! Wire types for `POST /api/chat`.
//!
//! Shared by the browser helpers and the server's relay handler, so both
//! sides agree on one schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body sent to the relay. A missing `message` reads as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "checkOnly", default, skip_serializing_if = "Option::is_none")]
    pub check_only: Option<bool>,
}

impl ChatRequest {
    /// A generation request for `message`.
    #[must_use]
    pub fn message(message: &str) -> Self {
        Self { message: message.to_owned(), check_only: None }
    }

    /// A health-check request. The message is ignored by the relay.
    #[must_use]
    pub fn health_check() -> Self {
        Self { message: "test".to_owned(), check_only: Some(true) }
    }

    /// Whether the relay should only probe the inference server.
    #[must_use]
    pub fn is_check_only(&self) -> bool {
        self.check_only.unwrap_or(false)
    }
}

/// Relay response body. The relay sets exactly one of these fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatReply {
    /// `{"status":"connected"}`
    #[must_use]
    pub fn connected() -> Self {
        Self { status: Some("connected".to_owned()), ..Self::default() }
    }

    /// `{"response": text}`
    #[must_use]
    pub fn response(text: String) -> Self {
        Self { response: Some(text), ..Self::default() }
    }

    /// `{"error": text}`
    #[must_use]
    pub fn error(text: String) -> Self {
        Self { error: Some(text), ..Self::default() }
    }
}
