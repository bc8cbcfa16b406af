//! Conversation state for the chat page.
//!
//! DESIGN
//! ======
//! One linear state machine per page session: idle, then awaiting a response
//! after a submit, then idle again once the relay answers. The message list is
//! append-only; order is send order. Nothing here touches the network, so the
//! transitions are plain methods that components call around their requests.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub const GREETING: &str = "👋 Hello! I'm running locally on your computer. Ask me anything!";

/// Who produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

/// A single turn in the conversation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// State for the chat page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A request is in flight; further submits are ignored.
    pub loading: bool,
    /// Result of the last health check or exchange.
    pub connected: bool,
}

impl ChatState {
    /// Fresh session state: one assistant greeting, idle, not yet connected.
    #[must_use]
    pub fn with_greeting() -> Self {
        Self { messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING)], ..Self::default() }
    }

    /// Start a new exchange from raw input.
    ///
    /// Returns the trimmed prompt to send, or `None` (leaving state untouched)
    /// when the input is blank or a response is still pending.
    pub fn begin_submit(&mut self, input: &str) -> Option<String> {
        let prompt = input.trim();
        if prompt.is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, prompt));
        self.loading = true;
        Some(prompt.to_owned())
    }

    /// Finish the pending exchange with the assistant's reply.
    pub fn complete_success(&mut self, response: impl Into<String>) {
        self.messages.push(ChatMessage::new(ChatRole::Assistant, response));
        self.loading = false;
        self.connected = true;
    }

    /// Finish the pending exchange with an error turn.
    pub fn complete_failure(&mut self, error: &str) {
        self.messages.push(ChatMessage::new(ChatRole::Error, error_turn_text(error)));
        self.loading = false;
        self.connected = false;
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

/// Text shown for a failed exchange.
#[must_use]
pub fn error_turn_text(error: &str) -> String {
    format!("⚠️ Error: {error}. Make sure Ollama is running!")
}
