//! Inference types: the backend trait and its error enum.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by inference backend operations.
///
/// The `Display` text of each variant is what the chat UI shows the user, so
/// the connection and missing-model variants carry actionable instructions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// The inference server could not be reached (connection refused, DNS).
    #[error("Cannot connect to Ollama. Make sure it's running: ollama serve")]
    Connect(String),

    /// The inference server does not have the configured model.
    #[error("Model not found. Run: ollama pull {model}")]
    ModelNotFound { model: String },

    /// The model listing endpoint answered with a non-success status.
    #[error("Ollama not responding")]
    NotResponding { status: u16 },

    /// The generation endpoint answered with an unexpected non-success status.
    #[error("Ollama error: {status}")]
    Status { status: u16 },

    /// The inference server reported an error inside a success response.
    #[error("{0}")]
    Upstream(String),

    /// The HTTP request failed after the connection was established.
    #[error("{0}")]
    Request(String),

    /// The inference server response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Async trait over the inference server. Enables mocking in tests.
#[async_trait::async_trait]
pub trait InferenceBackend: Send + Sync {
    /// List the model names installed on the inference server.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Connect`] if the server is unreachable and
    /// [`InferenceError::NotResponding`] on a non-success status.
    async fn list_models(&self) -> Result<Vec<String>, InferenceError>;

    /// Run one non-streaming generation for `prompt` and return the text.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::ModelNotFound`] on a 404 from the server,
    /// [`InferenceError::Connect`] if the server is unreachable, and
    /// [`InferenceError::Status`] for any other non-success status.
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;

    /// The fixed model identifier used for generation.
    fn model(&self) -> &str;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
