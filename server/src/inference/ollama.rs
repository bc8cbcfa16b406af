//! Ollama HTTP client.
//!
//! Talks to `/api/tags` for the liveness probe and `/api/generate` for
//! single-shot, non-streaming completions. No retries and no client-side
//! timeouts: a request lives as long as the transport lets it.

use serde::{Deserialize, Serialize};

use super::types::{InferenceBackend, InferenceError};

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Build a client for the server at `base_url` generating with `model`.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(base_url: &str, model: &str) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| InferenceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), model: model.to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl InferenceBackend for OllamaClient {
    async fn list_models(&self) -> Result<Vec<String>, InferenceError> {
        let response = self
            .http
            .get(self.url("/api/tags"))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::NotResponding { status: status.as_u16() });
        }

        let text = response.text().await.map_err(transport_error)?;
        let tags: TagsResponse = serde_json::from_str(&text).map_err(|e| InferenceError::Parse(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = GenerateRequest { model: &self.model, prompt, stream: false };
        let response = self
            .http
            .post(self.url("/api/generate"))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(InferenceError::ModelNotFound { model: self.model.clone() });
        }
        if !status.is_success() {
            return Err(InferenceError::Status { status: status.as_u16() });
        }

        let text = response.text().await.map_err(transport_error)?;
        parse_generate_response(&text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Connection-phase failures mean the server is not running; anything later
/// is surfaced with the transport's own message.
fn transport_error(e: reqwest::Error) -> InferenceError {
    if e.is_connect() {
        InferenceError::Connect(e.to_string())
    } else {
        InferenceError::Request(e.to_string())
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagModel>,
}

#[derive(Deserialize)]
struct TagModel {
    name: String,
}

fn parse_generate_response(text: &str) -> Result<String, InferenceError> {
    let parsed: GenerateResponse = serde_json::from_str(text).map_err(|e| InferenceError::Parse(e.to_string()))?;
    if let Some(error) = parsed.error {
        return Err(InferenceError::Upstream(error));
    }
    parsed.response.ok_or_else(|| InferenceError::Parse("missing `response` field".to_owned()))
}

#[cfg(test)]
#[path = "ollama_test.rs"]
mod tests;
