//! Chat relay route: forwards prompts and health checks to the inference server.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes `{"error": <text>}`. Missing model maps to 404,
//! an unreachable inference server to 503, and everything else to 500. The
//! error text is the `Display` of [`InferenceError`], which the UI shows
//! verbatim.
//!
//! The body is parsed as JSON whatever the `Content-Type` says, so a bare
//! `curl -d '{"message":"hi"}'` is accepted.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use localchat_client::net::types::{ChatReply, ChatRequest};

use crate::inference::{InferenceBackend, InferenceError};
use crate::state::AppState;

/// `POST /api/chat`: health check or single-shot generation.
pub async fn relay_chat(State(state): State<AppState>, body: Bytes) -> Response {
    let req = match serde_json::from_slice::<ChatRequest>(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(error = %e, "chat request rejected");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatReply::error(e.to_string()))).into_response();
        }
    };

    let result = if req.is_check_only() {
        check_connection(state.inference.as_ref()).await
    } else {
        generate_reply(state.inference.as_ref(), &req.message).await
    };

    match result {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, model = state.inference.model(), "chat relay failed");
            let status = inference_error_to_status(&e);
            (status, Json(ChatReply::error(e.to_string()))).into_response()
        }
    }
}

async fn check_connection(inference: &dyn InferenceBackend) -> Result<ChatReply, InferenceError> {
    let models = inference.list_models().await?;
    tracing::debug!(count = models.len(), "inference server reachable");
    Ok(ChatReply::connected())
}

async fn generate_reply(inference: &dyn InferenceBackend, message: &str) -> Result<ChatReply, InferenceError> {
    let response = inference.generate(message).await?;
    tracing::info!(prompt_len = message.len(), response_len = response.len(), "generation complete");
    Ok(ChatReply::response(response))
}

pub(crate) fn inference_error_to_status(err: &InferenceError) -> StatusCode {
    match err {
        InferenceError::ModelNotFound { .. } => StatusCode::NOT_FOUND,
        InferenceError::Connect(_) => StatusCode::SERVICE_UNAVAILABLE,
        InferenceError::NotResponding { .. }
        | InferenceError::Status { .. }
        | InferenceError::Upstream(_)
        | InferenceError::Request(_)
        | InferenceError::Parse(_)
        | InferenceError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
