//! REST API helpers for communicating with the relay.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these calls only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `bool`/`Result` outputs instead of panics so relay or
//! inference failures turn into error turns without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatReply;
#[cfg(feature = "hydrate")]
use super::types::ChatRequest;

#[cfg(feature = "hydrate")]
const CHAT_ENDPOINT: &str = "/api/chat";

#[cfg(any(test, feature = "hydrate"))]
const FALLBACK_ERROR: &str = "Failed to get response";

/// Turn a relay answer into the assistant text or a user-facing error.
///
/// `body` is `None` when the response was not valid JSON.
#[cfg(any(test, feature = "hydrate"))]
fn reply_outcome(ok: bool, body: Option<ChatReply>) -> Result<String, String> {
    let body = body.unwrap_or_default();
    if !ok {
        return Err(body.error.unwrap_or_else(|| FALLBACK_ERROR.to_owned()));
    }
    body.response.ok_or_else(|| FALLBACK_ERROR.to_owned())
}

/// Ask the relay whether the inference server is reachable.
/// Returns `false` on any failure, and always on the server.
pub async fn check_connection() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Ok(request) = gloo_net::http::Request::post(CHAT_ENDPOINT).json(&ChatRequest::health_check()) else {
            return false;
        };
        match request.send().await {
            Ok(resp) => resp.ok(),
            Err(e) => {
                log::warn!("health check failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Send one user message through the relay and return the model's text.
///
/// # Errors
///
/// Returns the relay's `error` text on a non-OK status, `Failed to get
/// response` if the body carries no usable field, or the transport error text.
pub async fn send_message(text: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&ChatRequest::message(text))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let ok = resp.ok();
        let body = resp.json::<ChatReply>().await.ok();
        reply_outcome(ok, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}
