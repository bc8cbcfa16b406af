use super::*;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

// =========================================================================
// Fake upstream
// =========================================================================

type Captured = Arc<Mutex<Vec<Value>>>;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn capture_generate(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    captured.lock().unwrap().push(body);
    Json(json!({ "model": "llama3.2", "response": "**hi** there", "done": true }))
}

// =========================================================================
// generate
// =========================================================================

#[tokio::test]
async fn generate_posts_fixed_model_non_streaming() {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route("/api/generate", post(capture_generate))
        .with_state(captured.clone());
    let base = spawn_upstream(router).await;

    let client = OllamaClient::new(&base, "llama3.2").unwrap();
    let text = client.generate("why is the sky blue?").await.unwrap();

    assert_eq!(text, "**hi** there");
    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0], json!({ "model": "llama3.2", "prompt": "why is the sky blue?", "stream": false }));
}

#[tokio::test]
async fn generate_404_maps_to_model_not_found() {
    let router = Router::new().route(
        "/api/generate",
        post(|| async { (StatusCode::NOT_FOUND, Json(json!({ "error": "model 'llama3.2' not found" }))) }),
    );
    let base = spawn_upstream(router).await;

    let client = OllamaClient::new(&base, "llama3.2").unwrap();
    let err = client.generate("hello").await.unwrap_err();
    assert_eq!(err, InferenceError::ModelNotFound { model: "llama3.2".into() });
}

#[tokio::test]
async fn generate_other_status_maps_to_status_error() {
    let router = Router::new().route("/api/generate", post(|| async { StatusCode::BAD_GATEWAY.into_response() }));
    let base = spawn_upstream(router).await;

    let client = OllamaClient::new(&base, "llama3.2").unwrap();
    let err = client.generate("hello").await.unwrap_err();
    assert_eq!(err, InferenceError::Status { status: 502 });
    assert_eq!(err.to_string(), "Ollama error: 502");
}

#[tokio::test]
async fn generate_connection_refused_maps_to_connect() {
    let client = OllamaClient::new(&refused_url().await, "llama3.2").unwrap();
    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, InferenceError::Connect(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn generate_malformed_body_maps_to_parse() {
    let router = Router::new().route("/api/generate", post(|| async { "not json" }));
    let base = spawn_upstream(router).await;

    let client = OllamaClient::new(&base, "llama3.2").unwrap();
    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, InferenceError::Parse(_)), "unexpected error: {err:?}");
}

// =========================================================================
// list_models
// =========================================================================

#[tokio::test]
async fn list_models_returns_names() {
    let router = Router::new().route(
        "/api/tags",
        get(|| async { Json(json!({ "models": [{ "name": "llama3.2:latest" }, { "name": "mistral:7b" }] })) }),
    );
    let base = spawn_upstream(router).await;

    let client = OllamaClient::new(&format!("{base}/"), "llama3.2").unwrap();
    let models = client.list_models().await.unwrap();
    assert_eq!(models, vec!["llama3.2:latest".to_owned(), "mistral:7b".to_owned()]);
}

#[tokio::test]
async fn list_models_error_status_maps_to_not_responding() {
    let router = Router::new().route("/api/tags", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = spawn_upstream(router).await;

    let client = OllamaClient::new(&base, "llama3.2").unwrap();
    let err = client.list_models().await.unwrap_err();
    assert_eq!(err, InferenceError::NotResponding { status: 500 });
}

#[tokio::test]
async fn list_models_connection_refused_maps_to_connect() {
    let client = OllamaClient::new(&refused_url().await, "llama3.2").unwrap();
    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, InferenceError::Connect(_)), "unexpected error: {err:?}");
}

// =========================================================================
// parse_generate_response
// =========================================================================

#[test]
fn parse_generate_response_surfaces_embedded_error() {
    let err = parse_generate_response(r#"{"error":"model requires more system memory"}"#).unwrap_err();
    assert_eq!(err, InferenceError::Upstream("model requires more system memory".into()));
}

#[test]
fn parse_generate_response_without_text_is_parse_error() {
    let err = parse_generate_response(r#"{"model":"llama3.2","done":true}"#).unwrap_err();
    assert_eq!(err, InferenceError::Parse("missing `response` field".to_owned()));
}

#[test]
fn parse_generate_response_ignores_extra_fields() {
    let text = parse_generate_response(r#"{"model":"llama3.2","response":"ok","done":true,"eval_count":3}"#).unwrap();
    assert_eq!(text, "ok");
}

#[test]
fn new_trims_trailing_slash() {
    let client = OllamaClient::new("http://localhost:11434/", "llama3.2").unwrap();
    assert_eq!(client.base_url(), "http://localhost:11434");
    assert_eq!(client.model(), "llama3.2");
}
