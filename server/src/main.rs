mod config;
mod inference;
mod routes;
mod state;

use std::sync::Arc;

use inference::InferenceBackend;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::RelayConfig::from_env().expect("invalid relay configuration");

    let client = inference::OllamaClient::new(&config.ollama_base_url, &config.model)
        .expect("inference client init failed");
    tracing::info!(model = client.model(), base_url = client.base_url(), "inference client initialized");

    let state = state::AppState::new(Arc::new(client));

    // Fall back to the bare relay when no Leptos site configuration is present
    // (e.g. running the binary directly instead of through cargo-leptos).
    let app = match routes::leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos configuration unavailable, serving relay API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind((config.bind_addr.as_str(), config.port))
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.bind_addr, port = config.port, "localchat listening");
    axum::serve(listener, app).await.expect("server failed");
}
