//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! relay is stateless per request, so the only shared value is the immutable
//! inference backend handle. No locks, no per-request bookkeeping.

use std::sync::Arc;

use crate::inference::InferenceBackend;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<dyn InferenceBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(inference: Arc<dyn InferenceBackend>) -> Self {
        Self { inference }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
