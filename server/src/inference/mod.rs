//! Inference: adapter for the local language-model server.
//!
//! DESIGN
//! ======
//! The relay only needs two calls from the inference server: a model listing
//! (used as a liveness probe) and a single non-streaming generation. Both sit
//! behind the [`InferenceBackend`] trait so route handlers can be exercised
//! against mocks. [`OllamaClient`] is the production implementation.

pub mod ollama;
pub mod types;

pub use ollama::OllamaClient;
pub use types::{InferenceBackend, InferenceError};
