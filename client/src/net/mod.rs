//! Networking modules for the relay's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the `/api/chat` calls and `types` defines the wire schema
//! shared with the server's relay handler.

pub mod api;
pub mod types;
