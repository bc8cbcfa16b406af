//! # localchat-client
//!
//! Leptos + WASM frontend for the local chat relay.
//!
//! This crate contains the chat page, its components, the in-memory
//! conversation state, markdown rendering, and the REST helpers that talk to
//! the relay's `/api/chat` endpoint. The server crate renders it via SSR; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
