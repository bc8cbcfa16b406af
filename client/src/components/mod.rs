//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surfaces while reading/writing the shared
//! conversation state from Leptos context.

pub mod chat_panel;
pub mod status_bar;
