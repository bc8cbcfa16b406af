//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page holds a single conversation model. Components read and write it
//! through a `RwSignal` provided as Leptos context.

pub mod chat;
