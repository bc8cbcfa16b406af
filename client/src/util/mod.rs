//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold logic that does not need a browser, so it can be unit
//! tested natively.

pub mod markdown;
