// src/lookup/mod.rs
// =============================================================================
// This module talks to the order service.
//
// Submodules:
// - id: The order identifier (trimmed, non-empty, percent-encoded for paths)
// - fetch: Builds the request URL, sends GET /api/order/{id}, decodes JSON
//
// The outcome of one lookup is a Result<serde_json::Value, LookupError>, so
// the caller can render it without knowing anything about HTTP.
// =============================================================================

mod fetch;
mod id;

pub use fetch::{LookupError, OrderClient};
pub use id::{trim_id, OrderId};
