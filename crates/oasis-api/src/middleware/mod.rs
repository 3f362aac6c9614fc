//! # Middleware
//!
//! - `metrics`: atomic request counters and the `/metrics` snapshot.
//! - `tracing_layer`: per-request spans via `tower_http`.

pub mod metrics;
pub mod tracing_layer;
