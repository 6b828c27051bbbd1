//! Number Classification API server.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /api/classify-number?number=N`** -- primality, perfection,
//!   Armstrong status, parity, digit sum and a fun fact for `N`
//! - **`GET /health`** -- dependency-free liveness probe
//! - **`GET /`** -- minimal HTML page describing the API
//!
//! # Architecture
//!
//! Each request runs `parse -> validate -> classify -> fetch fact ->
//! respond`. The shared [`AppState`] is built once at startup from
//! [`ServiceConfig`] and never mutated, so requests need no locking. The
//! only suspension point is the trivia lookup inside
//! [`numclass_facts::FactProvider`], which is bounded by a timeout and
//! degrades to a fallback fact instead of failing the request.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, ServiceConfig};
pub use error::{ApiError, StartupError};
pub use router::build_router;
pub use server::{run, start_server, ServerConfig, ServerError};
pub use state::AppState;
