//! Error types for the classification API.
//!
//! [`ApiError`] covers the two client-facing rejections. Each maps to a
//! `400 Bad Request` with a fixed sentinel body via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation:
//!
//! | Variant | Body |
//! |---------|------|
//! | [`ApiError::InvalidFormat`] | `{"number": "alphabet", "error": true}` |
//! | [`ApiError::TooLarge`] | `{"number": "too large", "error": true}` |
//!
//! [`StartupError`] is the process-level error that wraps every failure
//! mode between loading configuration and the server shutting down.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use numclass_facts::FactError;

use crate::config::ConfigError;
use crate::server::ServerError;

/// Rejections produced while parsing and validating the `number` parameter.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// The input is not a base-10 integer.
    #[error("invalid number format: {input:?}")]
    InvalidFormat {
        /// The raw query value.
        input: String,
    },

    /// The input is an integer whose magnitude exceeds the ceiling.
    #[error("number {input:?} exceeds maximum magnitude {max_magnitude}")]
    TooLarge {
        /// The raw query value.
        input: String,
        /// The configured ceiling.
        max_magnitude: u64,
    },
}

impl ApiError {
    /// The value placed in the `number` field of the rejection body.
    pub const fn sentinel(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "alphabet",
            Self::TooLarge { .. } => "too large",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "number": self.sentinel(),
            "error": true,
        });

        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}

/// Top-level error for starting and running the service.
///
/// Each variant wraps a specific subsystem error so the binary can
/// propagate any of them with `?`.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The trivia client could not be built.
    #[error("fact provider error: {source}")]
    Facts {
        /// The underlying fact error.
        #[from]
        source: FactError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}
