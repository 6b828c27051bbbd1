//! Error types for trivia lookups.
//!
//! None of these reach an HTTP client. [`FactProvider`](crate::FactProvider)
//! logs them and substitutes the fallback fact.

/// Errors that can occur while fetching a fact from a trivia backend.
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request could not be sent or the body could not be read.
    #[error("trivia request failed: {0}")]
    Request(String),

    /// The trivia service answered with a non-success status.
    #[error("trivia service returned status {status}")]
    Status {
        /// The HTTP status code received.
        status: u16,
    },

    /// The trivia service answered successfully but with no text.
    #[error("trivia service returned an empty body")]
    EmptyBody,

    /// The lookup did not complete within the deadline.
    #[error("trivia lookup exceeded {timeout_ms}ms deadline")]
    Timeout {
        /// The deadline in milliseconds.
        timeout_ms: u128,
    },

    /// The backend has no fact to offer (lookups disabled or simulated failure).
    #[error("trivia backend unavailable")]
    Unavailable,
}
