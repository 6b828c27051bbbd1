//! Shared application state for the classification API.
//!
//! [`AppState`] is constructed once at startup and shared read-only by
//! every request through Axum's `State` extractor. It holds no mutable
//! data, so concurrent requests never contend on it.

use numclass_facts::{FactError, FactProvider};

use crate::config::ServiceConfig;

/// Shared state for the Axum application.
///
/// Wrapped in [`std::sync::Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Source of the `fun_fact` field.
    pub facts: FactProvider,
    /// Largest accepted `|number|`.
    pub max_magnitude: u64,
}

impl AppState {
    /// Create application state from its parts.
    ///
    /// Tests use this to inject a static trivia backend.
    pub const fn new(facts: FactProvider, max_magnitude: u64) -> Self {
        Self {
            facts,
            max_magnitude,
        }
    }

    /// Create application state from the loaded service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::Client`] if the trivia HTTP client cannot be built.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, FactError> {
        let facts = FactProvider::from_config(&config.trivia)?;
        Ok(Self::new(facts, config.classifier.max_magnitude))
    }
}
