//! Trivia backend abstraction and implementations.
//!
//! Defines an enum-based dispatch for trivia backends, avoiding the
//! dyn-compatibility issues with async trait methods. The production
//! backend talks to a Numbers API compatible service over HTTP via
//! `reqwest`; the static backend returns canned answers so the rest of the
//! service can be exercised without network access.

use std::time::Duration;

use crate::config::TriviaConfig;
use crate::error::FactError;

// ---------------------------------------------------------------------------
// Unified backend enum (dyn-compatible alternative to async trait)
// ---------------------------------------------------------------------------

/// A source of trivia text keyed by the magnitude of a number.
#[derive(Debug, Clone)]
pub enum TriviaBackend {
    /// Numbers API compatible HTTP service.
    NumbersApi(NumbersApiBackend),
    /// Canned responses, used offline and in tests.
    Static(StaticTrivia),
}

impl TriviaBackend {
    /// Fetch a fact about `magnitude`.
    ///
    /// Dispatches to the concrete backend implementation. A single attempt
    /// is made; callers decide how to bound and recover from it.
    ///
    /// # Errors
    ///
    /// Returns a [`FactError`] if the backend cannot produce a fact.
    pub async fn lookup(&self, magnitude: u64) -> Result<String, FactError> {
        match self {
            Self::NumbersApi(backend) => backend.lookup(magnitude).await,
            Self::Static(backend) => backend.lookup(magnitude).await,
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NumbersApi(_) => "numbers-api",
            Self::Static(_) => "static",
        }
    }
}

// ---------------------------------------------------------------------------
// Numbers API backend
// ---------------------------------------------------------------------------

/// Backend for a Numbers API compatible service.
///
/// Sends `GET {base_url}/{magnitude}/{category}` (or
/// `GET {base_url}/{magnitude}` when no category is configured) and
/// returns the plain-text body with surrounding whitespace stripped. A
/// body that is empty after stripping is an error.
#[derive(Debug, Clone)]
pub struct NumbersApiBackend {
    client: reqwest::Client,
    base_url: String,
    category: String,
}

impl NumbersApiBackend {
    /// Create a new backend whose HTTP client enforces the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &TriviaConfig) -> Result<Self, FactError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FactError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            category: config.category.trim_matches('/').to_owned(),
        })
    }

    /// Build the lookup URL for `magnitude`.
    pub fn url_for(&self, magnitude: u64) -> String {
        if self.category.is_empty() {
            format!("{}/{magnitude}", self.base_url)
        } else {
            format!("{}/{magnitude}/{}", self.base_url, self.category)
        }
    }

    /// Send the lookup and return the response text.
    async fn lookup(&self, magnitude: u64) -> Result<String, FactError> {
        let url = self.url_for(magnitude);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FactError::Request(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FactError::Request(format!("reading body from {url}: {e}")))?;

        let text = body.trim();
        if text.is_empty() {
            return Err(FactError::EmptyBody);
        }
        Ok(text.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Static backend
// ---------------------------------------------------------------------------

/// A deterministic stand-in for the trivia service.
///
/// Returns a canned text (with every `{n}` replaced by the looked-up
/// magnitude), or fails, optionally after an artificial delay that lets
/// callers exercise their timeout handling.
#[derive(Debug, Clone, Default)]
pub struct StaticTrivia {
    text: Option<String>,
    delay: Option<Duration>,
}

impl StaticTrivia {
    /// A backend that always answers with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            delay: None,
        }
    }

    /// A backend that always fails with [`FactError::Unavailable`].
    pub const fn failing() -> Self {
        Self {
            text: None,
            delay: None,
        }
    }

    /// Wait `delay` before answering.
    #[must_use]
    pub const fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn lookup(&self, magnitude: u64) -> Result<String, FactError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.text
            .as_ref()
            .map(|text| text.replace("{n}", &magnitude.to_string()))
            .ok_or(FactError::Unavailable)
    }
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Create a trivia backend from configuration.
///
/// A disabled lookup maps to a failing [`StaticTrivia`], so every
/// non-Armstrong number receives the fallback fact without network I/O.
///
/// # Errors
///
/// Returns [`FactError::Client`] if the HTTP client cannot be built.
pub fn create_backend(config: &TriviaConfig) -> Result<TriviaBackend, FactError> {
    if config.enabled {
        Ok(TriviaBackend::NumbersApi(NumbersApiBackend::new(config)?))
    } else {
        Ok(TriviaBackend::Static(StaticTrivia::failing()))
    }
}
