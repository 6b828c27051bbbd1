//! Configuration for the trivia lookup.
//!
//! Deserialized as the `trivia` section of the service configuration file.
//! Every field has a default so the section may be omitted entirely.

use std::time::Duration;

use serde::Deserialize;

/// Trivia service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TriviaConfig {
    /// Whether to call the external service at all. When disabled, every
    /// non-Armstrong number receives the fallback fact.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Base URL of the trivia service (e.g. `http://numbersapi.com`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fact category appended to the lookup path (`math`, `trivia`, ...).
    /// An empty string requests the service's default category.
    #[serde(default = "default_category")]
    pub category: String,

    /// Hard deadline for a single lookup in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl TriviaConfig {
    /// The lookup deadline as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            category: default_category(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

const fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "http://numbersapi.com".to_owned()
}

fn default_category() -> String {
    "math".to_owned()
}

const fn default_timeout_ms() -> u64 {
    3000
}
