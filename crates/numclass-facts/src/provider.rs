//! The fact provider: Armstrong synthesis first, trivia lookup otherwise.

use std::time::Duration;

use numclass_core::{digits, is_armstrong};
use tracing::{debug, warn};

use crate::backend::{create_backend, TriviaBackend};
use crate::config::TriviaConfig;
use crate::error::FactError;

/// Fact returned whenever the trivia lookup fails for any reason.
pub const FALLBACK_FACT: &str = "Fun fact unavailable due to external API timeout.";

/// Build the explanatory fact for an Armstrong number.
///
/// The leading mention keeps the sign of `n`; the equation is written for
/// `|n|`, e.g. `-153 is an Armstrong number because 1^3 + 5^3 + 3^3 = 153`.
/// The caller is responsible for checking [`is_armstrong`] first.
pub fn armstrong_fact(n: i64) -> String {
    let digits = digits(n);
    let power = digits.len();
    let terms = digits
        .iter()
        .map(|digit| format!("{digit}^{power}"))
        .collect::<Vec<_>>()
        .join(" + ");
    format!(
        "{n} is an Armstrong number because {terms} = {}",
        n.unsigned_abs()
    )
}

/// Produces the `fun_fact` for a classified number.
///
/// Cheap to clone: the HTTP client inside the backend is reference counted.
#[derive(Debug, Clone)]
pub struct FactProvider {
    backend: TriviaBackend,
    timeout: Duration,
}

impl FactProvider {
    /// Create a provider around `backend`, bounding every lookup by `timeout`.
    pub const fn new(backend: TriviaBackend, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Create a provider from the `trivia` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::Client`] if the HTTP client cannot be built.
    pub fn from_config(config: &TriviaConfig) -> Result<Self, FactError> {
        Ok(Self::new(create_backend(config)?, config.timeout()))
    }

    /// The backend in use.
    pub const fn backend(&self) -> &TriviaBackend {
        &self.backend
    }

    /// The deadline applied to each lookup.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Return a fact about `n`. Never fails.
    ///
    /// Armstrong numbers get a synthesized, deterministic fact. Anything
    /// else is looked up once by `|n|`; on timeout or any backend error the
    /// [`FALLBACK_FACT`] is returned instead.
    pub async fn fun_fact(&self, n: i64) -> String {
        if is_armstrong(n) {
            return armstrong_fact(n);
        }

        let magnitude = n.unsigned_abs();
        match self.lookup_bounded(magnitude).await {
            Ok(fact) => {
                debug!(magnitude, backend = self.backend.name(), "trivia lookup succeeded");
                fact
            }
            Err(e) => {
                warn!(
                    magnitude,
                    backend = self.backend.name(),
                    error = %e,
                    "trivia lookup failed, using fallback fact"
                );
                FALLBACK_FACT.to_owned()
            }
        }
    }

    /// Run a single lookup under the configured deadline.
    async fn lookup_bounded(&self, magnitude: u64) -> Result<String, FactError> {
        tokio::time::timeout(self.timeout, self.backend.lookup(magnitude))
            .await
            .map_err(|_elapsed| FactError::Timeout {
                timeout_ms: self.timeout.as_millis(),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StaticTrivia;

    fn provider(backend: StaticTrivia) -> FactProvider {
        FactProvider::new(TriviaBackend::Static(backend), Duration::from_secs(3))
    }

    #[test]
    fn armstrong_fact_three_digits() {
        assert_eq!(
            armstrong_fact(153),
            "153 is an Armstrong number because 1^3 + 5^3 + 3^3 = 153"
        );
    }

    #[test]
    fn armstrong_fact_keeps_sign_in_leading_mention() {
        assert_eq!(
            armstrong_fact(-371),
            "-371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371"
        );
    }

    #[test]
    fn armstrong_fact_for_zero() {
        assert_eq!(armstrong_fact(0), "0 is an Armstrong number because 0^1 = 0");
    }

    #[test]
    fn armstrong_fact_four_digits() {
        assert_eq!(
            armstrong_fact(9474),
            "9474 is an Armstrong number because 9^4 + 4^4 + 7^4 + 4^4 = 9474"
        );
    }

    #[tokio::test]
    async fn armstrong_numbers_skip_the_backend() {
        // A failing backend would produce the fallback if it were consulted.
        let facts = provider(StaticTrivia::failing());
        assert_eq!(facts.fun_fact(153).await, armstrong_fact(153));
        assert_eq!(facts.fun_fact(-9474).await, armstrong_fact(-9474));
    }

    #[tokio::test]
    async fn lookup_is_keyed_by_magnitude() {
        let facts = provider(StaticTrivia::with_text("{n} is the answer"));
        assert_eq!(facts.fun_fact(-42).await, "42 is the answer");
        assert_eq!(facts.fun_fact(42).await, "42 is the answer");
    }

    #[tokio::test]
    async fn backend_failure_yields_fallback() {
        let facts = provider(StaticTrivia::failing());
        assert_eq!(facts.fun_fact(42).await, FALLBACK_FACT);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_backend_yields_fallback() {
        let facts = provider(StaticTrivia::with_text("too late").delayed(Duration::from_secs(30)));
        assert_eq!(facts.fun_fact(42).await, FALLBACK_FACT);
    }

    #[tokio::test(start_paused = true)]
    async fn backend_within_deadline_succeeds() {
        let facts =
            provider(StaticTrivia::with_text("just in time").delayed(Duration::from_secs(1)));
        assert_eq!(facts.fun_fact(42).await, "just in time");
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_is_reported_as_timeout_error() {
        let facts = provider(StaticTrivia::failing().delayed(Duration::from_secs(10)));
        let result = facts.lookup_bounded(42).await;
        assert!(matches!(result, Err(FactError::Timeout { timeout_ms: 3000 })));
    }

    #[test]
    fn disabled_config_builds_static_provider() {
        let config = TriviaConfig {
            enabled: false,
            timeout_ms: 250,
            ..TriviaConfig::default()
        };
        let facts = FactProvider::from_config(&config);
        assert!(facts.is_ok());
        if let Ok(facts) = facts {
            assert_eq!(facts.backend().name(), "static");
            assert_eq!(facts.timeout(), Duration::from_millis(250));
        }
    }
}
