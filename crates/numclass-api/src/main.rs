//! Number Classification API binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (`numclass-config.yaml` or `NUMCLASS_CONFIG`,
//!    then environment overrides)
//! 2. Initialize structured logging (tracing)
//! 3. Build the shared state (trivia HTTP client, input ceiling)
//! 4. Serve HTTP until `Ctrl-C` / `SIGTERM`

use numclass_api::{logging, run, ServiceConfig, StartupError};
use tracing::info;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the trivia client cannot
/// be built, or the server fails to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = ServiceConfig::load().map_err(StartupError::from)?;

    // 2. Initialize structured logging.
    logging::init(&config.logging);

    info!("numclass-api starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        max_magnitude = config.classifier.max_magnitude,
        trivia_enabled = config.trivia.enabled,
        trivia_base_url = config.trivia.base_url,
        trivia_timeout_ms = config.trivia.timeout_ms,
        "Configuration loaded"
    );

    // 3-4. Build shared state and serve.
    run(&config).await?;

    Ok(())
}
