//! HTTP endpoint handlers for the classification API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML page describing the API |
//! | `GET` | `/health` | Liveness probe |
//! | `GET` | `/api/classify-number` | Classify `?number=N` |

use std::num::IntErrorKind;
use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, RawQuery, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use numclass_core::ClassificationResult;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/classify-number` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct ClassifyQuery {
    /// The number to classify, as received. Validated by [`parse_number`].
    pub number: Option<String>,
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

/// Parse and range-check the raw `number` query value.
///
/// Accepts a base-10 integer with an optional leading sign, tolerating
/// surrounding whitespace. Decimal points, exponents, digit separators and
/// empty input are rejected as [`ApiError::InvalidFormat`]. Integers whose
/// magnitude exceeds `max_magnitude` (including those too large for
/// `i64`) are rejected as [`ApiError::TooLarge`].
///
/// # Errors
///
/// Returns the [`ApiError`] describing why the input was rejected.
pub fn parse_number(raw: &str, max_magnitude: u64) -> Result<i64, ApiError> {
    let trimmed = raw.trim();
    let unsigned = trimmed
        .strip_prefix(['-', '+'])
        .unwrap_or(trimmed);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidFormat {
            input: raw.to_owned(),
        });
    }

    // The text is well-formed here, so the only possible failure is overflow.
    let n = trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ApiError::TooLarge {
            input: raw.to_owned(),
            max_magnitude,
        },
        _ => ApiError::InvalidFormat {
            input: raw.to_owned(),
        },
    })?;

    if n.unsigned_abs() > max_magnitude {
        return Err(ApiError::TooLarge {
            input: raw.to_owned(),
            max_magnitude,
        });
    }
    Ok(n)
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page naming the API and linking its endpoints.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let max_magnitude = state.max_magnitude;

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Number Classification API</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>Number Classification API</h1>
    <p class="subtitle">Returns mathematical properties and fun facts about numbers</p>

    <h2>Endpoints</h2>
    <ul>
        <li><a href="/api/classify-number?number=371">/api/classify-number?number=N</a> -- Classify an integer with |N| &le; {max_magnitude}</li>
        <li><a href="/health">/health</a> -- Liveness probe</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /health -- liveness probe
// ---------------------------------------------------------------------------

/// Report that the process is up. Touches no dependencies.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ---------------------------------------------------------------------------
// GET /api/classify-number -- classify a number
// ---------------------------------------------------------------------------

/// Classify the `number` query parameter.
///
/// A missing parameter, or a query string that does not deserialize (such
/// as a repeated `number`), is treated like an unparseable value. The fun
/// fact is fetched after validation, so rejected input never triggers a
/// trivia lookup.
///
/// # Query Parameters
///
/// - `number`: base-10 integer, `|number| <= max_magnitude`
pub async fn classify_number(
    State(state): State<Arc<AppState>>,
    RawQuery(query_string): RawQuery,
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> Result<Json<ClassificationResult>, ApiError> {
    let raw = match query {
        Ok(Query(params)) => params.number.unwrap_or_default(),
        Err(rejection) => {
            let input = query_string.unwrap_or_default();
            debug!(
                input = %input,
                reason = %rejection.body_text(),
                "malformed classify-number query"
            );
            return Err(ApiError::InvalidFormat { input });
        }
    };

    let number = parse_number(&raw, state.max_magnitude).inspect_err(|e| {
        debug!(input = %raw, reason = %e, "rejected classify-number request");
    })?;

    let fun_fact = state.facts.fun_fact(number).await;
    let result = ClassificationResult::classify(number, fun_fact);

    info!(
        number,
        is_prime = result.is_prime,
        is_perfect = result.is_perfect,
        digit_sum = result.digit_sum,
        "number classified"
    );

    Ok(Json(result))
}
