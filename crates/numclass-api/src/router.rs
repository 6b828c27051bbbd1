//! Axum router construction for the classification API.
//!
//! Assembles all routes into a single [`Router`] with a permissive CORS
//! policy and HTTP request tracing.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- minimal HTML page describing the API
/// - `GET /health` -- liveness probe
/// - `GET /api/classify-number?number=N` -- classify a number
///
/// CORS admits every origin, method and header with credentials. Browsers
/// refuse a literal `*` alongside credentials, so the request's own values
/// are mirrored back instead. This is only appropriate because the API is
/// public, read-only and unauthenticated.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Liveness
        .route("/health", get(handlers::health))
        // REST API
        .route("/api/classify-number", get(handlers::classify_number))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
