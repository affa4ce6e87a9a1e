//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use shim_monitor::{metrics_router, track_requests};

use crate::http::handlers::{create_resource, execute, health_check, list_resources, not_found};
use crate::state::AppState;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

const SECURITY_HEADERS: [(HeaderName, &str); 4] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::REFERRER_POLICY, "no-referrer"),
    (header::X_DNS_PREFETCH_CONTROL, "off"),
];

/// Create the service router for one shim instance.
///
/// ## Route Structure
///
/// ```text
/// GET    /health        - Health check
/// POST   /execute       - Execute (mocked)
/// GET    /{resources}   - List resources (agents | crews | workflows)
/// POST   /{resources}   - Create resource (not persisted)
/// GET    /metrics       - Prometheus exposition (separate sub-router)
/// *                     - 404 JSON
/// ```
///
/// Layers, outermost first: metrics interceptor, request tracing, CORS,
/// security headers, compression. The interceptor sits outside everything
/// so preflights, 404s and 500s are all counted.
pub fn create_router(state: Arc<AppState>) -> Router {
    let collection = format!("/{}", state.profile.resource_collection());
    let metrics = state.metrics.clone();

    let service_routes = Router::new()
        .route("/health", get(health_check))
        .route("/execute", post(execute))
        .route(&collection, get(list_resources).post(create_resource))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    let mut app = service_routes
        .merge(metrics_router(metrics.clone()))
        .layer(CompressionLayer::new());
    for (name, value) in SECURITY_HEADERS {
        app = app.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ));
    }

    app.layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(metrics, track_requests))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
