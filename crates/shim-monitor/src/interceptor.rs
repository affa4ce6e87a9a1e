//! Request metrics middleware.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::metrics::MetricsSink;

/// `endpoint` label for requests that matched no route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Record count and latency of every request into the sink.
///
/// Measurement happens after the inner service has produced its response,
/// whatever the status code, so 404s and 500s are counted too. The
/// `endpoint` label is the matched route; fallback hits share
/// [`UNMATCHED_ENDPOINT`]. Install with `Router::layer` and
/// `axum::middleware::from_fn_with_state(sink, track_requests)` so routing
/// has run before the label is read.
pub async fn track_requests(
    State(sink): State<Arc<dyn MetricsSink>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string());
    let start = Instant::now();

    let response = next.run(req).await;

    sink.observe_request(&method, &endpoint, start.elapsed());
    response
}
