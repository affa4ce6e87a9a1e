//! Prometheus-style request metrics.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use tracing::error;

use crate::error::MonitorError;

const REQUEST_LABELS: [&str; 2] = ["method", "endpoint"];

/// Destination for per-request measurements.
///
/// Handlers never touch a global registry; the router is handed a sink, so
/// each server (and each test) gets its own counters.
pub trait MetricsSink: Send + Sync {
    /// Record one completed request.
    fn observe_request(&self, method: &str, endpoint: &str, elapsed: Duration);

    /// Number of requests recorded for `(method, endpoint)`.
    fn request_count(&self, method: &str, endpoint: &str) -> u64;

    /// Render every metric in the Prometheus text exposition format.
    fn render(&self) -> Result<String, MonitorError>;
}

/// Sink backed by a private Prometheus registry.
///
/// Exposes `<prefix>_requests_total` and `<prefix>_request_latency_seconds`,
/// both labeled by `method` and `endpoint`.
pub struct PrometheusSink {
    registry: Registry,
    requests_total: IntCounterVec,
    request_latency: HistogramVec,
}

impl PrometheusSink {
    /// Create a sink whose metric names start with `prefix`.
    ///
    /// `subject` is used in help texts, e.g. "CrewAI runtime".
    pub fn new(prefix: &str, subject: &str) -> Result<Self, MonitorError> {
        if prefix.is_empty()
            || !prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            || prefix.starts_with(|c: char| c.is_ascii_digit())
        {
            return Err(MonitorError::InvalidPrefix(prefix.to_string()));
        }

        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                format!("{}_requests_total", prefix),
                format!("Total requests to {}", subject),
            ),
            &REQUEST_LABELS,
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let request_latency = HistogramVec::new(
            HistogramOpts::new(
                format!("{}_request_latency_seconds", prefix),
                "Request latency in seconds",
            ),
            &REQUEST_LABELS,
        )?;
        registry.register(Box::new(request_latency.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_latency,
        })
    }
}

impl MetricsSink for PrometheusSink {
    fn observe_request(&self, method: &str, endpoint: &str, elapsed: Duration) {
        self.requests_total
            .with_label_values(&[method, endpoint])
            .inc();
        self.request_latency
            .with_label_values(&[method, endpoint])
            .observe(elapsed.as_secs_f64());
    }

    fn request_count(&self, method: &str, endpoint: &str) -> u64 {
        self.requests_total
            .get_metric_with_label_values(&[method, endpoint])
            .map(|counter| counter.get())
            .unwrap_or(0)
    }

    fn render(&self) -> Result<String, MonitorError> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| MonitorError::MetricsCollection(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| MonitorError::MetricsCollection(e.to_string()))
    }
}

/// Metrics exposition sub-router.
///
/// Mounted next to the service routes rather than inside them; serves both
/// `/metrics` and `/metrics/`.
pub fn metrics_router(sink: Arc<dyn MetricsSink>) -> Router {
    Router::new()
        .route("/metrics", get(export_metrics))
        .route("/metrics/", get(export_metrics))
        .with_state(sink)
}

async fn export_metrics(State(sink): State<Arc<dyn MetricsSink>>) -> Response {
    match sink.render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[test]
    fn test_counter_accumulates_per_label() {
        let sink = PrometheusSink::new("crewai", "CrewAI runtime").unwrap();
        sink.observe_request("GET", "/health", Duration::from_millis(2));
        sink.observe_request("GET", "/health", Duration::from_millis(3));
        sink.observe_request("POST", "/execute", Duration::from_millis(5));

        assert_eq!(sink.request_count("GET", "/health"), 2);
        assert_eq!(sink.request_count("POST", "/execute"), 1);
        assert_eq!(sink.request_count("GET", "/crews"), 0);
    }

    #[test]
    fn test_sinks_are_isolated() {
        let a = PrometheusSink::new("agno", "Agno runtime").unwrap();
        let b = PrometheusSink::new("agno", "Agno runtime").unwrap();
        a.observe_request("GET", "/health", Duration::ZERO);
        assert_eq!(a.request_count("GET", "/health"), 1);
        assert_eq!(b.request_count("GET", "/health"), 0);
    }

    #[test]
    fn test_render_text_format() {
        let sink = PrometheusSink::new("langgraph", "LangGraph runtime").unwrap();
        sink.observe_request("GET", "/health", Duration::from_millis(1));

        let output = sink.render().unwrap();
        assert!(output.contains("# HELP langgraph_requests_total Total requests to LangGraph runtime"));
        assert!(output.contains("# TYPE langgraph_requests_total counter"));
        assert!(output.contains("# TYPE langgraph_request_latency_seconds histogram"));

        let sample = |name: &str| {
            output
                .lines()
                .find(|line| line.starts_with(&format!("{}{{", name)))
                .map(str::to_string)
                .unwrap()
        };
        for line in [
            sample("langgraph_requests_total"),
            sample("langgraph_request_latency_seconds_count"),
        ] {
            assert!(line.contains(r#"method="GET""#));
            assert!(line.contains(r#"endpoint="/health""#));
            assert!(line.ends_with(" 1"));
        }
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(matches!(
            PrometheusSink::new("", "x"),
            Err(MonitorError::InvalidPrefix(_))
        ));
        assert!(matches!(
            PrometheusSink::new("my-runtime", "x"),
            Err(MonitorError::InvalidPrefix(_))
        ));
        assert!(PrometheusSink::new("n8n", "n8n runtime").is_ok());
    }

    #[tokio::test]
    async fn test_metrics_router_serves_exposition() {
        let sink: Arc<dyn MetricsSink> = Arc::new(PrometheusSink::new("n8n", "n8n runtime").unwrap());
        sink.observe_request("GET", "/workflows", Duration::from_millis(1));

        for uri in ["/metrics", "/metrics/"] {
            let response = metrics_router(sink.clone())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
            assert!(content_type.starts_with("text/plain"));

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let text = String::from_utf8(bytes.to_vec()).unwrap();
            assert!(text.contains("n8n_requests_total"));
        }
    }
}
