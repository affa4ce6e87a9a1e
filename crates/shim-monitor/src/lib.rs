//! # Shim Monitor
//!
//! Request metrics and health reporting for the runtime shims.
//!
//! ## Features
//!
//! - [`MetricsSink`] capability: where request counts and latencies go
//! - [`PrometheusSink`]: a sink backed by its own Prometheus registry
//! - [`track_requests`]: middleware recording every request into a sink
//! - [`metrics_router`]: the `/metrics` sub-router rendering a sink
//! - [`HealthEndpoint`]: the `/health` report

pub mod error;
pub mod health;
pub mod interceptor;
pub mod metrics;

pub use error::MonitorError;
pub use health::{HealthEndpoint, HealthReport, HealthStatus};
pub use interceptor::{track_requests, UNMATCHED_ENDPOINT};
pub use metrics::{metrics_router, MetricsSink, PrometheusSink};
