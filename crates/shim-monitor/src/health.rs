//! Health check endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy.
    Healthy,
}

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall status.
    pub status: HealthStatus,
    /// Service name, e.g. `crewai-runtime`.
    pub service: String,
}

/// Health endpoint handler.
///
/// The shims hold no state that could degrade, so the report is always
/// healthy once the process is serving.
#[derive(Debug, Clone)]
pub struct HealthEndpoint {
    service: String,
}

impl HealthEndpoint {
    /// Create a new health endpoint for the named service.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Service name reported in every check.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Generate health report.
    pub fn check(&self) -> HealthReport {
        HealthReport {
            status: HealthStatus::Healthy,
            service: self.service.clone(),
        }
    }

    /// Axum response for a health check.
    pub fn respond(&self) -> Response {
        (StatusCode::OK, Json(self.check())).into_response()
    }
}
