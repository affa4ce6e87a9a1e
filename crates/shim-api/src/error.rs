//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use shim_monitor::MonitorError;

/// Failures raised while building a response.
///
/// There is no client-error class: every variant surfaces as HTTP 500 with
/// the message in `detail`.
#[derive(Debug, Error)]
pub enum ShimError {
    /// A request field had an unusable shape.
    #[error("Invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// Execution engine failure.
    #[error("Execution failed: {0}")]
    Engine(String),

    /// Metrics sink failure.
    #[error(transparent)]
    Monitor(#[from] MonitorError),

    /// Socket or listener failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShimError {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ShimError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
