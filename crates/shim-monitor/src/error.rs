//! Monitor errors.

use thiserror::Error;

/// Monitor error types.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Metric could not be created or registered.
    #[error("Failed to register metric: {0}")]
    Registration(String),

    /// Failed to collect or encode metrics.
    #[error("Failed to collect metrics: {0}")]
    MetricsCollection(String),

    /// Invalid metric prefix.
    #[error("Invalid metric prefix: {0}")]
    InvalidPrefix(String),
}

impl From<prometheus::Error> for MonitorError {
    fn from(err: prometheus::Error) -> Self {
        MonitorError::Registration(err.to_string())
    }
}
