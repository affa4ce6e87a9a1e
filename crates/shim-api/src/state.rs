//! Application state.

use std::sync::Arc;

use shim_config::ServiceProfile;
use shim_monitor::{HealthEndpoint, MetricsSink, PrometheusSink};

use crate::catalog::ResourceCatalog;
use crate::engine::{ExecutionEngine, MockExecutionEngine};
use crate::error::ShimError;

/// State shared across handlers of one shim instance.
pub struct AppState {
    pub profile: ServiceProfile,
    pub engine: Arc<dyn ExecutionEngine>,
    pub catalog: ResourceCatalog,
    pub health: HealthEndpoint,
    pub metrics: Arc<dyn MetricsSink>,
}

impl AppState {
    /// State with the mock engine, recording into `metrics`.
    pub fn new(profile: ServiceProfile, metrics: Arc<dyn MetricsSink>) -> Self {
        Self {
            profile,
            engine: Arc::new(MockExecutionEngine::new(profile)),
            catalog: ResourceCatalog::new(profile),
            health: HealthEndpoint::new(profile.service_name()),
            metrics,
        }
    }

    /// State with the mock engine and a fresh Prometheus sink named after
    /// the profile.
    pub fn for_profile(profile: ServiceProfile) -> Result<Self, ShimError> {
        let sink = PrometheusSink::new(
            profile.slug,
            &format!("{} runtime", profile.display_name),
        )?;
        Ok(Self::new(profile, Arc::new(sink)))
    }

    /// Replace the execution engine.
    pub fn with_engine(mut self, engine: Arc<dyn ExecutionEngine>) -> Self {
        self.engine = engine;
        self
    }
}
