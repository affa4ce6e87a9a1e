//! Endpoint handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::error::ShimError;
use crate::state::AppState;
use crate::types::{CreateResourceRequest, ExecutionRequest, ExecutionResult, ResourceDescriptor};

/// Response of `GET /{resources}`, keyed by the collection name.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ResourceListResponse(pub BTreeMap<String, Vec<ResourceDescriptor>>);

/// Response for unmatched routes.
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: String,
    pub path: String,
}

/// Health check.
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.health.respond()
}

/// Execute a workflow, crew, or agent.
///
/// POST /execute
pub async fn execute(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ExecutionResult>, ShimError> {
    let profile = &state.profile;
    let outcome = match ExecutionRequest::from_body(&body) {
        Ok(request) => state.engine.execute(request).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => {
            info!(
                "Executed {} {}: {}",
                profile.display_name, profile.resource_noun, result.execution_id
            );
            Ok(Json(result))
        }
        Err(e) => {
            error!(
                "Error executing {} {}: {}",
                profile.display_name, profile.resource_noun, e
            );
            Err(e)
        }
    }
}

/// List resources. Always the single sample entry.
///
/// GET /{resources}
pub async fn list_resources(State(state): State<Arc<AppState>>) -> Json<ResourceListResponse> {
    let mut listing = BTreeMap::new();
    listing.insert(state.profile.resource_collection(), state.catalog.list());
    Json(ResourceListResponse(listing))
}

/// Create a resource. The descriptor is returned, not stored.
///
/// POST /{resources}
pub async fn create_resource(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ResourceDescriptor>, ShimError> {
    let profile = &state.profile;
    let outcome =
        CreateResourceRequest::from_body(&body).map(|request| state.catalog.create(request));

    match outcome {
        Ok(descriptor) => {
            info!(
                "Created {} {}: {}",
                profile.display_name, profile.resource_noun, descriptor.id
            );
            Ok(Json(descriptor))
        }
        Err(e) => {
            error!(
                "Error creating {} {}: {}",
                profile.display_name, profile.resource_noun, e
            );
            Err(e)
        }
    }
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Not found".to_string(),
            path: uri.path().to_string(),
        }),
    )
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
