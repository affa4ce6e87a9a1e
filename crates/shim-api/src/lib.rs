//! # Runtime Shim API
//!
//! HTTP surface shared by every runtime shim. One binary serves one
//! [`ServiceProfile`](shim_config::ServiceProfile); the profile decides the
//! service name, the resource noun and the collection route.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ metrics interceptor  (every request, every status)         │
//! │ ┌─────────────────────────────────────────────────────────┐ │
//! │ │ TraceLayer / CORS                                       │ │
//! │ │  /health    /execute    /{resources}    /metrics    404 │ │
//! │ └────────┬───────────┬─────────────┬──────────────────────┘ │
//! └──────────┼───────────┼─────────────┼────────────────────────┘
//!            │           │             │
//!      HealthEndpoint  ExecutionEngine ResourceCatalog
//!                      (mock)          (not persisted)
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod http;
pub mod ids;
pub mod server;
pub mod state;
pub mod types;

pub use catalog::ResourceCatalog;
pub use engine::{ExecutionEngine, MockExecutionEngine};
pub use error::ShimError;
pub use http::routes::create_router;
pub use server::{ServerAddr, ShimServer};
pub use state::AppState;
pub use types::{
    CreateResourceRequest, ExecutionOutput, ExecutionRequest, ExecutionResult, ExecutionStatus,
    JsonObject, ResourceDescriptor,
};
