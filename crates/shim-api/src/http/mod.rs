//! HTTP interface module.
//!
//! Provides the REST endpoints of a shim:
//! - Health check
//! - Execution
//! - Resource listing and creation
//! - Metrics exposition (mounted from `shim-monitor`)

pub mod handlers;
pub mod routes;
