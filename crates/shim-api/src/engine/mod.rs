//! Execution engines.
//!
//! [`ExecutionEngine`] is the seam where a real orchestration backend would
//! plug in. The shims ship only [`MockExecutionEngine`].

mod mock;

use async_trait::async_trait;

use crate::error::ShimError;
use crate::types::{ExecutionRequest, ExecutionResult};

pub use mock::MockExecutionEngine;

/// Runs one execution request.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionResult, ShimError>;
}
