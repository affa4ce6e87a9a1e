//! Mock execution engine.

use async_trait::async_trait;
use serde_json::Value;
use shim_config::ServiceProfile;

use crate::error::ShimError;
use crate::ids;
use crate::types::{
    config_value, ExecutionOutput, ExecutionRequest, ExecutionResult, ExecutionStatus,
};

use super::ExecutionEngine;

/// Engine that performs no orchestration.
///
/// It reports success, takes the resource id from `config.id` (or
/// `mock-<noun>`), mints a fresh execution id and echoes `inputs` unchanged.
pub struct MockExecutionEngine {
    profile: ServiceProfile,
}

impl MockExecutionEngine {
    pub fn new(profile: ServiceProfile) -> Self {
        Self { profile }
    }

    /// Resource id used when the request names none.
    pub fn default_resource_id(&self) -> String {
        format!("mock-{}", self.profile.resource_noun)
    }

    fn success_message(&self) -> String {
        format!(
            "{} {} executed successfully",
            self.profile.display_name, self.profile.resource_noun
        )
    }
}

#[async_trait]
impl ExecutionEngine for MockExecutionEngine {
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionResult, ShimError> {
        let resource_id = config_value(&request.config, "id")
            .unwrap_or_else(|| Value::String(self.default_resource_id()));

        Ok(ExecutionResult {
            status: ExecutionStatus::Success,
            resource_key: format!("{}_id", self.profile.resource_noun),
            resource_id,
            execution_id: ids::execution_id(),
            output: ExecutionOutput {
                message: self.success_message(),
                inputs: request.inputs,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> ExecutionRequest {
        ExecutionRequest::from_body(body.to_string().as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn test_defaults() {
        let engine = MockExecutionEngine::new(ServiceProfile::CREWAI);
        let result = engine.execute(ExecutionRequest::empty()).await.unwrap();

        assert_eq!(result.status, ExecutionStatus::Success);
        assert_eq!(result.resource_key, "crew_id");
        assert_eq!(result.resource_id, "mock-crew");
        assert!(result.execution_id.starts_with("exec-"));
        assert_eq!(result.output.message, "CrewAI crew executed successfully");
        assert_eq!(result.output.inputs, json!({}));
    }

    #[tokio::test]
    async fn test_uses_config_id_and_echoes_inputs() {
        let engine = MockExecutionEngine::new(ServiceProfile::LANGGRAPH);
        let inputs = json!({"query": "status", "nested": {"depth": [1, 2, 3]}});
        let result = engine
            .execute(request(json!({"config": {"id": "graph-42"}, "inputs": inputs.clone()})))
            .await
            .unwrap();

        assert_eq!(result.resource_key, "workflow_id");
        assert_eq!(result.resource_id, "graph-42");
        assert_eq!(result.output.inputs, inputs);
        assert_eq!(result.output.message, "LangGraph workflow executed successfully");
    }

    #[tokio::test]
    async fn test_non_string_id_is_echoed() {
        let engine = MockExecutionEngine::new(ServiceProfile::AGNO);
        let result = engine
            .execute(request(json!({"config": {"id": 42}})))
            .await
            .unwrap();
        assert_eq!(result.resource_id, json!(42));

        let result = engine
            .execute(request(json!({"config": {"id": {"nested": true}}})))
            .await
            .unwrap();
        assert_eq!(result.resource_id, json!({"nested": true}));
    }

    #[tokio::test]
    async fn test_null_id_uses_default() {
        let engine = MockExecutionEngine::new(ServiceProfile::AGNO);
        let result = engine
            .execute(request(json!({"config": {"id": null}})))
            .await
            .unwrap();
        assert_eq!(result.resource_id, "mock-agent");
    }

    #[tokio::test]
    async fn test_execution_ids_distinct() {
        let engine = MockExecutionEngine::new(ServiceProfile::N8N);
        let first = engine.execute(ExecutionRequest::empty()).await.unwrap();
        let second = engine.execute(ExecutionRequest::empty()).await.unwrap();
        assert_ne!(first.execution_id, second.execution_id);
    }
}
