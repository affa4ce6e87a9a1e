//! Request and response shapes.
//!
//! Everything here lives for one request; nothing is stored.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ShimError;

/// JSON object, as carried in `config`.
pub type JsonObject = Map<String, Value>;

/// Body of `POST /execute`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRequest {
    pub config: JsonObject,
    /// Echoed back verbatim; not required to be an object.
    pub inputs: Value,
}

impl ExecutionRequest {
    /// Parse a raw request body.
    ///
    /// An empty body, invalid JSON, or a top-level value that is not an
    /// object all yield an empty request. A `config` that is present but not
    /// an object is an error.
    pub fn from_body(body: &[u8]) -> Result<Self, ShimError> {
        let Some(mut data) = parse_object(body) else {
            return Ok(Self::empty());
        };

        let config = take_config(&mut data)?;
        let inputs = data
            .remove("inputs")
            .unwrap_or_else(|| Value::Object(JsonObject::new()));

        Ok(Self { config, inputs })
    }

    pub fn empty() -> Self {
        Self {
            config: JsonObject::new(),
            inputs: Value::Object(JsonObject::new()),
        }
    }
}

impl Default for ExecutionRequest {
    fn default() -> Self {
        Self::empty()
    }
}

/// Body of `POST /{resources}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateResourceRequest {
    pub config: JsonObject,
}

impl CreateResourceRequest {
    /// Parse a raw request body with the same leniency as
    /// [`ExecutionRequest::from_body`].
    pub fn from_body(body: &[u8]) -> Result<Self, ShimError> {
        let Some(mut data) = parse_object(body) else {
            return Ok(Self::default());
        };

        Ok(Self {
            config: take_config(&mut data)?,
        })
    }
}

fn parse_object(body: &[u8]) -> Option<JsonObject> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn take_config(data: &mut JsonObject) -> Result<JsonObject, ShimError> {
    match data.remove("config") {
        None | Some(Value::Null) => Ok(JsonObject::new()),
        Some(Value::Object(config)) => Ok(config),
        Some(other) => Err(ShimError::invalid_field(
            "config",
            format!("expected an object, got {}", json_kind(&other)),
        )),
    }
}

/// Read an optional field from a config object. `null` counts as absent;
/// any other value is returned unchanged.
pub fn config_value(config: &JsonObject, key: &str) -> Option<Value> {
    config.get(key).filter(|value| !value.is_null()).cloned()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
}

/// Output block of an execution result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutput {
    pub message: String,
    pub inputs: Value,
}

/// Response of `POST /execute`.
///
/// The resource id is serialized under a profile-specific key such as
/// `crew_id`, so this type serializes by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    /// JSON key for `resource_id`, e.g. `workflow_id`.
    pub resource_key: String,
    /// Taken from `config.id` as sent, so not necessarily a string.
    pub resource_id: Value,
    pub execution_id: String,
    pub output: ExecutionOutput,
}

impl Serialize for ExecutionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry(&self.resource_key, &self.resource_id)?;
        map.serialize_entry("execution_id", &self.execution_id)?;
        map.serialize_entry("output", &self.output)?;
        map.end()
    }
}

/// An agent, crew, or workflow as reported by the resource endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub id: String,
    /// Taken from `config.name` as sent, so not necessarily a string.
    pub name: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
