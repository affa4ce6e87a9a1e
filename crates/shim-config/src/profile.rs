//! Built-in service profiles.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Identity of one runtime shim instance.
///
/// Every shim serves the same contract; the profile only decides naming
/// (service name, resource noun, metric prefix) and the default port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceProfile {
    /// Lowercase framework slug, e.g. `crewai`. Used as metric prefix and
    /// in the service name.
    pub slug: &'static str,
    /// Human-readable framework name, e.g. `CrewAI`.
    pub display_name: &'static str,
    /// Singular resource noun, e.g. `crew`.
    pub resource_noun: &'static str,
    /// Port used when neither config nor environment provides one.
    pub default_port: u16,
}

impl ServiceProfile {
    /// Graph-based workflow engine.
    pub const LANGGRAPH: ServiceProfile = ServiceProfile {
        slug: "langgraph",
        display_name: "LangGraph",
        resource_noun: "workflow",
        default_port: 8001,
    };

    /// Generic agent engine.
    pub const AGNO: ServiceProfile = ServiceProfile {
        slug: "agno",
        display_name: "Agno",
        resource_noun: "agent",
        default_port: 8002,
    };

    /// Multi-agent crew engine.
    pub const CREWAI: ServiceProfile = ServiceProfile {
        slug: "crewai",
        display_name: "CrewAI",
        resource_noun: "crew",
        default_port: 8003,
    };

    /// Automation workflow engine.
    pub const N8N: ServiceProfile = ServiceProfile {
        slug: "n8n",
        display_name: "n8n",
        resource_noun: "workflow",
        default_port: 8004,
    };

    /// All built-in profiles, ordered by default port.
    pub const BUILTIN: [ServiceProfile; 4] =
        [Self::LANGGRAPH, Self::AGNO, Self::CREWAI, Self::N8N];

    /// Look up a built-in profile by slug (case-insensitive).
    pub fn builtin(name: &str) -> Result<Self, ConfigError> {
        Self::BUILTIN
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    /// Service name reported by the health endpoint, e.g. `crewai-runtime`.
    pub fn service_name(&self) -> String {
        format!("{}-runtime", self.slug)
    }

    /// Plural collection name used in routes and list payloads, e.g. `crews`.
    pub fn resource_collection(&self) -> String {
        format!("{}s", self.resource_noun)
    }

    /// Capitalized resource noun, e.g. `Crew`.
    pub fn resource_label(&self) -> String {
        let mut chars = self.resource_noun.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Prefix of the environment variables, e.g. `CREWAI`.
    pub fn env_prefix(&self) -> String {
        self.slug.to_ascii_uppercase()
    }

    pub fn host_env_var(&self) -> String {
        format!("{}_RUNTIME_HOST", self.env_prefix())
    }

    pub fn port_env_var(&self) -> String {
        format!("{}_RUNTIME_PORT", self.env_prefix())
    }
}

impl FromStr for ServiceProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::builtin(s)
    }
}

impl fmt::Display for ServiceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Runtime", self.display_name)
    }
}
