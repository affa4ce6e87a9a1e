//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::profile::ServiceProfile;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShimConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShimConfig {
    /// Port to bind, falling back to the profile default.
    pub fn port_for(&self, profile: &ServiceProfile) -> u16 {
        self.server.port.unwrap_or(profile.default_port)
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Unset means "use the profile's default port".
    #[serde(default)]
    pub port: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily-rotated log files. Console only when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShimConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.server.port.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.dir.is_none());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_port_falls_back_to_profile() {
        let mut config = ShimConfig::default();
        assert_eq!(config.port_for(&ServiceProfile::LANGGRAPH), 8001);
        assert_eq!(config.port_for(&ServiceProfile::CREWAI), 8003);

        config.server.port = Some(9100);
        assert_eq!(config.port_for(&ServiceProfile::LANGGRAPH), 9100);
    }
}
