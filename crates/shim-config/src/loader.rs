//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::profile::ServiceProfile;
use crate::schema::ShimConfig;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<ShimConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<ShimConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: ShimConfig = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load the effective configuration for a profile: optional file, then
    /// the profile's `_RUNTIME_HOST` / `_RUNTIME_PORT` variables.
    pub fn load_for_profile(
        path: Option<&Path>,
        profile: &ServiceProfile,
    ) -> Result<ShimConfig, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => ShimConfig::default(),
        };
        Self::apply_env(&mut config, profile, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay profile environment variables using `lookup` to read them.
    pub fn apply_env<F>(
        config: &mut ShimConfig,
        profile: &ServiceProfile,
        lookup: F,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_var = profile.host_env_var();
        if let Some(host) = lookup(&host_var) {
            config.server.host = host;
        }

        let port_var = profile.port_env_var();
        if let Some(raw) = lookup(&port_var) {
            let port = raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                field: port_var.clone(),
                message: format!("'{}' is not a port number ({})", raw, e),
            })?;
            config.server.port = Some(port);
        }

        Ok(())
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::InvalidValue {
            field: "pattern".to_string(),
            message: e.to_string(),
        })?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.local/state`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}
