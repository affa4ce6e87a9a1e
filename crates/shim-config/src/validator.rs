//! Configuration validation.

use crate::error::ConfigError;
use crate::profile::ServiceProfile;
use crate::schema::ShimConfig;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the effective configuration for a profile.
    pub fn validate(
        config: &ShimConfig,
        profile: &ServiceProfile,
    ) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_server(config, profile, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    /// Validate and turn any error into [`ConfigError::Rejected`].
    pub fn ensure_valid(
        config: &ShimConfig,
        profile: &ServiceProfile,
    ) -> Result<ValidationResult, ConfigError> {
        let result = Self::validate(config, profile)?;
        if result.is_valid() {
            return Ok(result);
        }
        let summary = result
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::Rejected(summary))
    }

    fn validate_server(config: &ShimConfig, profile: &ServiceProfile, result: &mut ValidationResult) {
        let port = config.port_for(profile);
        if port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        } else if port < 1024 {
            result.add_warning(ValidationWarning::new(
                "server.port",
                format!("Port {} is privileged and may require elevated permissions", port),
            ));
        }

        if config.server.host.trim().is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_logging(config: &ShimConfig, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }

        if let Some(ref dir) = config.logging.dir {
            if dir.as_os_str().is_empty() {
                result.add_error(ValidationError::new(
                    "logging.dir",
                    "Log directory cannot be an empty path",
                ));
            } else if dir.exists() && !dir.is_dir() {
                result.add_error(ValidationError::new(
                    "logging.dir",
                    format!("Log path exists but is not a directory: {:?}", dir),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
