//! # Shim Config
//!
//! Service profiles and configuration management for the runtime shims.
//!
//! A [`ServiceProfile`] names one shim instance (which framework it fronts,
//! which resource noun it serves, which port it defaults to). A
//! [`ShimConfig`] carries the tunable settings, layered as:
//!
//! 1. profile defaults
//! 2. optional TOML file
//! 3. `<PREFIX>_RUNTIME_HOST` / `<PREFIX>_RUNTIME_PORT`
//! 4. command-line overrides (applied by the binary)

mod error;
mod loader;
mod profile;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use profile::ServiceProfile;
pub use schema::{LoggingConfig, ServerConfig, ShimConfig};
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
