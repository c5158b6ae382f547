//! Configuration errors.

use super::exit_code::{FaultlineExitCode, EXIT_INVALID_INPUT};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl FaultlineExitCode for ConfigError {
    fn exit_code(&self) -> i32 {
        EXIT_INVALID_INPUT
    }
}
