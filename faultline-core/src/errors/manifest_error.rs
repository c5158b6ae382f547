//! Manifest loading errors.

use super::exit_code::{FaultlineExitCode, EXIT_FAILURE, EXIT_INVALID_INPUT};

/// Errors raised while loading a topology manifest from disk.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported manifest extension for {path}: use .yaml, .yml, or .json")]
    UnsupportedExtension { path: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid manifest field {field}: {message}")]
    InvalidField { field: String, message: String },
}

impl FaultlineExitCode for ManifestError {
    fn exit_code(&self) -> i32 {
        match self {
            ManifestError::Io { .. } => EXIT_FAILURE,
            _ => EXIT_INVALID_INPUT,
        }
    }
}
