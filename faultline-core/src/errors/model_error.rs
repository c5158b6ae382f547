//! Topology model errors.

use super::exit_code::{FaultlineExitCode, EXIT_INVALID_INPUT};

/// Errors raised when the topology invariants are broken.
///
/// The model builder fails fast on the first violation it sees; the
/// validator collects all of them and surfaces `InvariantViolation` with
/// the rendered report.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("duplicate service id '{id}'")]
    DuplicateService { id: String },

    #[error("dependency {src} -> {dst} references unknown service '{unknown}'")]
    UnknownEndpoint {
        src: String,
        dst: String,
        unknown: String,
    },

    #[error("service '{id}' declares a dependency on itself")]
    SelfDependency { id: String },

    #[error("topology invariants violated:\n{report}")]
    InvariantViolation { report: String },
}

impl FaultlineExitCode for ModelError {
    fn exit_code(&self) -> i32 {
        EXIT_INVALID_INPUT
    }
}
