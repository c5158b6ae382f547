//! Simulation errors.

use super::exit_code::{FaultlineExitCode, EXIT_INVALID_INPUT};

/// Errors raised by the propagation engine.
///
/// Propagation is pure and deterministic over in-memory data, so the only
/// failure class is caller input: a start node that is not in the model.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("unknown service '{id}' in topology")]
    UnknownService { id: String },
}

impl FaultlineExitCode for SimulationError {
    fn exit_code(&self) -> i32 {
        EXIT_INVALID_INPUT
    }
}
