//! Top-level error aggregation for the CLI pipeline.

use super::config_error::ConfigError;
use super::exit_code::FaultlineExitCode;
use super::manifest_error::ManifestError;
use super::model_error::ModelError;
use super::simulation_error::SimulationError;

/// Errors that can occur across a full CLI invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum FaultlineError {
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FaultlineExitCode for FaultlineError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Manifest(e) => e.exit_code(),
            Self::Model(e) => e.exit_code(),
            Self::Simulation(e) => e.exit_code(),
            Self::Config(e) => e.exit_code(),
        }
    }
}

/// Result alias for operations that can fail anywhere in the pipeline.
pub type FaultlineResult<T> = Result<T, FaultlineError>;
