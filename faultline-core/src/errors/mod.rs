//! Error handling for Faultline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod exit_code;
pub mod manifest_error;
pub mod model_error;
pub mod pipeline_error;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use exit_code::{FaultlineExitCode, EXIT_FAILURE, EXIT_INVALID_INPUT, EXIT_OK};
pub use manifest_error::ManifestError;
pub use model_error::ModelError;
pub use pipeline_error::{FaultlineError, FaultlineResult};
pub use simulation_error::SimulationError;
