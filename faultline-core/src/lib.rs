//! # faultline-core
//!
//! Core building blocks for the Faultline analysis engine:
//! - Types: service/dependency domain model, failure kinds, interned IDs
//! - Errors: one enum per subsystem, `thiserror` only
//! - Config: layered resolution (file, environment, CLI flags)
//! - Tracing: subscriber setup for the CLI boundary

pub mod config;
pub mod errors;
pub mod tracing_setup;
pub mod types;

pub use config::{
    CliOverrides, FaultlineConfig, ModelConfig, OutputConfig, OutputFormat, SimulationConfig,
};
pub use errors::{
    ConfigError, FaultlineError, FaultlineResult, ManifestError, ModelError, SimulationError,
};
pub use types::{CallKind, Dependency, DependencyKind, FailureKind, Service, ServiceId};
