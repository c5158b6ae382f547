//! Layered configuration for the Faultline tools.

pub mod faultline_config;

pub use faultline_config::{
    CliOverrides, FaultlineConfig, ModelConfig, OutputConfig, OutputFormat, SimulationConfig,
};
