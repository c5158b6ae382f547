//! CLI subcommands. Each command loads its inputs, runs the engine, and
//! renders to stdout; diagnostics go to stderr via tracing.

pub mod rank;
pub mod simulate;
pub mod stats;
pub mod validate;

use std::path::Path;

use faultline_analysis::topology::TopologyModel;
use faultline_core::config::FaultlineConfig;
use faultline_core::errors::{ConfigError, FaultlineError, FaultlineResult};
use faultline_core::types::FailureKind;
use faultline_manifest::load_topology_input;

/// Load, validate, and build: the shared front half of every analysis
/// command. Validation runs first so a broken manifest reports every
/// violation at once instead of the builder's first one.
pub(crate) fn load_model(
    manifest: &Path,
    config: &FaultlineConfig,
) -> FaultlineResult<TopologyModel> {
    let (services, dependencies) = load_topology_input(manifest)?;
    faultline_analysis::validate::validate(&services, &dependencies, &config.model)
        .into_result()?;
    let model = TopologyModel::build(&services, &dependencies, &config.model)?;
    Ok(model)
}

/// Parse a `--failure` value, mapping the kind error to a usage error.
pub(crate) fn parse_failure(value: &str) -> Result<FailureKind, FaultlineError> {
    value.parse::<FailureKind>().map_err(|e| {
        FaultlineError::Config(ConfigError::InvalidValue {
            field: "--failure".to_string(),
            message: e.to_string(),
        })
    })
}
