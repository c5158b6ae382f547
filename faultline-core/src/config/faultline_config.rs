//! Top-level Faultline configuration with layered resolution.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Topology model construction options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Permit edges where a service depends on itself.
    pub allow_self_dependencies: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            allow_self_dependencies: false,
        }
    }
}

/// Simulation engine options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Run the criticality ranker's per-node loop on the rayon pool.
    /// Results are identical either way; only wall-clock changes.
    pub parallel_rank: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { parallel_rank: true }
    }
}

/// Report rendering options for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Row cap for ranked listings (top dependers, criticality).
    pub top: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            top: 10,
        }
    }
}

/// Output rendering formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                field: "output.format".to_string(),
                message: format!("'{other}' is not one of: text, json"),
            }),
        }
    }
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub allow_self_dependencies: Option<bool>,
    pub format: Option<OutputFormat>,
    pub top: Option<usize>,
}

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`FAULTLINE_*`)
/// 3. Project config (`faultline.toml` in the working directory, or an
///    explicit `--config` path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaultlineConfig {
    pub model: ModelConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

impl FaultlineConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_path` is an explicit config file (`--config`); when `None`,
    /// `faultline.toml` under `root` is used if present. A missing explicit
    /// file is an error; a missing project file is not.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_path = root.join("faultline.toml");
                if project_path.exists() {
                    Self::merge_toml_file(&mut config, &project_path)?;
                    tracing::debug!(path = %project_path.display(), "project config applied");
                }
            }
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &FaultlineConfig) -> Result<(), ConfigError> {
        if config.output.top == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "output.top".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut FaultlineConfig, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        *config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    fn apply_env_overrides(config: &mut FaultlineConfig) -> Result<(), ConfigError> {
        if let Some(value) = read_env_bool("FAULTLINE_ALLOW_SELF_DEPENDENCIES")? {
            config.model.allow_self_dependencies = value;
        }
        if let Some(value) = read_env_bool("FAULTLINE_PARALLEL_RANK")? {
            config.simulation.parallel_rank = value;
        }
        if let Ok(value) = std::env::var("FAULTLINE_OUTPUT_FORMAT") {
            config.output.format = value.parse()?;
        }
        if let Ok(value) = std::env::var("FAULTLINE_OUTPUT_TOP") {
            config.output.top = value.parse().map_err(|_| ConfigError::InvalidValue {
                field: "output.top".to_string(),
                message: format!("'{value}' is not a positive integer"),
            })?;
        }
        Ok(())
    }

    fn apply_cli_overrides(config: &mut FaultlineConfig, cli: &CliOverrides) {
        if let Some(value) = cli.allow_self_dependencies {
            config.model.allow_self_dependencies = value;
        }
        if let Some(format) = cli.format {
            config.output.format = format;
        }
        if let Some(top) = cli.top {
            config.output.top = top;
        }
    }
}

fn read_env_bool(name: &str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => match value.as_str() {
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(ConfigError::InvalidValue {
                field: name.to_string(),
                message: format!("'{other}' is not a boolean (use 1/0 or true/false)"),
            }),
        },
        Err(_) => Ok(None),
    }
}
