//! Faultline CLI
//!
//! Command-line interface for cascading-failure analysis over a
//! declarative service topology manifest.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use faultline_core::config::{CliOverrides, FaultlineConfig, OutputFormat};
use faultline_core::errors::{FaultlineExitCode, FaultlineResult};
use faultline_core::tracing_setup::init_tracing;

mod commands;

#[derive(Parser)]
#[command(name = "faultline")]
#[command(version, about = "Cascading-failure analysis for declarative service topologies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to faultline.toml in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, global = true, value_name = "FORMAT")]
    format: Option<String>,

    /// Permit services that depend on themselves
    #[arg(long, global = true)]
    allow_self_dependencies: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a manifest against the topology invariants
    Validate {
        /// Path to a .yaml/.yml/.json manifest
        manifest: PathBuf,
    },

    /// Show node/edge counts and the heaviest dependers
    Stats {
        manifest: PathBuf,

        /// Row cap for the depender listing (defaults to output.top)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Propagate a failure from one service and list the impacted set
    Simulate {
        manifest: PathBuf,

        /// Service where the fault is injected
        #[arg(long)]
        start: String,

        /// Failure kind: down, degraded, or latency_up
        #[arg(long, default_value = "down")]
        failure: String,
    },

    /// Rank services by the size of their blast radius
    Rank {
        manifest: PathBuf,

        /// Failure kind: down, degraded, or latency_up
        #[arg(long, default_value = "down")]
        failure: String,

        /// Keep only the highest scores (defaults to output.top)
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(default_directive(cli.verbose));

    match run(&cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn run(cli: &Cli) -> FaultlineResult<i32> {
    let overrides = CliOverrides {
        allow_self_dependencies: cli.allow_self_dependencies.then_some(true),
        format: cli
            .format
            .as_deref()
            .map(|s| s.parse::<OutputFormat>())
            .transpose()?,
        top: None,
    };

    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = FaultlineConfig::load(&root, cli.config.as_deref(), Some(&overrides))?;
    tracing::debug!(format = %config.output.format, "configuration resolved");

    match &cli.command {
        Commands::Validate { manifest } => commands::validate::run(manifest, &config),
        Commands::Stats { manifest, top } => {
            commands::stats::run(manifest, top.unwrap_or(config.output.top), &config)
        }
        Commands::Simulate {
            manifest,
            start,
            failure,
        } => commands::simulate::run(manifest, start, failure, &config),
        Commands::Rank {
            manifest,
            failure,
            top,
        } => commands::rank::run(manifest, failure, top.unwrap_or(config.output.top), &config),
    }
}
