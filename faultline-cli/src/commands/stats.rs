//! `faultline stats`: topology shape summary.

use std::path::Path;

use faultline_analysis::stats::TopologyStats;
use faultline_core::config::{FaultlineConfig, OutputFormat};
use faultline_core::errors::{FaultlineResult, EXIT_OK};

use super::load_model;

pub fn run(manifest: &Path, top: usize, config: &FaultlineConfig) -> FaultlineResult<i32> {
    let model = load_model(manifest, config)?;
    let stats = TopologyStats::collect(&model, top);

    match config.output.format {
        OutputFormat::Text => {
            println!("services: {}", stats.services);
            println!("dependencies: {}", stats.dependencies);
            println!("top dependers (out-degree):");
            for row in &stats.top_dependers {
                println!("- {}: {}", row.id, row.out_degree);
            }
        }
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "services": stats.services,
                "dependencies": stats.dependencies,
                "top_dependers": stats.top_dependers,
            });
            println!("{doc:#}");
        }
    }

    Ok(EXIT_OK)
}
