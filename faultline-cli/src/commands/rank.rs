//! `faultline rank`: criticality listing by blast radius.

use std::path::Path;

use faultline_analysis::simulation::{rank, rank_parallel, sorted_scores};
use faultline_core::config::{FaultlineConfig, OutputFormat};
use faultline_core::errors::{FaultlineResult, EXIT_OK};

use super::{load_model, parse_failure};

pub fn run(
    manifest: &Path,
    failure: &str,
    top: usize,
    config: &FaultlineConfig,
) -> FaultlineResult<i32> {
    let failure = parse_failure(failure)?;
    let model = load_model(manifest, config)?;

    let scores = if config.simulation.parallel_rank {
        rank_parallel(&model, failure)
    } else {
        rank(&model, failure)
    };

    let mut rows = sorted_scores(&model, &scores);
    rows.truncate(top);

    match config.output.format {
        OutputFormat::Text => {
            println!("criticality (failure = {failure}):");
            for (id, score) in &rows {
                println!("- {id}: {score}");
            }
        }
        OutputFormat::Json => {
            let scores: Vec<serde_json::Value> = rows
                .iter()
                .map(|(id, score)| serde_json::json!({ "id": id, "score": score }))
                .collect();
            let doc = serde_json::json!({
                "failure": failure.name(),
                "scores": scores,
            });
            println!("{doc:#}");
        }
    }

    Ok(EXIT_OK)
}
