//! `faultline simulate`: single-fault propagation report.

use std::collections::BTreeMap;
use std::path::Path;

use faultline_analysis::simulation::propagate;
use faultline_core::config::{FaultlineConfig, OutputFormat};
use faultline_core::errors::{FaultlineResult, EXIT_OK};
use faultline_core::types::FailureKind;

use super::{load_model, parse_failure};

pub fn run(
    manifest: &Path,
    start: &str,
    failure: &str,
    config: &FaultlineConfig,
) -> FaultlineResult<i32> {
    let failure = parse_failure(failure)?;
    let model = load_model(manifest, config)?;

    let impacted = propagate(&model, start, failure)?;

    // Sibling order inside the engine is unspecified; sort by id for a
    // stable report.
    let mut rows: Vec<(String, FailureKind)> = impacted
        .iter()
        .map(|(&id, &kind)| (model.resolve(id).to_string(), kind))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    match config.output.format {
        OutputFormat::Text => {
            println!("impact of {failure} at '{start}': {} services", rows.len());
            for (id, kind) in &rows {
                println!("- {id}: {kind}");
            }
        }
        OutputFormat::Json => {
            let impacted: BTreeMap<&str, &str> = rows
                .iter()
                .map(|(id, kind)| (id.as_str(), kind.name()))
                .collect();
            let doc = serde_json::json!({
                "start": start,
                "failure": failure.name(),
                "impacted": impacted,
            });
            println!("{doc:#}");
        }
    }

    Ok(EXIT_OK)
}
