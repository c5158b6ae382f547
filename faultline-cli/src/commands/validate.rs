//! `faultline validate`: invariant checks over a manifest.

use std::path::Path;

use faultline_core::config::{FaultlineConfig, OutputFormat};
use faultline_core::errors::{FaultlineResult, EXIT_INVALID_INPUT, EXIT_OK};
use faultline_manifest::load_topology_input;

pub fn run(manifest: &Path, config: &FaultlineConfig) -> FaultlineResult<i32> {
    let (services, dependencies) = load_topology_input(manifest)?;
    let report = faultline_analysis::validate::validate(&services, &dependencies, &config.model);

    match config.output.format {
        OutputFormat::Text => {
            if report.is_ok() {
                println!("OK: manifest is valid");
            } else {
                println!("INVALID:");
                println!("{}", report.render());
            }
        }
        OutputFormat::Json => {
            let violations: Vec<String> =
                report.violations().iter().map(|v| v.to_string()).collect();
            let doc = serde_json::json!({
                "ok": report.is_ok(),
                "violations": violations,
            });
            println!("{doc:#}");
        }
    }

    Ok(if report.is_ok() { EXIT_OK } else { EXIT_INVALID_INPUT })
}
