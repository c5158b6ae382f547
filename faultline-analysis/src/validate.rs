//! Structural validation of the raw service/dependency lists.
//!
//! Unlike the model builder, which fails fast, the validator walks the
//! whole batch and collects every violation so the CLI can report them all
//! in one pass.

use faultline_core::config::ModelConfig;
use faultline_core::errors::ModelError;
use faultline_core::types::collections::FxHashSet;
use faultline_core::types::{Dependency, Service};

/// A single structural rule violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("duplicate service id '{id}'")]
    DuplicateService { id: String },

    #[error("dependency {src} -> {dst}: source '{src}' is not a declared service")]
    UnknownSource { src: String, dst: String },

    #[error("dependency {src} -> {dst}: destination '{dst}' is not a declared service")]
    UnknownDestination { src: String, dst: String },

    #[error("service '{id}' declares a dependency on itself")]
    SelfDependency { id: String },
}

/// Outcome of a validation pass over one batch.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// One violation per line, for display and for `InvariantViolation`.
    pub fn render(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("- {v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Convert a failed report into the model error the pipeline surfaces.
    pub fn into_result(self) -> Result<(), ModelError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(ModelError::InvariantViolation {
                report: self.render(),
            })
        }
    }
}

/// Check the topology invariants: unique service ids, resolvable edge
/// endpoints, and (unless configured otherwise) no self-dependencies.
pub fn validate(
    services: &[Service],
    dependencies: &[Dependency],
    config: &ModelConfig,
) -> ValidationReport {
    let mut violations = Vec::new();

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut reported: FxHashSet<&str> = FxHashSet::default();
    for svc in services {
        if !seen.insert(&svc.id) && reported.insert(&svc.id) {
            violations.push(Violation::DuplicateService {
                id: svc.id.clone(),
            });
        }
    }

    for dep in dependencies {
        if !seen.contains(dep.src.as_str()) {
            violations.push(Violation::UnknownSource {
                src: dep.src.clone(),
                dst: dep.dst.clone(),
            });
        }
        if !seen.contains(dep.dst.as_str()) {
            violations.push(Violation::UnknownDestination {
                src: dep.src.clone(),
                dst: dep.dst.clone(),
            });
        }
        if dep.src == dep.dst && !config.allow_self_dependencies {
            violations.push(Violation::SelfDependency {
                id: dep.src.clone(),
            });
        }
    }

    ValidationReport { violations }
}
