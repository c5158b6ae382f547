//! Manifest file loading: format dispatch by extension plus field checks
//! the serde layer cannot express.

use std::path::Path;

use faultline_core::errors::ManifestError;
use faultline_core::types::{Dependency, Service};
use tracing::debug;

use crate::schema::ManifestDoc;

/// Load and check a manifest from `.yaml`/`.yml`/`.json`.
pub fn load_manifest(path: &Path) -> Result<ManifestDoc, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound {
            path: path.display().to_string(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let doc: ManifestDoc = match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&text).map_err(|e| ManifestError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        }
        Some("json") => serde_json::from_str(&text).map_err(|e| ManifestError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?,
        _ => {
            return Err(ManifestError::UnsupportedExtension {
                path: path.display().to_string(),
            })
        }
    };

    check_fields(&doc)?;

    debug!(
        path = %path.display(),
        services = doc.services.len(),
        dependencies = doc.dependencies.len(),
        "manifest loaded"
    );

    Ok(doc)
}

/// Convenience form: load a manifest and convert it to domain lists.
pub fn load_topology_input(path: &Path) -> Result<(Vec<Service>, Vec<Dependency>), ManifestError> {
    Ok(load_manifest(path)?.into_domain())
}

/// Reject blank identifiers; serde checks shape and enum values, not content.
fn check_fields(doc: &ManifestDoc) -> Result<(), ManifestError> {
    for (i, svc) in doc.services.iter().enumerate() {
        if svc.id.trim().is_empty() {
            return Err(ManifestError::InvalidField {
                field: format!("services[{i}].id"),
                message: "must be a non-empty string".to_string(),
            });
        }
    }
    for (i, dep) in doc.dependencies.iter().enumerate() {
        if dep.src.trim().is_empty() {
            return Err(ManifestError::InvalidField {
                field: format!("dependencies[{i}].src"),
                message: "must be a non-empty string".to_string(),
            });
        }
        if dep.dst.trim().is_empty() {
            return Err(ManifestError::InvalidField {
                field: format!("dependencies[{i}].dst"),
                message: "must be a non-empty string".to_string(),
            });
        }
    }
    Ok(())
}
