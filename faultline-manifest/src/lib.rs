//! # faultline-manifest
//!
//! Declarative topology ingestion: a manifest file (`.yaml`/`.yml`/`.json`)
//! is parsed into `ManifestDoc` and converted to the core domain lists the
//! analysis engine consumes. The engine itself never touches files.

pub mod loader;
pub mod schema;

pub use loader::{load_manifest, load_topology_input};
pub use schema::{DependencySpec, ManifestDoc, ServiceSpec};
