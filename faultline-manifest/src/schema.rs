//! Manifest document schema.
//!
//! The on-disk shape mirrors the domain model but stays its own layer:
//! defaults are applied here, and conversion to domain types is explicit,
//! so the file format can move without touching the engine.

use serde::Deserialize;

use faultline_core::types::{CallKind, Dependency, DependencyKind, Metadata, Service};

/// One service entry in a manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSpec {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// One dependency entry in a manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencySpec {
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub dependency_kind: DependencyKind,
    #[serde(default)]
    pub call_kind: CallKind,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// A parsed topology manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestDoc {
    pub services: Vec<ServiceSpec>,
    pub dependencies: Vec<DependencySpec>,
}

impl ManifestDoc {
    /// Convert the parsed document into the engine's domain lists.
    pub fn into_domain(self) -> (Vec<Service>, Vec<Dependency>) {
        let services = self
            .services
            .into_iter()
            .map(|spec| Service {
                id: spec.id,
                name: spec.name,
                metadata: spec.metadata,
            })
            .collect();

        let dependencies = self
            .dependencies
            .into_iter()
            .map(|spec| Dependency {
                src: spec.src,
                dst: spec.dst,
                dependency_kind: spec.dependency_kind,
                call_kind: spec.call_kind,
                metadata: spec.metadata,
            })
            .collect();

        (services, dependencies)
    }
}
