//! Domain model supplied by the manifest layer: services and the typed
//! dependency edges between them.
//!
//! These are the immutable batch inputs to `TopologyModel::build`. Ids are
//! plain strings here; the model interns them into `ServiceId`s at build
//! time. `metadata` is an opaque pass-through bag the engine never inspects.

use serde::{Deserialize, Serialize};

use super::kinds::{CallKind, DependencyKind};

/// Opaque key-value bag carried through from the manifest.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A service node in the topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier within one topology.
    pub id: String,
    /// Display name. No semantic effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Service {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            metadata: None,
        }
    }
}

/// A directed dependency edge: `src` depends on `dst`.
///
/// Failure impact flows against this direction, from `dst` toward its
/// dependers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub dependency_kind: DependencyKind,
    #[serde(default)]
    pub call_kind: CallKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Dependency {
    /// A hard, synchronous dependency: the default edge attributes.
    pub fn new(src: impl Into<String>, dst: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            dependency_kind: DependencyKind::default(),
            call_kind: CallKind::default(),
            metadata: None,
        }
    }

    /// Same as `new` with explicit edge attributes.
    pub fn with_kinds(
        src: impl Into<String>,
        dst: impl Into<String>,
        dependency_kind: DependencyKind,
        call_kind: CallKind,
    ) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            dependency_kind,
            call_kind,
            metadata: None,
        }
    }
}
