//! Topology model storage and read operations.

use faultline_core::types::collections::SmallVec4;
use faultline_core::types::{CallKind, DependencyKind, ServiceId};
use lasso::RodeoReader;

/// A dependency edge seen from its destination: `src` depends on the node
/// this edge is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InEdge {
    pub src: ServiceId,
    pub dependency_kind: DependencyKind,
    pub call_kind: CallKind,
}

/// Immutable directed dependency graph.
///
/// Service ids are interned into dense `ServiceId` keys; adjacency is a
/// per-node in-edge list indexed by that key. There is no mutation path
/// after construction, so the model is shared freely across threads.
#[derive(Debug)]
pub struct TopologyModel {
    /// Frozen interner: `ServiceId` to string and back.
    pub(crate) ids: RodeoReader,
    /// All nodes in insertion order.
    pub(crate) nodes: Vec<ServiceId>,
    /// Dependers of each node, indexed by `ServiceId::index`.
    pub(crate) in_edges: Vec<SmallVec4<InEdge>>,
    /// Outgoing edge count per node, kept for stats reporting only.
    pub(crate) out_degree: Vec<u32>,
    pub(crate) edge_count: usize,
}

impl TopologyModel {
    /// Look up a service by its string id.
    pub fn node(&self, id: &str) -> Option<ServiceId> {
        self.ids.get(id).map(ServiceId::new)
    }

    /// Resolve an interned id back to its string form.
    pub fn resolve(&self, id: ServiceId) -> &str {
        self.ids.resolve(&id.inner())
    }

    /// All node ids, in service declaration order.
    pub fn node_ids(&self) -> &[ServiceId] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The dependers pointing at `id`: every edge whose destination is `id`.
    pub fn in_edges(&self, id: ServiceId) -> &[InEdge] {
        &self.in_edges[id.index()]
    }

    /// Count of edges where `id` is the source.
    pub fn out_degree(&self, id: ServiceId) -> u32 {
        self.out_degree[id.index()]
    }
}
