//! Failure propagation via inverse BFS over admitted edges.

use std::collections::VecDeque;

use faultline_core::errors::SimulationError;
use faultline_core::types::collections::FxHashMap;
use faultline_core::types::{FailureKind, ServiceId};
use tracing::trace;

use crate::topology::TopologyModel;

/// Impacted services and the failure kind attributed to each.
pub type ImpactMap = FxHashMap<ServiceId, FailureKind>;

/// Propagate a failure injected at `start`, named by its string id.
///
/// Returns the full impacted set: every service that transitively depends
/// on `start` through edges admitting this failure kind, plus `start`
/// itself. Fails when `start` is not a node of the model.
pub fn propagate(
    model: &TopologyModel,
    start: &str,
    failure: FailureKind,
) -> Result<ImpactMap, SimulationError> {
    let start_id = model.node(start).ok_or_else(|| SimulationError::UnknownService {
        id: start.to_string(),
    })?;
    Ok(propagate_from(model, start_id, failure))
}

/// Propagate from an already-resolved node id.
///
/// Breadth-first walk against dependency direction: from each reached node,
/// every depender whose edge admits the failure kind is enqueued exactly
/// once. The result map doubles as the visited set, so each node is
/// labeled at most once and the walk halts in O(nodes + admitted edges).
/// The start node's kind is copied unchanged to every node it reaches.
pub fn propagate_from(model: &TopologyModel, start: ServiceId, failure: FailureKind) -> ImpactMap {
    let mut impacted = ImpactMap::default();
    let mut queue = VecDeque::new();

    impacted.insert(start, failure);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in model.in_edges(current) {
            if !failure.propagates_through(edge.dependency_kind, edge.call_kind) {
                continue;
            }
            if !impacted.contains_key(&edge.src) {
                impacted.insert(edge.src, failure);
                queue.push_back(edge.src);
            }
        }
    }

    trace!(
        start = model.resolve(start),
        failure = %failure,
        impacted = impacted.len(),
        "propagation complete"
    );

    impacted
}
