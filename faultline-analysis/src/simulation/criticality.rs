//! Criticality ranking: per-node blast radius over the whole graph.

use faultline_core::types::collections::FxHashMap;
use faultline_core::types::{FailureKind, ServiceId};
use rayon::prelude::*;
use tracing::debug;

use super::propagate::propagate_from;
use crate::topology::TopologyModel;

/// Criticality score per service: the size of its blast radius, including
/// the service itself (minimum score 1).
pub type ScoreMap = FxHashMap<ServiceId, u32>;

/// Rank every node by the size of its impacted set under `failure`.
///
/// Each node triggers an independent full traversal with its own queue and
/// visited set; there is no memoization or shared state across runs, so
/// the cost is O(nodes x (nodes + admitted edges)).
pub fn rank(model: &TopologyModel, failure: FailureKind) -> ScoreMap {
    let scores = model
        .node_ids()
        .iter()
        .map(|&node| (node, propagate_from(model, node, failure).len() as u32))
        .collect();
    debug!(nodes = model.node_count(), failure = %failure, "criticality ranking complete");
    scores
}

/// Same contract as `rank`, with the per-node loop on the rayon pool.
///
/// Traversals are independent and the model is shared read-only, so the
/// merge is a plain order-independent collect; content is identical to the
/// sequential form.
pub fn rank_parallel(model: &TopologyModel, failure: FailureKind) -> ScoreMap {
    let scores = model
        .node_ids()
        .par_iter()
        .map(|&node| (node, propagate_from(model, node, failure).len() as u32))
        .collect();
    debug!(nodes = model.node_count(), failure = %failure, "parallel criticality ranking complete");
    scores
}

/// Scores resolved to string ids and sorted for display: descending by
/// score, ascending by id to break ties. Sorting is deliberately outside
/// `rank` itself; the score map is the engine contract.
pub fn sorted_scores(model: &TopologyModel, scores: &ScoreMap) -> Vec<(String, u32)> {
    let mut rows: Vec<(String, u32)> = scores
        .iter()
        .map(|(&id, &score)| (model.resolve(id).to_string(), score))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
