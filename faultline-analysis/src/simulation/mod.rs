//! Failure simulation: propagation via inverse BFS and criticality ranking.

pub mod criticality;
pub mod propagate;

pub use criticality::{rank, rank_parallel, sorted_scores, ScoreMap};
pub use propagate::{propagate, propagate_from, ImpactMap};
