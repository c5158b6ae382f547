//! # faultline-analysis
//!
//! Static analysis of cascading-failure risk in a service topology:
//! - Topology: immutable directed graph of services, indexed by destination
//! - Validate: structural invariant checks over the raw service/edge lists
//! - Simulation: failure propagation via inverse BFS, criticality ranking
//! - Stats: degree summaries for reporting

pub mod simulation;
pub mod stats;
pub mod topology;
pub mod validate;

pub use simulation::{
    propagate, propagate_from, rank, rank_parallel, sorted_scores, ImpactMap, ScoreMap,
};
pub use stats::{DependerStat, TopologyStats};
pub use topology::{InEdge, TopologyModel};
pub use validate::{validate, ValidationReport, Violation};
