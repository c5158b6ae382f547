//! Topology model: purpose-built adjacency index over interned service ids.
//!
//! The model is built once from a validated batch and never mutated. Edges
//! are indexed by destination because propagation only ever walks the
//! "who depends on me" direction.

pub mod builder;
pub mod types;

pub use types::{InEdge, TopologyModel};
