//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec optimized for in-edge lists (most services have few dependers).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
