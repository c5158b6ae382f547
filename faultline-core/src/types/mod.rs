//! Core type definitions shared across the Faultline crates.

pub mod collections;
pub mod domain;
pub mod identifiers;
pub mod kinds;

pub use domain::{Dependency, Metadata, Service};
pub use identifiers::ServiceId;
pub use kinds::{CallKind, DependencyKind, FailureKind, ParseKindError};
