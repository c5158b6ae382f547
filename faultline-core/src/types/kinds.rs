//! Closed enumerations for dependency, call, and failure kinds.
//!
//! All three are fixed tagged variants rather than open strings so the
//! edge-admission rules in the propagation engine stay exhaustively
//! checkable at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How strongly a service depends on another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// The depender cannot function without the dependency.
    #[default]
    Hard,
    /// The depender degrades gracefully when the dependency fails.
    Soft,
    /// The dependency is best-effort only.
    Optional,
}

/// Whether a dependency is exercised synchronously or asynchronously.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    #[default]
    Sync,
    Async,
}

/// The nature of an injected fault.
///
/// The failure kind chosen at the start node is also the label attached to
/// every impacted node: the engine does not model kind transformation
/// across hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The service is fully unavailable.
    Down,
    /// The service answers, but with reduced quality.
    Degraded,
    /// The service answers, but slowly.
    LatencyUp,
}

impl FailureKind {
    /// Edge-admission rule: does a failure of this kind travel across a
    /// dependency edge with the given attributes?
    ///
    /// - `Down` crosses every edge
    /// - `Degraded` crosses only hard dependencies
    /// - `LatencyUp` crosses only synchronous calls
    pub fn propagates_through(self, dependency_kind: DependencyKind, call_kind: CallKind) -> bool {
        match self {
            FailureKind::Down => true,
            FailureKind::Degraded => dependency_kind == DependencyKind::Hard,
            FailureKind::LatencyUp => call_kind == CallKind::Sync,
        }
    }

    /// Canonical lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            FailureKind::Down => "down",
            FailureKind::Degraded => "degraded",
            FailureKind::LatencyUp => "latency_up",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a kind name from the CLI or environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown failure kind '{0}' (expected down, degraded, or latency_up)")]
pub struct ParseKindError(pub String);

impl FromStr for FailureKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "down" => Ok(FailureKind::Down),
            "degraded" => Ok(FailureKind::Degraded),
            "latency_up" => Ok(FailureKind::LatencyUp),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}
