//! Spur-based ID type for interned service identifiers.
//!
//! A `ServiceId` wraps a `lasso::Spur` and is only meaningful within the
//! `TopologyModel` that interned it. Equality is exact case-sensitive string
//! equality by construction: the interner hands out one key per unique string.

use lasso::{Key, Spur};

/// Interned service identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceId(Spur);

impl ServiceId {
    /// Create a new ID from a `Spur`.
    pub fn new(spur: Spur) -> Self {
        Self(spur)
    }

    /// Get the inner `Spur`.
    pub fn inner(self) -> Spur {
        self.0
    }

    /// Dense zero-based index of this ID, usable for adjacency lookups.
    pub fn index(self) -> usize {
        self.0.into_usize()
    }
}

impl From<Spur> for ServiceId {
    fn from(spur: Spur) -> Self {
        Self(spur)
    }
}

impl From<ServiceId> for Spur {
    fn from(id: ServiceId) -> Self {
        id.0
    }
}
