//! Record identification.
//!
//! Every entity the upstream catalog knows about has a `RecordId`.
//! Identifiers are opaque integers; the engine never interprets them beyond
//! equality and ordering.
//!
//! ## Usage
//!
//! ```
//! use starship_duel::core::{RecordId, DEFAULT_POOL};
//!
//! let id = RecordId::new(9);
//! assert!(DEFAULT_POOL.contains(&id));
//! assert_eq!(id.raw(), 9);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a record in the upstream catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl RecordId {
    /// Create a new record ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifiers known to exist upstream.
pub const DEFAULT_POOL: [RecordId; 20] = [
    RecordId(2),
    RecordId(3),
    RecordId(5),
    RecordId(9),
    RecordId(10),
    RecordId(11),
    RecordId(12),
    RecordId(13),
    RecordId(17),
    RecordId(22),
    RecordId(27),
    RecordId(28),
    RecordId(31),
    RecordId(32),
    RecordId(39),
    RecordId(40),
    RecordId(43),
    RecordId(59),
    RecordId(66),
    RecordId(68),
];
