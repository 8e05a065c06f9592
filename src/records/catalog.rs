//! In-memory record catalog.
//!
//! `RecordCatalog` maps identifiers to records and serves them as a
//! `RecordFetcher`. Used for offline play, fixtures and tests.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::record::EntityRecord;
use crate::core::RecordId;
use crate::error::FetchError;
use crate::fetch::RecordFetcher;

/// Catalog of records keyed by identifier.
///
/// ## Example
///
/// ```
/// use starship_duel::core::RecordId;
/// use starship_duel::fetch::RecordFetcher;
/// use starship_duel::records::{EntityRecord, RecordCatalog};
///
/// let mut catalog = RecordCatalog::new();
/// catalog.insert(RecordId::new(10), EntityRecord::new("Millennium Falcon"));
///
/// let found = catalog.fetch(RecordId::new(10)).unwrap();
/// assert_eq!(found.name, "Millennium Falcon");
/// assert!(catalog.fetch(RecordId::new(99)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordCatalog {
    records: FxHashMap<RecordId, EntityRecord>,
}

#[derive(Deserialize)]
struct CatalogEntry {
    id: RecordId,
    #[serde(flatten)]
    record: EntityRecord,
}

impl RecordCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of records, each carrying an `id`
    /// next to the upstream record fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(entries.into_iter().map(|e| (e.id, e.record)).collect())
    }

    /// Insert a record, returning the one it replaced.
    pub fn insert(&mut self, id: RecordId, record: EntityRecord) -> Option<EntityRecord> {
        self.records.insert(id, record)
    }

    /// Add a record under a raw identifier (builder pattern).
    #[must_use]
    pub fn with_record(mut self, id: u32, record: EntityRecord) -> Self {
        self.records.insert(RecordId::new(id), record);
        self
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&EntityRecord> {
        self.records.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifiers present in the catalog, ascending.
    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<(RecordId, EntityRecord)> for RecordCatalog {
    fn from_iter<I: IntoIterator<Item = (RecordId, EntityRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl RecordFetcher for RecordCatalog {
    fn fetch(&mut self, id: RecordId) -> Result<EntityRecord, FetchError> {
        self.records.get(&id).cloned().ok_or(FetchError::NotFound(id))
    }
}
