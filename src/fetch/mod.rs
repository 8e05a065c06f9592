//! Record fetching.
//!
//! The round engine never talks to a transport directly. It asks a
//! `RecordFetcher` for one record per identifier and treats any failure as
//! a `FetchError` that aborts the round.
//!
//! Implementations:
//! - `RecordCatalog`: in-memory, see `crate::records`
//! - `HttpFetcher`: upstream JSON API (feature `http`)

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpFetcher;

use crate::core::RecordId;
use crate::error::FetchError;
use crate::records::EntityRecord;

/// Source of entity records.
///
/// Calls block until the record arrives or the request fails. The engine
/// issues one call per identifier, sequentially.
pub trait RecordFetcher {
    /// Fetch the record for `id`.
    fn fetch(&mut self, id: RecordId) -> Result<EntityRecord, FetchError>;
}

impl<F: RecordFetcher + ?Sized> RecordFetcher for &mut F {
    fn fetch(&mut self, id: RecordId) -> Result<EntityRecord, FetchError> {
        (**self).fetch(id)
    }
}

impl<F: RecordFetcher + ?Sized> RecordFetcher for Box<F> {
    fn fetch(&mut self, id: RecordId) -> Result<EntityRecord, FetchError> {
        (**self).fetch(id)
    }
}

/// Adapter turning a closure into a fetcher.
///
/// ```
/// use starship_duel::core::RecordId;
/// use starship_duel::error::FetchError;
/// use starship_duel::fetch::{fetcher_fn, RecordFetcher};
///
/// let mut offline = fetcher_fn(|id| Err(FetchError::NotFound(id)));
/// assert!(offline.fetch(RecordId::new(2)).is_err());
/// ```
pub struct FnFetcher<F>(F);

/// Wrap a closure as a `RecordFetcher`.
pub fn fetcher_fn<F>(f: F) -> FnFetcher<F>
where
    F: FnMut(RecordId) -> Result<EntityRecord, FetchError>,
{
    FnFetcher(f)
}

impl<F> RecordFetcher for FnFetcher<F>
where
    F: FnMut(RecordId) -> Result<EntityRecord, FetchError>,
{
    fn fetch(&mut self, id: RecordId) -> Result<EntityRecord, FetchError> {
        (self.0)(id)
    }
}
