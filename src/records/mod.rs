//! Record system: entity records, normalization, and the in-memory catalog.
//!
//! ## Key Types
//!
//! - `EntityRecord`: One starship with raw text attributes
//! - `Attribute`: The three compared stats, in scoring order
//! - `normalize`: Raw text to comparable number, `UNKNOWN` for non-numbers
//! - `RecordCatalog`: Identifier to record map usable as a fetcher

pub mod catalog;
pub mod normalize;
pub mod record;

pub use catalog::RecordCatalog;
pub use normalize::{is_unknown, normalize, UNKNOWN};
pub use record::{Attribute, EntityRecord};
