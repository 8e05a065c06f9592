//! Core types: identifiers, sides, RNG, configuration.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod identifier;
pub mod rng;
pub mod side;

pub use config::{ExhaustionPolicy, RescorePolicy, SessionConfig};
pub use identifier::{RecordId, DEFAULT_POOL};
pub use rng::{SessionRng, SessionRngState};
pub use side::{Side, SidePair};
