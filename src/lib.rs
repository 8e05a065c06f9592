//! # starship-duel
//!
//! Round engine for a two-sided stat-comparison card game: each round the
//! user and the computer are dealt one starship each, and three attributes
//! are compared for points.
//!
//! ## Design Principles
//!
//! 1. **Pure scoring**: Normalization and comparison are pure functions.
//!    Only the round engine mutates state.
//!
//! 2. **All-or-nothing rounds**: A round that fails to fetch either record
//!    changes nothing in the session.
//!
//! 3. **Explicit session state**: Callers own a `SessionState` and pass it
//!    to the engine. No ambient globals.
//!
//! 4. **No silent hangs**: Pool exhaustion is detected before drawing and
//!    handled by an explicit `ExhaustionPolicy`.
//!
//! ## Modules
//!
//! - `core`: Record IDs, sides, RNG, configuration
//! - `records`: Entity records, normalizer, in-memory catalog
//! - `fetch`: Record fetcher trait (and HTTP client with `http`)
//! - `draw`: Unique identifier sampling
//! - `rules`: Pair scoring
//! - `session`: Session state and round engine
//!
//! ## Example
//!
//! ```
//! use starship_duel::{EntityRecord, RecordCatalog, RecordId, RoundEngine, SessionConfig};
//!
//! let catalog = RecordCatalog::new()
//!     .with_record(2, EntityRecord::new("CR90 corvette").with_max_speed("950"))
//!     .with_record(3, EntityRecord::new("Star Destroyer").with_max_speed("975"));
//!
//! let config = SessionConfig::default()
//!     .with_pool([RecordId::new(2), RecordId::new(3)])
//!     .with_seed(1);
//!
//! let mut engine = RoundEngine::new(config, catalog).unwrap();
//! let mut session = engine.new_session();
//!
//! let result = engine.play_round(&mut session).unwrap();
//! assert_eq!(result.round, 1);
//! assert_eq!(session.user_score() + session.computer_score(), 1);
//! ```

pub mod core;
pub mod draw;
pub mod error;
pub mod fetch;
pub mod records;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ExhaustionPolicy, RecordId, RescorePolicy, SessionConfig, SessionRng, Side, SidePair,
    DEFAULT_POOL,
};

pub use crate::error::{ConfigError, FetchError, RoundError};

pub use crate::fetch::{fetcher_fn, RecordFetcher};

pub use crate::records::{normalize, Attribute, EntityRecord, RecordCatalog, UNKNOWN};

pub use crate::draw::Sampler;

pub use crate::rules::{score_pair, AttributeOutcome, PairScore, ScoreDelta};

pub use crate::session::{ActionOutcome, Phase, RoundEngine, RoundResult, SessionState, UserAction};
