//! Sessions and the round engine.
//!
//! A `SessionState` is created at game start, mutated only through
//! `RoundEngine` calls, and dropped when the game ends. Nothing here is
//! global: callers own the state and pass it in.

pub mod engine;
pub mod state;

pub use engine::{ActionOutcome, RoundEngine, RoundResult, UserAction};
pub use state::{Phase, SessionState};
