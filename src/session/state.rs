//! Session state: everything that lives for one play session.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle -> RoundInProgress -> RoundComplete -> RoundInProgress -> ...
//!                                          \-> Ended
//! ```
//!
//! Only the round engine mutates a `SessionState`. Scores never decrease and
//! the used-identifier set only grows (unless the pool is reset under
//! `ExhaustionPolicy::ResetPool`).

use im::OrdSet;
use serde::Serialize;

use crate::core::{RecordId, Side, SidePair};
use crate::records::EntityRecord;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No pair fetched yet.
    #[default]
    Idle,
    /// Draw and fetch underway.
    RoundInProgress,
    /// A pair is on the table and has been scored.
    RoundComplete,
    /// The session accepts no further rounds.
    Ended,
}

/// State of one play session.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) player_name: String,
    pub(crate) used: OrdSet<RecordId>,
    pub(crate) scores: SidePair<u32>,
    pub(crate) current_pair: SidePair<Option<EntityRecord>>,
    pub(crate) current_ids: Option<SidePair<RecordId>>,
    pub(crate) round_count: u32,
    pub(crate) pool_resets: u32,
    pub(crate) audio_enabled: bool,
}

impl SessionState {
    /// Fresh session: no pair, zero scores, nothing used.
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Identifiers drawn so far.
    #[must_use]
    pub fn used_identifiers(&self) -> &OrdSet<RecordId> {
        &self.used
    }

    /// Cumulative scores.
    #[must_use]
    pub fn scores(&self) -> SidePair<u32> {
        self.scores
    }

    #[must_use]
    pub fn user_score(&self) -> u32 {
        self.scores.user
    }

    #[must_use]
    pub fn computer_score(&self) -> u32 {
        self.scores.computer
    }

    /// The records on the table, `None` before the first round.
    #[must_use]
    pub fn current_pair(&self) -> &SidePair<Option<EntityRecord>> {
        &self.current_pair
    }

    /// Identifiers of the records on the table.
    #[must_use]
    pub fn current_ids(&self) -> Option<SidePair<RecordId>> {
        self.current_ids
    }

    /// Completed rounds.
    #[must_use]
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    /// How many times the pool was reset after running dry.
    #[must_use]
    pub fn pool_resets(&self) -> u32 {
        self.pool_resets
    }

    #[must_use]
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Side currently ahead, `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        use std::cmp::Ordering;

        match self.scores.user.cmp(&self.scores.computer) {
            Ordering::Greater => Some(Side::User),
            Ordering::Less => Some(Side::Computer),
            Ordering::Equal => None,
        }
    }

    pub(crate) fn add_points(&mut self, delta: SidePair<u32>) {
        for side in Side::BOTH {
            self.scores[side] = self.scores[side].saturating_add(delta[side]);
        }
    }
}
