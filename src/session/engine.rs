//! Round engine.
//!
//! One round: draw two fresh identifiers, fetch both records, score the
//! pair, then write points, used identifiers and the pair back to the
//! session. Everything before the write-back works on locals, so a failed
//! fetch leaves the session exactly as it was.

use im::OrdSet;
use serde::Serialize;

use super::state::{Phase, SessionState};
use crate::core::{ExhaustionPolicy, RecordId, RescorePolicy, SessionConfig, SessionRng, SidePair};
use crate::draw::Sampler;
use crate::error::{ConfigError, FetchError, Result, RoundError};
use crate::fetch::RecordFetcher;
use crate::records::EntityRecord;
use crate::rules::{score_pair, PairScore};

/// Outcome of a completed round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    pub ids: SidePair<RecordId>,
    pub records: SidePair<EntityRecord>,
    pub score: PairScore,
    /// Cumulative scores after this round.
    pub totals: SidePair<u32>,
}

/// Events coming from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// Start the next round.
    Advance,
    /// Score the pair on the table again.
    Rescore,
    /// Flip background audio. Round state is untouched.
    ToggleAudio,
}

/// What a handled `UserAction` did.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    Round(RoundResult),
    /// `None` when the re-score was gated by `RescorePolicy::OncePerPair`.
    Rescored(Option<PairScore>),
    AudioToggled(bool),
}

/// Plays rounds against a record fetcher.
pub struct RoundEngine<F> {
    config: SessionConfig,
    sampler: Sampler,
    fetcher: F,
}

impl<F: RecordFetcher> RoundEngine<F> {
    /// Create an engine after validating the configuration.
    pub fn new(config: SessionConfig, fetcher: F) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let sampler = Sampler::new(SessionRng::from_seed_option(config.seed));
        Ok(Self {
            config,
            sampler,
            fetcher,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn fetcher_mut(&mut self) -> &mut F {
        &mut self.fetcher
    }

    /// Start a session configured for this engine.
    #[must_use]
    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.config.player_name.clone())
    }

    /// Play one round on `session`.
    ///
    /// On any error the session's scores, used identifiers and pair are
    /// unchanged. Under `ExhaustionPolicy::EndSession` running out of
    /// identifiers also ends the session. If the fetcher panics, the phase
    /// is put back before the panic leaves this call.
    pub fn play_round(&mut self, session: &mut SessionState) -> Result<RoundResult> {
        match session.phase {
            Phase::Ended => return Err(RoundError::SessionEnded),
            Phase::RoundInProgress => return Err(RoundError::RoundInProgress),
            Phase::Idle | Phase::RoundComplete => {}
        }

        let mut round = InFlight::begin(session);
        let drawn = self.draw_and_fetch(round.session);

        match drawn {
            Ok((reset, ids, records)) => Ok(self.complete_round(round.session, reset, ids, records)),
            Err(err) => {
                match &err {
                    RoundError::Fetch(fetch) => {
                        tracing::warn!(id = %fetch.id(), error = %fetch, "Round aborted, fetch failed");
                    }
                    RoundError::SamplerExhausted { pool, remaining } => {
                        tracing::error!(pool, remaining, "Identifier pool exhausted, ending session");
                        round.session.phase = Phase::Ended;
                    }
                    _ => {}
                }
                Err(err)
            }
        }
    }

    /// Score the pair already on the table without drawing a new one.
    ///
    /// Under `RescorePolicy::OncePerPair` the pair was scored when
    /// `play_round` completed, so this returns `None` and adds nothing.
    pub fn rescore(&self, session: &mut SessionState) -> Result<Option<PairScore>> {
        match session.phase {
            Phase::Ended => return Err(RoundError::SessionEnded),
            Phase::RoundInProgress => return Err(RoundError::RoundInProgress),
            Phase::Idle | Phase::RoundComplete => {}
        }

        let score = match session.current_pair.both() {
            Some(pair) => score_pair(pair),
            None => return Err(RoundError::NoPair),
        };

        if self.config.rescore == RescorePolicy::OncePerPair {
            tracing::debug!("Pair already scored, ignoring re-score");
            return Ok(None);
        }

        session.add_points(score.delta);
        tracing::debug!(
            user = score.delta.user,
            computer = score.delta.computer,
            "Re-scored current pair"
        );
        Ok(Some(score))
    }

    /// Dispatch a player event.
    pub fn handle(&mut self, session: &mut SessionState, action: UserAction) -> Result<ActionOutcome> {
        match action {
            UserAction::Advance => self.play_round(session).map(ActionOutcome::Round),
            UserAction::Rescore => self.rescore(session).map(ActionOutcome::Rescored),
            UserAction::ToggleAudio => {
                session.audio_enabled = !session.audio_enabled;
                Ok(ActionOutcome::AudioToggled(session.audio_enabled))
            }
        }
    }

    /// End the session. Further rounds fail with `SessionEnded`.
    pub fn end_session(&self, session: &mut SessionState) {
        if session.phase != Phase::Ended {
            tracing::info!(
                rounds = session.round_count,
                user = session.scores.user,
                computer = session.scores.computer,
                "Session ended"
            );
            session.phase = Phase::Ended;
        }
    }

    /// Draw a pair and fetch both records without touching `session`.
    ///
    /// The returned flag says whether the draw needed a pool reset.
    fn draw_and_fetch(
        &mut self,
        session: &SessionState,
    ) -> Result<(bool, SidePair<RecordId>, SidePair<EntityRecord>)> {
        let (reset, ids) = match self.sampler.draw_pair(&self.config.pool, &session.used) {
            Ok(ids) => (false, ids),
            Err(RoundError::SamplerExhausted { .. })
                if self.config.exhaustion == ExhaustionPolicy::ResetPool =>
            {
                tracing::info!(used = session.used.len(), "Pool exhausted, resetting");
                let ids = self.sampler.draw_pair(&self.config.pool, &OrdSet::new())?;
                (true, ids)
            }
            Err(err) => return Err(err),
        };

        let user = self.fetch_one(ids.user)?;
        let computer = self.fetch_one(ids.computer)?;
        Ok((reset, ids, SidePair::new(user, computer)))
    }

    fn fetch_one(&mut self, id: RecordId) -> std::result::Result<EntityRecord, FetchError> {
        tracing::debug!(id = %id, "Fetching record");
        self.fetcher.fetch(id)
    }

    fn complete_round(
        &self,
        session: &mut SessionState,
        reset: bool,
        ids: SidePair<RecordId>,
        records: SidePair<EntityRecord>,
    ) -> RoundResult {
        let score = score_pair(SidePair::new(&records.user, &records.computer));

        if reset {
            session.used = OrdSet::new();
            session.pool_resets += 1;
        }
        session.used.insert(ids.user);
        session.used.insert(ids.computer);
        session.add_points(score.delta);
        session.current_pair = SidePair::new(Some(records.user.clone()), Some(records.computer.clone()));
        session.current_ids = Some(ids);
        session.round_count += 1;
        session.phase = Phase::RoundComplete;

        tracing::info!(
            round = session.round_count,
            user_ship = %records.user.name,
            computer_ship = %records.computer.name,
            user = session.scores.user,
            computer = session.scores.computer,
            "Round complete"
        );

        RoundResult {
            round: session.round_count,
            ids,
            records,
            score,
            totals: session.scores,
        }
    }
}

/// A session with a round underway.
///
/// Dropping it while the phase is still `RoundInProgress` puts back the
/// phase the round started from. That covers early returns and unwinding
/// out of a fetcher alike.
struct InFlight<'a> {
    session: &'a mut SessionState,
    previous: Phase,
}

impl<'a> InFlight<'a> {
    fn begin(session: &'a mut SessionState) -> Self {
        let previous = session.phase;
        session.phase = Phase::RoundInProgress;
        Self { session, previous }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.session.phase == Phase::RoundInProgress {
            self.session.phase = self.previous;
        }
    }
}
