//! Session configuration.
//!
//! A session is configured once at game start:
//! - the identifier pool rounds are drawn from
//! - an optional RNG seed
//! - what happens when the pool runs dry
//! - whether re-scoring an already scored pair counts again

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::identifier::{RecordId, DEFAULT_POOL};
use crate::error::ConfigError;

/// What to do when fewer than two unused identifiers remain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustionPolicy {
    /// Fail the round with `SamplerExhausted` and end the session.
    #[default]
    EndSession,
    /// Forget every used identifier and draw from the full pool again.
    ResetPool,
}

/// How a manual re-score of the current pair is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RescorePolicy {
    /// `play_round` is the only scoring pass. Re-score triggers on the pair
    /// it left on the table are no-ops.
    #[default]
    OncePerPair,
    /// Every trigger scores the current pair again and adds to the totals.
    Replay,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Identifiers rounds are drawn from, in catalog order.
    pub pool: Vec<RecordId>,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    pub exhaustion: ExhaustionPolicy,

    pub rescore: RescorePolicy,

    /// Display name of the human player.
    pub player_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pool: DEFAULT_POOL.to_vec(),
            seed: None,
            exhaustion: ExhaustionPolicy::default(),
            rescore: RescorePolicy::default(),
            player_name: "User".to_string(),
        }
    }
}

impl SessionConfig {
    /// Replace the identifier pool.
    pub fn with_pool(mut self, pool: impl IntoIterator<Item = RecordId>) -> Self {
        self.pool = pool.into_iter().collect();
        self
    }

    /// Make draws deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    pub fn with_rescore(mut self, policy: RescorePolicy) -> Self {
        self.rescore = policy;
        self
    }

    /// Set the player name. Blank names fall back to "User".
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.player_name = name;
        }
        self
    }

    /// Check the pool can supply at least one round.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();
        for &id in &self.pool {
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateId(id));
            }
        }
        if seen.len() < 2 {
            return Err(ConfigError::PoolTooSmall(seen.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.pool.len(), 20);
        assert_eq!(config.seed, None);
        assert_eq!(config.exhaustion, ExhaustionPolicy::EndSession);
        assert_eq!(config.rescore, RescorePolicy::OncePerPair);
        assert_eq!(config.player_name, "User");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_pool([RecordId::new(2), RecordId::new(3)])
            .with_seed(123)
            .with_exhaustion(ExhaustionPolicy::ResetPool)
            .with_rescore(RescorePolicy::Replay)
            .with_player_name("Han");

        assert_eq!(config.pool, vec![RecordId::new(2), RecordId::new(3)]);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.exhaustion, ExhaustionPolicy::ResetPool);
        assert_eq!(config.rescore, RescorePolicy::Replay);
        assert_eq!(config.player_name, "Han");
    }

    #[test]
    fn test_blank_player_name_keeps_default() {
        let config = SessionConfig::default().with_player_name("   ");
        assert_eq!(config.player_name, "User");
    }

    #[test]
    fn test_validate_rejects_small_pool() {
        let config = SessionConfig::default().with_pool([RecordId::new(2)]);
        assert_eq!(config.validate(), Err(ConfigError::PoolTooSmall(1)));

        let empty = SessionConfig::default().with_pool([]);
        assert_eq!(empty.validate(), Err(ConfigError::PoolTooSmall(0)));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let config = SessionConfig::default()
            .with_pool([RecordId::new(2), RecordId::new(3), RecordId::new(2)]);
        assert_eq!(config.validate(), Err(ConfigError::DuplicateId(RecordId::new(2))));
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
