//! Unique identifier draws.
//!
//! The sampler picks uniformly among the pool identifiers that have not been
//! used yet. The used set belongs to the caller; the sampler only holds the
//! RNG. Exhaustion is checked up front, so a draw either succeeds or fails
//! with `SamplerExhausted` and never spins.

use im::OrdSet;
use smallvec::SmallVec;

use crate::core::{RecordId, SessionRng, SidePair};
use crate::error::{Result, RoundError};

/// Identifiers drawn so far in the current double draw.
type Exclusions = SmallVec<[RecordId; 2]>;

/// Draws identifiers that have not been used in the session.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: SessionRng,
}

impl Sampler {
    #[must_use]
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    /// Draw one identifier from `pool` that is not in `used`.
    pub fn draw_unique(&mut self, pool: &[RecordId], used: &OrdSet<RecordId>) -> Result<RecordId> {
        self.draw_excluding(pool, used, &[])
    }

    /// Draw two distinct identifiers, neither of them in `used`.
    ///
    /// The first goes to the user, the second to the computer. Fails without
    /// drawing anything when fewer than two unused identifiers remain.
    pub fn draw_pair(
        &mut self,
        pool: &[RecordId],
        used: &OrdSet<RecordId>,
    ) -> Result<SidePair<RecordId>> {
        let remaining = remaining(pool, used, &[]).len();
        if remaining < 2 {
            return Err(RoundError::SamplerExhausted {
                pool: pool.len(),
                remaining,
            });
        }

        let mut drawn = Exclusions::new();
        let user = self.draw_excluding(pool, used, &drawn)?;
        drawn.push(user);
        let computer = self.draw_excluding(pool, used, &drawn)?;

        tracing::debug!(user = %user, computer = %computer, remaining, "Drew pair");
        Ok(SidePair::new(user, computer))
    }

    fn draw_excluding(
        &mut self,
        pool: &[RecordId],
        used: &OrdSet<RecordId>,
        exclude: &[RecordId],
    ) -> Result<RecordId> {
        let candidates = remaining(pool, used, exclude);
        self.rng
            .choose(&candidates)
            .copied()
            .ok_or(RoundError::SamplerExhausted {
                pool: pool.len(),
                remaining: 0,
            })
    }
}

/// Pool identifiers not in `used` and not in `exclude`, in pool order.
///
/// Duplicate pool entries are kept once.
#[must_use]
pub fn remaining(pool: &[RecordId], used: &OrdSet<RecordId>, exclude: &[RecordId]) -> Vec<RecordId> {
    let mut out: Vec<RecordId> = Vec::with_capacity(pool.len());
    for &id in pool {
        if !used.contains(&id) && !exclude.contains(&id) && !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
