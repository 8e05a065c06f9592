//! Random number generation for identifier draws.
//!
//! Seeded sessions are fully deterministic: the same seed and pool produce
//! the same sequence of pairs. Unseeded sessions draw their seed from the OS.
//!
//! ```
//! use starship_duel::core::SessionRng;
//!
//! let mut a = SessionRng::new(7);
//! let mut b = SessionRng::new(7);
//! assert_eq!(a.pick_index(20), b.pick_index(20));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Session RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct SessionRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SessionRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed taken from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seeded when `Some`, entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly pick an index in `0..len`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Uniformly choose an element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        self.pick_index(slice.len()).map(|i| &slice[i])
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> SessionRngState {
        SessionRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &SessionRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// ChaCha8 word position makes capture and restore O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRngState {
    pub seed: u64,
    pub word_pos: u128,
}
