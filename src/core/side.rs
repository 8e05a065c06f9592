//! The two sides of a duel and per-side data storage.
//!
//! ## Side
//!
//! A game is always the human player against the computer.
//!
//! ## SidePair
//!
//! Fixed two-slot storage indexed by `Side`. Used for the current pair of
//! records, cumulative scores and per-round deltas.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player. Always holds the first record of a pair.
    User,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Both sides, user first.
    pub const BOTH: [Side; 2] = [Side::User, Side::Computer];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::User => write!(f, "user"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Per-side data with O(1) access.
///
/// ```
/// use starship_duel::core::{Side, SidePair};
///
/// let mut scores: SidePair<u32> = SidePair::default();
/// scores[Side::Computer] += 2;
///
/// assert_eq!(scores[Side::User], 0);
/// assert_eq!(scores[Side::Computer], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SidePair<T> {
    pub user: T,
    pub computer: T,
}

impl<T> SidePair<T> {
    /// Create a pair from the user's and the computer's value.
    pub const fn new(user: T, computer: T) -> Self {
        Self { user, computer }
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::User => &self.user,
            Side::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::User => &mut self.user,
            Side::Computer => &mut self.computer,
        }
    }

    /// Apply `f` to both entries.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SidePair<U> {
        SidePair::new(f(self.user), f(self.computer))
    }

    /// Iterate over (Side, &T) pairs, user first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::User, &self.user), (Side::Computer, &self.computer)].into_iter()
    }
}

impl<T> SidePair<Option<T>> {
    /// Both entries, if both are populated.
    #[must_use]
    pub fn both(&self) -> Option<SidePair<&T>> {
        match (&self.user, &self.computer) {
            (Some(user), Some(computer)) => Some(SidePair::new(user, computer)),
            _ => None,
        }
    }
}

impl<T> Index<Side> for SidePair<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SidePair<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
