//! Pure pair scoring.
//!
//! Scoring a pair never touches the session. It compares the three
//! attributes in order and produces a `PairScore`: one outcome per attribute
//! plus the points each side earned. The session adds the points to its
//! totals.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SidePair};
use crate::records::{is_unknown, Attribute, EntityRecord};

/// Result of comparing one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeOutcome {
    /// Strictly greater value wins a point.
    Won(Side),
    /// Equal values, nobody scores.
    Tie,
    /// An unknown value excluded the attribute.
    Skipped,
}

impl AttributeOutcome {
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            AttributeOutcome::Won(side) => Some(side),
            AttributeOutcome::Tie | AttributeOutcome::Skipped => None,
        }
    }
}

/// One attribute's normalized values and outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeResult {
    pub attribute: Attribute,
    pub values: SidePair<f64>,
    pub outcome: AttributeOutcome,
}

/// Points earned by each side in one scoring pass.
pub type ScoreDelta = SidePair<u32>;

/// Full scoring of one pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    /// Per-attribute results in scoring order.
    pub results: [AttributeResult; 3],
    pub delta: ScoreDelta,
}

impl PairScore {
    /// Side that earned more points, `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        use std::cmp::Ordering;

        match self.delta.user.cmp(&self.delta.computer) {
            Ordering::Greater => Some(Side::User),
            Ordering::Less => Some(Side::Computer),
            Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn outcome(&self, attribute: Attribute) -> AttributeOutcome {
        self.results
            .iter()
            .find(|r| r.attribute == attribute)
            .map_or(AttributeOutcome::Skipped, |r| r.outcome)
    }
}

/// Compare one attribute's normalized values.
///
/// Attributes that skip unknowns contribute nothing if either side is
/// `UNKNOWN`. Speed is compared as-is, so a known speed beats an unknown one.
#[must_use]
pub fn compare_attribute(attribute: Attribute, user: f64, computer: f64) -> AttributeOutcome {
    if attribute.skips_unknown() && (is_unknown(user) || is_unknown(computer)) {
        return AttributeOutcome::Skipped;
    }
    if user > computer {
        AttributeOutcome::Won(Side::User)
    } else if user < computer {
        AttributeOutcome::Won(Side::Computer)
    } else {
        AttributeOutcome::Tie
    }
}

/// Score a pair of records, user first.
#[must_use]
pub fn score_pair(pair: SidePair<&EntityRecord>) -> PairScore {
    let mut delta = ScoreDelta::default();

    let results = Attribute::ALL.map(|attribute| {
        let values = SidePair::new(
            pair.user.normalized(attribute),
            pair.computer.normalized(attribute),
        );
        let outcome = compare_attribute(attribute, values.user, values.computer);
        if let Some(side) = outcome.winner() {
            delta[side] += 1;
        }
        AttributeResult {
            attribute,
            values,
            outcome,
        }
    });

    PairScore { results, delta }
}
