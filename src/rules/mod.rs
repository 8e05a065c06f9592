//! Scoring rules.
//!
//! Pure functions only: given two records, decide who wins each attribute
//! and how many points each side earns. Applying the points is the
//! session's job.

pub mod scoring;

pub use scoring::{
    compare_attribute, score_pair, AttributeOutcome, AttributeResult, PairScore, ScoreDelta,
};
