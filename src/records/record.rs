//! Entity records - the stat cards compared each round.
//!
//! A record is immutable once fetched. Attribute values stay as the raw
//! upstream text; `normalize` turns them into comparable numbers at scoring
//! time.

use serde::{Deserialize, Serialize};

use super::normalize::normalize;

/// A starship as served by the upstream catalog.
///
/// Field names on the wire follow the upstream JSON; extra fields are
/// ignored.
///
/// ## Example
///
/// ```
/// use starship_duel::records::{Attribute, EntityRecord};
///
/// let falcon = EntityRecord::new("Millennium Falcon")
///     .with_max_speed("1050")
///     .with_cost("100000")
///     .with_passenger_count("6");
///
/// assert_eq!(falcon.normalized(Attribute::MaxSpeed), 1050.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,

    #[serde(rename = "max_atmosphering_speed", default = "unknown")]
    pub max_speed: String,

    #[serde(rename = "cost_in_credits", default = "unknown")]
    pub cost: String,

    #[serde(rename = "passengers", default = "unknown")]
    pub passenger_count: String,

    /// Films the ship appears in (upstream resource URLs).
    #[serde(rename = "films", default)]
    pub appearances: Vec<String>,
}

fn unknown() -> String {
    "unknown".to_string()
}

impl EntityRecord {
    /// Create a record with every attribute unknown.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_speed: unknown(),
            cost: unknown(),
            passenger_count: unknown(),
            appearances: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_max_speed(mut self, value: impl Into<String>) -> Self {
        self.max_speed = value.into();
        self
    }

    #[must_use]
    pub fn with_cost(mut self, value: impl Into<String>) -> Self {
        self.cost = value.into();
        self
    }

    #[must_use]
    pub fn with_passenger_count(mut self, value: impl Into<String>) -> Self {
        self.passenger_count = value.into();
        self
    }

    #[must_use]
    pub fn with_appearance(mut self, film: impl Into<String>) -> Self {
        self.appearances.push(film.into());
        self
    }

    /// Raw text of one attribute.
    #[must_use]
    pub fn raw(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::MaxSpeed => &self.max_speed,
            Attribute::Cost => &self.cost,
            Attribute::PassengerCount => &self.passenger_count,
        }
    }

    /// Comparable value of one attribute.
    #[must_use]
    pub fn normalized(&self, attribute: Attribute) -> f64 {
        normalize(self.raw(attribute))
    }
}

/// The three compared attributes, in scoring order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Maximum atmospheric speed. Always compared.
    MaxSpeed,
    /// Cost in credits. Skipped when either side is unknown.
    Cost,
    /// Passenger capacity. Skipped when either side is unknown.
    PassengerCount,
}

impl Attribute {
    /// All attributes in the order they are scored.
    pub const ALL: [Attribute; 3] = [Attribute::MaxSpeed, Attribute::Cost, Attribute::PassengerCount];

    /// Whether an unknown value on either side excludes this attribute.
    #[must_use]
    pub const fn skips_unknown(self) -> bool {
        !matches!(self, Attribute::MaxSpeed)
    }

    /// Upstream field name.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Attribute::MaxSpeed => "max_atmosphering_speed",
            Attribute::Cost => "cost_in_credits",
            Attribute::PassengerCount => "passengers",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}
