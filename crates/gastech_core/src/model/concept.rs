//! Concept record model.
//!
//! # Responsibility
//! - Define the canonical fact card shown in the concept explorer.
//! - Map tier names to and from their serialized form.
//!
//! # Invariants
//! - `id` is unique across a record set.
//! - All text fields are non-empty once a record passed validation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Required field names, in the order they are checked and reported.
pub const REQUIRED_FIELDS: &[&str] = &[
    "id",
    "name",
    "tier",
    "type",
    "focus",
    "admin",
    "benefit",
    "description",
];

/// Closed category enumeration for concept records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Fuel,
    Safety,
    Measurement,
    Law,
    Combustion,
}

impl Tier {
    /// All tiers in canonical order.
    pub const ALL: [Tier; 5] = [
        Tier::Fuel,
        Tier::Safety,
        Tier::Measurement,
        Tier::Law,
        Tier::Combustion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fuel => "Fuel",
            Self::Safety => "Safety",
            Self::Measurement => "Measurement",
            Self::Law => "Law",
            Self::Combustion => "Combustion",
        }
    }

    /// Parses an exact, case-sensitive tier name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == value)
    }

    /// Comma-separated list of every tier name.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|tier| tier.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One domain fact card (a fuel, safety rule, unit, gas law or combustion property).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    /// Stable lookup key.
    pub id: String,
    /// Display name; may embed formula subscripts such as `CH₄`.
    pub name: String,
    pub tier: Tier,
    /// Serialized as `type` to match the reference data layout.
    #[serde(rename = "type")]
    pub kind: String,
    pub focus: String,
    pub admin: String,
    /// Headline value (e.g. `~1,000 BTU/ft³`).
    pub benefit: String,
    pub description: String,
}

impl ConceptRecord {
    /// Returns whether this record belongs to `tier`.
    pub fn in_tier(&self, tier: Tier) -> bool {
        self.tier == tier
    }
}

#[cfg(test)]
mod tests {
    use super::{ConceptRecord, Tier};

    #[test]
    fn parses_only_exact_tier_names() {
        assert_eq!(Tier::parse("Law"), Some(Tier::Law));
        assert_eq!(Tier::parse("law"), None);
        assert_eq!(Tier::parse("Unknown"), None);
    }

    #[test]
    fn allowed_list_keeps_canonical_order() {
        assert_eq!(
            Tier::allowed_list(),
            "Fuel, Safety, Measurement, Law, Combustion"
        );
    }

    #[test]
    fn record_uses_type_wire_field() {
        let value = serde_json::json!({
            "id": "co",
            "name": "Carbon Monoxide (CO)",
            "tier": "Safety",
            "type": "Byproduct of Combustion",
            "focus": "Deadly Poison",
            "admin": "CSA B149.1",
            "benefit": "Max 400 ppm (Air-Free)",
            "description": "A colorless, odorless, deadly gas."
        });
        let record: ConceptRecord = serde_json::from_value(value).expect("valid record");
        assert_eq!(record.kind, "Byproduct of Combustion");
        assert!(record.in_tier(Tier::Safety));

        let json = serde_json::to_value(&record).expect("serializable record");
        assert_eq!(json["type"], "Byproduct of Combustion");
        assert_eq!(json["tier"], "Safety");
    }
}
