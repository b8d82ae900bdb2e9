//! Startup validation for the concept record set.
//!
//! # Responsibility
//! - Check per-record structure: required fields, text types, tier membership.
//! - Check cross-record id uniqueness.
//! - Report outcome through the diagnostics facade.
//!
//! # Invariants
//! - Per-record checks accumulate every violation of that record.
//! - The set check aborts at the first structurally invalid record.
//! - Duplicate ids are scanned only after every record passed, and each
//!   duplicated id is reported once.

use crate::diagnostics::Diagnostics;
use crate::model::concept::{Tier, REQUIRED_FIELDS};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fields that must hold JSON strings.
const TEXT_FIELDS: &[&str] = &["id", "name"];

/// One problem found in a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingField(&'static str),
    InvalidTier(String),
    NotText(&'static str),
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing or empty required field: {field}"),
            Self::InvalidTier(value) => write!(
                f,
                "Invalid tier: {value}. Must be one of: {}",
                Tier::allowed_list()
            ),
            Self::NotText(field) => write!(f, "{field} must be a string"),
        }
    }
}

/// Validation failure for one record or for the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The record set is not a sequence.
    NotASequence,
    /// One record violated one or more structural rules.
    InvalidRecord(Vec<Violation>),
    /// A record inside the set failed; wraps the record-level error.
    RecordAt {
        index: usize,
        source: Box<ValidationError>,
    },
    /// Ids that occur more than once, each listed once.
    DuplicateIds(Vec<String>),
}

impl ValidationError {
    /// Returns the record-level violations, looking through `RecordAt`.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidRecord(violations) => violations.as_slice(),
            Self::RecordAt { source, .. } => source.violations(),
            Self::NotASequence | Self::DuplicateIds(_) => &[],
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotASequence => write!(f, "Concepts data must be an array"),
            Self::InvalidRecord(violations) => {
                let joined = violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "Concept validation failed: {joined}")
            }
            Self::RecordAt { index, source } => {
                write!(f, "Validation failed for concept at index {index}: {source}")
            }
            Self::DuplicateIds(ids) => {
                write!(f, "Duplicate concept IDs found: {}", ids.join(", "))
            }
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RecordAt { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Validates one raw record.
///
/// `Value::Null` stands for an absent record; any non-object value is a
/// malformed record whose fields all count as missing.
///
/// # Errors
/// Returns `InvalidRecord` listing every violation found.
pub fn validate_record(record: &Value) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    let fields = record.as_object();

    for &field in REQUIRED_FIELDS {
        if is_missing(fields.and_then(|map| map.get(field))) {
            violations.push(Violation::MissingField(field));
        }
    }

    if let Some(map) = fields {
        check_tier(map, &mut violations);
    }

    if !record.is_null() {
        for &field in TEXT_FIELDS {
            let is_text = fields
                .and_then(|map| map.get(field))
                .is_some_and(Value::is_string);
            if !is_text {
                violations.push(Violation::NotText(field));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidRecord(violations))
    }
}

/// Validates a whole record set.
///
/// Logs a warning for an empty set and an info count on success.
///
/// # Errors
/// - `NotASequence` when `records` is not an array.
/// - `RecordAt` for the first structurally invalid record.
/// - `DuplicateIds` when ids repeat across otherwise valid records.
pub fn validate_all(records: &Value, diagnostics: &Diagnostics) -> Result<(), ValidationError> {
    let items = records.as_array().ok_or(ValidationError::NotASequence)?;

    if items.is_empty() {
        diagnostics.warn("Concepts array is empty");
        return Ok(());
    }

    for (index, record) in items.iter().enumerate() {
        validate_record(record).map_err(|err| ValidationError::RecordAt {
            index,
            source: Box::new(err),
        })?;
    }

    let duplicates = duplicate_ids(items);
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateIds(duplicates));
    }

    diagnostics.info(&format!("Successfully validated {} concepts", items.len()));
    Ok(())
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

fn check_tier(map: &Map<String, Value>, violations: &mut Vec<Violation>) {
    let value = match map.get("tier") {
        Some(value) if !is_missing(Some(value)) => value,
        _ => return,
    };
    let known = value.as_str().and_then(Tier::parse).is_some();
    if !known {
        let shown = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        violations.push(Violation::InvalidTier(shown));
    }
}

fn duplicate_ids(items: &[Value]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut duplicates = Vec::new();

    for id in items
        .iter()
        .filter_map(|record| record.get("id").and_then(Value::as_str))
    {
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::{validate_record, ValidationError, Violation};
    use serde_json::json;

    fn record(id: &str, tier: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Propane (C₃H₈)",
            "tier": tier,
            "type": "Hydrocarbon Fuel",
            "focus": "Secondary Fuel",
            "admin": "Supplier",
            "benefit": "~2,520 BTU/ft³",
            "description": "Stored as liquid under pressure."
        })
    }

    #[test]
    fn accepts_complete_record() {
        assert!(validate_record(&record("propane", "Fuel")).is_ok());
    }

    #[test]
    fn absent_record_reports_every_required_field_only() {
        let err = validate_record(&serde_json::Value::Null).unwrap_err();
        assert_eq!(err.violations().len(), 8);
        assert!(err
            .violations()
            .iter()
            .all(|violation| matches!(violation, Violation::MissingField(_))));
    }

    #[test]
    fn non_object_record_is_malformed() {
        let err = validate_record(&json!(42)).unwrap_err();
        assert!(err.violations().contains(&Violation::NotText("id")));
        assert!(err.violations().contains(&Violation::NotText("name")));
        assert!(err.violations().contains(&Violation::MissingField("tier")));
    }

    #[test]
    fn empty_and_null_fields_count_as_missing() {
        let mut value = record("propane", "Fuel");
        value["focus"] = json!("");
        value["admin"] = json!(null);
        let err = validate_record(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidRecord(vec![
                Violation::MissingField("focus"),
                Violation::MissingField("admin"),
            ])
        );
    }

    #[test]
    fn non_text_id_is_reported_as_type_violation() {
        let mut value = record("propane", "Fuel");
        value["id"] = json!(7);
        let err = validate_record(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidRecord(vec![Violation::NotText("id")])
        );
    }

    #[test]
    fn non_text_tier_is_invalid() {
        let mut value = record("propane", "Fuel");
        value["tier"] = json!(3);
        let err = validate_record(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidRecord(vec![Violation::InvalidTier("3".to_string())])
        );
    }

    #[test]
    fn message_joins_all_violations() {
        let mut value = record("propane", "Gas");
        value["benefit"] = json!("");
        let message = validate_record(&value).unwrap_err().to_string();
        assert_eq!(
            message,
            "Concept validation failed: Missing or empty required field: benefit; \
             Invalid tier: Gas. Must be one of: Fuel, Safety, Measurement, Law, Combustion"
        );
    }
}
