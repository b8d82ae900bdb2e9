//! Read-only concept record store.
//!
//! # Responsibility
//! - Load the reference record set once and run startup validation on it.
//! - Serve filtered views and id lookups to the presentation layer.
//!
//! # Invariants
//! - Validation completes before the store is handed to any reader.
//! - A failed validation is reported loudly but never aborts loading; the
//!   store keeps every record that still decodes and marks itself degraded.
//! - Records are never mutated after load.

use crate::diagnostics::Diagnostics;
use crate::error_handler::ErrorHandler;
use crate::model::concept::{ConceptRecord, Tier};
use crate::validation::validate_all;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reference data compiled into the binary.
pub const BUILTIN_CONCEPTS_JSON: &str = include_str!("../data/concepts.json");

const VALIDATION_CONTEXT: &str = "concept data validation";

/// Raw data could not be read as JSON.
#[derive(Debug)]
pub enum DataError {
    Parse(serde_json::Error),
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "concept data is not valid JSON: {err}"),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

/// Lookup failure for an id-based request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    NotFound(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Concept with id '{id}' not found"),
        }
    }
}

impl Error for LookupError {}

/// Outcome of the startup validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Validated,
    Degraded,
}

/// Concept explorer filter: everything, or one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConceptFilter {
    #[default]
    All,
    Tier(Tier),
}

impl ConceptFilter {
    /// Parses `all` or an exact tier name.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        Tier::parse(value).map(Self::Tier)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tier(tier) => tier.as_str(),
        }
    }

    pub fn matches(self, record: &ConceptRecord) -> bool {
        match self {
            Self::All => true,
            Self::Tier(tier) => record.in_tier(tier),
        }
    }
}

/// Immutable, validated concept records.
#[derive(Debug, Clone)]
pub struct ConceptStore {
    records: Vec<ConceptRecord>,
    status: LoadStatus,
    diagnostics: Diagnostics,
}

impl ConceptStore {
    /// Loads the compiled-in reference data.
    pub fn builtin(handler: &ErrorHandler) -> Self {
        Self::from_json_str(BUILTIN_CONCEPTS_JSON, handler)
    }

    /// Loads records from JSON text.
    ///
    /// Unparseable input is reported with user notification and yields an
    /// empty, degraded store.
    pub fn from_json_str(raw: &str, handler: &ErrorHandler) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::load(&value, handler),
            Err(err) => {
                handler.handle_error(&DataError::Parse(err), VALIDATION_CONTEXT, true);
                Self {
                    records: Vec::new(),
                    status: LoadStatus::Degraded,
                    diagnostics: handler.diagnostics().clone(),
                }
            }
        }
    }

    /// Validates `raw` and keeps every record that decodes.
    pub fn load(raw: &Value, handler: &ErrorHandler) -> Self {
        let diagnostics = handler.diagnostics().clone();
        let status = match validate_all(raw, &diagnostics) {
            Ok(()) => LoadStatus::Validated,
            Err(err) => {
                handler.handle_error(&err, VALIDATION_CONTEXT, true);
                diagnostics.error("Concepts data validation failed");
                LoadStatus::Degraded
            }
        };

        let records = decode_records(raw, &diagnostics);
        diagnostics.debug(&format!(
            "event=store_loaded module=store status={:?} records={}",
            status,
            records.len()
        ));

        Self {
            records,
            status,
            diagnostics,
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_validated(&self) -> bool {
        self.status == LoadStatus::Validated
    }

    pub fn records(&self) -> &[ConceptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `filter`, in load order.
    pub fn filtered(&self, filter: ConceptFilter) -> Vec<&ConceptRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Finds a record by id; a miss is logged at error severity.
    pub fn find(&self, id: &str) -> Result<&ConceptRecord, LookupError> {
        match self.records.iter().find(|record| record.id == id) {
            Some(record) => Ok(record),
            None => {
                let err = LookupError::NotFound(id.to_string());
                self.diagnostics.error(&err.to_string());
                Err(err)
            }
        }
    }
}

fn decode_records(raw: &Value, diagnostics: &Diagnostics) -> Vec<ConceptRecord> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(
            |(index, item)| match serde_json::from_value::<ConceptRecord>(item.clone()) {
                Ok(record) => Some(record),
                Err(err) => {
                    diagnostics.debug(&format!(
                        "event=record_skipped module=store index={index} reason={err}"
                    ));
                    None
                }
            },
        )
        .collect()
}
