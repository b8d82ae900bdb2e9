//! Core domain logic for the gas technician reference dashboard.
//! This crate is the single source of truth for concept data invariants.

pub mod config;
pub mod diagnostics;
pub mod error_handler;
pub mod format;
pub mod logging;
pub mod model;
pub mod sanitize;
pub mod store;
pub mod ui;
pub mod validation;

pub use config::{AppConfig, ConfigError, DeploymentContext};
pub use diagnostics::{Diagnostics, LogEntry, LogSink, RecordingSink, Severity};
pub use error_handler::{ErrorHandler, PanicError};
pub use logging::{init_logging, init_logging_from_config, logging_status};
pub use model::concept::{ConceptRecord, Tier};
pub use store::{ConceptFilter, ConceptStore, DataError, LoadStatus, LookupError};
pub use ui::dashboard::Dashboard;
pub use ui::{RenderError, RenderResult};
pub use validation::{validate_all, validate_record, ValidationError, Violation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
