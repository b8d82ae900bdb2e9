//! Severity-filtered diagnostics facade.
//!
//! # Responsibility
//! - Provide the single `log(level, message, detail)` entry point used by core.
//! - Suppress messages below a threshold fixed at construction time.
//! - Keep the output sink replaceable (log crate facade, in-memory recorder).
//!
//! # Invariants
//! - The threshold never changes after construction.
//! - Clones share one sink, so every component writes to the same stream.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Log target used when forwarding to the `log` crate.
pub const LOG_TARGET: &str = "gastech";

/// Diagnostic severity, ordered by increasing importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Stable lowercase name, also accepted by `flexi_logger` specs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    fn as_log_level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unsupported log level `{other}`; expected debug|info|warn|error"
            )),
        }
    }
}

/// One emitted diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
    pub detail: Option<String>,
}

/// Destination for diagnostics that passed the threshold.
pub trait LogSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &str, detail: Option<&str>);
}

/// Forwards diagnostics to the `log` crate, and so to the installed backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn emit(&self, severity: Severity, message: &str, detail: Option<&str>) {
        match detail {
            Some(detail) => log::log!(
                target: LOG_TARGET,
                severity.as_log_level(),
                "[{}] {} {}",
                severity.as_str().to_ascii_uppercase(),
                message,
                detail
            ),
            None => log::log!(
                target: LOG_TARGET,
                severity.as_log_level(),
                "[{}] {}",
                severity.as_str().to_ascii_uppercase(),
                message
            ),
        }
    }
}

/// Captures diagnostics in memory.
///
/// Used by tests and by hosts that surface diagnostics in their own UI.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every captured entry in emission order.
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns captured entries of exactly `severity`.
    pub fn entries_at(&self, severity: Severity) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.severity == severity)
            .collect()
    }

    pub fn count_at(&self, severity: Severity) -> usize {
        self.entries_at(severity).len()
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, severity: Severity, message: &str, detail: Option<&str>) {
        let entry = LogEntry {
            severity,
            message: message.to_string(),
            detail: detail.map(str::to_string),
        };
        match self.entries.lock() {
            Ok(mut guard) => guard.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

/// Process-wide diagnostics service.
#[derive(Clone)]
pub struct Diagnostics {
    threshold: Severity,
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Diagnostics {
    pub fn new(threshold: Severity, sink: Arc<dyn LogSink>) -> Self {
        Self { threshold, sink }
    }

    /// Diagnostics forwarding to the `log` crate.
    pub fn to_log_facade(threshold: Severity) -> Self {
        Self::new(threshold, Arc::new(LogFacadeSink))
    }

    /// Diagnostics capturing into a fresh recorder, returned alongside.
    pub fn recording(threshold: Severity) -> (Self, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (Self::new(threshold, sink.clone()), sink)
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Returns whether `severity` passes the configured threshold.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    pub fn log(&self, severity: Severity, message: &str, detail: Option<&str>) {
        if self.enabled(severity) {
            self.sink.emit(severity, message, detail);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message, None);
    }

    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message, None);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message, None);
    }
}
