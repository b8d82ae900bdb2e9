//! Presentation layer: markup renderers over the validated concept store.
//!
//! # Responsibility
//! - Render every dashboard section into a `RenderTarget`.
//! - Keep the single active-tab / active-filter / details-visible state.
//! - Wire user interaction (tab, filter, card, close) back to handlers.
//!
//! # Invariants
//! - Renderers only read the store.
//! - A missing target turns a render into a no-op, never an error.
//! - Each renderer runs inside its own error boundary in `Dashboard`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod chart;
pub mod components;
pub mod dashboard;
pub mod document;
pub mod target;
pub mod theme;

/// Failure while producing or attaching markup.
#[derive(Debug)]
pub enum RenderError {
    UnknownTab(String),
    UnknownFilter(String),
    ChartConfig(serde_json::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTab(id) => write!(f, "unknown navigation tab: {id}"),
            Self::UnknownFilter(value) => write!(f, "unknown concept filter: {value}"),
            Self::ChartConfig(err) => write!(f, "chart configuration failed to serialize: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ChartConfig(err) => Some(err),
            Self::UnknownTab(_) | Self::UnknownFilter(_) => None,
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(value: serde_json::Error) -> Self {
        Self::ChartConfig(value)
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
