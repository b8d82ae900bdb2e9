//! Reference data model for the dashboard.
//!
//! # Responsibility
//! - Define the concept record rendered by every presentation component.
//! - Keep the tier enumeration closed and explicit.
//!
//! # Invariants
//! - Every concept is identified by a unique, stable string `id`.
//! - The record set is read-only after load; there are no mutation APIs.

pub mod concept;
