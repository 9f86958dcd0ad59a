//! Typed errors surfaced by the dashboard data layer
//!
//! Service signatures stay on `anyhow::Result`; these types give callers
//! something concrete to downcast to when they need to distinguish a
//! poisoned store from a bad enum literal.

use thiserror::Error;

/// Error raised when a textual value does not name a known variant
///
/// Used by the `FromStr` impls of the closed vocabularies in this crate
/// (order status, sales channel, report period, theme, language).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseValueError {
    /// What was being parsed, e.g. "order status"
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Comma-separated list of accepted literals
    pub expected: &'static str,
}

impl ParseValueError {
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}

/// Errors raised by in-memory stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// A reader or writer panicked while holding the lock
    #[error("failed to acquire {access} lock on the {resource} store")]
    LockPoisoned {
        access: &'static str,
        resource: &'static str,
    },
}
