//! Error types for chart computation.
//!
//! Every failure is reported synchronously to the caller; nothing is retried
//! and no partial chart is ever returned.

use thiserror::Error;

/// A request field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// Wire name of the offending field (e.g. `birthTime`)
    pub field: &'static str,
    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// The timezone name is not in the IANA database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown timezone '{name}'")]
pub struct TimezoneError {
    pub name: String,
}

/// The ephemeris engine could not produce a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    /// House-system code not supported by the engine
    #[error("Unsupported house system '{0}'")]
    UnsupportedHouseSystem(String),

    /// Input outside the engine's domain (date range, polar latitude, ...)
    #[error("Ephemeris rejected input: {0}")]
    Rejected(String),

    /// The engine itself failed
    #[error("Ephemeris failure: {0}")]
    Failed(String),
}

/// Any failure of the chart pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Timezone error: {0}")]
    Timezone(#[from] TimezoneError),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}
