//! Data Transfer Objects for the HTTP API.
//!
//! Chart request and response bodies live in [`crate::models`] and are
//! re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::models::{AnglePoint, ChartRequest, ChartResult};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Name of the ephemeris engine in use
    pub engine: String,
    /// Engine version, `"unknown"` when it cannot report one
    pub version: String,
}
