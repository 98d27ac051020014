//! Service layer.
//!
//! Orchestrates validation, time conversion and engine calls into a chart.
//! Everything here is synchronous; the HTTP layer moves it onto the blocking
//! pool.

pub mod chart;

pub use chart::{compute_chart, compute_for_query};
