//! HTTP server module.
//!
//! Axum router exposing the chart pipeline as a small JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON body extraction and error mapping                 │
//! │  - CORS, compression, tracing                             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │ spawn_blocking
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::chart)                          │
//! │  - Validation, time conversion, assembly                  │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Engine Layer (engine::EphemerisEngine)                   │
//! │  - NativeEngine (swisseph) / FixtureEngine               │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
