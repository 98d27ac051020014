//! # Chart Worker
//!
//! Natal-chart microservice: given a birth date, local time, place and IANA
//! timezone, computes the ascendant, midheaven, twelve house cusps and the
//! houses occupied by the Sun and Moon.
//!
//! ## Pipeline
//!
//! 1. Validate the request ([`models::BirthQuery`])
//! 2. Local civil time → UTC → Julian day ([`models::time`])
//! 3. Query the ephemeris ([`engine::EphemerisEngine`])
//! 4. Resolve signs and houses ([`models::ZodiacSign`], [`models::HouseCusps`])
//! 5. Assemble [`models::ChartResult`]
//!
//! ## Architecture
//!
//! - [`models`]: request, time, house and chart types
//! - [`engine`]: engine trait, native Swiss Ephemeris engine and a fixture engine
//! - [`services`]: the chart pipeline
//! - [`config`]: server configuration (TOML file + environment)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```rust
//! use chart_worker::engine::NativeEngine;
//! use chart_worker::models::{ChartRequest, SignLocale};
//! use chart_worker::services::compute_chart;
//!
//! let request = ChartRequest {
//!     birth_date: "2000-01-01".into(),
//!     birth_time: "12:00".into(),
//!     lat: 52.52,
//!     lon: 13.405,
//!     tzname: "Europe/Berlin".into(),
//!     house_system: None,
//! };
//! let chart = compute_chart(&NativeEngine, &request, SignLocale::English)?;
//! assert_eq!(chart.house_system, "P");
//! # Ok::<(), chart_worker::error::ChartError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
