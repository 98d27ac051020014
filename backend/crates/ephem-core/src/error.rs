//! Error types for ephem-core

use thiserror::Error;

/// Result type for ephem-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when computing positions or houses
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// House-system code not recognized by the engine
    #[error("Unsupported house system: '{0}'")]
    UnsupportedHouseSystem(char),

    /// Julian day outside the range the ephemeris covers
    #[error("Julian day {jd} is outside the supported range ({min}..{max})")]
    OutOfRange { jd: f64, min: f64, max: f64 },

    /// Time-based house systems are undefined inside the polar circles
    #[error("House system '{system}' is undefined at latitude {latitude} (polar circle)")]
    PolarLatitude { system: char, latitude: f64 },

    /// Non-finite or otherwise unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Swiss Ephemeris reported an error or produced a non-finite value
    #[error("Computation failed: {0}")]
    Computation(String),
}
