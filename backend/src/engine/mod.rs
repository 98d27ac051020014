//! Ephemeris engines.
//!
//! The chart pipeline talks to an [`EphemerisEngine`] trait object so the
//! production engine and the deterministic test fixture are interchangeable.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::models::{EclipticPoint, HouseCusps, HouseSystemCode, JulianDay};

pub mod fixture;
pub mod native;

pub use ephem_core::Body;
pub use fixture::FixtureEngine;
pub use native::NativeEngine;

/// Result type for engine calls.
pub type OracleResult<T> = Result<T, OracleError>;

/// Cusps and angles for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousePositions {
    pub cusps: HouseCusps,
    pub ascendant: EclipticPoint,
    pub midheaven: EclipticPoint,
}

/// Source of house cusps and body positions.
pub trait EphemerisEngine: Send + Sync {
    /// Engine name for `/health`.
    fn name(&self) -> &str;

    /// Engine version, if the engine can report one.
    fn version(&self) -> Option<String>;

    /// House cusps, ascendant and midheaven.
    ///
    /// `latitude`/`longitude` are geographic degrees, east positive.
    fn houses(
        &self,
        jd_ut: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystemCode,
    ) -> OracleResult<HousePositions>;

    /// Apparent geocentric ecliptic longitude of `body`.
    fn body_longitude(&self, jd_ut: JulianDay, body: Body) -> OracleResult<EclipticPoint>;
}

/// Which engine the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Native,
    Fixture,
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" | "swisseph" => Ok(Self::Native),
            "fixture" => Ok(Self::Fixture),
            _ => Err(format!("Unknown engine type: {}", s)),
        }
    }
}

/// Build a shared engine instance.
pub fn create_engine(kind: EngineKind) -> Arc<dyn EphemerisEngine> {
    match kind {
        EngineKind::Native => Arc::new(NativeEngine::new()),
        EngineKind::Fixture => Arc::new(FixtureEngine::berlin_2000()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_engine_kind() {
        assert_eq!("native".parse::<EngineKind>().unwrap(), EngineKind::Native);
        assert_eq!(" Fixture ".parse::<EngineKind>().unwrap(), EngineKind::Fixture);
        assert_eq!("swisseph".parse::<EngineKind>().unwrap(), EngineKind::Native);
        assert!("pyswisseph".parse::<EngineKind>().is_err());
    }

    #[test]
    fn factory_returns_named_engines() {
        assert_eq!(create_engine(EngineKind::Native).name(), ephem_core::ENGINE_NAME);
        assert_eq!(create_engine(EngineKind::Fixture).name(), "fixture");
    }
}
