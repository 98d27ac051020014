//! Deterministic engine returning canned positions.
//!
//! Used by tests and by `CHART_ENGINE=fixture` for frontend development.
//! House-system codes are still checked so unsupported codes fail the same
//! way they do with the native engine.

use ephem_core::HouseSystem;

use super::{Body, EphemerisEngine, HousePositions, OracleResult};
use crate::error::OracleError;
use crate::models::{EclipticPoint, HouseCusps, HouseSystemCode, JulianDay};

/// Placidus cusps for 2000-01-01 11:00 UT at Berlin (52.52N, 13.405E).
const BERLIN_2000_CUSPS: [f64; 12] = [
    21.569_920, 60.076_239, 80.905_439, 98.103_274, 116.895_159, 144.499_775,
    201.569_920, 240.076_239, 260.905_439, 278.103_274, 296.895_159, 324.499_775,
];
const BERLIN_2000_SUN: f64 = 280.330_840;
const BERLIN_2000_MOON: f64 = 222.822_693;

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Positions {
        houses: HousePositions,
        sun: EclipticPoint,
        moon: EclipticPoint,
    },
    Reject(String),
    Fail(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureEngine {
    outcome: Outcome,
}

impl FixtureEngine {
    /// Engine answering every query with the given positions.
    pub fn new(houses: HousePositions, sun: EclipticPoint, moon: EclipticPoint) -> Self {
        Self {
            outcome: Outcome::Positions { houses, sun, moon },
        }
    }

    /// Berlin noon chart of 2000-01-01.
    pub fn berlin_2000() -> Self {
        let cusps = HouseCusps::from_degrees(BERLIN_2000_CUSPS);
        Self::new(
            HousePositions {
                cusps,
                ascendant: BERLIN_2000_CUSPS[0].into(),
                midheaven: BERLIN_2000_CUSPS[9].into(),
            },
            BERLIN_2000_SUN.into(),
            BERLIN_2000_MOON.into(),
        )
    }

    /// Engine that rejects every query as invalid input.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Reject(reason.into()),
        }
    }

    /// Engine whose every computation fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(reason.into()),
        }
    }

    fn positions(&self) -> OracleResult<(&HousePositions, EclipticPoint, EclipticPoint)> {
        match &self.outcome {
            Outcome::Positions { houses, sun, moon } => Ok((houses, *sun, *moon)),
            Outcome::Reject(reason) => Err(OracleError::Rejected(reason.clone())),
            Outcome::Fail(reason) => Err(OracleError::Failed(reason.clone())),
        }
    }
}

impl Default for FixtureEngine {
    fn default() -> Self {
        Self::berlin_2000()
    }
}

impl EphemerisEngine for FixtureEngine {
    fn name(&self) -> &str {
        "fixture"
    }

    fn version(&self) -> Option<String> {
        None
    }

    fn houses(
        &self,
        _jd_ut: JulianDay,
        _latitude: f64,
        _longitude: f64,
        system: HouseSystemCode,
    ) -> OracleResult<HousePositions> {
        HouseSystem::from_code(system.as_char())?;
        let (houses, _, _) = self.positions()?;
        Ok(*houses)
    }

    fn body_longitude(&self, _jd_ut: JulianDay, body: Body) -> OracleResult<EclipticPoint> {
        let (_, sun, moon) = self.positions()?;
        Ok(match body {
            Body::Sun => sun,
            Body::Moon => moon,
        })
    }
}
