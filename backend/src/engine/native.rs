//! Production engine: Swiss Ephemeris through `ephem-core`.

use ephem_core::HouseSystem;

use super::{Body, EphemerisEngine, HousePositions, OracleResult};
use crate::error::OracleError;
use crate::models::{EclipticPoint, HouseCusps, HouseSystemCode, JulianDay};

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEngine;

impl NativeEngine {
    pub fn new() -> Self {
        Self
    }
}

impl From<ephem_core::Error> for OracleError {
    fn from(err: ephem_core::Error) -> Self {
        match err {
            ephem_core::Error::UnsupportedHouseSystem(code) => {
                OracleError::UnsupportedHouseSystem(code.to_string())
            }
            ephem_core::Error::Computation(msg) => OracleError::Failed(msg),
            other => OracleError::Rejected(other.to_string()),
        }
    }
}

impl EphemerisEngine for NativeEngine {
    fn name(&self) -> &str {
        ephem_core::ENGINE_NAME
    }

    fn version(&self) -> Option<String> {
        Some(ephem_core::version().to_string())
    }

    fn houses(
        &self,
        jd_ut: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystemCode,
    ) -> OracleResult<HousePositions> {
        let system = HouseSystem::from_code(system.as_char())?;
        let set = ephem_core::houses(jd_ut.value(), latitude, longitude, system)?;
        Ok(HousePositions {
            cusps: HouseCusps::from_degrees(set.cusps),
            ascendant: set.ascendant.into(),
            midheaven: set.midheaven.into(),
        })
    }

    fn body_longitude(&self, jd_ut: JulianDay, body: Body) -> OracleResult<EclipticPoint> {
        Ok(ephem_core::body_longitude(jd_ut.value(), body)?.into())
    }
}
