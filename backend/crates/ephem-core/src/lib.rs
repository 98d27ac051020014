//! # ephem-core
//!
//! Natal-chart positions from the Swiss Ephemeris: Julian days, Sun/Moon
//! longitudes and house cusps.
//!
//! The heavy lifting is done by the C library through the `swisseph`
//! binding. This crate adds the pieces the binding leaves to the caller:
//! house-system code validation, the polar-circle refusal of Placidus and
//! Koch, a date-range check, and serialization of calls into the
//! library, which is not thread-safe.
//!
//! ## Example
//!
//! ```rust
//! use ephem_core::{body_longitude, houses, julian_day, Body, HouseSystem};
//!
//! let jd = julian_day(2000, 1, 1, 11.0);
//! let set = houses(jd, 52.52, 13.405, HouseSystem::Placidus)?;
//! let sun = body_longitude(jd, Body::Sun)?;
//! assert_eq!(set.cusps.len(), 12);
//! assert!((0.0..360.0).contains(&sun));
//! # Ok::<(), ephem_core::Error>(())
//! ```

mod error;
mod math;
mod sweph;

pub mod houses;
pub mod time;

pub use error::{Error, Result};
pub use houses::{HouseSet, HouseSystem};
pub use math::normalize_deg;
pub use time::julian_day;

use serde::{Deserialize, Serialize};

/// Engine name reported to callers.
pub const ENGINE_NAME: &str = "swisseph";

/// Version of this bridge crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Bodies whose longitude the engine can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    fn planet_id(self) -> u32 {
        match self {
            Body::Sun => sweph::SE_SUN,
            Body::Moon => sweph::SE_MOON,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Sun => write!(f, "Sun"),
            Body::Moon => write!(f, "Moon"),
        }
    }
}

/// Apparent geocentric ecliptic longitude of `body` at a UT Julian day.
pub fn body_longitude(jd_ut: f64, body: Body) -> Result<f64> {
    time::check_range(jd_ut)?;
    let lon = sweph::longitude(jd_ut, body.planet_id())?;
    if !lon.is_finite() {
        return Err(Error::Computation(format!("{body} longitude at JD {jd_ut}")));
    }
    Ok(normalize_deg(lon))
}

/// House cusps, ascendant and midheaven for a UT Julian day and an
/// observer at `latitude`/`longitude` (degrees, east positive).
pub fn houses(jd_ut: f64, latitude: f64, longitude: f64, system: HouseSystem) -> Result<HouseSet> {
    time::check_range(jd_ut)?;
    houses::check_observer(jd_ut, latitude, longitude, system)?;
    let raw = sweph::houses(jd_ut, latitude, longitude, system.code());
    HouseSet::from_raw(system, raw.cusps, raw.ascendant, raw.midheaven)
}
