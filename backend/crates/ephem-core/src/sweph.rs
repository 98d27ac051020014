//! Calls into the Swiss Ephemeris C library.
//!
//! The library keeps global state (ephemeris file handles, cached
//! nutation and obliquity), so every call goes through one process-wide
//! lock.

use parking_lot::{const_mutex, Mutex};
use swisseph::swe::{calc_ut, houses_ex, julday};
use swisseph::{AscMc, Cusp};

use crate::error::{Error, Result};

/// `SEFLG_SWIEPH`: use the Swiss ephemeris files, Moshier when absent.
const FLG_SWIEPH: u32 = 2;

/// `SE_SUN`
pub(crate) const SE_SUN: u32 = 0;
/// `SE_MOON`
pub(crate) const SE_MOON: u32 = 1;

static SWE_LOCK: Mutex<()> = const_mutex(());

/// `swe_julday` with the Gregorian calendar flag.
pub(crate) fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let _guard = SWE_LOCK.lock();
    julday(year, month as i32, day as i32, hour, 1)
}

/// Ecliptic longitude from `swe_calc_ut`, as returned by the library.
pub(crate) fn longitude(jd_ut: f64, planet: u32) -> Result<f64> {
    let _guard = SWE_LOCK.lock();
    let result = calc_ut(jd_ut, planet, FLG_SWIEPH)
        .map_err(|e| Error::Computation(format!("Swiss Ephemeris error: {e}")))?;
    Ok(result.out[0])
}

/// Raw output of `swe_houses_ex`.
pub(crate) struct RawHouses {
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

/// Tropical house cusps from `swe_houses_ex`.
///
/// The library signals failure only by falling back to Porphyry, so
/// callers must reject the inputs it cannot handle beforehand.
pub(crate) fn houses(jd_ut: f64, latitude: f64, longitude: f64, code: char) -> RawHouses {
    let (c, a) = {
        let _guard = SWE_LOCK.lock();
        houses_ex(jd_ut, 0, latitude, longitude, code as i32)
    };
    let cusps = Cusp::from_array(c);
    let ascmc = AscMc::from_array(a);
    RawHouses {
        cusps: [
            cusps.first,
            cusps.second,
            cusps.third,
            cusps.fourth,
            cusps.fifth,
            cusps.sixth,
            cusps.seventh,
            cusps.eighth,
            cusps.ninth,
            cusps.tenth,
            cusps.eleventh,
            cusps.twelfth,
        ],
        ascendant: ascmc.ascendant,
        midheaven: ascmc.mc,
    }
}
