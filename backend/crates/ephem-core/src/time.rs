//! Julian days and the date range the engine accepts.

use crate::error::{Error, Result};
use crate::sweph;

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Earliest calendar year accepted by the engine.
pub const MIN_YEAR: i32 = -3000;

/// Latest calendar year accepted by the engine.
///
/// The Moshier fallback used without ephemeris files covers
/// 3000 BC to 3000 AD.
pub const MAX_YEAR: i32 = 3000;

/// Astronomical Julian day for a proleptic Gregorian calendar date.
///
/// `hour` is the fractional hour of day (UT). Years use astronomical
/// numbering (1 BC = year 0). JD 2451545.0 is 2000-01-01 12:00.
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    sweph::julian_day(year, month, day, hour)
}

/// Julian centuries since J2000.0.
#[inline]
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Inclusive Julian-day range covered by the engine.
pub fn supported_range() -> (f64, f64) {
    (
        julian_day(MIN_YEAR, 1, 1, 0.0),
        julian_day(MAX_YEAR, 12, 31, 24.0),
    )
}

/// Reject Julian days outside [`supported_range`].
pub fn check_range(jd: f64) -> Result<()> {
    if !jd.is_finite() {
        return Err(Error::InvalidInput(format!("non-finite Julian day {jd}")));
    }
    let (min, max) = supported_range();
    if jd < min || jd > max {
        return Err(Error::OutOfRange { jd, min, max });
    }
    Ok(())
}
