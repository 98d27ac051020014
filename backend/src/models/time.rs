//! Local civil time → UT → Julian day.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::*;

use super::query::{BirthQuery, LocalTime};
use crate::error::{ChartError, TimezoneError, ValidationError};

/// Julian Day on the UT time scale.
/// JD 0 = -4712-01-01 12:00 (proleptic Julian calendar)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(qtty::Days);

impl JulianDay {
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Julian day of a UTC instant (Gregorian calendar, fractional hour).
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::new(ephem_core::julian_day(
            dt.year(),
            dt.month(),
            dt.day(),
            fractional_hour(&dt),
        ))
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}

/// Look up an IANA timezone by name.
pub fn resolve_timezone(name: &str) -> Result<Tz, TimezoneError> {
    name.parse::<Tz>().map_err(|_| TimezoneError {
        name: name.to_string(),
    })
}

/// Convert a wall-clock time in `tz` to UTC.
///
/// Ambiguous times (clocks turned back) resolve to the earlier instant.
/// Times inside a gap (clocks turned forward) are read with the offset in
/// force before the transition, so 02:30 in a 02:00→03:00 gap lands 30
/// minutes after the transition.
pub fn local_to_utc(local: NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(local - Duration::days(1))).fix();
            let utc = local - Duration::seconds(i64::from(before.local_minus_utc()));
            Utc.from_utc_datetime(&utc)
        }
    }
}

/// Hours since midnight, including minutes and seconds.
pub fn fractional_hour<T: Timelike>(t: &T) -> f64 {
    f64::from(t.hour()) + f64::from(t.minute()) / 60.0 + f64::from(t.second()) / 3600.0
}

fn naive_local(date: NaiveDate, time: LocalTime) -> Result<NaiveDateTime, ValidationError> {
    NaiveTime::from_hms_opt(time.hour, time.minute, 0)
        .map(|t| date.and_time(t))
        .ok_or_else(|| ValidationError::new("birthTime", "birthTime must be HH:MM 00-23:00-59"))
}

/// UTC instant of a validated birth query.
pub fn birth_instant(query: &BirthQuery) -> Result<DateTime<Utc>, ChartError> {
    let tz = resolve_timezone(&query.timezone_name)?;
    let local = naive_local(query.date, query.time)?;
    Ok(local_to_utc(local, &tz))
}

/// Julian day (UT) of a validated birth query.
pub fn julian_day_for(query: &BirthQuery) -> Result<JulianDay, ChartError> {
    let utc = birth_instant(query)?;
    let jd = JulianDay::from_datetime(utc);
    log::debug!(
        "{} {:02}:{:02} {} -> {} UTC -> JD {:.6}",
        query.date,
        query.time.hour,
        query.time.minute,
        query.timezone_name,
        utc.format("%Y-%m-%d %H:%M"),
        jd.value()
    );
    Ok(jd)
}
