//! Birth-data request and its validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// House system used when the request does not name one.
pub const DEFAULT_HOUSE_SYSTEM: char = 'P';

/// Raw request body of `POST /swe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `HH:MM`, 24h clock
    pub birth_time: String,
    pub lat: f64,
    pub lon: f64,
    /// IANA timezone name, e.g. `Europe/Berlin`
    pub tzname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_system: Option<String>,
}

/// One-character house-system code as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HouseSystemCode(char);

impl HouseSystemCode {
    /// First character of the trimmed input, `P` when absent or blank.
    pub fn normalize(raw: Option<&str>) -> Self {
        let code = raw
            .and_then(|s| s.trim().chars().next())
            .unwrap_or(DEFAULT_HOUSE_SYSTEM);
        Self(code)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for HouseSystemCode {
    fn default() -> Self {
        Self(DEFAULT_HOUSE_SYSTEM)
    }
}

impl fmt::Display for HouseSystemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for HouseSystemCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Wall-clock time of birth (minute resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
}

impl LocalTime {
    /// Parse `HH:MM`: exactly two colon-separated integers, hour 0-23, minute 0-59.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::new("birthTime", "birthTime must be HH:MM");

        let mut parts = raw.split(':');
        let (hh, mm) = match (parts.next(), parts.next(), parts.next()) {
            (Some(hh), Some(mm), None) => (hh, mm),
            _ => return Err(malformed()),
        };
        let hour: i64 = hh.trim().parse().map_err(|_| malformed())?;
        let minute: i64 = mm.trim().parse().map_err(|_| malformed())?;

        if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
            return Err(ValidationError::new(
                "birthTime",
                "birthTime must be HH:MM 00-23:00-59",
            ));
        }
        Ok(Self {
            hour: hour as u32,
            minute: minute as u32,
        })
    }
}

/// Parse a strict ISO calendar date `YYYY-MM-DD`.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::new("birthDate", "birthDate must be ISO YYYY-MM-DD");

    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return Err(invalid());
    }

    // Shape is pure ASCII at this point, so byte slicing is safe.
    let year: i32 = raw[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = raw[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = raw[8..10].parse().map_err(|_| invalid())?;
    // ISO calendar dates start at year 1
    if year < 1 {
        return Err(invalid());
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Validated birth data.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthQuery {
    pub date: NaiveDate,
    pub time: LocalTime,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone_name: String,
    pub house_system: HouseSystemCode,
}

impl BirthQuery {
    /// Validate a raw request.
    ///
    /// Coordinates are forwarded unchanged and the timezone name is not
    /// looked up here; both are checked further down the pipeline.
    pub fn validate(request: &ChartRequest) -> Result<Self, ValidationError> {
        let date = parse_birth_date(&request.birth_date)?;
        let time = LocalTime::parse(&request.birth_time)?;

        Ok(Self {
            date,
            time,
            latitude: request.lat,
            longitude: request.lon,
            timezone_name: request.tzname.clone(),
            house_system: HouseSystemCode::normalize(request.house_system.as_deref()),
        })
    }
}

impl TryFrom<&ChartRequest> for BirthQuery {
    type Error = ValidationError;

    fn try_from(request: &ChartRequest) -> Result<Self, Self::Error> {
        Self::validate(request)
    }
}
