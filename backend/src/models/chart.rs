//! Chart response shape.

use serde::{Deserialize, Serialize};

use super::houses::{EclipticPoint, HouseCusps};
use super::zodiac::{SignLocale, ZodiacSign};

/// A chart angle with its sign name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnglePoint {
    pub deg: f64,
    pub sign: String,
}

impl AnglePoint {
    pub fn new(point: EclipticPoint, locale: SignLocale) -> Self {
        Self {
            deg: point.degrees(),
            sign: ZodiacSign::from_longitude(point.degrees())
                .localized(locale)
                .to_string(),
        }
    }
}

/// Computed chart returned by `POST /swe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    /// Normalized one-character code actually used
    pub house_system: String,
    pub ascendant: AnglePoint,
    pub mc: AnglePoint,
    pub cusps: HouseCusps,
    pub sun_house: Option<u8>,
    pub moon_house: Option<u8>,
}
