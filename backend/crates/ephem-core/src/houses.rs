//! House systems and the checks made before calling into Swiss Ephemeris.
//!
//! `swe_houses_ex` has no error channel this binding exposes: unknown codes
//! silently become Placidus and polar Placidus/Koch silently become
//! Porphyry. Both cases are caught here so callers get an error instead.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::normalize_deg;
use crate::time::centuries_since_j2000;

/// House division method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    Koch,
    Porphyry,
    Regiomontanus,
    Campanus,
    Alcabitius,
    /// Equal houses from the ascendant
    Equal,
    /// Equal houses with the ascendant in the middle of the first house
    Vehicle,
    WholeSign,
    /// Equal houses starting at 0° Aries
    EqualAries,
    /// Axial rotation ("meridian") houses
    AxialRotation,
    Morinus,
    /// Polich/Page ("topocentric")
    Topocentric,
    Krusinski,
    /// Horizon/azimuth houses
    Horizontal,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 15] = [
        HouseSystem::Placidus,
        HouseSystem::Koch,
        HouseSystem::Porphyry,
        HouseSystem::Regiomontanus,
        HouseSystem::Campanus,
        HouseSystem::Alcabitius,
        HouseSystem::Equal,
        HouseSystem::Vehicle,
        HouseSystem::WholeSign,
        HouseSystem::EqualAries,
        HouseSystem::AxialRotation,
        HouseSystem::Morinus,
        HouseSystem::Topocentric,
        HouseSystem::Krusinski,
        HouseSystem::Horizontal,
    ];

    /// Parse a one-letter house-system code (case-insensitive).
    pub fn from_code(code: char) -> Result<Self> {
        let system = match code.to_ascii_uppercase() {
            'P' => HouseSystem::Placidus,
            'K' => HouseSystem::Koch,
            'O' => HouseSystem::Porphyry,
            'R' => HouseSystem::Regiomontanus,
            'C' => HouseSystem::Campanus,
            'B' => HouseSystem::Alcabitius,
            'A' | 'E' => HouseSystem::Equal,
            'V' => HouseSystem::Vehicle,
            'W' => HouseSystem::WholeSign,
            'N' => HouseSystem::EqualAries,
            'X' => HouseSystem::AxialRotation,
            'M' => HouseSystem::Morinus,
            'T' => HouseSystem::Topocentric,
            'U' => HouseSystem::Krusinski,
            'H' => HouseSystem::Horizontal,
            _ => return Err(Error::UnsupportedHouseSystem(code)),
        };
        Ok(system)
    }

    /// Canonical one-letter code, as passed to `swe_houses_ex`.
    pub fn code(self) -> char {
        match self {
            HouseSystem::Placidus => 'P',
            HouseSystem::Koch => 'K',
            HouseSystem::Porphyry => 'O',
            HouseSystem::Regiomontanus => 'R',
            HouseSystem::Campanus => 'C',
            HouseSystem::Alcabitius => 'B',
            HouseSystem::Equal => 'E',
            HouseSystem::Vehicle => 'V',
            HouseSystem::WholeSign => 'W',
            HouseSystem::EqualAries => 'N',
            HouseSystem::AxialRotation => 'X',
            HouseSystem::Morinus => 'M',
            HouseSystem::Topocentric => 'T',
            HouseSystem::Krusinski => 'U',
            HouseSystem::Horizontal => 'H',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "Placidus",
            HouseSystem::Koch => "Koch",
            HouseSystem::Porphyry => "Porphyry",
            HouseSystem::Regiomontanus => "Regiomontanus",
            HouseSystem::Campanus => "Campanus",
            HouseSystem::Alcabitius => "Alcabitius",
            HouseSystem::Equal => "Equal",
            HouseSystem::Vehicle => "Vehicle",
            HouseSystem::WholeSign => "Whole Sign",
            HouseSystem::EqualAries => "Equal (0° Aries)",
            HouseSystem::AxialRotation => "Axial Rotation",
            HouseSystem::Morinus => "Morinus",
            HouseSystem::Topocentric => "Polich/Page",
            HouseSystem::Krusinski => "Krusinski-Pisa-Goelzer",
            HouseSystem::Horizontal => "Horizon",
        }
    }

    /// Systems whose first and tenth cusps are the ascendant and midheaven.
    pub fn is_quadrant(self) -> bool {
        matches!(
            self,
            HouseSystem::Placidus
                | HouseSystem::Koch
                | HouseSystem::Porphyry
                | HouseSystem::Regiomontanus
                | HouseSystem::Campanus
                | HouseSystem::Alcabitius
                | HouseSystem::Topocentric
        )
    }

    /// Systems built on semi-arc time division, undefined where parts of
    /// the ecliptic never rise.
    pub fn needs_rising_ecliptic(self) -> bool {
        matches!(self, HouseSystem::Placidus | HouseSystem::Koch)
    }
}

impl std::fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Result of a house computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseSet {
    pub system: HouseSystem,
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

impl HouseSet {
    /// Normalize the raw library output, failing on non-finite values.
    pub(crate) fn from_raw(
        system: HouseSystem,
        cusps: [f64; 12],
        ascendant: f64,
        midheaven: f64,
    ) -> Result<Self> {
        if let Some(bad) = cusps.iter().position(|c| !c.is_finite()) {
            return Err(Error::Computation(format!(
                "non-finite cusp {} for {system}",
                bad + 1
            )));
        }
        if !ascendant.is_finite() || !midheaven.is_finite() {
            return Err(Error::Computation(format!("non-finite angles for {system}")));
        }
        Ok(Self {
            system,
            cusps: cusps.map(normalize_deg),
            ascendant: normalize_deg(ascendant),
            midheaven: normalize_deg(midheaven),
        })
    }
}

/// Mean obliquity of the ecliptic (IAU 1976) in degrees.
pub fn mean_obliquity(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let arcsec = 84_381.448 - 46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    arcsec / 3600.0
}

/// Latitude limit beyond which Placidus and Koch are undefined.
pub fn polar_limit(jd: f64) -> f64 {
    90.0 - mean_obliquity(jd)
}

/// Validate the observer and system before asking the library for cusps.
pub fn check_observer(jd: f64, latitude: f64, longitude: f64, system: HouseSystem) -> Result<()> {
    if !latitude.is_finite() || latitude.abs() > 90.0 {
        return Err(Error::InvalidInput(format!("latitude {latitude} outside [-90, 90]")));
    }
    if !longitude.is_finite() {
        return Err(Error::InvalidInput(format!("non-finite longitude {longitude}")));
    }
    if system.needs_rising_ecliptic() && latitude.abs() >= polar_limit(jd) {
        log::debug!("{system} refused at latitude {latitude}");
        return Err(Error::PolarLatitude {
            system: system.code(),
            latitude,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::J2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn codes_roundtrip() {
        for system in HouseSystem::ALL {
            assert_eq!(HouseSystem::from_code(system.code()).unwrap(), system);
        }
        assert_eq!(HouseSystem::from_code('p').unwrap(), HouseSystem::Placidus);
        assert_eq!(HouseSystem::from_code('A').unwrap(), HouseSystem::Equal);
        assert_eq!(
            HouseSystem::from_code('Z'),
            Err(Error::UnsupportedHouseSystem('Z'))
        );
    }

    #[test]
    fn gauquelin_sectors_are_not_twelve_houses() {
        assert!(HouseSystem::from_code('G').is_err());
    }

    #[test]
    fn obliquity_at_j2000() {
        assert_abs_diff_eq!(mean_obliquity(J2000), 23.439_291, epsilon = 1e-6);
        assert_abs_diff_eq!(polar_limit(J2000), 66.560_709, epsilon = 1e-6);
    }

    #[test]
    fn placidus_and_koch_fail_inside_polar_circle() {
        for system in [HouseSystem::Placidus, HouseSystem::Koch] {
            let err = check_observer(J2000, 70.0, 0.0, system).unwrap_err();
            assert!(matches!(err, Error::PolarLatitude { .. }), "{system}: {err}");
            assert!(check_observer(J2000, -70.0, 0.0, system).is_err());
            assert!(check_observer(J2000, 66.0, 0.0, system).is_ok());
        }
        assert!(check_observer(J2000, 70.0, 0.0, HouseSystem::Porphyry).is_ok());
    }

    #[test]
    fn rejects_impossible_observer() {
        let err = check_observer(J2000, 91.0, 0.0, HouseSystem::Equal).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        let err = check_observer(J2000, f64::NAN, 0.0, HouseSystem::Equal).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        let err = check_observer(J2000, 10.0, f64::INFINITY, HouseSystem::Equal).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn raw_output_is_normalized_and_checked() {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = 30.0 * i as f64 - 5.0;
        }
        let set = HouseSet::from_raw(HouseSystem::Equal, cusps, -5.0, 365.0).unwrap();
        assert_abs_diff_eq!(set.cusps[0], 355.0, epsilon = 1e-12);
        assert_abs_diff_eq!(set.midheaven, 5.0, epsilon = 1e-12);

        cusps[3] = f64::NAN;
        let err = HouseSet::from_raw(HouseSystem::Equal, cusps, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }
}
