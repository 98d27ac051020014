//! Ecliptic points and house membership.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

/// Ecliptic longitude in degrees. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EclipticPoint(Degrees);

impl EclipticPoint {
    pub fn new(degrees: f64) -> Self {
        Self(Degrees::new(degrees))
    }

    pub fn degrees(&self) -> f64 {
        self.0.value()
    }

    /// Longitude reduced to `[0, 360)`.
    pub fn normalized(&self) -> f64 {
        ephem_core::normalize_deg(self.degrees())
    }
}

impl From<f64> for EclipticPoint {
    fn from(v: f64) -> Self {
        EclipticPoint::new(v)
    }
}

/// The twelve house cusps, house 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseCusps([EclipticPoint; 12]);

impl HouseCusps {
    pub fn new(cusps: [EclipticPoint; 12]) -> Self {
        Self(cusps)
    }

    pub fn from_degrees(cusps: [f64; 12]) -> Self {
        Self(cusps.map(EclipticPoint::from))
    }

    pub fn as_slice(&self) -> &[EclipticPoint] {
        &self.0
    }

    /// Cusp of house `n` (1-based).
    pub fn cusp(&self, n: u8) -> Option<EclipticPoint> {
        let i = usize::from(n).checked_sub(1)?;
        self.0.get(i).copied()
    }

    /// House (1-12) containing `target`.
    ///
    /// House *i* spans from its own cusp (inclusive) to the next cusp
    /// (exclusive), wrapping through 0°. Houses are tried in order and the
    /// first match wins; `None` only when the cusps do not cover the circle.
    pub fn house_of(&self, target: EclipticPoint) -> Option<u8> {
        let lon = target.normalized();
        (0..12).find_map(|i| {
            let start = self.0[i].normalized();
            let end = self.0[(i + 1) % 12].normalized();
            let inside = if start <= end {
                start <= lon && lon < end
            } else {
                lon >= start || lon < end
            };
            inside.then_some(i as u8 + 1)
        })
    }
}
