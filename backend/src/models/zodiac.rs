//! Zodiac signs and the longitude → sign mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of a sign in degrees.
pub const SIGN_WIDTH_DEG: f64 = 30.0;

/// The twelve tropical signs in zodiacal order, Aries starting at 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing an ecliptic longitude.
    ///
    /// The longitude is reduced to `[0, 360)` first; a longitude exactly on a
    /// multiple of 30° belongs to the sign beginning there.
    pub fn from_longitude(longitude: f64) -> Self {
        let reduced = ephem_core::normalize_deg(longitude);
        let index = (reduced / SIGN_WIDTH_DEG).floor() as usize % 12;
        Self::ALL[index]
    }

    /// Zero-based position in zodiacal order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// German name.
    pub fn german_name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Widder",
            ZodiacSign::Taurus => "Stier",
            ZodiacSign::Gemini => "Zwillinge",
            ZodiacSign::Cancer => "Krebs",
            ZodiacSign::Leo => "Löwe",
            ZodiacSign::Virgo => "Jungfrau",
            ZodiacSign::Libra => "Waage",
            ZodiacSign::Scorpio => "Skorpion",
            ZodiacSign::Sagittarius => "Schütze",
            ZodiacSign::Capricorn => "Steinbock",
            ZodiacSign::Aquarius => "Wassermann",
            ZodiacSign::Pisces => "Fische",
        }
    }

    pub fn localized(self, locale: SignLocale) -> &'static str {
        match locale {
            SignLocale::English => self.name(),
            SignLocale::German => self.german_name(),
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Language used for sign names in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignLocale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl FromStr for SignLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(SignLocale::English),
            "de" | "german" | "deutsch" => Ok(SignLocale::German),
            other => Err(format!("unknown sign locale '{other}' (expected 'en' or 'de')")),
        }
    }
}
