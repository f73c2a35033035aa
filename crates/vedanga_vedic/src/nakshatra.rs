//! The 27 nakshatras and their Vimshottari lords.

use serde::{Deserialize, Serialize};

use crate::planet::{Planet, VIMSHOTTARI_SEQUENCE};
use crate::util::normalize_360;

pub const NAKSHATRA_COUNT: usize = 27;

/// Arc of one nakshatra: 13°20'.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

const NAMES: [&str; NAKSHATRA_COUNT] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// A nakshatra identified by its 0-based index (0 = Ashwini).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nakshatra(u8);

impl Nakshatra {
    /// Nakshatra containing a sidereal longitude.
    pub fn from_longitude(lon_deg: f64) -> Self {
        let lon = normalize_360(lon_deg);
        let idx = (lon / NAKSHATRA_SPAN_DEG) as u8;
        Self(if idx > 26 { 26 } else { idx })
    }

    pub const fn from_index(index: u8) -> Self {
        Self(index % 27)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Vimshottari lord: the 120-year sequence repeats three times
    /// around the zodiac.
    pub const fn lord(self) -> Planet {
        VIMSHOTTARI_SEQUENCE[(self.0 % 9) as usize]
    }

    /// Start longitude, degrees.
    pub fn start_deg(self) -> f64 {
        self.0 as f64 * NAKSHATRA_SPAN_DEG
    }

    /// Whether a longitude falls inside this nakshatra.
    pub fn contains(self, lon_deg: f64) -> bool {
        Self::from_longitude(lon_deg) == self
    }
}

/// Position of a longitude within its nakshatra.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PadaPosition {
    pub nakshatra: Nakshatra,
    /// Quarter within the nakshatra, 1..=4.
    pub pada: u8,
    /// Degrees past the nakshatra start.
    pub offset_deg: f64,
}

/// Resolve nakshatra, pada, and intra-nakshatra offset.
pub fn pada_position(lon_deg: f64) -> PadaPosition {
    let lon = normalize_360(lon_deg);
    let nakshatra = Nakshatra::from_longitude(lon);
    let offset_deg = lon - nakshatra.start_deg();
    let pada_span = NAKSHATRA_SPAN_DEG / 4.0;
    let pada = ((offset_deg / pada_span) as u8).min(3) + 1;
    PadaPosition {
        nakshatra,
        pada,
        offset_deg,
    }
}
