//! The nine grahas of Parashari astrology.

use serde::{Deserialize, Serialize};

/// The nine grahas. Rahu and Ketu are the mean lunar nodes; Ketu is
/// always Rahu + 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine grahas in canonical order.
pub const ALL_PLANETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

/// The seven classical grahas (no nodes), in canonical order.
pub const SAPTA_GRAHAS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// Vimshottari lord order starting from Ketu (Ashwini's lord).
pub const VIMSHOTTARI_SEQUENCE: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

/// Total span of one Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index (matches position in ALL_PLANETS).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Vimshottari mahadasha span in years.
    pub const fn vimshottari_years(self) -> f64 {
        match self {
            Self::Ketu => 7.0,
            Self::Venus => 20.0,
            Self::Sun => 6.0,
            Self::Moon => 10.0,
            Self::Mars => 7.0,
            Self::Rahu => 18.0,
            Self::Jupiter => 16.0,
            Self::Saturn => 19.0,
            Self::Mercury => 17.0,
        }
    }

    /// Kaksha rays used for the Indu Lagna sum. Nodes carry none.
    pub const fn kaksha_rays(self) -> u8 {
        match self {
            Self::Sun => 30,
            Self::Moon => 16,
            Self::Mars => 6,
            Self::Mercury => 8,
            Self::Jupiter => 10,
            Self::Venus => 12,
            Self::Saturn => 1,
            Self::Rahu | Self::Ketu => 0,
        }
    }

    /// Slow-moving grahas whose transits carry event-timing weight.
    pub const fn is_heavyweight(self) -> bool {
        matches!(self, Self::Jupiter | Self::Saturn | Self::Rahu | Self::Ketu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, p) in ALL_PLANETS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn vimshottari_years_total_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE
            .iter()
            .map(|p| p.vimshottari_years())
            .sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn sequence_covers_all_nine() {
        for p in ALL_PLANETS {
            assert!(VIMSHOTTARI_SEQUENCE.contains(&p), "{} missing", p.name());
        }
    }

    #[test]
    fn nodes_have_no_rays() {
        assert_eq!(Planet::Rahu.kaksha_rays(), 0);
        assert_eq!(Planet::Ketu.kaksha_rays(), 0);
        let total: u32 = SAPTA_GRAHAS.iter().map(|p| p.kaksha_rays() as u32).sum();
        assert_eq!(total, 83);
    }
}
