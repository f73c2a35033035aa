//! Zodiac signs, lordships, and planetary dignity.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::util::normalize_360;

/// The twelve sidereal signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
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

pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Triplicity (sign index mod 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality (sign index mod 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quality {
    Movable,
    Fixed,
    Dual,
}

impl Sign {
    /// Sign from 0-based index; wraps mod 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Odd in the 1-based count (Aries, Gemini, Leo, ...).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn quality(self) -> Quality {
        match self.index() % 3 {
            0 => Quality::Movable,
            1 => Quality::Fixed,
            _ => Quality::Dual,
        }
    }

    pub const fn lord(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }

    /// The sign `n` places ahead, 0-based.
    pub const fn advance(self, n: u8) -> Self {
        Self::from_index((self.index() + n % 12) % 12)
    }
}

/// Split a longitude into its sign and the degree within that sign.
pub fn sign_from_longitude(lon_deg: f64) -> (Sign, f64) {
    let lon = normalize_360(lon_deg);
    let idx = (lon / 30.0) as u8;
    let idx = if idx > 11 { 11 } else { idx };
    (Sign::from_index(idx), lon - idx as f64 * 30.0)
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Classical sign-level dignity of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    Debilitated,
    Neutral,
}

impl Dignity {
    /// Strength multiplier used by the analysis layer.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Exalted => 2.0,
            Self::Moolatrikona => 1.5,
            Self::OwnSign => 1.25,
            Self::Debilitated => 0.25,
            Self::Neutral => 1.0,
        }
    }
}

// Indexed Sun..Saturn (Planet::index).
const EXALTATION_SIGN: [u8; 7] = [0, 1, 9, 5, 3, 11, 6];
const MOOLATRIKONA_SIGN: [u8; 7] = [4, 1, 0, 5, 8, 6, 10];

impl Planet {
    /// Sign-level dignity. Nodes have no classical assignment and are
    /// always neutral.
    pub fn dignity_in(self, sign: Sign) -> Dignity {
        if self.is_node() {
            return Dignity::Neutral;
        }
        let i = self.index() as usize;
        let s = sign.index();
        if s == EXALTATION_SIGN[i] {
            Dignity::Exalted
        } else if s == (EXALTATION_SIGN[i] + 6) % 12 {
            Dignity::Debilitated
        } else if s == MOOLATRIKONA_SIGN[i] {
            Dignity::Moolatrikona
        } else if sign.lord() == self {
            Dignity::OwnSign
        } else {
            Dignity::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_even_parity() {
        assert!(Sign::Aries.is_odd());
        assert!(!Sign::Taurus.is_odd());
        assert!(!Sign::Virgo.is_odd());
        assert!(Sign::Aquarius.is_odd());
    }

    #[test]
    fn qualities_cycle() {
        assert_eq!(Sign::Aries.quality(), Quality::Movable);
        assert_eq!(Sign::Taurus.quality(), Quality::Fixed);
        assert_eq!(Sign::Gemini.quality(), Quality::Dual);
        assert_eq!(Sign::Capricorn.quality(), Quality::Movable);
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(Sign::Leo.element(), Element::Fire);
        assert_eq!(Sign::Virgo.element(), Element::Earth);
        assert_eq!(Sign::Libra.element(), Element::Air);
        assert_eq!(Sign::Scorpio.element(), Element::Water);
    }

    #[test]
    fn every_sign_has_a_lord() {
        // Sun and Moon rule one sign each; the five planets two each.
        let mut counts = [0u8; 9];
        for s in ALL_SIGNS {
            counts[s.lord().index() as usize] += 1;
        }
        assert_eq!(counts[..7], [1, 1, 2, 2, 2, 2, 2]);
        assert_eq!(counts[7], 0);
        assert_eq!(counts[8], 0);
    }

    #[test]
    fn longitude_split() {
        let (s, d) = sign_from_longitude(122.39);
        assert_eq!(s, Sign::Leo);
        assert!((d - 2.39).abs() < 1e-9);

        let (s, d) = sign_from_longitude(360.0);
        assert_eq!(s, Sign::Aries);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn exaltation_and_debilitation() {
        assert_eq!(Planet::Sun.dignity_in(Sign::Aries), Dignity::Exalted);
        assert_eq!(Planet::Sun.dignity_in(Sign::Libra), Dignity::Debilitated);
        assert_eq!(Planet::Saturn.dignity_in(Sign::Libra), Dignity::Exalted);
        assert_eq!(Planet::Mars.dignity_in(Sign::Capricorn), Dignity::Exalted);
        assert_eq!(Planet::Jupiter.dignity_in(Sign::Cancer), Dignity::Exalted);
    }

    #[test]
    fn moolatrikona_and_own() {
        assert_eq!(Planet::Sun.dignity_in(Sign::Leo), Dignity::Moolatrikona);
        assert_eq!(
            Planet::Jupiter.dignity_in(Sign::Sagittarius),
            Dignity::Moolatrikona
        );
        assert_eq!(Planet::Jupiter.dignity_in(Sign::Pisces), Dignity::OwnSign);
        assert_eq!(Planet::Mars.dignity_in(Sign::Scorpio), Dignity::OwnSign);
        // exaltation wins where it coincides with moolatrikona
        assert_eq!(Planet::Moon.dignity_in(Sign::Taurus), Dignity::Exalted);
        assert_eq!(Planet::Mercury.dignity_in(Sign::Virgo), Dignity::Exalted);
    }

    #[test]
    fn nodes_are_neutral_everywhere() {
        for s in ALL_SIGNS {
            assert_eq!(Planet::Rahu.dignity_in(s), Dignity::Neutral);
            assert_eq!(Planet::Ketu.dignity_in(s), Dignity::Neutral);
        }
    }

    #[test]
    fn multipliers() {
        assert!((Dignity::Exalted.multiplier() - 2.0).abs() < 1e-12);
        assert!((Dignity::Debilitated.multiplier() - 0.25).abs() < 1e-12);
        assert!((Dignity::Neutral.multiplier() - 1.0).abs() < 1e-12);
    }
}
