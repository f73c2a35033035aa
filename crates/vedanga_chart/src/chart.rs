//! The rashi (D1) chart object.

use serde::Serialize;

use vedanga_ephem::AyanamshaScheme;
use vedanga_vedic::ashtakavarga::AvPositions;
use vedanga_vedic::dasha::ShoolaInputs;
use vedanga_vedic::nakshatra::PadaPosition;
use vedanga_vedic::planet::{Planet, SAPTA_GRAHAS};
use vedanga_vedic::sign::{Dignity, Sign};

use crate::input::ResolvedBirth;

/// One graha's placement in the rashi chart.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Placement {
    pub planet: Planet,
    /// Sidereal longitude, degrees [0, 360).
    pub longitude_deg: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub pada: PadaPosition,
    pub dignity: Dignity,
    pub retrograde: bool,
    /// Whole-sign house, 1..=12.
    pub house: u8,
}

/// The sidereal ascendant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ascendant {
    pub longitude_deg: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub pada: PadaPosition,
}

/// A fully built rashi chart. Every derived view (divisional, KP,
/// Ashtakavarga, dashas, scans) starts from one of these.
#[derive(Debug, Clone, Serialize)]
pub struct D1Chart {
    pub birth: ResolvedBirth,
    pub jd_ut: f64,
    pub scheme: AyanamshaScheme,
    pub ayanamsha_deg: f64,
    pub ascendant: Ascendant,
    /// Whole-sign houses: entry 0 is the 1st house sign.
    pub houses: [Sign; 12],
    /// All nine grahas in canonical order.
    pub placements: [Placement; 9],
    /// Sidereal longitudes of the shadow points.
    pub gulika_deg: f64,
    pub maandi_deg: f64,
    pub indu_lagna_deg: f64,
}

impl D1Chart {
    pub fn placement(&self, planet: Planet) -> &Placement {
        &self.placements[planet.index() as usize]
    }

    /// Whole-sign house of a sign, 1..=12.
    pub fn house_of_sign(&self, sign: Sign) -> u8 {
        (sign.index() + 12 - self.ascendant.sign.index()) % 12 + 1
    }

    /// Sign on a house cusp, 1-based house number.
    pub fn sign_of_house(&self, house: u8) -> Sign {
        self.houses[((house - 1) % 12) as usize]
    }

    /// Feed for the Ashtakavarga tables.
    pub fn av_positions(&self) -> AvPositions {
        let mut grahas = [Sign::Aries; 7];
        for (slot, graha) in grahas.iter_mut().zip(SAPTA_GRAHAS) {
            *slot = self.placement(graha).sign;
        }
        AvPositions {
            grahas,
            lagna: self.ascendant.sign,
        }
    }

    /// Feed for the Shoola dasha, based on the ascendant.
    pub fn shoola_inputs(&self) -> ShoolaInputs {
        let mut planet_signs = [Sign::Aries; 9];
        for (slot, p) in planet_signs.iter_mut().zip(&self.placements) {
            *slot = p.sign;
        }
        ShoolaInputs {
            base_sign: self.ascendant.sign,
            planet_signs,
        }
    }
}
