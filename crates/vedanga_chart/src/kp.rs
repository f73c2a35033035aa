//! Krishnamurti Paddhati view: sub-lord chains for the ascendant and
//! all nine grahas.

use serde::Serialize;

use vedanga_vedic::planet::Planet;
use vedanga_vedic::sublord::{SubLordChain, sub_lord_chain};
use vedanga_vedic::util::normalize_360;

use crate::chart::D1Chart;

/// Post-ayanamsha correction applied to the KP ascendant and Moon.
///
/// Inherited from long-standing KP practice; flagged for calibration
/// against a reference KP ephemeris. Override through [`KpConfig`].
pub const KP_AYANAMSA_CORRECTION_DEG: f64 = 0.00653;

#[derive(Debug, Clone, Copy)]
pub struct KpConfig {
    pub correction_deg: f64,
}

impl Default for KpConfig {
    fn default() -> Self {
        Self {
            correction_deg: KP_AYANAMSA_CORRECTION_DEG,
        }
    }
}

/// A longitude with its KP lord chain.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KpPoint {
    pub longitude_deg: f64,
    pub chain: SubLordChain,
}

impl KpPoint {
    fn at(longitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            chain: sub_lord_chain(longitude_deg),
        }
    }
}

/// The KP view over a built chart.
#[derive(Debug, Clone, Serialize)]
pub struct KpChart {
    pub correction_deg: f64,
    pub ascendant: KpPoint,
    /// All nine grahas in canonical order; the Moon carries the
    /// correction, the rest do not.
    pub points: [KpPoint; 9],
}

impl KpChart {
    pub fn point(&self, planet: Planet) -> &KpPoint {
        &self.points[planet.index() as usize]
    }
}

/// Derive the KP sub-lord view from a D1 chart.
pub fn kp_chart(d1: &D1Chart, config: &KpConfig) -> KpChart {
    let asc = normalize_360(d1.ascendant.longitude_deg + config.correction_deg);

    let mut points = [KpPoint::at(0.0); 9];
    for p in &d1.placements {
        let lon = if p.planet == Planet::Moon {
            normalize_360(p.longitude_deg + config.correction_deg)
        } else {
            p.longitude_deg
        };
        points[p.planet.index() as usize] = KpPoint::at(lon);
    }

    KpChart {
        correction_deg: config.correction_deg,
        ascendant: KpPoint::at(asc),
        points,
    }
}
