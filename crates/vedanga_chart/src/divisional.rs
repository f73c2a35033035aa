//! Divisional chart views over a built D1.

use serde::Serialize;

use vedanga_vedic::planet::Planet;
use vedanga_vedic::sign::{Dignity, Sign};
use vedanga_vedic::varga::{VargaPosition, varga_position};

use crate::builder::whole_sign_houses;
use crate::chart::D1Chart;
use crate::error::ChartError;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DivisionalPlacement {
    pub planet: Planet,
    pub position: VargaPosition,
    pub dignity: Dignity,
    /// Whole-sign house from the divisional ascendant, 1..=12.
    pub house: u8,
}

/// A divisional chart: every graha and the ascendant re-signed under
/// one division's rule.
#[derive(Debug, Clone, Serialize)]
pub struct DivisionalChart {
    pub division: u8,
    pub ascendant: VargaPosition,
    pub houses: [Sign; 12],
    pub placements: [DivisionalPlacement; 9],
}

impl DivisionalChart {
    pub fn placement(&self, planet: Planet) -> &DivisionalPlacement {
        &self.placements[planet.index() as usize]
    }
}

/// Project a D1 chart into division `n`.
pub fn divisional_chart(d1: &D1Chart, n: u8) -> Result<DivisionalChart, ChartError> {
    let ascendant = varga_position(n, d1.ascendant.longitude_deg)?;
    let houses = whole_sign_houses(ascendant.sign);

    let mut placements = [DivisionalPlacement {
        planet: Planet::Sun,
        position: ascendant,
        dignity: Dignity::Neutral,
        house: 1,
    }; 9];
    for p in &d1.placements {
        let position = varga_position(n, p.longitude_deg)?;
        placements[p.planet.index() as usize] = DivisionalPlacement {
            planet: p.planet,
            position,
            dignity: p.planet.dignity_in(position.sign),
            house: (position.sign.index() + 12 - ascendant.sign.index()) % 12 + 1,
        };
    }

    Ok(DivisionalChart {
        division: n,
        ascendant,
        houses,
        placements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vedanga_ephem::{AyanamshaScheme, MeanEphemeris, SchemeLock};
    use vedanga_time::{CivilMoment, GeoPoint};
    use vedanga_vedic::SUPPORTED_DIVISIONS;

    use crate::builder::ChartBuilder;
    use crate::input::BirthMoment;

    static LOCK: SchemeLock = SchemeLock::new();

    fn chart() -> D1Chart {
        let eph = MeanEphemeris::new();
        ChartBuilder::new(&eph, &LOCK)
            .build(&BirthMoment {
                moment: CivilMoment::new(1980, 4, 2, 14, 55),
                tz_offset_hours: None,
                location: GeoPoint::new(29.1492, 75.7217).unwrap(),
                scheme: AyanamshaScheme::Lahiri,
            })
            .unwrap()
    }

    #[test]
    fn all_supported_divisions_project() {
        let d1 = chart();
        for n in SUPPORTED_DIVISIONS {
            let dc = divisional_chart(&d1, n).unwrap();
            assert_eq!(dc.division, n);
            for p in &dc.placements {
                assert!((0.0..30.0).contains(&p.position.degree));
                assert!((1..=12).contains(&p.house));
            }
        }
    }

    #[test]
    fn unsupported_division_propagates() {
        let d1 = chart();
        assert!(divisional_chart(&d1, 11).is_err());
    }

    #[test]
    fn d12_of_sign_start_is_self() {
        // A graha at the very start of a sign keeps its sign in D12.
        let d1 = chart();
        let dc = divisional_chart(&d1, 12).unwrap();
        for p in &d1.placements {
            if p.degree_in_sign < 30.0 / 12.0 {
                assert_eq!(dc.placement(p.planet).position.sign, p.sign);
            }
        }
    }

    #[test]
    fn dignity_recomputed_in_division() {
        let d1 = chart();
        let dc = divisional_chart(&d1, 9).unwrap();
        for p in &dc.placements {
            assert_eq!(p.dignity, p.planet.dignity_in(p.position.sign));
        }
    }
}
