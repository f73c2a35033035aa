//! Category analysis wrappers: weighted scores over house strength,
//! karaka dignity, classical yogas, and Sarvashtakavarga bindus.

use serde::Serialize;

use vedanga_chart::D1Chart;
use vedanga_vedic::ashtakavarga::sarvashtakavarga;
use vedanga_vedic::{ALL_PLANETS, Planet};

use crate::event_timing::Category;

/// Component weights for one category. Declared data; every table sums
/// to 1.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComponentWeights {
    pub house_strength: f64,
    pub dignity: f64,
    pub yogas: f64,
    pub sav: f64,
}

pub const fn weights(category: Category) -> ComponentWeights {
    match category {
        Category::Education => ComponentWeights {
            house_strength: 0.40,
            dignity: 0.30,
            yogas: 0.20,
            sav: 0.10,
        },
        Category::Career => ComponentWeights {
            house_strength: 0.35,
            dignity: 0.30,
            yogas: 0.20,
            sav: 0.15,
        },
        Category::Marriage => ComponentWeights {
            house_strength: 0.35,
            dignity: 0.35,
            yogas: 0.20,
            sav: 0.10,
        },
        Category::Property => ComponentWeights {
            house_strength: 0.40,
            dignity: 0.25,
            yogas: 0.20,
            sav: 0.15,
        },
        Category::Children => ComponentWeights {
            house_strength: 0.35,
            dignity: 0.30,
            yogas: 0.25,
            sav: 0.10,
        },
        Category::Health => ComponentWeights {
            house_strength: 0.45,
            dignity: 0.25,
            yogas: 0.15,
            sav: 0.15,
        },
    }
}

/// Raw component values, each in [0, 1].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComponentBreakdown {
    pub house_strength: f64,
    pub dignity: f64,
    pub yogas: f64,
    pub sav: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    /// 0..=100.
    pub score: f64,
    pub components: ComponentBreakdown,
    pub yogas: Vec<&'static str>,
}

const BENEFICS: [Planet; 4] = [Planet::Jupiter, Planet::Venus, Planet::Mercury, Planet::Moon];

/// SAV bindu count treated as full strength for scoring.
const SAV_FULL_BINDUS: f64 = 40.0;

pub fn analyze(chart: &D1Chart, category: Category) -> CategoryScore {
    let sav = sarvashtakavarga(&chart.av_positions());
    let key_house = category.key_house();
    let key_sign = chart.sign_of_house(key_house);

    let house_strength = house_strength(chart, key_house);
    let dignity = chart.placement(category.karaka()).dignity.multiplier() / 2.0;
    let found = detected_yogas(chart);
    let yogas = found.len() as f64 / YOGA_COUNT as f64;
    let sav_component = (sav[key_sign.index() as usize] as f64 / SAV_FULL_BINDUS).min(1.0);

    let components = ComponentBreakdown {
        house_strength,
        dignity: dignity.min(1.0),
        yogas,
        sav: sav_component,
    };
    let w = weights(category);
    let score = 100.0
        * (w.house_strength * components.house_strength
            + w.dignity * components.dignity
            + w.yogas * components.yogas
            + w.sav * components.sav);

    CategoryScore {
        category,
        score: score.clamp(0.0, 100.0),
        components,
        yogas: found,
    }
}

/// House lord dignity, shaded by occupants.
fn house_strength(chart: &D1Chart, house: u8) -> f64 {
    let sign = chart.sign_of_house(house);
    let lord = sign.lord();
    let mut strength = chart.placement(lord).dignity.multiplier() / 2.0;
    for planet in ALL_PLANETS {
        if chart.placement(planet).house == house {
            if BENEFICS.contains(&planet) {
                strength += 0.1;
            } else {
                strength -= 0.1;
            }
        }
    }
    strength.clamp(0.0, 1.0)
}

const YOGA_COUNT: usize = 4;

fn detected_yogas(chart: &D1Chart) -> Vec<&'static str> {
    let mut found = Vec::new();
    let moon = chart.placement(Planet::Moon);
    let jupiter = chart.placement(Planet::Jupiter);

    // Jupiter in a kendra from the Moon.
    let offset = (jupiter.sign.index() + 12 - moon.sign.index()) % 12;
    if matches!(offset, 0 | 3 | 6 | 9) {
        found.push("Gajakesari");
    }
    if chart.placement(Planet::Sun).sign == chart.placement(Planet::Mercury).sign {
        found.push("Budhaditya");
    }
    if moon.sign == chart.placement(Planet::Mars).sign {
        found.push("Chandra-Mangala");
    }
    // Lords of the 9th and 10th together in one sign.
    let ninth_lord = chart.sign_of_house(9).lord();
    let tenth_lord = chart.sign_of_house(10).lord();
    if ninth_lord != tenth_lord
        && chart.placement(ninth_lord).sign == chart.placement(tenth_lord).sign
    {
        found.push("Dharma-Karmadhipati");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use vedanga_chart::{BirthMoment, ChartBuilder};
    use vedanga_ephem::{AyanamshaScheme, MeanEphemeris, SchemeLock};
    use vedanga_time::{CivilMoment, GeoPoint};

    static LOCK: SchemeLock = SchemeLock::new();
    static EPH: MeanEphemeris = MeanEphemeris;

    const ALL_CATEGORIES: [Category; 6] = [
        Category::Career,
        Category::Marriage,
        Category::Education,
        Category::Property,
        Category::Children,
        Category::Health,
    ];

    fn reference_chart() -> D1Chart {
        let birth = BirthMoment {
            moment: CivilMoment::new(1980, 4, 2, 14, 55),
            tz_offset_hours: None,
            location: GeoPoint::new(29.1492, 75.7217).unwrap(),
            scheme: AyanamshaScheme::Lahiri,
        };
        ChartBuilder::new(&EPH, &LOCK).build(&birth).unwrap()
    }

    #[test]
    fn every_weight_table_sums_to_one() {
        for category in ALL_CATEGORIES {
            let w = weights(category);
            let sum = w.house_strength + w.dignity + w.yogas + w.sav;
            assert!((sum - 1.0).abs() < 1e-12, "{}: {sum}", category.name());
        }
    }

    #[test]
    fn scores_stay_in_range() {
        let chart = reference_chart();
        for category in ALL_CATEGORIES {
            let result = analyze(&chart, category);
            assert!(
                (0.0..=100.0).contains(&result.score),
                "{}: {}",
                category.name(),
                result.score
            );
            for c in [
                result.components.house_strength,
                result.components.dignity,
                result.components.yogas,
                result.components.sav,
            ] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn education_weights_match_declaration() {
        let w = weights(Category::Education);
        assert!((w.house_strength - 0.40).abs() < 1e-12);
        assert!((w.dignity - 0.30).abs() < 1e-12);
        assert!((w.yogas - 0.20).abs() < 1e-12);
        assert!((w.sav - 0.10).abs() < 1e-12);
    }

    #[test]
    fn yoga_detection_reports_names() {
        let chart = reference_chart();
        let found = detected_yogas(&chart);
        assert!(found.len() <= YOGA_COUNT);
        for name in &found {
            assert!(["Gajakesari", "Budhaditya", "Chandra-Mangala", "Dharma-Karmadhipati"]
                .contains(name));
        }
    }
}
