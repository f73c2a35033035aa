//! Monthly event-timing forecast: dasha lords, transit triggers, and the
//! Sarvashtakavarga conductivity filter combined into twelve entries.

use serde::Serialize;
use tracing::debug;

use vedanga_chart::D1Chart;
use vedanga_ephem::{Ephemeris, SchemeLock};
use vedanga_time::calendar_to_jd;
use vedanga_vedic::ashtakavarga::{BinduBand, sarvashtakavarga};
use vedanga_vedic::aspect::allowed_aspects;
use vedanga_vedic::dasha::snapshot;
use vedanga_vedic::sign::{Dignity, Sign, sign_from_longitude};
use vedanga_vedic::varga::varga_position;
use vedanga_vedic::{ALL_PLANETS, Planet};

use crate::error::ScanError;
use crate::transit::planet_sidereal_lon;

/// Orb for a fast planet crossing a dasha lord's natal position.
const FAST_TRANSIT_ORB_DEG: f64 = 3.0;

const FAST_PLANETS: [Planet; 4] = [Planet::Sun, Planet::Mercury, Planet::Venus, Planet::Mars];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Career,
    Marriage,
    Education,
    Property,
    Children,
    Health,
}

impl Category {
    /// Divisional chart consulted for dignity downgrades.
    pub const fn varga(self) -> u8 {
        match self {
            Self::Career => 10,
            Self::Marriage => 9,
            Self::Education => 24,
            Self::Property => 4,
            Self::Children => 7,
            Self::Health => 30,
        }
    }

    pub const fn key_house(self) -> u8 {
        match self {
            Self::Career => 10,
            Self::Marriage => 7,
            Self::Education => 5,
            Self::Property => 4,
            Self::Children => 5,
            Self::Health => 6,
        }
    }

    pub const fn karaka(self) -> Planet {
        match self {
            Self::Career => Planet::Saturn,
            Self::Marriage => Planet::Venus,
            Self::Education => Planet::Mercury,
            Self::Property => Planet::Mars,
            Self::Children => Planet::Jupiter,
            Self::Health => Planet::Sun,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Marriage => "Marriage",
            Self::Education => "Education",
            Self::Property => "Property",
            Self::Children => "Children",
            Self::Health => "Health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trigger {
    /// A running dasha lord changes sidereal sign during the month.
    DashaLordIngress { lord: Planet, sign: Sign },
    /// A fast mover crosses a dasha lord's natal longitude.
    FastTransitOverDashaLord { planet: Planet, lord: Planet },
    /// Two heavyweights cast house aspects on the same natal house.
    DoubleHeavyweightAspect {
        first: Planet,
        second: Planet,
        house: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthForecast {
    /// 1..=12.
    pub month: u32,
    pub primary_trigger: Option<Trigger>,
    /// The Sun's monthly ingress is a timing marker, never a primary
    /// trigger.
    pub sun_ingress: Option<Sign>,
    pub intensity: Intensity,
    pub activated_houses: Vec<u8>,
    /// Maha, Antara, Pratyantara lords at mid-month.
    pub dasha_lords: [Planet; 3],
    pub bindu_band: Option<BinduBand>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventTimingForecast {
    pub year: i32,
    pub category: Category,
    pub months: Vec<MonthForecast>,
}

pub struct EventTimer<'a> {
    eph: &'a dyn Ephemeris,
    lock: &'a SchemeLock,
}

impl<'a> EventTimer<'a> {
    pub fn new(eph: &'a dyn Ephemeris, lock: &'a SchemeLock) -> Self {
        Self { eph, lock }
    }

    pub fn forecast(
        &self,
        chart: &D1Chart,
        category: Category,
        year: i32,
    ) -> Result<EventTimingForecast, ScanError> {
        let sav = sarvashtakavarga(&chart.av_positions());
        let moon_lon = chart.placement(Planet::Moon).longitude_deg;

        let mut months = Vec::with_capacity(12);
        for month in 1..=12u32 {
            months.push(self.forecast_month(chart, category, &sav, moon_lon, year, month)?);
        }
        debug!(year, category = category.name(), "event forecast built");
        Ok(EventTimingForecast {
            year,
            category,
            months,
        })
    }

    fn forecast_month(
        &self,
        chart: &D1Chart,
        category: Category,
        sav: &[u8; 12],
        moon_lon: f64,
        year: i32,
        month: u32,
    ) -> Result<MonthForecast, ScanError> {
        let start_jd = calendar_to_jd(year, month, 1.0);
        let end_jd = if month == 12 {
            calendar_to_jd(year + 1, 1, 1.0)
        } else {
            calendar_to_jd(year, month + 1, 1.0)
        };
        let mid_jd = calendar_to_jd(year, month, 15.0);

        let periods = snapshot(moon_lon, chart.jd_ut, mid_jd)?;
        let dasha_lords = [periods[0].lord, periods[1].lord, periods[2].lord];

        let session = self.lock.acquire(chart.scheme);
        let mut triggers: Vec<(Trigger, u8, Sign)> = Vec::new();

        // Dasha-lord sign ingresses.
        for lord in unique_lords(&dasha_lords) {
            let from = sign_at(self.eph, &session, start_jd, lord)?;
            let to = sign_at(self.eph, &session, end_jd, lord)?;
            if from != to {
                triggers.push((
                    Trigger::DashaLordIngress { lord, sign: to },
                    chart.house_of_sign(to),
                    to,
                ));
            }
        }

        // Fast movers over dasha-lord natal positions.
        for fast in FAST_PLANETS {
            let transit_lon = planet_sidereal_lon(self.eph, &session, mid_jd, fast)?;
            for lord in unique_lords(&dasha_lords) {
                let natal = chart.placement(lord).longitude_deg;
                if angular_separation(transit_lon, natal) <= FAST_TRANSIT_ORB_DEG {
                    let sign = sign_from_longitude(transit_lon).0;
                    triggers.push((
                        Trigger::FastTransitOverDashaLord { planet: fast, lord },
                        chart.placement(lord).house,
                        sign,
                    ));
                }
            }
        }

        // Two heavyweights aspecting the same natal house.
        let mut aspecting: [Vec<Planet>; 12] = Default::default();
        for heavy in ALL_PLANETS.into_iter().filter(|p| p.is_heavyweight()) {
            let lon = planet_sidereal_lon(self.eph, &session, mid_jd, heavy)?;
            let from_house = chart.house_of_sign(sign_from_longitude(lon).0);
            for kind in allowed_aspects(heavy) {
                if let Some(offset) = kind.house_offset() {
                    let target = (from_house - 1 + offset) % 12;
                    aspecting[target as usize].push(heavy);
                }
            }
        }
        for (idx, heavies) in aspecting.iter().enumerate() {
            if heavies.len() >= 2 {
                let house = idx as u8 + 1;
                triggers.push((
                    Trigger::DoubleHeavyweightAspect {
                        first: heavies[0],
                        second: heavies[1],
                        house,
                    },
                    house,
                    chart.sign_of_house(house),
                ));
            }
        }

        let sun_from = sign_at(self.eph, &session, start_jd, Planet::Sun)?;
        let sun_to = sign_at(self.eph, &session, end_jd, Planet::Sun)?;
        drop(session);
        let sun_ingress = (sun_from != sun_to).then_some(sun_to);

        // Ingress outranks a fast transit, which outranks a heavyweight
        // pattern. The Sun's ingress never competes.
        triggers.sort_by_key(|(t, _, _)| match t {
            Trigger::DashaLordIngress { .. } => 0,
            Trigger::FastTransitOverDashaLord { .. } => 1,
            Trigger::DoubleHeavyweightAspect { .. } => 2,
        });

        let mut activated_houses: Vec<u8> = triggers.iter().map(|&(_, h, _)| h).collect();
        activated_houses.sort_unstable();
        activated_houses.dedup();

        let primary = triggers.first().copied();
        let bindu_band = primary.map(|(_, _, sign)| {
            BinduBand::from_bindus(sav[sign.index() as usize])
        });

        let mut intensity = match primary {
            Some((Trigger::DashaLordIngress { .. }, _, _)) => Intensity::High,
            Some(_) => Intensity::Medium,
            None => Intensity::Low,
        };
        match bindu_band {
            Some(BinduBand::HighResistance) => intensity = Intensity::Low,
            Some(BinduBand::ReducedFlow) => intensity = intensity.min(Intensity::Medium),
            _ => {}
        }
        if dasha_lord_debilitated_in_varga(chart, category, dasha_lords[0]) {
            intensity = downgrade(intensity);
        }

        Ok(MonthForecast {
            month,
            primary_trigger: primary.map(|(t, _, _)| t),
            sun_ingress,
            intensity,
            activated_houses,
            dasha_lords,
            bindu_band,
        })
    }
}

fn sign_at(
    eph: &dyn Ephemeris,
    session: &vedanga_ephem::SchemeSession<'_>,
    jd: f64,
    planet: Planet,
) -> Result<Sign, ScanError> {
    let lon = planet_sidereal_lon(eph, session, jd, planet)?;
    Ok(sign_from_longitude(lon).0)
}

fn unique_lords(lords: &[Planet; 3]) -> Vec<Planet> {
    let mut out = Vec::with_capacity(3);
    for &lord in lords {
        if !out.contains(&lord) {
            out.push(lord);
        }
    }
    out
}

fn angular_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn dasha_lord_debilitated_in_varga(chart: &D1Chart, category: Category, lord: Planet) -> bool {
    let lon = chart.placement(lord).longitude_deg;
    match varga_position(category.varga(), lon) {
        Ok(pos) => lord.dignity_in(pos.sign) == Dignity::Debilitated,
        Err(_) => false,
    }
}

fn downgrade(intensity: Intensity) -> Intensity {
    match intensity {
        Intensity::High => Intensity::Medium,
        _ => Intensity::Low,
    }
}
