//! D1 chart assembly.
//!
//! Build order: normalize the civil moment to UT, pin the ayanamsha
//! scheme, place the ascendant and the nine grahas sidereally, assign
//! whole-sign houses, then the derived points (Gulika, Maandi, Indu
//! Lagna) from sunrise/sunset portions and the 9th-house lords.

use tracing::debug;

use vedanga_ephem::{
    AyanamshaScheme, Body, Ephemeris, RiseSetEvent, SchemeLock, SchemeSession,
    ascendant_tropical_deg,
};
use vedanga_time::{GeoPoint, weekday_utc};
use vedanga_vedic::nakshatra::pada_position;
use vedanga_vedic::planet::{ALL_PLANETS, Planet};
use vedanga_vedic::sign::{Sign, sign_from_longitude};
use vedanga_vedic::upagraha::{gulika_maandi_jd, indu_lagna};
use vedanga_vedic::util::normalize_360;

use crate::chart::{Ascendant, D1Chart, Placement};
use crate::error::ChartError;
use crate::input::{BirthMoment, ResolvedBirth};

/// Rise/set fallbacks when the solver has no event: +6h and +18h from
/// local midnight.
const SUNRISE_FALLBACK_DAYS: f64 = 0.25;
const SUNSET_FALLBACK_DAYS: f64 = 0.75;

pub struct ChartBuilder<'a> {
    eph: &'a dyn Ephemeris,
    lock: &'a SchemeLock,
}

impl<'a> ChartBuilder<'a> {
    pub fn new(eph: &'a dyn Ephemeris, lock: &'a SchemeLock) -> Self {
        Self { eph, lock }
    }

    pub fn build(&self, birth: &BirthMoment) -> Result<D1Chart, ChartError> {
        let normalized = birth.normalize()?;
        let jd = normalized.jd_ut;
        debug!(jd, scheme = birth.scheme.name(), "building rashi chart");

        let session = self.lock.acquire(birth.scheme);

        let ascendant = self.ascendant(&session, jd, &birth.location);
        let houses = whole_sign_houses(ascendant.sign);
        let placements = self.place_grahas(&session, jd, ascendant.sign)?;

        let (gulika_deg, maandi_deg) =
            self.gulika_maandi(&session, jd, normalized.tz_offset_hours, &birth.location)?;

        let moon = &placements[Planet::Moon.index() as usize];
        let lord_from_lagna = ascendant.sign.advance(8).lord();
        let lord_from_moon = moon.sign.advance(8).lord();
        let indu_lagna_deg = indu_lagna(lord_from_lagna, lord_from_moon, moon.longitude_deg);

        Ok(D1Chart {
            birth: ResolvedBirth::new(birth, &normalized),
            jd_ut: jd,
            scheme: birth.scheme,
            ayanamsha_deg: session.ayanamsha_deg(jd),
            ascendant,
            houses,
            placements,
            gulika_deg,
            maandi_deg,
            indu_lagna_deg,
        })
    }

    fn ascendant(&self, session: &SchemeSession<'_>, jd: f64, location: &GeoPoint) -> Ascendant {
        let tropical = ascendant_tropical_deg(jd, location);
        let longitude_deg = session.to_sidereal(tropical, jd);
        let (sign, degree_in_sign) = sign_from_longitude(longitude_deg);
        Ascendant {
            longitude_deg,
            sign,
            degree_in_sign,
            pada: pada_position(longitude_deg),
        }
    }

    fn place_grahas(
        &self,
        session: &SchemeSession<'_>,
        jd: f64,
        asc_sign: Sign,
    ) -> Result<[Placement; 9], ChartError> {
        let rahu = self.eph.position(jd, Body::MeanNode)?;
        let rahu_sid = session.to_sidereal(rahu.longitude_deg, jd);

        let mut out = [placement_of(
            Planet::Sun,
            0.0,
            false,
            asc_sign,
        ); 9];
        for planet in ALL_PLANETS {
            let (lon, retrograde) = match planet {
                Planet::Rahu => (rahu_sid, false),
                Planet::Ketu => (normalize_360(rahu_sid + 180.0), false),
                _ => {
                    let pos = self.eph.position(jd, body_of(planet))?;
                    (
                        session.to_sidereal(pos.longitude_deg, jd),
                        pos.speed_deg_per_day < 0.0,
                    )
                }
            };
            out[planet.index() as usize] = placement_of(planet, lon, retrograde, asc_sign);
        }
        Ok(out)
    }

    /// Gulika and Maandi longitudes: the ascendant at the bounds of
    /// Rahu's portion of the day or night.
    fn gulika_maandi(
        &self,
        session: &SchemeSession<'_>,
        jd: f64,
        tz_offset_hours: f64,
        location: &GeoPoint,
    ) -> Result<(f64, f64), ChartError> {
        // Local midnight of the birth day, expressed in UT.
        let jd_local = jd + tz_offset_hours / 24.0;
        let day_start_local = (jd_local + 0.5).floor() - 0.5;
        let midnight_ut = day_start_local - tz_offset_hours / 24.0;
        let weekday = weekday_utc(day_start_local);

        let sunrise = self
            .rise_or_fallback(midnight_ut, location, RiseSetEvent::Rise)?
            .unwrap_or(midnight_ut + SUNRISE_FALLBACK_DAYS);
        let sunset = self
            .rise_or_fallback(midnight_ut, location, RiseSetEvent::Set)?
            .unwrap_or(midnight_ut + SUNSET_FALLBACK_DAYS);
        let next_sunrise = self
            .rise_or_fallback(midnight_ut + 1.0, location, RiseSetEvent::Rise)?
            .unwrap_or(midnight_ut + 1.0 + SUNRISE_FALLBACK_DAYS);

        let is_day = jd >= sunrise && jd < sunset;
        let (gulika_jd, maandi_jd) =
            gulika_maandi_jd(weekday, is_day, sunrise, sunset, next_sunrise);

        let gulika = session.to_sidereal(ascendant_tropical_deg(gulika_jd, location), gulika_jd);
        let maandi = session.to_sidereal(ascendant_tropical_deg(maandi_jd, location), maandi_jd);
        Ok((gulika, maandi))
    }

    fn rise_or_fallback(
        &self,
        midnight_ut: f64,
        location: &GeoPoint,
        event: RiseSetEvent,
    ) -> Result<Option<f64>, ChartError> {
        Ok(self.eph.rise_transit(midnight_ut, Body::Sun, location, event)?)
    }
}

fn placement_of(planet: Planet, longitude_deg: f64, retrograde: bool, asc_sign: Sign) -> Placement {
    let (sign, degree_in_sign) = sign_from_longitude(longitude_deg);
    Placement {
        planet,
        longitude_deg,
        sign,
        degree_in_sign,
        pada: pada_position(longitude_deg),
        dignity: planet.dignity_in(sign),
        retrograde,
        house: (sign.index() + 12 - asc_sign.index()) % 12 + 1,
    }
}

fn body_of(planet: Planet) -> Body {
    match planet {
        Planet::Sun => Body::Sun,
        Planet::Moon => Body::Moon,
        Planet::Mercury => Body::Mercury,
        Planet::Venus => Body::Venus,
        Planet::Mars => Body::Mars,
        Planet::Jupiter => Body::Jupiter,
        Planet::Saturn => Body::Saturn,
        Planet::Rahu | Planet::Ketu => Body::MeanNode,
    }
}

/// Whole-sign houses from the ascendant sign.
pub fn whole_sign_houses(asc_sign: Sign) -> [Sign; 12] {
    let mut houses = [asc_sign; 12];
    for (i, h) in houses.iter_mut().enumerate() {
        *h = asc_sign.advance(i as u8);
    }
    houses
}
