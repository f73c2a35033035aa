//! Panchang solver: tithi, lunar month, and Choghadiya for a civil day.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use vedanga_ephem::{AyanamshaScheme, Body, Ephemeris, RiseSetEvent, SchemeLock};
use vedanga_time::{CivilMoment, GeoPoint, jd_to_civil, normalize, weekday_utc};
use vedanga_vedic::VedicError;
use vedanga_vedic::sign::{Sign, sign_from_longitude};
use vedanga_vedic::util::normalize_360;

use crate::error::ScanError;

/// Mean synodic month, days.
const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Mean elongation rate, degrees per day.
const MEAN_ELONGATION_RATE: f64 = 360.0 / SYNODIC_MONTH_DAYS;

/// Tithi-end search horizon: 48 hours at minute resolution.
const TITHI_SEARCH_MINUTES: u32 = 48 * 60;

/// Rise/set fallbacks from local midnight when the solver has no event.
const RISE_FALLBACK_DAYS: f64 = 0.25;
const SET_FALLBACK_DAYS: f64 = 0.75;

// ---------------------------------------------------------------------------
// Tithi
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    /// 1..=30 across both pakshas.
    pub tithi: u8,
    /// 1..=15 within the paksha.
    pub lunar_day: u8,
    pub paksha: Paksha,
}

/// Moon-Sun elongation, degrees [0, 360). Tropical positions suffice:
/// the ayanamsha cancels in the difference.
fn elongation(eph: &dyn Ephemeris, jd: f64) -> Result<f64, ScanError> {
    let moon = eph.position(jd, Body::Moon)?.longitude_deg;
    let sun = eph.position(jd, Body::Sun)?.longitude_deg;
    Ok(normalize_360(moon - sun))
}

/// Tithi for a given elongation, degrees.
fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let e = normalize_360(elongation_deg);
    let tithi = ((e / 12.0) as u8).min(29) + 1;
    let (lunar_day, paksha) = if tithi <= 15 {
        (tithi, Paksha::Shukla)
    } else {
        (tithi - 15, Paksha::Krishna)
    };
    TithiInfo {
        tithi,
        lunar_day,
        paksha,
    }
}

/// Tithi running at an instant.
pub fn tithi_at(eph: &dyn Ephemeris, jd: f64) -> Result<TithiInfo, ScanError> {
    Ok(tithi_from_elongation(elongation(eph, jd)?))
}

/// First instant after `jd` at which the tithi number changes, found by
/// minute steps over at most 48 hours.
pub fn tithi_end_jd(
    eph: &dyn Ephemeris,
    jd: f64,
    deadline: Option<Instant>,
) -> Result<f64, ScanError> {
    let start = tithi_at(eph, jd)?.tithi;
    for minute in 1..=TITHI_SEARCH_MINUTES {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(ScanError::Truncated {
                reason: format!("deadline hit {minute} minutes into the tithi search"),
                partial: Vec::new(),
            });
        }
        let t = jd + minute as f64 / 1440.0;
        if tithi_at(eph, t)?.tithi != start {
            return Ok(t);
        }
    }
    // A tithi spans at most ~26.8 hours; running past 48 means the
    // elongation model is broken.
    Err(VedicError::IntegrityViolation("tithi did not change within 48 hours".into()).into())
}

// ---------------------------------------------------------------------------
// Lunar month
// ---------------------------------------------------------------------------

/// Month names keyed by the Sun's sidereal sign at the opening
/// Amavasya (Aries first).
const MASA_NAMES: [&str; 12] = [
    "Vaishakha",
    "Jyeshtha",
    "Ashadha",
    "Shravana",
    "Bhadrapada",
    "Ashwin",
    "Kartik",
    "Margashirsha",
    "Pausha",
    "Magha",
    "Phalguna",
    "Chaitra",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthConvention {
    /// Months run Amavasya to Amavasya.
    Amanta,
    /// Krishna-paksha days carry the next month's name.
    Purnimanta,
}

#[derive(Debug, Clone, Serialize)]
pub struct MasaInfo {
    pub name: &'static str,
    /// Intercalary month: the next Amavasya finds the Sun still in the
    /// same sign.
    pub adhika: bool,
    pub convention: MonthConvention,
}

impl MasaInfo {
    pub fn display_name(&self) -> String {
        if self.adhika {
            format!("Adhika {}", self.name)
        } else {
            self.name.to_string()
        }
    }
}

/// Amavasya (elongation zero) at or before `jd`.
fn preceding_amavasya(eph: &dyn Ephemeris, jd: f64) -> Result<f64, ScanError> {
    let mut t = jd - elongation(eph, jd)? / MEAN_ELONGATION_RATE;
    for _ in 0..7 {
        let mut e = elongation(eph, t)?;
        if e > 180.0 {
            e -= 360.0;
        }
        let step = e / MEAN_ELONGATION_RATE;
        t -= step;
        if step.abs() < 1e-7 {
            break;
        }
    }
    // Guard the "at or before" contract against one-sided convergence.
    if t > jd + 1e-4 {
        t -= SYNODIC_MONTH_DAYS;
    }
    Ok(t)
}

/// Resolve the lunar month containing `jd`.
pub fn masa_at(
    eph: &dyn Ephemeris,
    lock: &SchemeLock,
    scheme: AyanamshaScheme,
    jd: f64,
    convention: MonthConvention,
) -> Result<MasaInfo, ScanError> {
    let prev = preceding_amavasya(eph, jd)?;
    let next = preceding_amavasya(eph, prev + SYNODIC_MONTH_DAYS + 2.0)?;

    let session = lock.acquire(scheme);
    let sun_prev = sun_sign(eph, &session, prev)?;
    let sun_next = sun_sign(eph, &session, next)?;
    drop(session);

    let adhika = sun_prev == sun_next;
    let mut index = sun_prev.index() as usize;
    if convention == MonthConvention::Purnimanta && tithi_at(eph, jd)?.paksha == Paksha::Krishna {
        index = (index + 1) % 12;
    }

    debug!(
        masa = MASA_NAMES[index],
        adhika, "lunar month resolved"
    );
    Ok(MasaInfo {
        name: MASA_NAMES[index],
        adhika,
        convention,
    })
}

fn sun_sign(
    eph: &dyn Ephemeris,
    session: &vedanga_ephem::SchemeSession<'_>,
    jd: f64,
) -> Result<Sign, ScanError> {
    let lon = session.sidereal_longitude(eph, jd, Body::Sun)?;
    Ok(sign_from_longitude(lon).0)
}

// ---------------------------------------------------------------------------
// Choghadiya
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Choghadiya {
    Udveg,
    Chara,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Chara => "Chara",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::Chara | Self::Labh | Self::Amrit | Self::Shubh)
    }
}

const CHOGHADIYA_ORDER: [Choghadiya; 7] = [
    Choghadiya::Udveg,
    Choghadiya::Chara,
    Choghadiya::Labh,
    Choghadiya::Amrit,
    Choghadiya::Kaal,
    Choghadiya::Shubh,
    Choghadiya::Rog,
];

// First slot of the day/night sequence per weekday (0 = Sunday).
const DAY_FIRST: [usize; 7] = [0, 3, 6, 2, 5, 1, 4];
const NIGHT_FIRST: [usize; 7] = [5, 1, 4, 0, 3, 6, 2];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChoghadiyaSlot {
    pub label: Choghadiya,
    pub start_jd: f64,
    pub end_jd: f64,
    pub is_day: bool,
}

/// The 8 day + 8 night slots for a civil day.
pub fn choghadiya_slots(
    weekday: u8,
    sunrise_jd: f64,
    sunset_jd: f64,
    next_sunrise_jd: f64,
) -> [ChoghadiyaSlot; 16] {
    let mut slots = [ChoghadiyaSlot {
        label: Choghadiya::Udveg,
        start_jd: 0.0,
        end_jd: 0.0,
        is_day: true,
    }; 16];

    let day_width = (sunset_jd - sunrise_jd) / 8.0;
    let night_width = (next_sunrise_jd - sunset_jd) / 8.0;
    let day_first = DAY_FIRST[(weekday % 7) as usize];
    let night_first = NIGHT_FIRST[(weekday % 7) as usize];

    for k in 0..8 {
        let start = sunrise_jd + k as f64 * day_width;
        slots[k] = ChoghadiyaSlot {
            label: CHOGHADIYA_ORDER[(day_first + k) % 7],
            start_jd: start,
            end_jd: start + day_width,
            is_day: true,
        };
        let start = sunset_jd + k as f64 * night_width;
        slots[8 + k] = ChoghadiyaSlot {
            label: CHOGHADIYA_ORDER[(night_first + k) % 7],
            start_jd: start,
            end_jd: start + night_width,
            is_day: false,
        };
    }
    slots
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct PanchangQuery {
    /// The civil date; hour and minute are ignored.
    pub date: CivilMoment,
    pub location: GeoPoint,
    pub tz_offset_hours: Option<f64>,
    pub scheme: AyanamshaScheme,
    pub convention: MonthConvention,
}

#[derive(Debug, Clone, Serialize)]
pub struct Panchang {
    pub sunrise_jd: f64,
    pub sunset_jd: f64,
    pub moonrise_jd: f64,
    /// True when a fallback stood in for a missing rise/set event.
    pub rise_fallback_used: bool,
    /// Tithi running at sunrise.
    pub tithi: TithiInfo,
    /// Local wall-clock end of that tithi.
    pub tithi_ends_at: CivilMoment,
    pub masa: MasaInfo,
    /// 0 = Sunday.
    pub weekday: u8,
    pub choghadiya: Vec<ChoghadiyaSlot>,
}

pub struct PanchangSolver<'a> {
    eph: &'a dyn Ephemeris,
    lock: &'a SchemeLock,
}

impl<'a> PanchangSolver<'a> {
    pub fn new(eph: &'a dyn Ephemeris, lock: &'a SchemeLock) -> Self {
        Self { eph, lock }
    }

    pub fn solve(&self, query: &PanchangQuery) -> Result<Panchang, ScanError> {
        let midnight_local = CivilMoment::new(
            query.date.year,
            query.date.month,
            query.date.day,
            0,
            0,
        );
        let normalized = normalize(&midnight_local, query.tz_offset_hours, &query.location)
            .map_err(|e| ScanError::InvalidInput(e.to_string()))?;
        let midnight_ut = normalized.jd_ut;
        let tz = normalized.tz_offset_hours;
        let weekday = weekday_utc(midnight_ut + tz / 24.0);

        let mut fallback = false;
        let sunrise = self
            .rise(midnight_ut, &query.location, Body::Sun, RiseSetEvent::Rise)?
            .unwrap_or_else(|| {
                fallback = true;
                midnight_ut + RISE_FALLBACK_DAYS
            });
        let sunset = self
            .rise(midnight_ut, &query.location, Body::Sun, RiseSetEvent::Set)?
            .unwrap_or_else(|| {
                fallback = true;
                midnight_ut + SET_FALLBACK_DAYS
            });
        let next_sunrise = self
            .rise(midnight_ut + 1.0, &query.location, Body::Sun, RiseSetEvent::Rise)?
            .unwrap_or_else(|| {
                fallback = true;
                midnight_ut + 1.0 + RISE_FALLBACK_DAYS
            });
        let moonrise = self
            .rise(midnight_ut, &query.location, Body::Moon, RiseSetEvent::Rise)?
            .unwrap_or_else(|| {
                fallback = true;
                midnight_ut + RISE_FALLBACK_DAYS
            });

        let tithi = tithi_at(self.eph, sunrise)?;
        let tithi_end = tithi_end_jd(self.eph, sunrise, None)?;
        let masa = masa_at(self.eph, self.lock, query.scheme, sunrise, query.convention)?;

        Ok(Panchang {
            sunrise_jd: sunrise,
            sunset_jd: sunset,
            moonrise_jd: moonrise,
            rise_fallback_used: fallback,
            tithi,
            tithi_ends_at: jd_to_civil(tithi_end, tz),
            masa,
            weekday,
            choghadiya: choghadiya_slots(weekday, sunrise, sunset, next_sunrise).to_vec(),
        })
    }

    fn rise(
        &self,
        midnight_ut: f64,
        location: &GeoPoint,
        body: Body,
        event: RiseSetEvent,
    ) -> Result<Option<f64>, ScanError> {
        Ok(self.eph.rise_transit(midnight_ut, body, location, event)?)
    }
}
