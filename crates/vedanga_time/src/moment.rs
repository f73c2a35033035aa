//! Civil birth moment parsing and normalization.
//!
//! A birth moment arrives as strings ("1980-04-02", "14:55", "UTC+05:30"
//! or a configured timezone name) plus coordinates. `normalize` folds all
//! of that into a single UT Julian Date. When no timezone is given and the
//! location falls inside the Indian bounding box, IST (+05:30) is assumed
//! and the result carries an `ist_inferred` flag.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// IST offset assumed when inference fires.
pub const IST_OFFSET_HOURS: f64 = 5.5;

/// Indian bounding box for IST inference: lat ∈ [6, 37], lon ∈ [68, 97].
const IST_LAT: (f64, f64) = (6.0, 37.0);
const IST_LON: (f64, f64) = (68.0, 97.0);

/// A wall-clock calendar moment, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CivilMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

impl std::fmt::Display for CivilMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Geographic location in degrees. No altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPoint {
    /// Validate and construct a location.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Result<Self, TimeError> {
        if !(-90.0..=90.0).contains(&lat_deg) {
            return Err(TimeError::LatitudeOutOfRange(lat_deg));
        }
        if !(-180.0..=180.0).contains(&lon_deg) {
            return Err(TimeError::LongitudeOutOfRange(lon_deg));
        }
        Ok(Self { lat_deg, lon_deg })
    }

    pub fn latitude_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }
}

/// A civil moment resolved to UT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedMoment {
    /// UT Julian Date.
    pub jd_ut: f64,
    /// Offset actually applied, in hours east of UTC.
    pub tz_offset_hours: f64,
    /// True when the offset came from IST bounding-box inference.
    pub ist_inferred: bool,
}

/// Whether a location lies inside the IST inference box.
pub fn in_indian_bbox(location: &GeoPoint) -> bool {
    (IST_LAT.0..=IST_LAT.1).contains(&location.lat_deg)
        && (IST_LON.0..=IST_LON.1).contains(&location.lon_deg)
}

/// Parse "YYYY-MM-DD". Rejects impossible calendar days.
pub fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))?;
    use chrono::Datelike;
    Ok((date.year(), date.month(), date.day()))
}

/// Parse "HH:MM" (24-hour).
pub fn parse_time(s: &str) -> Result<(u32, u32), TimeError> {
    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| TimeError::InvalidTime(s.to_string()))?;
    Ok((time.hour(), time.minute()))
}

/// Configurable timezone name table.
///
/// Offset strings ("UTC+05:30", "UTC-7") are always recognized; this table
/// only supplies the IANA-style names the deployment chooses to accept.
#[derive(Debug, Clone)]
pub struct TzTable {
    aliases: Vec<(String, f64)>,
}

impl Default for TzTable {
    fn default() -> Self {
        Self {
            aliases: vec![
                ("UTC".to_string(), 0.0),
                ("Asia/Kolkata".to_string(), IST_OFFSET_HOURS),
                ("Asia/Calcutta".to_string(), IST_OFFSET_HOURS),
            ],
        }
    }
}

impl TzTable {
    /// Register or replace a named offset.
    pub fn insert(&mut self, name: &str, offset_hours: f64) {
        if let Some(slot) = self.aliases.iter_mut().find(|(n, _)| n == name) {
            slot.1 = offset_hours;
        } else {
            self.aliases.push((name.to_string(), offset_hours));
        }
    }

    /// Resolve a timezone string to an offset in hours east of UTC.
    ///
    /// Accepts "UTC±HH:MM", "UTC±H", or a name present in the table.
    pub fn resolve(&self, tz: &str) -> Result<f64, TimeError> {
        let tz = tz.trim();
        if let Some(rest) = tz.strip_prefix("UTC") {
            if rest.is_empty() {
                return Ok(0.0);
            }
            return parse_utc_offset(rest).ok_or_else(|| TimeError::UnknownTimezone(tz.to_string()));
        }
        self.aliases
            .iter()
            .find(|(n, _)| n == tz)
            .map(|(_, o)| *o)
            .ok_or_else(|| TimeError::UnknownTimezone(tz.to_string()))
    }
}

/// Parse "±HH:MM" or "±H" into hours. Rejects offsets beyond ±14h.
fn parse_utc_offset(s: &str) -> Option<f64> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => return None,
    };
    let (h, m) = match rest.split_once(':') {
        Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        None => (rest.parse::<u32>().ok()?, 0),
    };
    if h > 14 || m >= 60 {
        return None;
    }
    Some(sign * (h as f64 + m as f64 / 60.0))
}

/// Resolve a civil moment + location to a UT Julian Date.
///
/// `tz_offset_hours` is the already-resolved offset, or `None` to attempt
/// IST inference from the location.
pub fn normalize(
    moment: &CivilMoment,
    tz_offset_hours: Option<f64>,
    location: &GeoPoint,
) -> Result<NormalizedMoment, TimeError> {
    // Re-validate the calendar day (the moment may have been built directly).
    NaiveDate::from_ymd_opt(moment.year, moment.month, moment.day)
        .ok_or_else(|| TimeError::InvalidDate(moment.to_string()))?;
    if moment.hour > 23 || moment.minute > 59 {
        return Err(TimeError::InvalidTime(moment.to_string()));
    }

    let (offset, ist_inferred) = match tz_offset_hours {
        Some(o) => (o, false),
        None if in_indian_bbox(location) => (IST_OFFSET_HOURS, true),
        None => {
            return Err(TimeError::TimezoneRequired {
                lat: location.lat_deg,
                lon: location.lon_deg,
            });
        }
    };

    let day_frac = moment.day as f64 + moment.hour as f64 / 24.0 + moment.minute as f64 / 1440.0;
    let jd_local = calendar_to_jd(moment.year, moment.month, day_frac);
    let jd_ut = jd_local - offset / 24.0;

    Ok(NormalizedMoment {
        jd_ut,
        tz_offset_hours: offset,
        ist_inferred,
    })
}

/// Render a UT Julian Date as a local civil moment (minute resolution).
pub fn jd_to_civil(jd_ut: f64, tz_offset_hours: f64) -> CivilMoment {
    // Round to the nearest minute before splitting the day fraction, so
    // 23:59:59.7 renders as the next day rather than 23:60.
    let jd_local = jd_ut + tz_offset_hours / 24.0;
    let minutes = (jd_local * 1440.0).round();
    let jd_rounded = minutes / 1440.0;

    let (year, month, day_frac) = jd_to_calendar(jd_rounded);
    let day = day_frac.floor() as u32;
    let frac = day_frac - day as f64;
    let total_minutes = (frac * 1440.0).round() as u32;
    let hour = (total_minutes / 60).min(23);
    let minute = total_minutes % 60;

    CivilMoment {
        year,
        month,
        day,
        hour,
        minute,
    }
}
