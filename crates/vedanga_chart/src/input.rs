//! Birth input shared by every chart consumer.

use serde::{Deserialize, Serialize};

use vedanga_ephem::AyanamshaScheme;
use vedanga_time::{CivilMoment, GeoPoint, NormalizedMoment, TimeError, normalize};

/// A birth: civil moment, place, and the sidereal scheme to chart it
/// under. The timezone offset may be omitted for Indian coordinates,
/// where IST is inferred.
#[derive(Debug, Clone, Copy)]
pub struct BirthMoment {
    pub moment: CivilMoment,
    pub tz_offset_hours: Option<f64>,
    pub location: GeoPoint,
    pub scheme: AyanamshaScheme,
}

impl BirthMoment {
    /// Resolve the civil moment to UT, inferring IST when allowed.
    pub fn normalize(&self) -> Result<NormalizedMoment, TimeError> {
        normalize(&self.moment, self.tz_offset_hours, &self.location)
    }
}

/// Echo of the resolved input carried on every chart for provenance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResolvedBirth {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub tz_offset_hours: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// True when the offset was inferred from Indian coordinates.
    pub ist_inferred: bool,
}

impl ResolvedBirth {
    pub fn new(birth: &BirthMoment, normalized: &NormalizedMoment) -> Self {
        Self {
            year: birth.moment.year,
            month: birth.moment.month,
            day: birth.moment.day,
            hour: birth.moment.hour,
            minute: birth.moment.minute,
            tz_offset_hours: normalized.tz_offset_hours,
            latitude: birth.location.lat_deg,
            longitude: birth.location.lon_deg,
            ist_inferred: normalized.ist_inferred,
        }
    }
}
