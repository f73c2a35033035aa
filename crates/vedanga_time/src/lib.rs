//! Civil time and location normalization.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - Parsing of civil date/time/timezone inputs
//! - IST inference for coordinates inside the Indian bounding box
//! - Greenwich Mean Sidereal Time for downstream horizon work
//!
//! Every birth moment is converted to a UT Julian Date exactly once;
//! downstream code only ever sees `jd: f64`.

pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar, weekday_utc};
pub use moment::{
    CivilMoment, GeoPoint, IST_OFFSET_HOURS, NormalizedMoment, TzTable, in_indian_bbox,
    jd_to_civil, normalize, parse_date, parse_time,
};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
