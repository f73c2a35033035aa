//! Error types for civil time and location parsing.

use thiserror::Error;

/// Errors from date/time/timezone parsing or location validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is malformed or names an impossible calendar day.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Time string is malformed or out of range.
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Timezone string is neither a UTC offset nor a configured name.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    /// No timezone was supplied and the location is outside the IST
    /// inference box.
    #[error("timezone required for location ({lat}, {lon})")]
    TimezoneRequired { lat: f64, lon: f64 },

    /// Latitude outside [-90, 90].
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180].
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}
