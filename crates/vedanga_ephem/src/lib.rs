//! Ephemeris adapter and built-in analytic theory.
//!
//! The [`Ephemeris`] trait is the seam between astronomy and astrology:
//! it answers "where is this body at this Julian Date" in tropical
//! coordinates, plus rise/set times for Sun and Moon. [`MeanEphemeris`]
//! implements it with truncated analytic series (Meeus-grade accuracy,
//! sufficient for sign and nakshatra placement).
//!
//! Sidereal conversion goes through a [`SchemeSession`], a typed handle
//! that pins one ayanamsha scheme for the duration of a logical request.

pub mod ayanamsha;
pub mod body;
pub mod ephemeris;
pub mod error;
pub mod lagna;
pub mod riseset;
pub mod session;
pub mod theory;

pub use ayanamsha::{AyanamshaScheme, ayanamsha_deg};
pub use body::Body;
pub use ephemeris::{BodyPosition, Ephemeris, MeanEphemeris, RiseSetEvent};
pub use error::EphemError;
pub use lagna::ascendant_tropical_deg;
pub use session::{SchemeLock, SchemeSession};

/// Supported Julian Date range: 1800-Jan-01 through 2200-Jan-01.
pub const JD_MIN: f64 = 2_378_496.5;
pub const JD_MAX: f64 = 2_524_593.5;

/// Check a Julian Date against the supported range.
pub fn check_jd_range(jd: f64) -> Result<(), EphemError> {
    if (JD_MIN..=JD_MAX).contains(&jd) {
        Ok(())
    } else {
        Err(EphemError::OutOfRange { jd })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_range_bounds() {
        assert!(check_jd_range(2_451_545.0).is_ok());
        assert!(check_jd_range(JD_MIN).is_ok());
        assert!(check_jd_range(JD_MAX).is_ok());
        assert!(check_jd_range(JD_MIN - 1.0).is_err());
        assert!(check_jd_range(JD_MAX + 1.0).is_err());
    }
}
