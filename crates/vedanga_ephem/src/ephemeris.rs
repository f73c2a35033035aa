//! The ephemeris adapter trait and its built-in implementation.

use vedanga_time::GeoPoint;

use crate::body::Body;
use crate::error::EphemError;
use crate::riseset;
use crate::{check_jd_range, theory};

/// Step used for finite-difference speed, days.
const SPEED_STEP_DAYS: f64 = 0.5;

/// A body's instantaneous tropical position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Tropical ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Longitude rate, degrees per day. Negative = retrograde.
    pub speed_deg_per_day: f64,
}

/// Horizon event selector for rise/set queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiseSetEvent {
    Rise,
    Set,
}

/// The astronomy seam.
///
/// Implementations are deterministic: the same `(jd, body)` always yields
/// the same position. Longitudes are tropical; sidereal conversion happens
/// in the session layer.
pub trait Ephemeris: Send + Sync {
    /// Tropical longitude and speed at a UT Julian Date.
    fn position(&self, jd: f64, body: Body) -> Result<BodyPosition, EphemError>;

    /// Rise or set time near the given civil day, as a UT Julian Date.
    ///
    /// `jd_midnight` is local midnight of the target day in UT.
    /// Returns `None` for polar no-event days.
    fn rise_transit(
        &self,
        jd_midnight: f64,
        body: Body,
        location: &GeoPoint,
        event: RiseSetEvent,
    ) -> Result<Option<f64>, EphemError>;
}

/// Built-in analytic ephemeris.
///
/// Stateless; a single instance can serve concurrent requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanEphemeris;

impl MeanEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl Ephemeris for MeanEphemeris {
    fn position(&self, jd: f64, body: Body) -> Result<BodyPosition, EphemError> {
        check_jd_range(jd)?;

        let longitude_deg = theory::body_longitude_deg(jd, body);
        let before = theory::body_longitude_deg(jd - SPEED_STEP_DAYS, body);
        let after = theory::body_longitude_deg(jd + SPEED_STEP_DAYS, body);

        // Symmetric difference with wrap handling.
        let mut delta = (after - before).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        let speed_deg_per_day = delta / (2.0 * SPEED_STEP_DAYS);

        Ok(BodyPosition {
            longitude_deg,
            speed_deg_per_day,
        })
    }

    fn rise_transit(
        &self,
        jd_midnight: f64,
        body: Body,
        location: &GeoPoint,
        event: RiseSetEvent,
    ) -> Result<Option<f64>, EphemError> {
        check_jd_range(jd_midnight)?;
        if !body.has_rise_set() {
            return Err(EphemError::Unavailable {
                body,
                jd: jd_midnight,
                reason: "rise/set is only defined for Sun and Moon",
            });
        }
        Ok(riseset::compute_rise_set(jd_midnight, body, location, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;

    #[test]
    fn positions_in_range() {
        let eph = MeanEphemeris::new();
        for body in ALL_BODIES {
            let p = eph.position(2_451_545.0, body).unwrap();
            assert!(
                (0.0..360.0).contains(&p.longitude_deg),
                "{body:?}: {}",
                p.longitude_deg
            );
        }
    }

    #[test]
    fn sun_speed_about_one_degree() {
        let eph = MeanEphemeris::new();
        let p = eph.position(2_451_545.0, Body::Sun).unwrap();
        assert!(
            (p.speed_deg_per_day - 1.0).abs() < 0.05,
            "sun speed = {}",
            p.speed_deg_per_day
        );
    }

    #[test]
    fn moon_speed_about_thirteen() {
        let eph = MeanEphemeris::new();
        let p = eph.position(2_451_545.0, Body::Moon).unwrap();
        assert!(
            (p.speed_deg_per_day - 13.0).abs() < 2.0,
            "moon speed = {}",
            p.speed_deg_per_day
        );
    }

    #[test]
    fn node_always_retrograde() {
        let eph = MeanEphemeris::new();
        for &jd in &[2_430_000.5, 2_451_545.0, 2_466_154.5] {
            let p = eph.position(jd, Body::MeanNode).unwrap();
            assert!(p.speed_deg_per_day < 0.0, "node speed at {jd}");
        }
    }

    #[test]
    fn out_of_range_rejected() {
        let eph = MeanEphemeris::new();
        assert!(matches!(
            eph.position(1_000_000.0, Body::Sun),
            Err(EphemError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rise_set_rejects_planets() {
        let eph = MeanEphemeris::new();
        let loc = GeoPoint::new(28.6, 77.2).unwrap();
        assert!(
            eph.rise_transit(2_451_545.0, Body::Mars, &loc, RiseSetEvent::Rise)
                .is_err()
        );
    }

    #[test]
    fn deterministic() {
        let eph = MeanEphemeris::new();
        let a = eph.position(2_460_000.5, Body::Jupiter).unwrap();
        let b = eph.position(2_460_000.5, Body::Jupiter).unwrap();
        assert_eq!(a, b);
    }
}
