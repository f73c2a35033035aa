//! Rise/set solver for Sun and Moon.
//!
//! Iterative hour-angle refinement on the standard spherical astronomy
//! formula. The target altitude absorbs refraction and semidiameter:
//! −0.8333° for the Sun's upper limb, +0.125° for the Moon (mean
//! parallax minus refraction and semidiameter).

use std::f64::consts::{PI, TAU};

use vedanga_time::{GeoPoint, gmst_rad, local_sidereal_time_rad};

use crate::body::Body;
use crate::ephemeris::RiseSetEvent;
use crate::theory;

const MAX_ITERATIONS: usize = 6;

/// Convergence threshold, days (~0.09 s).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Sidereal rate, rad/day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Standard rise/set altitude for a body, degrees.
fn target_altitude_deg(body: Body) -> f64 {
    match body {
        Body::Sun => -0.8333,
        Body::Moon => 0.125,
        _ => 0.0,
    }
}

/// Equatorial RA/Dec (radians) of a body from its ecliptic position.
fn equatorial_ra_dec(jd: f64, body: Body) -> (f64, f64) {
    let lon = theory::body_longitude_deg(jd, body).to_radians();
    let lat = match body {
        Body::Moon => theory::moon_latitude_deg(jd).to_radians(),
        _ => 0.0,
    };
    let eps = theory::obliquity_deg(theory::centuries(jd)).to_radians();

    let ra = f64::atan2(
        lon.sin() * eps.cos() - lat.tan() * eps.sin(),
        lon.cos(),
    )
    .rem_euclid(TAU);
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();
    (ra, dec)
}

/// Compute a rise or set event near the given local day.
///
/// `jd_midnight` is the local midnight in UT. Returns `None` when the body
/// never crosses the target altitude (polar day/night).
pub fn compute_rise_set(
    jd_midnight: f64,
    body: Body,
    location: &GeoPoint,
    event: RiseSetEvent,
) -> Option<f64> {
    let phi = location.latitude_rad();
    let h0 = target_altitude_deg(body).to_radians();

    // Approximate local noon as the starting estimate.
    let jd_noon = jd_midnight + 0.5;
    let (ra, dec) = equatorial_ra_dec(jd_noon, body);

    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    let hour_angle = cos_h.acos();

    // Transit correction: bring the body onto the meridian.
    let gmst = gmst_rad(jd_noon);
    let lst = local_sidereal_time_rad(gmst, location.longitude_rad());
    let mut ha_now = (lst - ra).rem_euclid(TAU);
    if ha_now > PI {
        ha_now -= TAU;
    }
    let jd_transit = jd_noon - ha_now / SIDEREAL_RATE;

    let offset = hour_angle / SIDEREAL_RATE;
    let mut jd_event = match event {
        RiseSetEvent::Rise => jd_transit - offset,
        RiseSetEvent::Set => jd_transit + offset,
    };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i) = equatorial_ra_dec(jd_event, body);

        let cos_h_i = (h0.sin() - phi.sin() * dec_i.sin()) / (phi.cos() * dec_i.cos());
        if !(-1.0..=1.0).contains(&cos_h_i) {
            return None;
        }
        let h_target = match event {
            RiseSetEvent::Rise => -cos_h_i.acos(),
            RiseSetEvent::Set => cos_h_i.acos(),
        };

        let gmst_i = gmst_rad(jd_event);
        let lst_i = local_sidereal_time_rad(gmst_i, location.longitude_rad());
        let mut ha_actual = (lst_i - ra_i).rem_euclid(TAU);
        if ha_actual > PI {
            ha_actual -= TAU;
        }

        let mut dha = h_target - ha_actual;
        if dha > PI {
            dha -= TAU;
        } else if dha < -PI {
            dha += TAU;
        }
        let correction = dha / SIDEREAL_RATE;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Some(jd_event)
}
