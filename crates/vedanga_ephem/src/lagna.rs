//! Ascendant (lagna) computation.
//!
//! Standard spherical astronomy formula (Meeus Ch. 13) from local
//! sidereal time, observer latitude, and the obliquity of date.

use std::f64::consts::TAU;

use vedanga_time::{GeoPoint, gmst_rad, local_sidereal_time_rad};

use crate::theory::{centuries, obliquity_deg};

/// Tropical ecliptic longitude of the ascendant, degrees [0, 360).
///
/// `Asc = atan2(cos(LST), -(sin(LST)·cos(ε) + tan(φ)·sin(ε)))`
///
/// The sign pattern selects the rising intersection of the ecliptic and
/// the horizon; negating both arguments would give the setting point.
pub fn ascendant_tropical_deg(jd_ut: f64, location: &GeoPoint) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_ut), location.longitude_rad());
    let eps = obliquity_deg(centuries(jd_ut)).to_radians();
    let phi = location.latitude_rad();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    asc.rem_euclid(TAU).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_circle_over_a_day() {
        // The ascendant sweeps the whole zodiac in one sidereal day.
        let loc = GeoPoint::new(28.6, 77.2).unwrap();
        let base = 2_451_545.0;
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for i in 0..96 {
            let asc = ascendant_tropical_deg(base + i as f64 / 96.0, &loc);
            min = min.min(asc);
            max = max.max(asc);
        }
        assert!(min < 5.0, "min asc = {min}");
        assert!(max > 355.0, "max asc = {max}");
    }

    #[test]
    fn monotonic_over_short_spans() {
        let loc = GeoPoint::new(10.0, 0.0).unwrap();
        let base = 2_460_000.5;
        let a0 = ascendant_tropical_deg(base, &loc);
        let a1 = ascendant_tropical_deg(base + 0.01, &loc);
        let forward = (a1 - a0).rem_euclid(360.0);
        assert!(forward > 0.0 && forward < 15.0, "advance = {forward}");
    }

    #[test]
    fn in_range_various_latitudes() {
        for lat in [-60.0, -28.0, 0.0, 28.6, 55.7] {
            let loc = GeoPoint::new(lat, 77.0).unwrap();
            let asc = ascendant_tropical_deg(2_451_545.25, &loc);
            assert!((0.0..360.0).contains(&asc), "lat {lat}: {asc}");
        }
    }

    #[test]
    fn rises_with_the_sun_at_equinox_sunrise() {
        // 2024-Mar-20 06:00 UT on the equator at Greenwich: the Sun is
        // within hours of the equinox (lon ~0°) and just rising, so the
        // rising point must sit near the Sun. The setting point would be
        // 180° away.
        let loc = GeoPoint::new(0.0, 0.0).unwrap();
        let jd = 2_460_389.75;
        let asc = ascendant_tropical_deg(jd, &loc);
        let sun = crate::theory::sun_longitude_deg(jd);
        let sep = (asc - sun).rem_euclid(360.0);
        let sep = sep.min(360.0 - sep);
        assert!(sep < 5.0, "asc {asc} vs sun {sun}, separation {sep}");
    }

    #[test]
    fn known_rising_longitude() {
        // 1980-Apr-02 09:25 UT at 29.1492 N 75.7217 E (LST ≈ 47.85°):
        // the rising point is tropical 143.355°.
        let loc = GeoPoint::new(29.1492, 75.7217).unwrap();
        let asc = ascendant_tropical_deg(2_444_331.892_361, &loc);
        assert!((asc - 143.355).abs() < 0.01, "asc = {asc}");
    }
}
