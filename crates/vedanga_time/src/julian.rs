//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Standard algorithms from Meeus, "Astronomical Algorithms" (2nd ed),
//! Chapter 7. Valid for the Gregorian calendar (all dates this engine
//! accepts are well after 1582).

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day` may carry a fraction for the time of day.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to a Gregorian `(year, month, day_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    (year, month, day)
}

/// Weekday of a UT Julian Date, 0 = Sunday through 6 = Saturday.
pub fn weekday_utc(jd_ut: f64) -> u8 {
    // JD 0.0 was a Monday noon; shift so the day boundary is midnight.
    (((jd_ut + 1.5).floor() as i64).rem_euclid(7)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn mjd_epoch() {
        // 1858-Nov-17 00:00 is MJD 0 = JD 2400000.5
        let jd = calendar_to_jd(1858, 11, 17.0);
        assert!((jd - 2_400_000.5).abs() < 1e-9);
    }

    #[test]
    fn calendar_roundtrip() {
        for &jd in &[2_378_496.5, 2_451_545.0, 2_460_000.25, 2_524_593.5] {
            let (y, m, d) = jd_to_calendar(jd);
            let back = calendar_to_jd(y, m, d);
            assert!((back - jd).abs() < 1e-8, "roundtrip failed for {jd}");
        }
    }

    #[test]
    fn jd_to_calendar_known() {
        let (y, m, d) = jd_to_calendar(2_451_545.0);
        assert_eq!(y, 2000);
        assert_eq!(m, 1);
        assert!((d - 1.5).abs() < 1e-9);
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-Jan-01 was a Saturday
        assert_eq!(weekday_utc(calendar_to_jd(2000, 1, 1.0)), 6);
        // 2024-Mar-20 was a Wednesday
        assert_eq!(weekday_utc(calendar_to_jd(2024, 3, 20.0)), 3);
        // 1980-Apr-02 was a Wednesday
        assert_eq!(weekday_utc(calendar_to_jd(1980, 4, 2.0)), 3);
    }

    #[test]
    fn weekday_stable_within_day() {
        let jd0 = calendar_to_jd(2024, 3, 20.0);
        assert_eq!(weekday_utc(jd0), weekday_utc(jd0 + 0.9));
    }
}
