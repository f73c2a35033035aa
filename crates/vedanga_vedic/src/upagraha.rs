//! Gulika/Maandi portion timing and the Indu Lagna.
//!
//! Day and night each divide into 8 equal portions ruled by planets in
//! weekday order; Gulika rises at the start of Rahu's portion and
//! Maandi at its end. The chart layer evaluates the ascendant at the
//! returned instants.

use crate::planet::Planet;
use crate::util::normalize_360;

/// Portion-sequence slot of Rahu, after the seven weekday lords.
const PORTION_RAHU: u8 = 7;

/// Night-start slot for each weekday (0 = Sunday): the night sequence
/// begins from the planet four places past the day ruler.
const NIGHT_START: [u8; 7] = [4, 5, 6, 0, 1, 2, 3];

/// 0-based daytime portion index of a planet slot for a weekday.
pub fn day_portion_index(weekday: u8, slot: u8) -> u8 {
    ((slot as i8 - weekday as i8 + 8) % 8) as u8
}

/// 0-based nighttime portion index of a planet slot for a weekday.
pub fn night_portion_index(weekday: u8, slot: u8) -> u8 {
    let start = NIGHT_START[(weekday % 7) as usize];
    ((slot as i8 - start as i8 + 8) % 8) as u8
}

/// Start and end JD of the given eighth of [base_jd, end_jd].
pub fn portion_jd_range(portion_index: u8, base_jd: f64, end_jd: f64) -> (f64, f64) {
    let width = (end_jd - base_jd) / 8.0;
    let start = base_jd + portion_index as f64 * width;
    (start, start + width)
}

/// Instants bounding Rahu's portion for a birth: Gulika is the start,
/// Maandi the end.
///
/// For day births the portions span sunrise..sunset; for night births
/// sunset..next sunrise.
pub fn gulika_maandi_jd(
    weekday: u8,
    is_day: bool,
    sunrise_jd: f64,
    sunset_jd: f64,
    next_sunrise_jd: f64,
) -> (f64, f64) {
    let index = if is_day {
        day_portion_index(weekday, PORTION_RAHU)
    } else {
        night_portion_index(weekday, PORTION_RAHU)
    };
    let (base, end) = if is_day {
        (sunrise_jd, sunset_jd)
    } else {
        (sunset_jd, next_sunrise_jd)
    };
    portion_jd_range(index, base, end)
}

// ---------------------------------------------------------------------------
// Indu Lagna
// ---------------------------------------------------------------------------

/// Indu Lagna from the lords of the 9th houses counted from lagna and
/// from the Moon.
///
/// Sum both lords' kaksha rays, wrap mod 12 with a remainder of 0
/// reading as 12, and advance that many signs (less one) from the Moon.
pub fn indu_lagna(lord_from_lagna: Planet, lord_from_moon: Planet, moon_lon_deg: f64) -> f64 {
    let total = lord_from_lagna.kaksha_rays() as u32 + lord_from_moon.kaksha_rays() as u32;
    let remainder = match total % 12 {
        0 => 12,
        r => r,
    };
    normalize_360(moon_lon_deg + (remainder - 1) as f64 * 30.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_day_rahu_last() {
        assert_eq!(day_portion_index(0, PORTION_RAHU), 7);
    }

    #[test]
    fn weekday_day_rahu_slots() {
        // Sun=7, Mon=6, Tue=5, Wed=4, Thu=3, Fri=2, Sat=1.
        let expected = [7u8, 6, 5, 4, 3, 2, 1];
        for w in 0..7u8 {
            assert_eq!(day_portion_index(w, PORTION_RAHU), expected[w as usize]);
        }
    }

    #[test]
    fn weekday_night_rahu_slots() {
        let expected = [3u8, 2, 1, 7, 6, 5, 4];
        for w in 0..7u8 {
            assert_eq!(night_portion_index(w, PORTION_RAHU), expected[w as usize]);
        }
    }

    #[test]
    fn portion_ranges_tile_the_day() {
        let (base, end) = (100.0, 100.5);
        let mut cursor = base;
        for i in 0..8u8 {
            let (s, e) = portion_jd_range(i, base, end);
            assert!((s - cursor).abs() < 1e-12);
            cursor = e;
        }
        assert!((cursor - end).abs() < 1e-12);
    }

    #[test]
    fn gulika_precedes_maandi() {
        let (g, m) = gulika_maandi_jd(3, true, 100.25, 100.75, 101.26);
        assert!(g < m);
        assert!((m - g - 0.5 / 8.0).abs() < 1e-12);
        // Wednesday day: Rahu slot 4 -> starts half way through.
        assert!((g - (100.25 + 4.0 * 0.0625)).abs() < 1e-12);
    }

    #[test]
    fn night_birth_uses_sunset_base() {
        let (g, _) = gulika_maandi_jd(0, false, 100.25, 100.75, 101.26);
        assert!(g >= 100.75);
    }

    #[test]
    fn indu_lagna_wraps_remainder() {
        // Saturn (1) + Moon (16) = 17 -> remainder 5 -> Moon + 120°.
        let il = indu_lagna(Planet::Saturn, Planet::Moon, 10.0);
        assert!((il - 130.0).abs() < 1e-9);
        // Sun (30) + Mars (6) = 36 -> remainder 12 -> Moon + 330°.
        let il = indu_lagna(Planet::Sun, Planet::Mars, 100.0);
        assert!((il - 70.0).abs() < 1e-9);
    }
}
