//! Divisional (varga) chart calculator.
//!
//! Pure table-and-formula mapping from (sign, degree-in-sign, N) to the
//! divisional sign and a degree rescaled into [0, 30). Start-sign rules
//! follow BPHS; D30 alone uses unequal degree bands.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::sign::{Element, Quality, Sign, sign_from_longitude};
use crate::util::normalize_360;

/// Divisions this engine defines.
pub const SUPPORTED_DIVISIONS: [u8; 15] = [2, 3, 4, 7, 9, 10, 12, 16, 20, 24, 27, 30, 40, 45, 60];

/// Stabilizes part selection for longitudes sitting exactly on a
/// division boundary: the boundary value goes to the upper part.
const PART_EPS: f64 = 1e-9;

/// A placement in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VargaPosition {
    pub sign: Sign,
    /// Degree within the divisional sign, [0, 30).
    pub degree: f64,
}

/// Map a sidereal longitude into division `n`.
pub fn varga_position(n: u8, sidereal_lon_deg: f64) -> Result<VargaPosition, VedicError> {
    let lon = normalize_360(sidereal_lon_deg);
    let (sign, degree) = sign_from_longitude(lon);

    if n == 30 {
        return Ok(trimsamsa(sign, degree));
    }
    if !SUPPORTED_DIVISIONS.contains(&n) {
        return Err(VedicError::UnsupportedDivision(n));
    }

    let arc = 30.0 / n as f64;
    let part = (((degree + PART_EPS) / arc) as u8).min(n - 1);
    let scaled = (degree % arc) * n as f64;

    let target = match n {
        2 => hora_sign(sign, part),
        3 => sign.advance(4 * part),
        4 => sign.advance(3 * part),
        7 => start_odd_even(sign, 0, 6).advance(part),
        9 => start_by_quality(sign, 0, 8, 4).advance(part),
        10 => start_odd_even(sign, 0, 8).advance(part),
        12 => sign.advance(part),
        16 => start_by_quality(sign, 0, 4, 8).advance(part),
        20 => fixed_start_by_quality(sign, Sign::Aries, Sign::Sagittarius, Sign::Leo).advance(part),
        24 => odd_even_fixed(sign, Sign::Leo, Sign::Cancer).advance(part),
        27 => element_start(sign).advance(part),
        40 => odd_even_fixed(sign, Sign::Aries, Sign::Libra).advance(part),
        45 => fixed_start_by_quality(sign, Sign::Aries, Sign::Leo, Sign::Sagittarius).advance(part),
        60 => sign.advance(part),
        _ => unreachable!("division validated above"),
    };

    Ok(VargaPosition {
        sign: target,
        degree: scaled,
    })
}

fn hora_sign(sign: Sign, part: u8) -> Sign {
    let first_leo = sign.is_odd();
    match (first_leo, part) {
        (true, 0) | (false, 1) => Sign::Leo,
        _ => Sign::Cancer,
    }
}

/// Start at self for odd signs, `even_offset` signs ahead for even.
fn start_odd_even(sign: Sign, odd_offset: u8, even_offset: u8) -> Sign {
    if sign.is_odd() {
        sign.advance(odd_offset)
    } else {
        sign.advance(even_offset)
    }
}

fn odd_even_fixed(sign: Sign, odd_start: Sign, even_start: Sign) -> Sign {
    if sign.is_odd() { odd_start } else { even_start }
}

fn start_by_quality(sign: Sign, movable: u8, fixed: u8, dual: u8) -> Sign {
    match sign.quality() {
        Quality::Movable => sign.advance(movable),
        Quality::Fixed => sign.advance(fixed),
        Quality::Dual => sign.advance(dual),
    }
}

fn fixed_start_by_quality(sign: Sign, movable: Sign, fixed: Sign, dual: Sign) -> Sign {
    match sign.quality() {
        Quality::Movable => movable,
        Quality::Fixed => fixed,
        Quality::Dual => dual,
    }
}

fn element_start(sign: Sign) -> Sign {
    match sign.element() {
        Element::Fire => Sign::Aries,
        Element::Earth => Sign::Cancer,
        Element::Air => Sign::Libra,
        Element::Water => Sign::Capricorn,
    }
}

// Trimsamsa bands: (width, target sign) in order from 0°.
const D30_ODD: [(f64, Sign); 5] = [
    (5.0, Sign::Aries),
    (5.0, Sign::Aquarius),
    (8.0, Sign::Sagittarius),
    (7.0, Sign::Gemini),
    (5.0, Sign::Libra),
];
const D30_EVEN: [(f64, Sign); 5] = [
    (5.0, Sign::Taurus),
    (7.0, Sign::Virgo),
    (8.0, Sign::Pisces),
    (5.0, Sign::Capricorn),
    (5.0, Sign::Scorpio),
];

/// D30 uses unequal bands per BPHS; the degree rescales the band
/// fraction into [0, 30).
fn trimsamsa(sign: Sign, degree: f64) -> VargaPosition {
    let bands = if sign.is_odd() { &D30_ODD } else { &D30_EVEN };
    let mut start = 0.0;
    for &(width, target) in bands {
        let end = start + width;
        if degree + PART_EPS < end || (end - 30.0).abs() < f64::EPSILON {
            return VargaPosition {
                sign: target,
                degree: ((degree - start) / width * 30.0).clamp(0.0, 30.0 - f64::EPSILON),
            };
        }
        start = end;
    }
    unreachable!("bands cover [0, 30)")
}
