//! KP (Krishnamurti Paddhati) sub-lord subdivision.
//!
//! Each nakshatra is ruled by its Vimshottari lord; its 13°20' arc is
//! further divided among all nine lords in Vimshottari proportion,
//! starting from the nakshatra lord. The same walk applied to the
//! winning sub-span yields the sub-sub lord.

use serde::{Deserialize, Serialize};

use crate::nakshatra::{NAKSHATRA_SPAN_DEG, Nakshatra};
use crate::planet::{Planet, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS};
use crate::util::normalize_360;

/// Absorbs accumulated rounding at the final span boundary.
const SPAN_EPS: f64 = 1e-12;

/// Star lord, sub lord, and sub-sub lord at one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubLordChain {
    pub nakshatra: Nakshatra,
    pub star_lord: Planet,
    pub sub_lord: Planet,
    pub sub_sub_lord: Planet,
    /// Absolute start of the winning sub's span, degrees [0, 360).
    pub sub_start_deg: f64,
    /// Absolute end of the winning sub's span.
    pub sub_end_deg: f64,
}

/// Walk the rotated Vimshottari proportions across `span_deg` starting
/// from `first`, returning the lord owning `offset_deg` plus that
/// lord's own span start and width.
fn proportional_walk(first: Planet, span_deg: f64, offset_deg: f64) -> (Planet, f64, f64) {
    let start_idx = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&p| p == first)
        .unwrap_or(0);
    let mut cursor = 0.0;
    for k in 0..9 {
        let lord = VIMSHOTTARI_SEQUENCE[(start_idx + k) % 9];
        let width = lord.vimshottari_years() / VIMSHOTTARI_TOTAL_YEARS * span_deg;
        let end = cursor + width;
        if offset_deg < end || k == 8 {
            return (lord, cursor, width);
        }
        cursor = end;
    }
    unreachable!("walk covers the whole span")
}

/// Resolve the KP lord chain for a sidereal longitude.
pub fn sub_lord_chain(sidereal_lon_deg: f64) -> SubLordChain {
    let lon = normalize_360(sidereal_lon_deg);
    let nakshatra = Nakshatra::from_longitude(lon);
    let star_lord = nakshatra.lord();

    let offset = (lon - nakshatra.start_deg()).clamp(0.0, NAKSHATRA_SPAN_DEG - SPAN_EPS);
    let (sub_lord, sub_start, sub_width) = proportional_walk(star_lord, NAKSHATRA_SPAN_DEG, offset);

    let sub_offset = (offset - sub_start).clamp(0.0, sub_width - SPAN_EPS);
    let (sub_sub_lord, _, _) = proportional_walk(sub_lord, sub_width, sub_offset);

    SubLordChain {
        nakshatra,
        star_lord,
        sub_lord,
        sub_sub_lord,
        sub_start_deg: nakshatra.start_deg() + sub_start,
        sub_end_deg: nakshatra.start_deg() + sub_start + sub_width,
    }
}
