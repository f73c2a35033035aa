//! Jaimini Shoola dasha.
//!
//! A sign dasha: twelve periods of nine years each, 108 years in all.
//! The opening sign is the stronger of the ascendant sign and its
//! seventh, ranked by Jaimini rules; odd signs run the sequence
//! forward, even signs backward.

use serde::{Deserialize, Serialize};

use crate::planet::{ALL_PLANETS, Planet};
use crate::sign::{Dignity, Sign};

use super::types::DAYS_PER_YEAR;

pub const SHOOLA_YEARS_PER_SIGN: f64 = 9.0;
pub const SHOOLA_TOTAL_YEARS: f64 = 108.0;

/// One nine-year sign period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoolaEntry {
    pub sign: Sign,
    pub start_jd: f64,
    pub end_jd: f64,
    /// 1-based position, 1..=12.
    pub order: u8,
}

/// Sign placements needed for the strength contest.
#[derive(Debug, Clone, Copy)]
pub struct ShoolaInputs {
    /// The base sign: the ascendant, or a house offset from it when a
    /// relative's Shoola is wanted.
    pub base_sign: Sign,
    /// Sign of each graha, in canonical planet order.
    pub planet_signs: [Sign; 9],
}

impl ShoolaInputs {
    fn occupants(&self, sign: Sign) -> u8 {
        self.planet_signs.iter().filter(|&&s| s == sign).count() as u8
    }

    /// Dignity rank of the sign's lord in its current placement:
    /// exalted outranks own-sign territory outranks the rest.
    fn lord_rank(&self, sign: Sign) -> u8 {
        let lord = sign.lord();
        match lord.dignity_in(self.sign_of(lord)) {
            Dignity::Exalted => 2,
            Dignity::Moolatrikona | Dignity::OwnSign => 1,
            _ => 0,
        }
    }

    fn sign_of(&self, planet: Planet) -> Sign {
        self.planet_signs[planet.index() as usize]
    }
}

/// Pick the stronger of the base sign and its seventh.
///
/// Rules apply in order: occupant count, lord dignity, then quality
/// (dual > fixed > movable). A full tie falls through to the base.
pub fn shoola_start_sign(inputs: &ShoolaInputs) -> Sign {
    let first = inputs.base_sign;
    let second = first.advance(6);

    let by_occupants = inputs.occupants(first).cmp(&inputs.occupants(second));
    let by_lord = inputs.lord_rank(first).cmp(&inputs.lord_rank(second));
    let by_quality = first.quality().cmp(&second.quality());

    let ordering = by_occupants.then(by_lord).then(by_quality);
    if ordering.is_lt() { second } else { first }
}

/// Emit the twelve periods from birth.
pub fn shoola_dasha(inputs: &ShoolaInputs, birth_jd: f64) -> Vec<ShoolaEntry> {
    let start = shoola_start_sign(inputs);
    let forward = start.is_odd();
    let span = SHOOLA_YEARS_PER_SIGN * DAYS_PER_YEAR;

    let mut out = Vec::with_capacity(12);
    let mut cursor = birth_jd;
    for k in 0..12u8 {
        let sign = if forward {
            start.advance(k)
        } else {
            Sign::from_index((start.index() + 12 - k) % 12)
        };
        out.push(ShoolaEntry {
            sign,
            start_jd: cursor,
            end_jd: cursor + span,
            order: k + 1,
        });
        cursor += span;
    }
    out
}
