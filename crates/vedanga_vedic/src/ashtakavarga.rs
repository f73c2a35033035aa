//! Ashtakavarga bindu system.
//!
//! Each of the seven classical grahas has a Bhinnashtakavarga (BAV): a
//! per-sign benefic-point tally contributed by the seven grahas plus the
//! lagna, each contributing from fixed house offsets. The
//! Sarvashtakavarga (SAV) sums the seven BAVs. Reductions (sodhana) and
//! the transit comparison operate on those tallies.
//!
//! Clean-room implementation from BPHS contribution tables.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::planet::{Planet, SAPTA_GRAHAS};
use crate::sign::Sign;

/// Pack a list of 1-based house offsets into a bitmask (bit 0 = 1st).
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1 << (offsets[i] - 1);
        i += 1;
    }
    mask
}

// Contribution masks, one row per BAV target (Sun..Saturn), one column
// per contributor [Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn,
// Lagna]. A set bit at offset k-1 means the contributor grants a bindu
// in the k-th sign counted from its own position.
const RULES: [[u16; 8]; 7] = [
    // Sun
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 6, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 5, 6, 9, 10, 11, 12]),
        bits(&[5, 6, 9, 11]),
        bits(&[6, 7, 12]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 4, 6, 10, 11, 12]),
    ],
    // Moon
    [
        bits(&[3, 6, 7, 8, 10, 11]),
        bits(&[1, 3, 6, 7, 10, 11]),
        bits(&[2, 3, 5, 6, 9, 10, 11]),
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),
        bits(&[1, 4, 7, 8, 10, 11, 12]),
        bits(&[3, 4, 5, 7, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[3, 6, 10, 11]),
    ],
    // Mars
    [
        bits(&[3, 5, 6, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[6, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 6, 10, 11]),
    ],
    // Mercury
    [
        bits(&[5, 6, 9, 11, 12]),
        bits(&[2, 4, 6, 8, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 2, 4, 6, 8, 10, 11]),
    ],
    // Jupiter
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),
        bits(&[2, 5, 7, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),
        bits(&[2, 5, 6, 9, 10, 11]),
        bits(&[3, 5, 6, 12]),
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),
    ],
    // Venus
    [
        bits(&[8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
        bits(&[3, 4, 6, 9, 11, 12]),
        bits(&[3, 5, 6, 9, 11]),
        bits(&[5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),
        bits(&[3, 4, 5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
    ],
    // Saturn
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[3, 5, 6, 10, 11, 12]),
        bits(&[6, 8, 9, 10, 11, 12]),
        bits(&[5, 6, 11, 12]),
        bits(&[6, 11, 12]),
        bits(&[3, 5, 6, 11]),
        bits(&[1, 3, 4, 6, 10, 11]),
    ],
];

/// Expected BAV grand totals, indexed Sun..Saturn. Position-independent.
pub const BAV_TOTALS: [u16; 7] = [48, 49, 39, 54, 56, 52, 39];

/// Expected SAV grand total.
pub const SAV_TOTAL: u16 = 337;

const TRIKONA_GROUPS: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

// Sign pairs sharing one lord (Mars, Venus, Mercury, Jupiter, Saturn).
const EKADHIPATYA_PAIRS: [[usize; 2]; 5] = [[0, 7], [1, 6], [2, 5], [8, 11], [9, 10]];

/// Sign positions feeding the bindu tables: the seven classical grahas
/// in canonical order, plus the lagna.
#[derive(Debug, Clone, Copy)]
pub struct AvPositions {
    pub grahas: [Sign; 7],
    pub lagna: Sign,
}

impl AvPositions {
    fn contributor_sign(&self, column: usize) -> Sign {
        if column == 7 {
            self.lagna
        } else {
            self.grahas[column]
        }
    }

    /// Number of classical grahas occupying a sign.
    pub fn occupants(&self, sign: Sign) -> u8 {
        self.grahas.iter().filter(|&&s| s == sign).count() as u8
    }
}

/// Bhinnashtakavarga of one graha: bindus per sign, Aries first.
///
/// Only the seven classical grahas own a BAV; the nodes are rejected.
pub fn bhinnashtakavarga(target: Planet, positions: &AvPositions) -> Result<[u8; 12], VedicError> {
    if target.is_node() {
        return Err(VedicError::InvalidInput(format!(
            "{} has no ashtakavarga",
            target.name()
        )));
    }
    let rules = &RULES[target.index() as usize];
    let mut bindus = [0u8; 12];
    for (sign, slot) in bindus.iter_mut().enumerate() {
        for (column, mask) in rules.iter().enumerate() {
            let from = self_offset(sign, positions.contributor_sign(column));
            if mask & (1 << from) != 0 {
                *slot += 1;
            }
        }
    }
    Ok(bindus)
}

/// 0-based house offset of `sign` counted from the contributor.
fn self_offset(sign: usize, contributor: Sign) -> u16 {
    ((sign + 12 - contributor.index() as usize) % 12) as u16
}

/// Sarvashtakavarga: per-sign sum of all seven BAVs.
pub fn sarvashtakavarga(positions: &AvPositions) -> [u8; 12] {
    let mut sav = [0u8; 12];
    for graha in SAPTA_GRAHAS {
        let bav = bhinnashtakavarga(graha, positions).expect("classical graha");
        for (s, b) in sav.iter_mut().zip(bav) {
            *s += b;
        }
    }
    sav
}

// ---------------------------------------------------------------------------
// Sodhana (reductions)
// ---------------------------------------------------------------------------

/// Trikona sodhana: within each elemental trine, subtract the trine's
/// minimum from all three signs.
pub fn trikona_sodhana(bav: &[u8; 12]) -> [u8; 12] {
    let mut out = *bav;
    for group in TRIKONA_GROUPS {
        let min = group.iter().map(|&i| bav[i]).min().unwrap_or(0);
        for &i in &group {
            out[i] -= min;
        }
    }
    out
}

/// Ekadhipatya sodhana over the five two-sign lordships.
///
/// For each pair: both signs unoccupied and equal → both drop to zero;
/// both unoccupied and unequal → the larger drops to the smaller; one
/// occupied → the unoccupied side drops to the occupied side's figure
/// if larger, to zero if smaller. Occupied signs are never touched.
pub fn ekadhipatya_sodhana(bav: &[u8; 12], positions: &AvPositions) -> [u8; 12] {
    let mut out = *bav;
    for [a, b] in EKADHIPATYA_PAIRS {
        let occ_a = positions.occupants(Sign::from_index(a as u8)) > 0;
        let occ_b = positions.occupants(Sign::from_index(b as u8)) > 0;
        match (occ_a, occ_b) {
            (true, true) => {}
            (false, false) => {
                if out[a] == out[b] {
                    out[a] = 0;
                    out[b] = 0;
                } else if out[a] > out[b] {
                    out[a] = out[b];
                } else {
                    out[b] = out[a];
                }
            }
            (true, false) => out[b] = reduce_against(out[b], out[a]),
            (false, true) => out[a] = reduce_against(out[a], out[b]),
        }
    }
    out
}

fn reduce_against(unoccupied: u8, occupied: u8) -> u8 {
    if unoccupied > occupied { occupied } else { 0 }
}

// ---------------------------------------------------------------------------
// Transit comparison
// ---------------------------------------------------------------------------

/// Per-sign movement between a reference SAV and a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavTrend {
    Improved,
    Stable,
    Weakened,
}

/// A delta beyond this magnitude counts as a real shift.
const TREND_THRESHOLD: i16 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavComparison {
    pub deltas: [i16; 12],
    pub trends: [SavTrend; 12],
    /// Fraction of signs that held steady, [0, 1].
    pub stability_index: f64,
}

/// Compare two SAV tallies sign by sign.
pub fn compare_sav(reference: &[u8; 12], current: &[u8; 12]) -> SavComparison {
    let mut deltas = [0i16; 12];
    let mut trends = [SavTrend::Stable; 12];
    let mut shifted = 0u32;
    for i in 0..12 {
        let d = current[i] as i16 - reference[i] as i16;
        deltas[i] = d;
        trends[i] = if d > TREND_THRESHOLD {
            shifted += 1;
            SavTrend::Improved
        } else if d < -TREND_THRESHOLD {
            shifted += 1;
            SavTrend::Weakened
        } else {
            SavTrend::Stable
        };
    }
    SavComparison {
        deltas,
        trends,
        stability_index: (12 - shifted) as f64 / 12.0,
    }
}

// ---------------------------------------------------------------------------
// Bindu conductivity bands
// ---------------------------------------------------------------------------

/// How freely a transit expresses through a sign, from its SAV figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinduBand {
    HighResistance,
    ReducedFlow,
    Neutral,
    StrongConductivity,
}

impl BinduBand {
    pub const fn from_bindus(bindus: u8) -> Self {
        match bindus {
            0..=21 => Self::HighResistance,
            22..=24 => Self::ReducedFlow,
            25..=29 => Self::Neutral,
            _ => Self::StrongConductivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ALL_SIGNS;

    fn sample_positions() -> AvPositions {
        AvPositions {
            grahas: [
                Sign::Pisces,      // Sun
                Sign::Libra,       // Moon
                Sign::Leo,         // Mars
                Sign::Aries,       // Mercury
                Sign::Cancer,      // Jupiter
                Sign::Aquarius,    // Venus
                Sign::Virgo,       // Saturn
            ],
            lagna: Sign::Virgo,
        }
    }

    #[test]
    fn mask_popcounts_match_totals() {
        for (t, row) in RULES.iter().enumerate() {
            let total: u32 = row.iter().map(|m| m.count_ones()).sum();
            assert_eq!(total as u16, BAV_TOTALS[t], "target {t}");
        }
        let sum: u16 = BAV_TOTALS.iter().sum();
        assert_eq!(sum, SAV_TOTAL);
    }

    #[test]
    fn bav_totals_position_independent() {
        // The grand total of any BAV equals its rule popcount no matter
        // where the grahas sit.
        let pos = sample_positions();
        for (i, graha) in SAPTA_GRAHAS.iter().enumerate() {
            let bav = bhinnashtakavarga(*graha, &pos).unwrap();
            let total: u16 = bav.iter().map(|&b| b as u16).sum();
            assert_eq!(total, BAV_TOTALS[i], "{}", graha.name());
        }
    }

    #[test]
    fn sav_totals_337() {
        let sav = sarvashtakavarga(&sample_positions());
        let total: u16 = sav.iter().map(|&b| b as u16).sum();
        assert_eq!(total, SAV_TOTAL);
    }

    #[test]
    fn nodes_rejected() {
        let pos = sample_positions();
        assert!(bhinnashtakavarga(Planet::Rahu, &pos).is_err());
        assert!(bhinnashtakavarga(Planet::Ketu, &pos).is_err());
    }

    #[test]
    fn sun_bav_self_contribution() {
        // The Sun grants itself a bindu in its own sign (offset 1).
        let pos = sample_positions();
        let bav = bhinnashtakavarga(Planet::Sun, &pos).unwrap();
        assert!(bav[Sign::Pisces.index() as usize] >= 1);
    }

    #[test]
    fn trikona_zeroes_group_minimum() {
        let bav = [5, 4, 3, 6, 2, 4, 3, 6, 7, 4, 3, 6];
        let out = trikona_sodhana(&bav);
        for group in TRIKONA_GROUPS {
            assert!(group.iter().any(|&i| out[i] == 0), "{group:?}");
            let min = group.iter().map(|&i| bav[i]).min().unwrap();
            for &i in &group {
                assert_eq!(out[i], bav[i] - min);
            }
        }
    }

    #[test]
    fn ekadhipatya_unoccupied_equal_pair_zeroed() {
        let mut pos = sample_positions();
        // Clear Gemini and Virgo of occupants.
        pos.grahas = [Sign::Aries; 7];
        pos.lagna = Sign::Aries;
        let mut bav = [0u8; 12];
        bav[2] = 4;
        bav[5] = 4;
        let out = ekadhipatya_sodhana(&bav, &pos);
        assert_eq!(out[2], 0);
        assert_eq!(out[5], 0);
    }

    #[test]
    fn ekadhipatya_occupied_sign_untouched() {
        let mut pos = sample_positions();
        pos.grahas = [Sign::Gemini; 7];
        pos.lagna = Sign::Gemini;
        let mut bav = [0u8; 12];
        bav[2] = 4; // Gemini occupied
        bav[5] = 6; // Virgo empty, larger -> drops to occupied figure
        let out = ekadhipatya_sodhana(&bav, &pos);
        assert_eq!(out[2], 4);
        assert_eq!(out[5], 4);

        bav[5] = 2; // Virgo empty, smaller -> eliminated
        let out = ekadhipatya_sodhana(&bav, &pos);
        assert_eq!(out[5], 0);
    }

    #[test]
    fn comparison_trends_and_stability() {
        let reference = [28u8; 12];
        let mut current = [28u8; 12];
        current[0] = 32; // +4 improved
        current[1] = 24; // -4 weakened
        current[2] = 30; // +2 stable
        let cmp = compare_sav(&reference, &current);
        assert_eq!(cmp.trends[0], SavTrend::Improved);
        assert_eq!(cmp.trends[1], SavTrend::Weakened);
        assert_eq!(cmp.trends[2], SavTrend::Stable);
        assert!((cmp.stability_index - 10.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn bindu_bands() {
        assert_eq!(BinduBand::from_bindus(18), BinduBand::HighResistance);
        assert_eq!(BinduBand::from_bindus(21), BinduBand::HighResistance);
        assert_eq!(BinduBand::from_bindus(22), BinduBand::ReducedFlow);
        assert_eq!(BinduBand::from_bindus(24), BinduBand::ReducedFlow);
        assert_eq!(BinduBand::from_bindus(25), BinduBand::Neutral);
        assert_eq!(BinduBand::from_bindus(29), BinduBand::Neutral);
        assert_eq!(BinduBand::from_bindus(30), BinduBand::StrongConductivity);
        assert_eq!(BinduBand::from_bindus(40), BinduBand::StrongConductivity);
    }

    #[test]
    fn occupants_counts_grahas_only() {
        let pos = sample_positions();
        assert_eq!(pos.occupants(Sign::Virgo), 1); // Saturn; lagna not counted
        assert_eq!(pos.occupants(Sign::Taurus), 0);
        let all: u8 = ALL_SIGNS.iter().map(|&s| pos.occupants(s)).sum();
        assert_eq!(all, 7);
    }
}
