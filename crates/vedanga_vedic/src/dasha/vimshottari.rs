//! Vimshottari dasha engine.
//!
//! The 120-year cycle opens at the natal Moon's nakshatra: its lord's
//! mahadasha is already running, and the balance is proportional to the
//! arc the Moon has left in the nakshatra. Each period subdivides among
//! all nine lords cyclically, starting with its own lord.

use crate::error::VedicError;
use crate::nakshatra::{NAKSHATRA_SPAN_DEG, Nakshatra};
use crate::planet::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS};
use crate::util::normalize_360;

use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};

/// The nine mahadashas from birth, first one truncated to its balance.
pub fn mahadashas(moon_sidereal_lon: f64, birth_jd: f64) -> Vec<DashaPeriod> {
    let moon = normalize_360(moon_sidereal_lon);
    let nakshatra = Nakshatra::from_longitude(moon);
    let lord = nakshatra.lord();
    let elapsed_frac = (moon - nakshatra.start_deg()) / NAKSHATRA_SPAN_DEG;
    let balance_years = (1.0 - elapsed_frac) * lord.vimshottari_years();

    let start_idx = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&p| p == lord)
        .unwrap_or(0);

    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth_jd;
    for k in 0..9 {
        let lord = VIMSHOTTARI_SEQUENCE[(start_idx + k) % 9];
        let years = if k == 0 {
            balance_years
        } else {
            lord.vimshottari_years()
        };
        let end = cursor + years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord,
            level: DashaLevel::Maha,
            start_jd: cursor,
            end_jd: end,
            order: (k + 1) as u16,
        });
        cursor = end;
    }
    periods
}

/// The nine sub-periods of a period, cyclic from its own lord, each
/// sized (child years / 120) of the parent span. The last child is
/// snapped onto the parent's end so children partition it exactly.
pub fn children(parent: &DashaPeriod) -> Result<Vec<DashaPeriod>, VedicError> {
    let level = parent.level.child().ok_or_else(|| {
        VedicError::InvalidInput(format!("{} has no sub-periods", parent.level.name()))
    })?;

    let start_idx = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&p| p == parent.lord)
        .unwrap_or(0);
    let span = parent.span_days();

    let mut out = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;
    for k in 0..9 {
        let lord = VIMSHOTTARI_SEQUENCE[(start_idx + k) % 9];
        let end = if k == 8 {
            parent.end_jd
        } else {
            cursor + lord.vimshottari_years() / VIMSHOTTARI_TOTAL_YEARS * span
        };
        out.push(DashaPeriod {
            lord,
            level,
            start_jd: cursor,
            end_jd: end,
            order: (k + 1) as u16,
        });
        cursor = end;
    }
    Ok(out)
}

/// Active lord chain (Maha through Prana) at a target date.
///
/// Drills down level by level without materializing the full tree.
pub fn snapshot(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    target_jd: f64,
) -> Result<[DashaPeriod; 5], VedicError> {
    let mahas = mahadashas(moon_sidereal_lon, birth_jd);
    let cycle_end = mahas[8].end_jd;
    if target_jd < birth_jd || target_jd >= cycle_end {
        return Err(VedicError::InvalidInput(format!(
            "target JD {target_jd} outside the dasha cycle [{birth_jd}, {cycle_end})"
        )));
    }

    let mut active = *find_containing(&mahas, target_jd)?;
    let mut chain = [active; 5];
    for slot in chain.iter_mut().skip(1) {
        let subs = children(&active)?;
        active = *find_containing(&subs, target_jd)?;
        *slot = active;
    }
    Ok(chain)
}

fn find_containing(periods: &[DashaPeriod], jd: f64) -> Result<&DashaPeriod, VedicError> {
    periods
        .iter()
        .find(|p| p.contains(jd))
        .ok_or_else(|| VedicError::IntegrityViolation("period cover has a gap".into()))
}
