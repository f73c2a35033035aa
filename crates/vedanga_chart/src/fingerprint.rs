//! Birth fingerprinting for the chart cache.
//!
//! The fingerprint is a SHA-256 over a canonical rendering of every
//! input that affects a chart: calendar moment, resolved offset,
//! coordinates, and ayanamsha scheme. Two requests with the same
//! fingerprint always produce byte-identical charts.

use sha2::{Digest, Sha256};

use vedanga_time::NormalizedMoment;

use crate::input::BirthMoment;

/// Canonical input string. Coordinates carry four decimals (≈11 m),
/// the offset two; finer differences cannot move any chart output at
/// minute resolution.
fn canonical(birth: &BirthMoment, normalized: &NormalizedMoment) -> String {
    let m = &birth.moment;
    format!(
        "{:04}-{:02}-{:02}|{:02}:{:02}|{:+.2}|{:.4}|{:.4}|{}",
        m.year,
        m.month,
        m.day,
        m.hour,
        m.minute,
        normalized.tz_offset_hours,
        birth.location.lat_deg,
        birth.location.lon_deg,
        birth.scheme.name(),
    )
}

/// Hex SHA-256 fingerprint of a resolved birth.
pub fn fingerprint(birth: &BirthMoment, normalized: &NormalizedMoment) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical(birth, normalized).as_bytes());
    hex::encode(hasher.finalize())
}
