//! Transit-aspect timeline scanner.
//!
//! Steps a transiting graha across a year window at 7-day resolution
//! and coalesces consecutive hits into windows. The scanner emits
//! geometry only; it never ranks or interprets.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use vedanga_chart::D1Chart;
use vedanga_ephem::{Body, Ephemeris, SchemeLock, SchemeSession};
use vedanga_time::calendar_to_jd;
use vedanga_vedic::ashtakavarga::{AvPositions, SavComparison, compare_sav, sarvashtakavarga};
use vedanga_vedic::aspect::{AspectKind, validate_aspect};
use vedanga_vedic::nakshatra::Nakshatra;
use vedanga_vedic::planet::{Planet, SAPTA_GRAHAS};
use vedanga_vedic::sign::sign_from_longitude;
use vedanga_vedic::util::normalize_360;

use crate::error::ScanError;

/// Hard cap on the scan window.
pub const MAX_WINDOW_YEARS: f64 = 200.0;

/// Step resolution. Never exceeded; the slowest scanned motion (Saturn,
/// ~0.03°/day) cannot cross a sign inside one step unnoticed for the
/// coalescing to matter.
pub const STEP_DAYS: f64 = 7.0;

/// Water-fire junction bands, degrees.
pub const GANDANTA_BANDS: [(f64, f64); 4] =
    [(357.0, 360.0), (0.0, 3.0), (117.0, 123.0), (237.0, 243.0)];

/// One coalesced run of hitting steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitWindow {
    pub kind: AspectKind,
    pub start_jd: f64,
    pub end_jd: f64,
    /// First hit of the run.
    pub peak_jd: f64,
}

pub struct TransitScanner<'a> {
    eph: &'a dyn Ephemeris,
    lock: &'a SchemeLock,
}

impl<'a> TransitScanner<'a> {
    pub fn new(eph: &'a dyn Ephemeris, lock: &'a SchemeLock) -> Self {
        Self { eph, lock }
    }

    /// Windows where `aspecting`'s transit casts `kind` onto
    /// `aspected`'s natal house.
    pub fn scan_aspect(
        &self,
        chart: &D1Chart,
        aspecting: Planet,
        aspected: Planet,
        kind: AspectKind,
        from_year: i32,
        to_year: i32,
        deadline: Option<Instant>,
    ) -> Result<Vec<TransitWindow>, ScanError> {
        let offset = kind.house_offset().ok_or_else(|| {
            ScanError::InvalidInput(format!("{} is not a house aspect", kind.name()))
        })?;
        if let Err(e) = validate_aspect(aspecting, kind) {
            warn!(
                planet = aspecting.name(),
                kind = kind.name(),
                "rejected aspect outside the allowed set"
            );
            return Err(e.into());
        }

        let (start_jd, end_jd) = year_window(from_year, to_year)?;
        let natal_house = chart.placement(aspected).house;
        let asc_sign = chart.ascendant.sign;
        debug!(
            aspecting = aspecting.name(),
            aspected = aspected.name(),
            kind = kind.name(),
            from_year,
            to_year,
            "aspect scan"
        );

        let session = self.lock.acquire(chart.scheme);
        self.step_scan(kind, start_jd, end_jd, deadline, |jd| {
            let lon = self.sidereal_lon(&session, jd, aspecting)?;
            let (sign, _) = sign_from_longitude(lon);
            let transit_house = (sign.index() + 12 - asc_sign.index()) % 12 + 1;
            Ok((natal_house + 12 - transit_house) % 12 == offset)
        })
    }

    /// Windows where `target`'s transit sits inside the nakshatra
    /// holding `natal`'s longitude.
    pub fn scan_nakshatra(
        &self,
        chart: &D1Chart,
        target: Planet,
        natal: Planet,
        from_year: i32,
        to_year: i32,
        deadline: Option<Instant>,
    ) -> Result<Vec<TransitWindow>, ScanError> {
        let (start_jd, end_jd) = year_window(from_year, to_year)?;
        let nakshatra = Nakshatra::from_longitude(chart.placement(natal).longitude_deg);

        let session = self.lock.acquire(chart.scheme);
        self.step_scan(
            AspectKind::NakshatraActivation,
            start_jd,
            end_jd,
            deadline,
            |jd| {
                let lon = self.sidereal_lon(&session, jd, target)?;
                Ok(nakshatra.contains(lon))
            },
        )
    }

    /// Windows where a graha's transit crosses a Gandanta band.
    pub fn scan_gandanta(
        &self,
        chart: &D1Chart,
        planet: Planet,
        from_year: i32,
        to_year: i32,
        deadline: Option<Instant>,
    ) -> Result<Vec<TransitWindow>, ScanError> {
        let (start_jd, end_jd) = year_window(from_year, to_year)?;
        let session = self.lock.acquire(chart.scheme);
        self.step_scan(
            AspectKind::GandantaCrossing,
            start_jd,
            end_jd,
            deadline,
            |jd| {
                let lon = self.sidereal_lon(&session, jd, planet)?;
                Ok(in_gandanta_band(lon))
            },
        )
    }

    /// Natal vs transit Sarvashtakavarga: grahas re-signed at `jd`, the
    /// birth ascendant kept for house framing.
    pub fn sav_comparison(&self, chart: &D1Chart, jd: f64) -> Result<SavComparison, ScanError> {
        let natal = sarvashtakavarga(&chart.av_positions());

        let session = self.lock.acquire(chart.scheme);
        let mut grahas = [chart.ascendant.sign; 7];
        for (slot, graha) in grahas.iter_mut().zip(SAPTA_GRAHAS) {
            let lon = planet_sidereal_lon(self.eph, &session, jd, graha)?;
            *slot = sign_from_longitude(lon).0;
        }
        drop(session);

        let transit = sarvashtakavarga(&AvPositions {
            grahas,
            lagna: chart.ascendant.sign,
        });
        Ok(compare_sav(&natal, &transit))
    }

    fn sidereal_lon(
        &self,
        session: &SchemeSession<'_>,
        jd: f64,
        planet: Planet,
    ) -> Result<f64, ScanError> {
        planet_sidereal_lon(self.eph, session, jd, planet)
    }

    fn step_scan<F>(
        &self,
        kind: AspectKind,
        start_jd: f64,
        end_jd: f64,
        deadline: Option<Instant>,
        mut hit: F,
    ) -> Result<Vec<TransitWindow>, ScanError>
    where
        F: FnMut(f64) -> Result<bool, ScanError>,
    {
        let mut windows = Vec::new();
        let mut open: Option<f64> = None;
        let mut jd = start_jd;
        while jd <= end_jd {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                if let Some(s) = open {
                    windows.push(window(kind, s, jd));
                }
                return Err(ScanError::Truncated {
                    reason: format!("deadline hit at JD {jd:.1}"),
                    partial: windows,
                });
            }
            match (hit(jd)?, open) {
                (true, None) => open = Some(jd),
                (false, Some(s)) => {
                    windows.push(window(kind, s, jd));
                    open = None;
                }
                _ => {}
            }
            jd += STEP_DAYS;
        }
        if let Some(s) = open {
            windows.push(window(kind, s, end_jd));
        }
        Ok(windows)
    }
}

fn window(kind: AspectKind, start_jd: f64, end_jd: f64) -> TransitWindow {
    TransitWindow {
        kind,
        start_jd,
        end_jd,
        peak_jd: start_jd,
    }
}

pub fn in_gandanta_band(lon_deg: f64) -> bool {
    let lon = normalize_360(lon_deg);
    GANDANTA_BANDS
        .iter()
        .any(|&(lo, hi)| lon >= lo && lon < hi)
}

/// Inclusive year range to a JD window, capped at 200 years.
fn year_window(from_year: i32, to_year: i32) -> Result<(f64, f64), ScanError> {
    if to_year < from_year {
        return Err(ScanError::InvalidInput(format!(
            "year range {from_year}..{to_year} is inverted"
        )));
    }
    let start = calendar_to_jd(from_year, 1, 1.0);
    let end = calendar_to_jd(to_year + 1, 1, 1.0);
    let years = (end - start) / 365.25;
    if years > MAX_WINDOW_YEARS {
        return Err(ScanError::OutOfRange { years });
    }
    Ok((start, end))
}

/// Sidereal longitude of a graha; Ketu is the node's antipode.
pub(crate) fn planet_sidereal_lon(
    eph: &dyn Ephemeris,
    session: &SchemeSession<'_>,
    jd: f64,
    planet: Planet,
) -> Result<f64, ScanError> {
    let lon = session.sidereal_longitude(eph, jd, body_of(planet))?;
    Ok(if planet == Planet::Ketu {
        normalize_360(lon + 180.0)
    } else {
        lon
    })
}

pub(crate) fn body_of(planet: Planet) -> Body {
    match planet {
        Planet::Sun => Body::Sun,
        Planet::Moon => Body::Moon,
        Planet::Mercury => Body::Mercury,
        Planet::Venus => Body::Venus,
        Planet::Mars => Body::Mars,
        Planet::Jupiter => Body::Jupiter,
        Planet::Saturn => Body::Saturn,
        Planet::Rahu | Planet::Ketu => Body::MeanNode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vedanga_chart::{BirthMoment, ChartBuilder};
    use vedanga_ephem::{AyanamshaScheme, MeanEphemeris};
    use vedanga_time::{CivilMoment, GeoPoint};

    static LOCK: SchemeLock = SchemeLock::new();
    static EPH: MeanEphemeris = MeanEphemeris;

    fn chart() -> D1Chart {
        ChartBuilder::new(&EPH, &LOCK)
            .build(&BirthMoment {
                moment: CivilMoment::new(1980, 4, 2, 14, 55),
                tz_offset_hours: None,
                location: GeoPoint::new(29.1492, 75.7217).unwrap(),
                scheme: AyanamshaScheme::Lahiri,
            })
            .unwrap()
    }

    #[test]
    fn jupiter_seventh_windows_found() {
        let chart = chart();
        let scanner = TransitScanner::new(&EPH, &LOCK);
        // A 7th onto the natal Libra Moon needs Jupiter in sidereal
        // Aries; its 1999-2000 transit sits inside this window.
        let windows = scanner
            .scan_aspect(
                &chart,
                Planet::Jupiter,
                Planet::Moon,
                AspectKind::Seventh,
                1998,
                2000,
                None,
            )
            .unwrap();
        assert!(!windows.is_empty());
        for w in &windows {
            assert!(w.start_jd < w.end_jd);
            assert_eq!(w.peak_jd, w.start_jd);
            assert_eq!(w.kind, AspectKind::Seventh);
        }
    }

    #[test]
    fn jupiter_eighth_is_an_integrity_violation() {
        let chart = chart();
        let scanner = TransitScanner::new(&EPH, &LOCK);
        let r = scanner.scan_aspect(
            &chart,
            Planet::Jupiter,
            Planet::Moon,
            AspectKind::Eighth,
            1990,
            1992,
            None,
        );
        assert!(matches!(
            r,
            Err(ScanError::Vedic(
                vedanga_vedic::VedicError::IntegrityViolation(_)
            ))
        ));
    }

    #[test]
    fn oversized_window_rejected() {
        let chart = chart();
        let scanner = TransitScanner::new(&EPH, &LOCK);
        let r = scanner.scan_aspect(
            &chart,
            Planet::Saturn,
            Planet::Sun,
            AspectKind::Seventh,
            1900,
            2150,
            None,
        );
        assert!(matches!(r, Err(ScanError::OutOfRange { .. })));
    }

    #[test]
    fn expired_deadline_truncates() {
        let chart = chart();
        let scanner = TransitScanner::new(&EPH, &LOCK);
        let r = scanner.scan_aspect(
            &chart,
            Planet::Saturn,
            Planet::Sun,
            AspectKind::Seventh,
            1980,
            2050,
            Some(Instant::now()),
        );
        match r {
            Err(ScanError::Truncated { partial, .. }) => assert!(partial.is_empty()),
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[test]
    fn moon_gandanta_windows_hit_the_bands() {
        let chart = chart();
        let scanner = TransitScanner::new(&EPH, &LOCK);
        let windows = scanner
            .scan_gandanta(&chart, Planet::Moon, 2000, 2000, None)
            .unwrap();
        // The Moon crosses all three junctions every sidereal month, but
        // 7-day sampling only registers some passes.
        assert!(!windows.is_empty());

        let session = LOCK.acquire(chart.scheme);
        for w in &windows {
            let lon = session
                .sidereal_longitude(&EPH, w.peak_jd, Body::Moon)
                .unwrap();
            assert!(in_gandanta_band(lon), "peak lon {lon}");
        }
    }

    #[test]
    fn saturn_nakshatra_activation() {
        let chart = chart();
        let scanner = TransitScanner::new(&EPH, &LOCK);
        let windows = scanner
            .scan_nakshatra(&chart, Planet::Saturn, Planet::Moon, 1980, 2020, None)
            .unwrap();
        // Saturn returns to any nakshatra at least once per 30-year lap.
        assert!(!windows.is_empty());
        for w in &windows {
            assert_eq!(w.kind, AspectKind::NakshatraActivation);
        }
    }

    #[test]
    fn sav_comparison_against_natal_moment_is_stable() {
        let chart = chart();
        let scanner = TransitScanner::new(&EPH, &LOCK);
        let cmp = scanner.sav_comparison(&chart, chart.jd_ut).unwrap();
        // Transit positions at the birth instant reproduce the natal SAV.
        assert!(cmp.deltas.iter().all(|&d| d == 0));
        assert!((cmp.stability_index - 1.0).abs() < 1e-12);

        let later = scanner
            .sav_comparison(&chart, chart.jd_ut + 4000.0)
            .unwrap();
        assert!((0.0..=1.0).contains(&later.stability_index));
        assert_eq!(later.deltas.iter().sum::<i16>(), 0);
    }

    #[test]
    fn gandanta_band_edges() {
        assert!(in_gandanta_band(358.0));
        assert!(in_gandanta_band(0.5));
        assert!(in_gandanta_band(120.0));
        assert!(in_gandanta_band(240.0));
        assert!(!in_gandanta_band(50.0));
        assert!(!in_gandanta_band(123.0));
        assert!(!in_gandanta_band(3.0));
    }
}
