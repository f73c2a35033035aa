//! Typed ayanamsha scheme session.
//!
//! Every sidereal query belongs to a logical request that has committed
//! to one scheme. Instead of a process-global "current ayanamsha", callers
//! acquire a [`SchemeSession`] from a [`SchemeLock`]; the session pins the
//! scheme and holds the lock until dropped, so a Krishnamurti chart build
//! can never interleave with a Lahiri one mid-request.

use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use crate::ayanamsha::{AyanamshaScheme, ayanamsha_deg};
use crate::body::Body;
use crate::ephemeris::Ephemeris;
use crate::error::EphemError;

/// Gate for sidereal query sequences. One per process is typical.
#[derive(Debug, Default)]
pub struct SchemeLock {
    inner: Mutex<()>,
}

impl SchemeLock {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(()),
        }
    }

    /// Acquire a session pinned to one scheme. Blocks while another
    /// session is alive.
    pub fn acquire(&self, scheme: AyanamshaScheme) -> SchemeSession<'_> {
        let guard = self.inner.lock();
        debug!(scheme = scheme.name(), "ayanamsha session acquired");
        SchemeSession {
            _guard: guard,
            scheme,
        }
    }
}

/// A scheme-pinned view over an ephemeris.
///
/// All sidereal longitudes produced through one session share the same
/// ayanamsha scheme. Dropping the session releases the lock.
pub struct SchemeSession<'a> {
    _guard: MutexGuard<'a, ()>,
    scheme: AyanamshaScheme,
}

impl SchemeSession<'_> {
    pub fn scheme(&self) -> AyanamshaScheme {
        self.scheme
    }

    /// Ayanamsha value under this session's scheme, degrees.
    pub fn ayanamsha_deg(&self, jd: f64) -> f64 {
        ayanamsha_deg(self.scheme, jd)
    }

    /// Sidereal longitude of a body, degrees [0, 360).
    pub fn sidereal_longitude(
        &self,
        eph: &dyn Ephemeris,
        jd: f64,
        body: Body,
    ) -> Result<f64, EphemError> {
        let pos = eph.position(jd, body)?;
        Ok((pos.longitude_deg - self.ayanamsha_deg(jd)).rem_euclid(360.0))
    }

    /// Convert an already-computed tropical longitude to sidereal.
    pub fn to_sidereal(&self, tropical_deg: f64, jd: f64) -> f64 {
        (tropical_deg - self.ayanamsha_deg(jd)).rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::MeanEphemeris;

    #[test]
    fn session_pins_scheme() {
        let lock = SchemeLock::new();
        let s = lock.acquire(AyanamshaScheme::Krishnamurti);
        assert_eq!(s.scheme(), AyanamshaScheme::Krishnamurti);
    }

    #[test]
    fn sidereal_differs_from_tropical_by_ayanamsha() {
        let lock = SchemeLock::new();
        let eph = MeanEphemeris::new();
        let jd = 2_451_545.0;
        let s = lock.acquire(AyanamshaScheme::Lahiri);
        let sid = s.sidereal_longitude(&eph, jd, Body::Sun).unwrap();
        let trop = eph.position(jd, Body::Sun).unwrap().longitude_deg;
        let diff = (trop - sid).rem_euclid(360.0);
        assert!((diff - s.ayanamsha_deg(jd)).abs() < 1e-9);
    }

    #[test]
    fn sequential_sessions_alternate() {
        let lock = SchemeLock::new();
        {
            let s = lock.acquire(AyanamshaScheme::Lahiri);
            assert_eq!(s.scheme(), AyanamshaScheme::Lahiri);
        }
        {
            let s = lock.acquire(AyanamshaScheme::Krishnamurti);
            assert_eq!(s.scheme(), AyanamshaScheme::Krishnamurti);
        }
    }

    #[test]
    fn to_sidereal_wraps() {
        let lock = SchemeLock::new();
        let s = lock.acquire(AyanamshaScheme::Lahiri);
        let sid = s.to_sidereal(10.0, 2_451_545.0);
        assert!((0.0..360.0).contains(&sid));
        // 10° tropical minus ~23.85° ayanamsha wraps past zero
        assert!(sid > 340.0);
    }
}
