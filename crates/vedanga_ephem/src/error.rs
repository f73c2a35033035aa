//! Error types for ephemeris queries.

use thiserror::Error;

use crate::body::Body;

/// Errors from position or rise/set computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// Julian Date outside the supported range.
    #[error("jd {jd} outside supported ephemeris range")]
    OutOfRange { jd: f64 },

    /// The backing theory could not produce a position.
    #[error("ephemeris unavailable for {body:?} at jd {jd}: {reason}")]
    Unavailable {
        body: Body,
        jd: f64,
        reason: &'static str,
    },
}
