//! Scan-layer error type.

use thiserror::Error;

use vedanga_chart::ChartError;
use vedanga_ephem::EphemError;
use vedanga_vedic::VedicError;

use crate::transit::TransitWindow;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Scan window longer than the supported 200 years.
    #[error("scan window of {years:.1} years exceeds the 200-year limit")]
    OutOfRange { years: f64 },

    /// Deadline expired mid-scan; the windows found so far ride along.
    #[error("scan truncated: {reason}")]
    Truncated {
        reason: String,
        partial: Vec<TransitWindow>,
    },

    #[error(transparent)]
    Ephemeris(#[from] EphemError),

    #[error(transparent)]
    Vedic(#[from] VedicError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}
