//! Chart-layer error type.

use thiserror::Error;

use vedanga_ephem::EphemError;
use vedanga_time::TimeError;
use vedanga_vedic::VedicError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Ephemeris(#[from] EphemError),

    #[error(transparent)]
    Vedic(#[from] VedicError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
