//! Error type for the pure-math layer.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VedicError {
    /// Caller supplied a value outside the documented domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Requested a divisional chart this engine does not define.
    #[error("unsupported divisional chart D{0}")]
    UnsupportedDivision(u8),

    /// A derived value violated a hard structural rule. Always a bug
    /// in the caller, never a recoverable condition.
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),
}
