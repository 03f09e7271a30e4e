//! Error types for chart and dasha computation.

use jataka_ephem::EphemerisError;
use jataka_time::TimeError;
use thiserror::Error;

/// Errors from Vedic chart calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// The ephemeris provider could not supply a position or sidereal time.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    /// Error from calendar/location handling.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Input rejected by the configured policy.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
