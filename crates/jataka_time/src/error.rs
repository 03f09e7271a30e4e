//! Error types for calendar and location handling.

use thiserror::Error;

/// Errors from birth-moment construction and calendar parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Latitude/longitude outside the geographic range or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Calendar fields do not form a real date/time.
    #[error("invalid date: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
}
