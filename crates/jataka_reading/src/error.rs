//! Error types for reading generation.

use std::io;
use std::path::PathBuf;

use jataka_time::TimeError;
use jataka_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadingError {
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Birth place not in the geocoding table and fallback disabled.
    #[error("unknown birth place: {0:?}")]
    UnknownPlace(String),
    /// Birth date not in `DD-MM-YYYY` form.
    #[error("invalid birth date {0:?}, expected DD-MM-YYYY")]
    InvalidDate(String),
    /// Birth time unparseable and the noon fallback disabled.
    #[error("invalid birth time {0:?}, expected HH:MM AM/PM or HH:MM")]
    InvalidTime(String),
    #[error("cannot write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
