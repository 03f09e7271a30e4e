//! Errors raised by ephemeris providers.

use thiserror::Error;

use crate::body::Body;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Epoch outside the provider's supported range.
    #[error("date out of range: JD {jd:.1} not in [{min_jd:.1}, {max_jd:.1})")]
    DateOutOfRange { jd: f64, min_jd: f64, max_jd: f64 },
    /// Observer coordinates are not a valid geographic location.
    #[error("invalid observer: lat={latitude_deg}, lon={longitude_deg}")]
    InvalidObserver {
        latitude_deg: f64,
        longitude_deg: f64,
    },
    /// The provider has no position for this body.
    #[error("no position available for {}", .0.name())]
    UnsupportedBody(Body),
    /// The provider has no sidereal time configured.
    #[error("local sidereal time unavailable")]
    SiderealTimeUnavailable,
}
