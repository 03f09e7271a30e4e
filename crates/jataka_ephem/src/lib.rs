//! Ephemeris provider contract consumed by the chart engine.
//!
//! The chart engine never evaluates orbital mechanics itself. It asks an
//! [`EphemerisProvider`] for two things:
//! - the ecliptic longitude of a physical body, in radians
//! - the observer's local sidereal time, in radians
//!
//! Two providers ship with the crate:
//! - [`MeanElementEphemeris`]: closed-form low-order model, 1800..=2050
//! - [`FixedEphemeris`]: returns configured values, for tests and stubs

pub mod body;
pub mod error;
pub mod fixed;
pub mod mean_elements;

use chrono::NaiveDateTime;
use jataka_time::GeoLocation;

pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use fixed::FixedEphemeris;
pub use mean_elements::MeanElementEphemeris;

/// Source of raw (tropical) ecliptic longitudes and local sidereal time.
///
/// Implementations take `&self` and hold no per-request state, so a single
/// provider can serve concurrent chart requests.
pub trait EphemerisProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Ecliptic longitude of `body` in radians at `at` (UTC-naive).
    fn longitude_rad(
        &self,
        body: Body,
        observer: &GeoLocation,
        at: NaiveDateTime,
    ) -> Result<f64, EphemerisError>;

    /// Local sidereal time in radians for `observer` at `at` (UTC-naive).
    fn local_sidereal_time_rad(
        &self,
        observer: &GeoLocation,
        at: NaiveDateTime,
    ) -> Result<f64, EphemerisError>;
}

/// Reject observers outside the geographic coordinate range.
pub(crate) fn check_observer(observer: &GeoLocation) -> Result<(), EphemerisError> {
    observer
        .validate()
        .map_err(|_| EphemerisError::InvalidObserver {
            latitude_deg: observer.latitude_deg,
            longitude_deg: observer.longitude_deg,
        })
}
