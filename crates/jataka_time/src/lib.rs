//! Calendar arithmetic and time-scale helpers for birth-chart computation.
//!
//! This crate provides:
//! - Julian Date conversion from naive (UTC-treated) calendar timestamps
//! - Whole-day differences with floor semantics for signed spans
//! - Greenwich / local mean sidereal time
//! - [`BirthMoment`] and [`GeoLocation`], the validated birth inputs
//!
//! All timestamps are treated as UTC; no time-zone conversion is applied.

pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_from_datetime, jd_to_centuries,
    whole_days_between,
};
pub use moment::{BirthMoment, GeoLocation};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
