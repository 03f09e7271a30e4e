//! Validated birth inputs: observer location and UTC-naive timestamp.

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::jd_from_datetime;

/// Geographic observer location in degrees.
///
/// Latitude is positive north, longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Build a location, rejecting out-of-range or non-finite coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, TimeError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
        };
        loc.validate()?;
        Ok(loc)
    }

    /// Check the coordinate ranges: latitude [-90, 90], longitude [-180, 180].
    pub fn validate(&self) -> Result<(), TimeError> {
        if !self.latitude_deg.is_finite() || !self.longitude_deg.is_finite() {
            return Err(TimeError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(TimeError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(TimeError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Birth instant (treated as UTC) plus the place of birth.
///
/// Immutable once constructed; location is validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    datetime: NaiveDateTime,
    location: GeoLocation,
}

impl BirthMoment {
    pub fn new(datetime: NaiveDateTime, location: GeoLocation) -> Result<Self, TimeError> {
        location.validate()?;
        Ok(Self { datetime, location })
    }

    /// Build from calendar fields (minute resolution) and coordinates.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, TimeError> {
        let datetime = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .ok_or(TimeError::InvalidDate {
                year,
                month,
                day,
                hour,
                minute,
            })?;
        Self::new(datetime, GeoLocation::new(latitude_deg, longitude_deg)?)
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// Julian Date (UTC) of the birth instant.
    pub fn jd_utc(&self) -> f64 {
        jd_from_datetime(&self.datetime)
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} UTC at {:.4}, {:.4}",
            self.datetime.format("%Y-%m-%d %H:%M"),
            self.location.latitude_deg,
            self.location.longitude_deg
        )
    }
}
