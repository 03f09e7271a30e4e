//! Provider returning configured longitudes, independent of time and place.

use chrono::NaiveDateTime;
use jataka_time::GeoLocation;
use tracing::trace;

use crate::body::{ALL_BODIES, Body};
use crate::error::EphemerisError;
use crate::{EphemerisProvider, check_observer};

/// Stub provider with fixed raw longitudes and a fixed sidereal time.
///
/// Bodies without a configured longitude fail with
/// [`EphemerisError::UnsupportedBody`], which makes it usable for
/// exercising all-or-nothing chart construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedEphemeris {
    longitudes_deg: [Option<f64>; 7],
    lst_deg: Option<f64>,
}

impl FixedEphemeris {
    /// Provider with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every body at the same longitude, with the given sidereal time.
    pub fn uniform(longitude_deg: f64, lst_deg: f64) -> Self {
        Self {
            longitudes_deg: [Some(longitude_deg); 7],
            lst_deg: Some(lst_deg),
        }
    }

    pub fn with_longitude_deg(mut self, body: Body, longitude_deg: f64) -> Self {
        self.longitudes_deg[body.index()] = Some(longitude_deg);
        self
    }

    pub fn without_body(mut self, body: Body) -> Self {
        self.longitudes_deg[body.index()] = None;
        self
    }

    pub fn with_lst_deg(mut self, lst_deg: f64) -> Self {
        self.lst_deg = Some(lst_deg);
        self
    }

    /// Bodies that currently have a configured longitude.
    pub fn configured_bodies(&self) -> impl Iterator<Item = Body> + '_ {
        ALL_BODIES
            .into_iter()
            .filter(|b| self.longitudes_deg[b.index()].is_some())
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn longitude_rad(
        &self,
        body: Body,
        observer: &GeoLocation,
        _at: NaiveDateTime,
    ) -> Result<f64, EphemerisError> {
        check_observer(observer)?;
        let deg = self.longitudes_deg[body.index()].ok_or(EphemerisError::UnsupportedBody(body))?;
        trace!(body = body.name(), lon_deg = deg, "fixed longitude");
        Ok(deg.to_radians())
    }

    fn local_sidereal_time_rad(
        &self,
        observer: &GeoLocation,
        _at: NaiveDateTime,
    ) -> Result<f64, EphemerisError> {
        check_observer(observer)?;
        self.lst_deg
            .map(f64::to_radians)
            .ok_or(EphemerisError::SiderealTimeUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.7041, 77.1025).unwrap()
    }

    #[test]
    fn returns_radians() {
        let eph = FixedEphemeris::new().with_longitude_deg(Body::Moon, 45.0);
        let lon = eph.longitude_rad(Body::Moon, &delhi(), noon()).unwrap();
        assert_abs_diff_eq!(lon, 45.0_f64.to_radians(), epsilon = 1e-15);
    }

    #[test]
    fn missing_body_is_unsupported() {
        let eph = FixedEphemeris::uniform(10.0, 0.0).without_body(Body::Saturn);
        let err = eph.longitude_rad(Body::Saturn, &delhi(), noon()).unwrap_err();
        assert_eq!(err, EphemerisError::UnsupportedBody(Body::Saturn));
        assert_eq!(eph.configured_bodies().count(), 6);
    }

    #[test]
    fn missing_lst() {
        let err = FixedEphemeris::new()
            .local_sidereal_time_rad(&delhi(), noon())
            .unwrap_err();
        assert_eq!(err, EphemerisError::SiderealTimeUnavailable);
    }

    #[test]
    fn lst_in_radians() {
        let eph = FixedEphemeris::new().with_lst_deg(90.0);
        let lst = eph.local_sidereal_time_rad(&delhi(), noon()).unwrap();
        assert_abs_diff_eq!(lst, std::f64::consts::FRAC_PI_2, epsilon = 1e-15);
    }
}
