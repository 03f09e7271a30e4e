//! Nine-graha sidereal chart.
//!
//! The seven physical grahas come from the ephemeris provider as tropical
//! longitudes and are shifted by the ayanamsa of the birth date. Rahu and
//! Ketu come from the mean node estimator and are not shifted. A chart is
//! only ever returned complete.

use std::collections::BTreeMap;

use jataka_ephem::EphemerisProvider;
use jataka_time::BirthMoment;
use serde::Serialize;
use tracing::{debug, trace};

use crate::ayanamsa::ayanamsa_deg;
use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::lunar_nodes::mean_nodes;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Sidereal position of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Sidereal longitude in [0, 360).
    pub sidereal_lon_deg: f64,
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
}

impl GrahaPosition {
    /// Place a graha at a sidereal longitude (any real value).
    pub fn from_sidereal(graha: Graha, sidereal_lon_deg: f64) -> Self {
        let lon = normalize_360(sidereal_lon_deg);
        let info = rashi_from_longitude(lon);
        Self {
            graha,
            sidereal_lon_deg: lon,
            rashi: info.rashi,
            rashi_index: info.rashi_index,
            degrees_in_rashi: info.degrees_in_rashi,
        }
    }

    /// Nakshatra occupied by this graha.
    pub fn nakshatra(&self) -> NakshatraInfo {
        nakshatra_from_longitude(self.sidereal_lon_deg)
    }
}

/// Sidereal chart: exactly one position per graha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Ayanamsa applied to the physical grahas, degrees.
    pub ayanamsa_deg: f64,
    positions: BTreeMap<Graha, GrahaPosition>,
}

impl Chart {
    /// Position of a graha. Always `Some` for charts built by [`build_chart`].
    pub fn get(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.positions.get(&graha)
    }

    /// Rashi occupied by a graha.
    pub fn rashi_of(&self, graha: Graha) -> Option<Rashi> {
        self.get(graha).map(|p| p.rashi)
    }

    /// Positions in graha order.
    pub fn iter(&self) -> impl Iterator<Item = &GrahaPosition> {
        self.positions.values()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether every graha has a position.
    pub fn is_complete(&self) -> bool {
        ALL_GRAHAS.iter().all(|g| self.positions.contains_key(g))
    }
}

/// Build the sidereal chart for a birth moment.
///
/// Any provider failure aborts the whole chart with
/// [`VedicError::EphemerisUnavailable`].
pub fn build_chart<P>(provider: &P, birth: &BirthMoment) -> Result<Chart, VedicError>
where
    P: EphemerisProvider + ?Sized,
{
    let at = birth.datetime();
    let observer = birth.location();
    let aya = ayanamsa_deg(birth.date());

    let mut positions = BTreeMap::new();
    for (graha, body) in SAPTA_GRAHAS {
        let tropical_deg = provider.longitude_rad(body, observer, at)?.to_degrees();
        trace!(
            graha = graha.english_name(),
            tropical_deg,
            provider = provider.name(),
            "fetched longitude"
        );
        positions.insert(graha, GrahaPosition::from_sidereal(graha, tropical_deg - aya));
    }

    let nodes = mean_nodes(&at);
    positions.insert(Graha::Rahu, GrahaPosition::from_sidereal(Graha::Rahu, nodes.rahu_deg));
    positions.insert(Graha::Ketu, GrahaPosition::from_sidereal(Graha::Ketu, nodes.ketu_deg));

    debug!(ayanamsa_deg = aya, bodies = positions.len(), "built chart");
    Ok(Chart {
        ayanamsa_deg: aya,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_ephem::{Body, EphemerisError, FixedEphemeris};

    fn birth() -> BirthMoment {
        BirthMoment::from_calendar(1990, 1, 15, 12, 0, 28.7041, 77.1025).unwrap()
    }

    #[test]
    fn chart_has_all_nine() {
        let chart = build_chart(&FixedEphemeris::uniform(100.0, 0.0), &birth()).unwrap();
        assert_eq!(chart.len(), 9);
        assert!(chart.is_complete());
    }

    #[test]
    fn physical_grahas_are_shifted_by_ayanamsa() {
        let b = birth();
        let chart = build_chart(&FixedEphemeris::uniform(100.0, 0.0), &b).unwrap();
        let aya = ayanamsa_deg(b.date());
        let sun = chart.get(Graha::Surya).unwrap();
        assert!((sun.sidereal_lon_deg - (100.0 - aya)).abs() < 1e-9);
    }

    #[test]
    fn nodes_are_not_shifted() {
        let b = birth();
        let chart = build_chart(&FixedEphemeris::uniform(100.0, 0.0), &b).unwrap();
        let nodes = mean_nodes(&b.datetime());
        assert_eq!(chart.get(Graha::Rahu).unwrap().sidereal_lon_deg, nodes.rahu_deg);
        assert_eq!(chart.get(Graha::Ketu).unwrap().sidereal_lon_deg, nodes.ketu_deg);
    }

    #[test]
    fn missing_body_fails_whole_chart() {
        let provider = FixedEphemeris::uniform(100.0, 0.0).without_body(Body::Saturn);
        let err = build_chart(&provider, &birth()).unwrap_err();
        assert_eq!(
            err,
            VedicError::EphemerisUnavailable(EphemerisError::UnsupportedBody(Body::Saturn))
        );
    }

    #[test]
    fn works_through_trait_object() {
        let provider: Box<dyn EphemerisProvider> = Box::new(FixedEphemeris::uniform(10.0, 0.0));
        let chart = build_chart(provider.as_ref(), &birth()).unwrap();
        assert!(chart.is_complete());
    }
}
