//! Lagna (ascendant) from local sidereal time.
//!
//! Two formulas are available. [`AscendantFormula::Compatible`] reproduces
//! the legacy expression `atan2(cos(LST), -sin(LST) * cos(lat))`, which
//! ignores the obliquity of the ecliptic; it is the default so that
//! existing readings do not change. [`AscendantFormula::Corrected`] is the
//! standard spherical astronomy expression (Meeus ch. 13) with the mean
//! J2000 obliquity. Both are shifted by the birth-date ayanamsa.

use jataka_ephem::EphemerisProvider;
use jataka_time::BirthMoment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ayanamsa::ayanamsa_deg;
use crate::error::VedicError;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Which ascendant expression to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AscendantFormula {
    /// Legacy expression without obliquity.
    #[default]
    Compatible,
    /// Standard expression with mean obliquity.
    Corrected,
}

impl AscendantFormula {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::Corrected => "corrected",
        }
    }
}

/// Sidereal ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LagnaInfo {
    /// Sidereal ascendant longitude in [0, 360).
    pub sidereal_lon_deg: f64,
    pub rashi: Rashi,
    pub rashi_index: u8,
    /// Degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
    /// Local sidereal time used, degrees.
    pub lst_deg: f64,
    pub formula: AscendantFormula,
}

/// Tropical ascendant longitude in degrees (unnormalized) from LST and
/// geographic latitude.
pub fn tropical_ascendant_deg(lst_deg: f64, latitude_deg: f64, formula: AscendantFormula) -> f64 {
    let theta = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = match formula {
        AscendantFormula::Compatible => f64::atan2(theta.cos(), -theta.sin() * phi.cos()),
        AscendantFormula::Corrected => {
            let eps = OBLIQUITY_J2000_DEG.to_radians();
            f64::atan2(
                theta.cos(),
                -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
            )
        }
    };
    asc.to_degrees()
}

/// Sidereal ascendant for a birth moment.
pub fn ascendant<P>(
    provider: &P,
    birth: &BirthMoment,
    formula: AscendantFormula,
) -> Result<LagnaInfo, VedicError>
where
    P: EphemerisProvider + ?Sized,
{
    let lst_deg = provider
        .local_sidereal_time_rad(birth.location(), birth.datetime())?
        .to_degrees();
    let tropical = tropical_ascendant_deg(lst_deg, birth.location().latitude_deg, formula);
    let lon = normalize_360(tropical - ayanamsa_deg(birth.date()));
    let info = rashi_from_longitude(lon);
    debug!(
        lst_deg,
        ascendant_deg = lon,
        formula = formula.name(),
        "computed ascendant"
    );

    Ok(LagnaInfo {
        sidereal_lon_deg: lon,
        rashi: info.rashi,
        rashi_index: info.rashi_index,
        degrees_in_rashi: info.degrees_in_rashi,
        lst_deg,
        formula,
    })
}
