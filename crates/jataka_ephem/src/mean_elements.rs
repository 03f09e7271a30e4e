//! Low-order closed-form ephemeris.
//!
//! Planets: heliocentric ecliptic longitude from Keplerian mean elements
//! (Standish, "Keplerian Elements for Approximate Positions of the Major
//! Planets", Table 1, valid 1800 AD .. 2050 AD). The Sun is the geocentric
//! direction opposite the Earth-Moon barycenter, so it sits 180 deg from the
//! Earth's own heliocentric longitude, not on it. Element longitudes are
//! referred to the J2000 equinox and are carried to the mean equinox of
//! date with the IAU 2006 general precession in longitude.
//!
//! Moon: geocentric longitude from the six largest periodic terms of
//! Meeus, "Astronomical Algorithms" (2nd ed.), Ch. 47.
//!
//! Sidereal time: IAU GMST plus observer east longitude.
//!
//! Accuracy is a few arc-minutes for the planets and ~0.3 deg for the Moon.

use std::f64::consts::{PI, TAU};

use chrono::NaiveDateTime;
use jataka_time::{
    GeoLocation, gmst_rad, jd_from_datetime, jd_to_centuries, local_sidereal_time_rad,
};
use tracing::trace;

use crate::body::Body;
use crate::error::EphemerisError;
use crate::{EphemerisProvider, check_observer};

/// First supported instant: 1800-01-01 00:00.
pub const MIN_JD: f64 = 2_378_496.5;

/// End of the supported range (exclusive): 2051-01-01 00:00.
pub const MAX_JD: f64 = 2_470_172.5;

/// Mean orbital elements at J2000 and their rates per Julian century.
///
/// Angles in degrees: inclination `i`, mean longitude `l`, longitude of
/// perihelion `peri`, longitude of ascending node `node`.
#[derive(Debug, Clone, Copy)]
struct Elements {
    e: [f64; 2],
    i: [f64; 2],
    l: [f64; 2],
    peri: [f64; 2],
    node: [f64; 2],
}

#[rustfmt::skip]
const MERCURY: Elements = Elements {
    e:    [0.205_635_93,   0.000_019_06],
    i:    [7.004_979_02,  -0.005_947_49],
    l:    [252.250_323_5,  149_472.674_111_75],
    peri: [77.457_796_28,  0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

#[rustfmt::skip]
const VENUS: Elements = Elements {
    e:    [0.006_776_72,  -0.000_041_07],
    i:    [3.394_676_05,  -0.000_788_90],
    l:    [181.979_099_5,  58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

#[rustfmt::skip]
const EARTH_MOON_BARY: Elements = Elements {
    e:    [0.016_711_23,  -0.000_043_92],
    i:    [-0.000_015_31, -0.012_946_68],
    l:    [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64],
    node: [0.0,            0.0],
};

#[rustfmt::skip]
const MARS: Elements = Elements {
    e:    [0.093_394_10,   0.000_078_82],
    i:    [1.849_691_42,  -0.008_131_31],
    l:    [-4.553_432_05,  19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

#[rustfmt::skip]
const JUPITER: Elements = Elements {
    e:    [0.048_386_24,  -0.000_132_53],
    i:    [1.304_396_95,  -0.001_837_14],
    l:    [34.396_440_51,  3_034.746_127_75],
    peri: [14.728_479_83,  0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

#[rustfmt::skip]
const SATURN: Elements = Elements {
    e:    [0.053_861_79,  -0.000_509_91],
    i:    [2.485_991_87,   0.001_936_09],
    l:    [49.954_244_23,  1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

impl Elements {
    /// Heliocentric ecliptic longitude (J2000 ecliptic) in radians [0, 2*pi).
    fn heliocentric_longitude_rad(&self, t: f64) -> f64 {
        let at = |p: [f64; 2]| p[0] + p[1] * t;
        let e = at(self.e);
        let inc = at(self.i).to_radians();
        let peri = at(self.peri);
        let node = at(self.node);
        let mean_anomaly = (at(self.l) - peri).to_radians();
        let arg_peri = (peri - node).to_radians();
        let node = node.to_radians();

        let ecc_anomaly = solve_kepler(mean_anomaly, e);
        // Orbital-plane coordinates; the semi-major axis cancels in atan2.
        let xp = ecc_anomaly.cos() - e;
        let yp = (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let (sw, cw) = arg_peri.sin_cos();
        let (sn, cn) = node.sin_cos();
        let ci = inc.cos();
        let x = (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp;
        let y = (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp;
        y.atan2(x).rem_euclid(TAU)
    }
}

/// General precession in longitude since J2000, degrees (IAU 2006, to T^2).
fn precession_deg(t: f64) -> f64 {
    (5028.796195 * t + 1.1054348 * t * t) / 3600.0
}

/// Carry a J2000-equinox longitude (radians) to the mean equinox of date.
fn of_date(j2000_lon_rad: f64, t: f64) -> f64 {
    (j2000_lon_rad + precession_deg(t).to_radians()).rem_euclid(TAU)
}

/// Eccentric anomaly from mean anomaly by Newton iteration (radians).
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(TAU);
    let mut ecc = if e < 0.8 { m } else { PI };
    for _ in 0..30 {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Geocentric lunar longitude in radians [0, 2*pi).
fn moon_longitude_rad(t: f64) -> f64 {
    let mean_lon = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();

    let periodic = 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin();

    (mean_lon + periodic).to_radians().rem_euclid(TAU)
}

/// Closed-form provider over mean orbital elements, 1800..=2050.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementEphemeris;

impl MeanElementEphemeris {
    pub const fn new() -> Self {
        Self
    }

    fn checked_jd(at: &NaiveDateTime) -> Result<f64, EphemerisError> {
        let jd = jd_from_datetime(at);
        if (MIN_JD..MAX_JD).contains(&jd) {
            Ok(jd)
        } else {
            Err(EphemerisError::DateOutOfRange {
                jd,
                min_jd: MIN_JD,
                max_jd: MAX_JD,
            })
        }
    }
}

impl EphemerisProvider for MeanElementEphemeris {
    fn name(&self) -> &'static str {
        "mean-elements"
    }

    fn longitude_rad(
        &self,
        body: Body,
        observer: &GeoLocation,
        at: NaiveDateTime,
    ) -> Result<f64, EphemerisError> {
        check_observer(observer)?;
        let t = jd_to_centuries(Self::checked_jd(&at)?);
        let lon = match body {
            // Meeus' lunar theory is already referred to the equinox of date.
            Body::Moon => moon_longitude_rad(t),
            Body::Sun => of_date(EARTH_MOON_BARY.heliocentric_longitude_rad(t) + PI, t),
            Body::Mercury => of_date(MERCURY.heliocentric_longitude_rad(t), t),
            Body::Venus => of_date(VENUS.heliocentric_longitude_rad(t), t),
            Body::Mars => of_date(MARS.heliocentric_longitude_rad(t), t),
            Body::Jupiter => of_date(JUPITER.heliocentric_longitude_rad(t), t),
            Body::Saturn => of_date(SATURN.heliocentric_longitude_rad(t), t),
        };
        trace!(body = body.name(), t, lon_deg = lon.to_degrees(), "mean-element longitude");
        Ok(lon)
    }

    fn local_sidereal_time_rad(
        &self,
        observer: &GeoLocation,
        at: NaiveDateTime,
    ) -> Result<f64, EphemerisError> {
        check_observer(observer)?;
        let jd = Self::checked_jd(&at)?;
        Ok(local_sidereal_time_rad(gmst_rad(jd), observer.longitude_rad()))
    }
}
