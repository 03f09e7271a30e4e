//! Linear ayanamsa.
//!
//! The ayanamsa is the angular offset between the tropical zodiac and the
//! sidereal zodiac. This model anchors it at 23.85 deg at the start of 1900
//! and lets it drift at a constant 50"/year (0.013888889 deg/year). Only
//! the calendar date enters; the time of day does not.

use chrono::{Datelike, NaiveDate};

/// Ayanamsa at 1900-01-01, degrees.
pub const AYANAMSA_1900_DEG: f64 = 23.85;

/// Annual drift, degrees per year.
pub const AYANAMSA_RATE_DEG_PER_YEAR: f64 = 0.013_888_889;

/// Reference year of the linear model.
pub const AYANAMSA_EPOCH_YEAR: f64 = 1900.0;

/// Year as a fraction: `year + (month - 1)/12 + (day - 1)/365.25`.
///
/// Not a true day-of-year fraction, but strictly increasing across every
/// calendar date since no month exceeds 31 days.
pub fn fractional_year(date: NaiveDate) -> f64 {
    date.year() as f64 + (date.month0() as f64) / 12.0 + (date.day0() as f64) / 365.25
}

/// Ayanamsa in degrees for a calendar date.
pub fn ayanamsa_deg(date: NaiveDate) -> f64 {
    AYANAMSA_1900_DEG + (fractional_year(date) - AYANAMSA_EPOCH_YEAR) * AYANAMSA_RATE_DEG_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_at_epoch() {
        assert_eq!(ayanamsa_deg(date(1900, 1, 1)), 23.85);
    }

    #[test]
    fn fractional_year_components() {
        let fy = fractional_year(date(2000, 7, 11));
        assert!((fy - (2000.0 + 0.5 + 10.0 / 365.25)).abs() < 1e-9);
    }

    #[test]
    fn century_drift() {
        // 100 years at 50"/yr = 1.3888889 deg
        let a = ayanamsa_deg(date(2000, 1, 1));
        assert!((a - (23.85 + 1.3888889)).abs() < 1e-6);
    }

    #[test]
    fn month_end_precedes_next_month() {
        assert!(ayanamsa_deg(date(2024, 1, 31)) < ayanamsa_deg(date(2024, 2, 1)));
        assert!(ayanamsa_deg(date(2023, 12, 31)) < ayanamsa_deg(date(2024, 1, 1)));
    }

    #[test]
    fn before_epoch_is_smaller() {
        assert!(ayanamsa_deg(date(1850, 6, 1)) < AYANAMSA_1900_DEG);
    }
}
