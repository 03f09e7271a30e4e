//! Julian Date arithmetic on naive calendar timestamps.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Gregorian calendar date to Julian Date.
///
/// `day` may carry a fractional part for the time of day. Valid for all
/// Gregorian dates (Meeus, "Astronomical Algorithms", Ch. 7).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Julian Date of a naive timestamp, treated as UTC.
pub fn jd_from_datetime(dt: &NaiveDateTime) -> f64 {
    let seconds = dt.hour() as f64 * 3600.0 + dt.minute() as f64 * 60.0 + dt.second() as f64;
    calendar_to_jd(dt.year(), dt.month(), dt.day() as f64 + seconds / SECONDS_PER_DAY)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36525.0
}

/// Whole days from `from` to `to`, rounded toward negative infinity.
///
/// A span of -0.5 days counts as -1 whole day, so the day count of a
/// timestamp never depends on which side of midnight its sign flips.
pub fn whole_days_between(from: &NaiveDateTime, to: &NaiveDateTime) -> i64 {
    (*to - *from).num_seconds().div_euclid(86_400)
}
