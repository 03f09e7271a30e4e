//! Property tests for the angle/sign normalizer, node estimator and ayanamsa.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use jataka_vedic_base::{
    ayanamsa_deg, mean_nodes, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};
use proptest::prelude::*;

fn circular_diff(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    d.min(360.0 - d)
}

fn date_from_offset(days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1800, 1, 1).unwrap() + Duration::days(days)
}

fn datetime_from_offset(minutes: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1800, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + Duration::minutes(minutes)
}

// 1800-01-01 .. 2100-01-01
const DAY_SPAN: i64 = 109_572;

proptest! {
    #[test]
    fn sign_and_degree_in_range(x in -1.0e6f64..1.0e6) {
        let info = rashi_from_longitude(x);
        prop_assert!(info.rashi_index <= 11);
        prop_assert!((0.0..30.0).contains(&info.degrees_in_rashi));
        let rebuilt = info.rashi_index as f64 * 30.0 + info.degrees_in_rashi;
        prop_assert!(circular_diff(rebuilt, x) < 1e-6, "x={x} rebuilt={rebuilt}");
    }

    #[test]
    fn mansion_and_pada_in_range(x in -1.0e6f64..1.0e6) {
        let info = nakshatra_from_longitude(x);
        prop_assert!(info.nakshatra_index <= 26);
        prop_assert!((1..=4).contains(&info.pada));
    }

    #[test]
    fn ketu_exactly_opposite_rahu(minutes in 0i64..DAY_SPAN * 1440) {
        let nodes = mean_nodes(&datetime_from_offset(minutes));
        prop_assert_eq!(nodes.ketu_deg, normalize_360(nodes.rahu_deg + 180.0));
        prop_assert!((0.0..360.0).contains(&nodes.rahu_deg));
        prop_assert!((0.0..360.0).contains(&nodes.ketu_deg));
    }

    #[test]
    fn ayanamsa_strictly_increasing(day in 0i64..DAY_SPAN, step in 1i64..400) {
        let a = date_from_offset(day);
        let b = date_from_offset(day + step);
        prop_assert!(ayanamsa_deg(a) < ayanamsa_deg(b), "{a} vs {b}");
    }
}

#[test]
fn ketu_opposite_around_node_epoch() {
    for (y, m, d) in [(1899, 12, 31), (1900, 1, 1), (1900, 1, 2), (1850, 6, 15), (2024, 3, 20)] {
        let at = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(5, 30, 0)
            .unwrap();
        let nodes = mean_nodes(&at);
        assert_eq!(nodes.ketu_deg, normalize_360(nodes.rahu_deg + 180.0));
    }
}

#[test]
fn ayanamsa_consecutive_days_increase() {
    let mut date = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
    let mut prev = ayanamsa_deg(date);
    for _ in 0..800 {
        date = date.succ_opt().unwrap();
        let next = ayanamsa_deg(date);
        assert!(next > prev, "not increasing at {date}");
        prev = next;
    }
}

#[test]
fn ayanamsa_at_epoch_is_exact() {
    assert_eq!(ayanamsa_deg(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()), 23.85);
}
