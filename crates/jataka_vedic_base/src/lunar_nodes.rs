//! Mean lunar node (Rahu/Ketu) estimation.
//!
//! The ascending node regresses linearly from 125.044522 deg at
//! 1900-01-01 00:00 at 0.0529539222 deg per whole day. Ketu is always
//! exactly opposite Rahu. Node longitudes are used as-is, without
//! ayanamsa correction.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::util::normalize_360;

/// Mean Rahu at 1900-01-01 00:00, degrees.
pub const NODE_EPOCH_LON_DEG: f64 = 125.044_522;

/// Daily regression of the mean node, degrees per day.
pub const NODE_RATE_DEG_PER_DAY: f64 = 0.052_953_922_2;

/// Days from 1900-01-01 to 1970-01-01.
const NODE_EPOCH_TO_UNIX_DAYS: i64 = 25_567;

const SECONDS_PER_DAY: i64 = 86_400;

/// Both node longitudes for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarNodes {
    /// Rahu longitude in [0, 360).
    pub rahu_deg: f64,
    /// Ketu longitude in [0, 360).
    pub ketu_deg: f64,
}

/// Whole days elapsed since 1900-01-01 00:00, floored.
///
/// Instants before the epoch give negative counts; a partial day before
/// the epoch counts as -1.
pub fn days_since_node_epoch(at: &NaiveDateTime) -> i64 {
    let secs = at.and_utc().timestamp() + NODE_EPOCH_TO_UNIX_DAYS * SECONDS_PER_DAY;
    secs.div_euclid(SECONDS_PER_DAY)
}

/// Mean Rahu and Ketu at an instant.
pub fn mean_nodes(at: &NaiveDateTime) -> LunarNodes {
    let days = days_since_node_epoch(at) as f64;
    let rahu_deg = normalize_360(NODE_EPOCH_LON_DEG - NODE_RATE_DEG_PER_DAY * days);
    LunarNodes {
        rahu_deg,
        ketu_deg: normalize_360(rahu_deg + 180.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_since_node_epoch(&at(1900, 1, 1, 0, 0)), 0);
        assert_eq!(days_since_node_epoch(&at(1900, 1, 1, 23, 59)), 0);
        assert_eq!(days_since_node_epoch(&at(1900, 1, 2, 0, 0)), 1);
    }

    #[test]
    fn pre_epoch_partial_day_is_minus_one() {
        assert_eq!(days_since_node_epoch(&at(1899, 12, 31, 12, 0)), -1);
    }

    #[test]
    fn unix_epoch_offset() {
        assert_eq!(days_since_node_epoch(&at(1970, 1, 1, 0, 0)), 25_567);
    }

    #[test]
    fn epoch_longitude() {
        let n = mean_nodes(&at(1900, 1, 1, 6, 0));
        assert!((n.rahu_deg - 125.044522).abs() < 1e-12);
        assert!((n.ketu_deg - 305.044522).abs() < 1e-9);
    }

    #[test]
    fn regression_after_one_day() {
        let n = mean_nodes(&at(1900, 1, 2, 0, 0));
        assert!((n.rahu_deg - (125.044522 - 0.0529539222)).abs() < 1e-12);
    }
}
