//! Core types for mahadasha calculations.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// What to do once elapsed time passes the end of the 120-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashaOverflow {
    /// Continue into the next cycle (elapsed taken modulo 120 years).
    #[default]
    Wrap,
    /// Stay on the final lord of the single cycle with 0 years remaining.
    Clamp,
}

/// What to do when the reference instant precedes the birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FutureBirth {
    /// Treat elapsed time as zero.
    #[default]
    ClampToZero,
    /// Fail with `VedicError::InvalidInput`.
    Reject,
}

/// Edge-case policies for the dasha sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaPolicy {
    pub overflow: DashaOverflow,
    pub future_birth: FutureBirth,
}

/// Active period located by walking the cycle, as year offsets from birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivePeriod {
    pub lord: Graha,
    /// Offset of the period start from birth, years.
    pub start_years: f64,
    /// Offset of the period end from birth, years.
    pub end_years: f64,
    /// Years left in the period, in [0, period length].
    pub remaining_years: f64,
    /// Completed 120-year cycles before this period.
    pub completed_cycles: u32,
}

/// Current mahadasha at a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaState {
    pub mahadasha: Graha,
    pub remaining_years: f64,
    pub birth_nakshatra: Nakshatra,
    /// Years between birth and the reference instant (whole days / 365.25),
    /// after the future-birth policy is applied.
    pub elapsed_years: f64,
    pub period_start_years: f64,
    pub period_end_years: f64,
    pub completed_cycles: u32,
}

/// One mahadasha window in calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MahadashaPeriod {
    pub lord: Graha,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub years: u32,
}
