//! Mahadasha lookup by walking the Vimshottari cycle.
//!
//! Periods run back to back from the birth instant starting with the lord
//! of the Moon's nakshatra. There is no birth-balance adjustment: the first
//! period is taken at full length.

use chrono::{NaiveDateTime, TimeDelta};
use jataka_time::whole_days_between;
use tracing::{debug, warn};

use super::types::{
    ActivePeriod, DAYS_PER_YEAR, DashaOverflow, DashaPolicy, DashaState, FutureBirth,
    MahadashaPeriod,
};
use super::vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, nakshatra_lord, period_years,
    sequence_position,
};
use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

/// Lord whose mahadasha is running at birth for a Moon longitude.
pub fn starting_lord(moon_sidereal_lon_deg: f64) -> Graha {
    nakshatra_lord(nakshatra_from_longitude(moon_sidereal_lon_deg).nakshatra_index)
}

/// Years from `birth` to `now`, counted in whole days of 365.25-day years.
///
/// Negative when `now` precedes `birth`.
pub fn elapsed_years(birth: &NaiveDateTime, now: &NaiveDateTime) -> f64 {
    whole_days_between(birth, now) as f64 / DAYS_PER_YEAR
}

/// Last period of the cycle beginning with `start_lord`, fully elapsed.
fn final_period(start_lord: Graha, cycle_offset_years: f64, completed_cycles: u32) -> ActivePeriod {
    let lord = VIMSHOTTARI_SEQUENCE[(sequence_position(start_lord) + 8) % 9];
    let total = VIMSHOTTARI_TOTAL_YEARS as f64;
    ActivePeriod {
        lord,
        start_years: cycle_offset_years + total - period_years(lord) as f64,
        end_years: cycle_offset_years + total,
        remaining_years: 0.0,
        completed_cycles,
    }
}

/// Locate the active period `elapsed_years` after birth.
///
/// Negative elapsed time is treated as zero.
pub fn mahadasha_at(start_lord: Graha, elapsed_years: f64, overflow: DashaOverflow) -> ActivePeriod {
    let total = VIMSHOTTARI_TOTAL_YEARS as f64;
    let elapsed = elapsed_years.max(0.0);

    let (completed_cycles, within) = if elapsed < total {
        (0, elapsed)
    } else {
        match overflow {
            DashaOverflow::Clamp => return final_period(start_lord, 0.0, 0),
            DashaOverflow::Wrap => {
                let within = elapsed.rem_euclid(total);
                (((elapsed - within) / total).round() as u32, within)
            }
        }
    };
    let offset = completed_cycles as f64 * total;

    let start = sequence_position(start_lord);
    let mut cumulative = 0.0;
    for step in 0..VIMSHOTTARI_SEQUENCE.len() {
        let lord = VIMSHOTTARI_SEQUENCE[(start + step) % 9];
        let end = cumulative + period_years(lord) as f64;
        if end > within {
            return ActivePeriod {
                lord,
                start_years: offset + cumulative,
                end_years: offset + end,
                remaining_years: end - within,
                completed_cycles,
            };
        }
        cumulative = end;
    }
    final_period(start_lord, offset, completed_cycles)
}

/// Current mahadasha at `now` for a Moon at `moon_sidereal_lon_deg` at birth.
pub fn current_mahadasha(
    moon_sidereal_lon_deg: f64,
    birth: &NaiveDateTime,
    now: &NaiveDateTime,
    policy: DashaPolicy,
) -> Result<DashaState, VedicError> {
    let nakshatra = nakshatra_from_longitude(moon_sidereal_lon_deg);
    let start_lord = nakshatra_lord(nakshatra.nakshatra_index);

    let mut elapsed = elapsed_years(birth, now);
    if elapsed < 0.0 {
        match policy.future_birth {
            FutureBirth::ClampToZero => {
                warn!(
                    elapsed_years = elapsed,
                    "reference instant precedes birth, using zero elapsed time"
                );
                elapsed = 0.0;
            }
            FutureBirth::Reject => {
                return Err(VedicError::InvalidInput(
                    "birth instant is after the reference instant",
                ));
            }
        }
    }

    let active = mahadasha_at(start_lord, elapsed, policy.overflow);
    debug!(
        nakshatra = nakshatra.nakshatra.name(),
        start_lord = start_lord.english_name(),
        elapsed_years = elapsed,
        mahadasha = active.lord.english_name(),
        remaining_years = active.remaining_years,
        completed_cycles = active.completed_cycles,
        "located mahadasha"
    );

    Ok(DashaState {
        mahadasha: active.lord,
        remaining_years: active.remaining_years,
        birth_nakshatra: nakshatra.nakshatra,
        elapsed_years: elapsed,
        period_start_years: active.start_years,
        period_end_years: active.end_years,
        completed_cycles: active.completed_cycles,
    })
}

fn offset_from(birth: &NaiveDateTime, years: u32) -> Option<NaiveDateTime> {
    let secs = (years as f64 * DAYS_PER_YEAR * 86_400.0).round() as i64;
    TimeDelta::try_seconds(secs).and_then(|d| birth.checked_add_signed(d))
}

/// The nine mahadasha windows of the single cycle beginning at birth.
///
/// Windows whose dates fall outside the representable calendar are omitted.
pub fn mahadasha_sequence(moon_sidereal_lon_deg: f64, birth: &NaiveDateTime) -> Vec<MahadashaPeriod> {
    let start = sequence_position(starting_lord(moon_sidereal_lon_deg));
    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cumulative = 0;
    for step in 0..VIMSHOTTARI_SEQUENCE.len() {
        let lord = VIMSHOTTARI_SEQUENCE[(start + step) % 9];
        let years = period_years(lord);
        let (Some(from), Some(to)) = (
            offset_from(birth, cumulative),
            offset_from(birth, cumulative + years),
        ) else {
            break;
        };
        periods.push(MahadashaPeriod {
            lord,
            start: from,
            end: to,
            years,
        });
        cumulative += years;
    }
    periods
}
