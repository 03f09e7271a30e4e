//! Vimshottari dasha (planetary period) sequencing.
//!
//! The birth nakshatra of the Moon picks the starting lord; the nine lords
//! then rule in fixed order for 7, 20, 6, 10, 7, 18, 16, 19 and 17 years,
//! a 120-year cycle. Only the mahadasha level is modelled.

pub mod sequencer;
pub mod types;
pub mod vimshottari;

pub use sequencer::{
    current_mahadasha, elapsed_years, mahadasha_at, mahadasha_sequence, starting_lord,
};
pub use types::{
    ActivePeriod, DAYS_PER_YEAR, DashaOverflow, DashaPolicy, DashaState, FutureBirth,
    MahadashaPeriod,
};
pub use vimshottari::{
    NAKSHATRA_LORDS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    nakshatra_lord, period_years, sequence_position,
};
