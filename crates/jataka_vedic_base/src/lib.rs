//! Sidereal birth-chart computation on top of an ephemeris provider.
//!
//! This crate provides:
//! - Rashi (sign) and nakshatra (lunar mansion) lookup from any longitude
//! - Linear ayanamsa anchored at 23.85 deg in 1900
//! - Mean lunar node (Rahu/Ketu) estimation
//! - Nine-graha chart construction, all-or-nothing
//! - Lagna (ascendant) from local sidereal time
//! - Vimshottari mahadasha sequencing
//!
//! The ayanamsa and node models are low-order closed forms: a linear
//! drift and a linear node regression.

pub mod ayanamsa;
pub mod chart;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use ayanamsa::{ayanamsa_deg, fractional_year};
pub use chart::{Chart, GrahaPosition, build_chart};
pub use dasha::{
    DashaOverflow, DashaPolicy, DashaState, FutureBirth, MahadashaPeriod, current_mahadasha,
    mahadasha_sequence,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use lagna::{AscendantFormula, LagnaInfo, ascendant};
pub use lunar_nodes::{LunarNodes, mean_nodes};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use rashi::{
    ALL_RASHIS, DMS_DEGREE_LIMIT, Dms, Rashi, RashiInfo, checked_deg_to_dms, deg_to_dms,
    rashi_from_longitude,
};
pub use util::normalize_360;
