//! Per-request computation results shared by all reading sections.

use chrono::NaiveDateTime;
use jataka_config::EngineConfig;
use jataka_ephem::EphemerisProvider;
use jataka_time::BirthMoment;
use jataka_vedic_base::{
    Chart, DashaState, Graha, LagnaInfo, Rashi, VedicError, ascendant, build_chart,
    current_mahadasha,
};
use serde::Serialize;

use crate::error::ReadingError;

/// Chart, ascendant and current mahadasha for one birth at one reference
/// instant. Built fresh for each reading and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingContext {
    pub chart: Chart,
    pub lagna: LagnaInfo,
    pub dasha: DashaState,
    /// Instant the mahadasha was evaluated at.
    pub reference: NaiveDateTime,
}

impl ReadingContext {
    pub fn compute<P>(
        provider: &P,
        moment: &BirthMoment,
        config: &EngineConfig,
        reference: NaiveDateTime,
    ) -> Result<Self, ReadingError>
    where
        P: EphemerisProvider + ?Sized,
    {
        let chart = build_chart(provider, moment)?;
        let lagna = ascendant(provider, moment, config.ascendant_formula)?;
        let moon = chart
            .get(Graha::Chandra)
            .ok_or(VedicError::InvalidInput("chart has no Moon position"))?;
        let dasha = current_mahadasha(
            moon.sidereal_lon_deg,
            &moment.datetime(),
            &reference,
            config.dasha_policy(),
        )?;

        Ok(Self {
            chart,
            lagna,
            dasha,
            reference,
        })
    }

    pub fn mahadasha(&self) -> Graha {
        self.dasha.mahadasha
    }

    /// Birth rashi of a graha.
    pub fn rashi_of(&self, graha: Graha) -> Option<Rashi> {
        self.chart.rashi_of(graha)
    }
}
