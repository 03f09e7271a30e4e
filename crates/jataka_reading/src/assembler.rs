//! Full reading: header plus the four narrative sections.

use chrono::NaiveDateTime;
use jataka_config::EngineConfig;
use jataka_ephem::EphemerisProvider;
use tracing::info;

use crate::context::ReadingContext;
use crate::details::BirthDetails;
use crate::error::ReadingError;
use crate::narrative::{
    ForecastCalendar, SUMMARY_RULE_WIDTH, career_section, family_section, health_section,
    recommendations_section,
};

/// Width of the star banner around the reading title.
const BANNER_WIDTH: usize = 60;

/// A rendered reading with the values it was rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub text: String,
    pub context: ReadingContext,
}

/// Render a reading from precomputed results.
pub fn compose_reading(details: &BirthDetails, ctx: &ReadingContext) -> String {
    let cal = ForecastCalendar::starting(ctx.reference.date());
    let banner = "*".repeat(BANNER_WIDTH);
    let rule = "=".repeat(SUMMARY_RULE_WIDTH);

    let header = [
        banner.clone(),
        format!("    VEDIC ASTROLOGY READING FOR {}", details.name.to_uppercase()),
        banner,
        format!("Birth Date: {}", details.birth_date().format("%d-%m-%Y")),
        format!("Birth Time: {}", details.birth_time_text),
        format!("Birth Place: {}", details.birth_place),
        format!("Rising Sign: {}", ctx.lagna.rashi.western_name()),
        format!("Current Mahadasha: {}", ctx.mahadasha().english_name()),
        format!("Birth Nakshatra: {}", ctx.dasha.birth_nakshatra.name()),
    ]
    .join("\n");

    let footer = [
        rule.clone(),
        "Reading generated using traditional Vedic astrology principles".to_string(),
        "For specific concerns, consult with a qualified astrologer".to_string(),
        rule,
    ]
    .join("\n");

    [
        header,
        health_section(ctx, &cal),
        career_section(ctx, &cal),
        family_section(ctx, &cal),
        recommendations_section(ctx, &cal),
        footer,
    ]
    .join("\n\n\n")
}

/// Compute and render a reading for `details` as of `reference`.
pub fn generate_reading<P>(
    provider: &P,
    details: &BirthDetails,
    config: &EngineConfig,
    reference: NaiveDateTime,
) -> Result<Reading, ReadingError>
where
    P: EphemerisProvider + ?Sized,
{
    let context = ReadingContext::compute(provider, &details.moment, config, reference)?;
    info!(
        name = %details.name,
        rising = context.lagna.rashi.western_name(),
        mahadasha = context.mahadasha().english_name(),
        "generated reading"
    );
    Ok(Reading {
        text: compose_reading(details, &context),
        context,
    })
}
