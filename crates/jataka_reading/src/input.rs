//! Parsing of the textual birth date and time.

use chrono::{NaiveDate, NaiveTime};
use jataka_config::TimeFallback;
use tracing::warn;

use crate::error::ReadingError;

/// Accepted time layouts, tried in order.
const TIME_FORMATS: [&str; 2] = ["%I:%M %p", "%H:%M"];

/// Parse a `DD-MM-YYYY` birth date.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, ReadingError> {
    NaiveDate::parse_from_str(text.trim(), "%d-%m-%Y")
        .map_err(|_| ReadingError::InvalidDate(text.trim().to_string()))
}

/// Parse `HH:MM AM/PM` or 24-hour `HH:MM`.
pub fn parse_birth_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

/// Birth time after applying the fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTime {
    pub time: NaiveTime,
    /// True when the input was unparseable and noon was substituted.
    pub defaulted: bool,
}

/// Parse a birth time, substituting 12:00 when the policy allows.
pub fn resolve_birth_time(text: &str, policy: TimeFallback) -> Result<ParsedTime, ReadingError> {
    if let Some(time) = parse_birth_time(text) {
        return Ok(ParsedTime {
            time,
            defaulted: false,
        });
    }
    match policy {
        TimeFallback::DefaultNoon => {
            warn!(input = text, "unparseable birth time, using 12:00");
            let noon = NaiveTime::from_hms_opt(12, 0, 0)
                .ok_or_else(|| ReadingError::InvalidTime(text.trim().to_string()))?;
            Ok(ParsedTime {
                time: noon,
                defaulted: true,
            })
        }
        TimeFallback::Reject => Err(ReadingError::InvalidTime(text.trim().to_string())),
    }
}
