//! Validated birth details for one reading.

use chrono::NaiveDate;
use jataka_config::EngineConfig;
use jataka_time::BirthMoment;

use crate::error::ReadingError;
use crate::geocode::resolve_place;
use crate::input::{parse_birth_date, resolve_birth_time};

/// Everything the reading needs about the person, as entered plus resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthDetails {
    pub name: String,
    /// Birth time exactly as entered; shown in the reading header.
    pub birth_time_text: String,
    /// Birth place exactly as entered.
    pub birth_place: String,
    pub moment: BirthMoment,
    /// Noon was substituted for an unparseable time.
    pub time_defaulted: bool,
    /// The place was found in the geocoding table.
    pub place_matched: bool,
}

impl BirthDetails {
    /// Build from raw text fields.
    pub fn from_input(
        name: &str,
        date_text: &str,
        time_text: &str,
        place: &str,
        config: &EngineConfig,
    ) -> Result<Self, ReadingError> {
        let date = parse_birth_date(date_text)?;
        Self::from_date(name, date, time_text, place, config)
    }

    /// Build from an already validated date and raw time/place text.
    pub fn from_date(
        name: &str,
        date: NaiveDate,
        time_text: &str,
        place: &str,
        config: &EngineConfig,
    ) -> Result<Self, ReadingError> {
        let time = resolve_birth_time(time_text, config.time_fallback)?;
        let place_resolution = resolve_place(place, config.unknown_place, config.default_location)?;
        let moment = BirthMoment::new(date.and_time(time.time), place_resolution.location)?;

        Ok(Self {
            name: name.trim().to_string(),
            birth_time_text: time_text.trim().to_string(),
            birth_place: place.trim().to_string(),
            moment,
            time_defaulted: time.defaulted,
            place_matched: place_resolution.matched,
        })
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.moment.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use jataka_config::{DEFAULT_BIRTH_PLACE, TimeFallback};

    #[test]
    fn full_input() {
        let d = BirthDetails::from_input(
            " Asha Rao ",
            "15-01-1990",
            "10:30 PM",
            "Mumbai, India",
            &EngineConfig::default(),
        )
        .unwrap();
        assert_eq!(d.name, "Asha Rao");
        assert_eq!(d.birth_time_text, "10:30 PM");
        assert_eq!(
            d.moment.datetime().time(),
            NaiveTime::from_hms_opt(22, 30, 0).unwrap()
        );
        assert!((d.moment.location().latitude_deg - 19.0760).abs() < 1e-12);
        assert!(d.place_matched);
        assert!(!d.time_defaulted);
    }

    #[test]
    fn fallbacks_are_flagged() {
        let d = BirthDetails::from_input(
            "X",
            "01-06-2001",
            "sometime",
            "Atlantis",
            &EngineConfig::default(),
        )
        .unwrap();
        assert!(d.time_defaulted);
        assert!(!d.place_matched);
        assert_eq!(*d.moment.location(), DEFAULT_BIRTH_PLACE);
        assert_eq!(d.moment.datetime().time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn strict_time_policy_fails() {
        let config = EngineConfig {
            time_fallback: TimeFallback::Reject,
            ..EngineConfig::default()
        };
        let err = BirthDetails::from_input("X", "01-06-2001", "noonish", "Delhi", &config).unwrap_err();
        assert!(matches!(err, ReadingError::InvalidTime(_)));
    }
}
