//! Reading generation from raw input against a fixed ephemeris.

use chrono::{NaiveDate, NaiveDateTime};
use jataka_config::{DEFAULT_BIRTH_PLACE, EngineConfig, UnknownPlace};
use jataka_ephem::{Body, FixedEphemeris};
use jataka_reading::{BirthDetails, ReadingError, generate_reading, resolve_place, save_reading};
use jataka_vedic_base::{Graha, Nakshatra, Rashi};

fn provider() -> FixedEphemeris {
    FixedEphemeris::uniform(200.0, 90.0).with_longitude_deg(Body::Moon, 45.0)
}

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn details() -> BirthDetails {
    BirthDetails::from_input(
        "Ravi Kumar",
        "15-01-1990",
        "12:00 PM",
        "Delhi, India",
        &EngineConfig::default(),
    )
    .unwrap()
}

#[test]
fn atlantis_resolves_to_default_location() {
    let r = resolve_place("Atlantis", UnknownPlace::Fallback, DEFAULT_BIRTH_PLACE).unwrap();
    assert!(!r.matched);
    assert_eq!(r.location.latitude_deg, 28.7041);
    assert_eq!(r.location.longitude_deg, 77.1025);
}

#[test]
fn header_reflects_computed_values() {
    let reading =
        generate_reading(&provider(), &details(), &EngineConfig::default(), reference()).unwrap();

    assert_eq!(reading.context.dasha.birth_nakshatra, Nakshatra::Bharani);
    assert_eq!(reading.context.mahadasha(), Graha::Shukra);
    assert_eq!(reading.context.lagna.rashi, Rashi::Kanya);

    let text = &reading.text;
    assert!(text.contains("VEDIC ASTROLOGY READING FOR RAVI KUMAR"));
    assert!(text.contains("Birth Date: 15-01-1990"));
    assert!(text.contains("Birth Time: 12:00 PM"));
    assert!(text.contains("Birth Place: Delhi, India"));
    assert!(text.contains("Rising Sign: Virgo"));
    assert!(text.contains("Current Mahadasha: Venus"));
    assert!(text.contains("Birth Nakshatra: Bharani"));
}

#[test]
fn sections_follow_mahadasha() {
    let reading =
        generate_reading(&provider(), &details(), &EngineConfig::default(), reference()).unwrap();
    let text = &reading.text;

    assert!(text.contains("NEXT 6 MONTHS (Jan 2000 - Jun 2000):"));
    assert!(text.contains("NEXT 2 YEARS (2000-2002):"));
    assert!(text.contains("Focus on emotional well-being and stress management"));
    assert!(text.contains(
        "Current Dasha (Venus) suggests: Good overall health, minor reproductive system attention"
    ));
    assert!(text.contains("Primary alignment: Arts, Entertainment, Beauty, Luxury, Fashion"));
    assert!(text.contains("HARMONIOUS PERIOD"));
    assert!(text.contains("Focus on growth, learning, and positive relationships"));
    // Mars and Venus sit in Virgo
    assert!(text.contains("Steady health with focus on building immunity"));
    assert!(!text.contains("Strong relationship potential"));
    assert!(text.ends_with("=".repeat(60).as_str()));
}

#[test]
fn missing_body_fails_the_reading() {
    let broken = provider().without_body(Body::Jupiter);
    let err = generate_reading(&broken, &details(), &EngineConfig::default(), reference())
        .unwrap_err();
    assert!(matches!(err, ReadingError::Vedic(_)));
}

#[test]
fn rejecting_unknown_places() {
    let config = EngineConfig {
        unknown_place: UnknownPlace::Reject,
        ..EngineConfig::default()
    };
    let err = BirthDetails::from_input("X", "15-01-1990", "12:00", "Atlantis", &config).unwrap_err();
    assert!(matches!(err, ReadingError::UnknownPlace(_)));
}

#[test]
fn saved_reading_matches_text() {
    let dir = tempfile::tempdir().unwrap();
    let reading =
        generate_reading(&provider(), &details(), &EngineConfig::default(), reference()).unwrap();
    let path = save_reading(dir.path(), "Ravi Kumar", &reading.text).unwrap();
    assert!(path.ends_with("Ravi_Kumar_vedic_reading.txt"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), reading.text);
}
