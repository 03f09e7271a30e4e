//! Fixed city-to-coordinate table.
//!
//! Lookups are case-insensitive on the trimmed city name. Places not in
//! the table resolve to the configured default location unless the
//! configuration asks for rejection.

use jataka_config::UnknownPlace;
use jataka_time::GeoLocation;
use tracing::warn;

use crate::error::ReadingError;

const fn loc(latitude_deg: f64, longitude_deg: f64) -> GeoLocation {
    GeoLocation {
        latitude_deg,
        longitude_deg,
    }
}

/// Known cities, lowercase.
pub const CITY_COORDINATES: [(&str, GeoLocation); 15] = [
    ("mumbai", loc(19.0760, 72.8777)),
    ("delhi", loc(28.7041, 77.1025)),
    ("bangalore", loc(12.9716, 77.5946)),
    ("chennai", loc(13.0827, 80.2707)),
    ("kolkata", loc(22.5726, 88.3639)),
    ("hyderabad", loc(17.3850, 78.4867)),
    ("pune", loc(18.5204, 73.8567)),
    ("ahmedabad", loc(23.0225, 72.5714)),
    ("jaipur", loc(26.9124, 75.7873)),
    ("lucknow", loc(26.8467, 80.9462)),
    ("new york", loc(40.7128, -74.0060)),
    ("london", loc(51.5074, -0.1278)),
    ("tokyo", loc(35.6762, 139.6503)),
    ("sydney", loc(-33.8688, 151.2093)),
    ("toronto", loc(43.6532, -79.3832)),
];

/// City part of a "City, Country" place string.
pub fn city_from_place(place: &str) -> &str {
    place.split(',').next().unwrap_or_default().trim()
}

/// Coordinates of a known city.
pub fn lookup_city(city: &str) -> Option<GeoLocation> {
    let needle = city.trim();
    CITY_COORDINATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map(|(_, location)| *location)
}

/// Outcome of resolving a birth place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceResolution {
    pub location: GeoLocation,
    /// False when the default location was substituted.
    pub matched: bool,
}

/// Resolve a "City, Country" place string to coordinates.
pub fn resolve_place(
    place: &str,
    policy: UnknownPlace,
    default_location: GeoLocation,
) -> Result<PlaceResolution, ReadingError> {
    let city = city_from_place(place);
    if let Some(location) = lookup_city(city) {
        return Ok(PlaceResolution {
            location,
            matched: true,
        });
    }
    match policy {
        UnknownPlace::Fallback => {
            warn!(
                city,
                latitude = default_location.latitude_deg,
                longitude = default_location.longitude_deg,
                "unknown birth place, using default location"
            );
            Ok(PlaceResolution {
                location: default_location,
                matched: false,
            })
        }
        UnknownPlace::Reject => Err(ReadingError::UnknownPlace(place.to_string())),
    }
}
