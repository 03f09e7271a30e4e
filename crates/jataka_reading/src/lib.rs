//! Narrative birth-chart readings.
//!
//! Turns loosely formatted user input (name, `DD-MM-YYYY` date, 12/24 hour
//! time, "City, Country" place) into a [`BirthDetails`], computes the
//! chart, ascendant and current mahadasha into a [`ReadingContext`], and
//! renders the health, career, family and recommendation sections.

pub mod assembler;
pub mod context;
pub mod details;
pub mod error;
pub mod geocode;
pub mod input;
pub mod narrative;
pub mod save;

pub use assembler::{Reading, compose_reading, generate_reading};
pub use context::ReadingContext;
pub use details::BirthDetails;
pub use error::ReadingError;
pub use geocode::{CITY_COORDINATES, PlaceResolution, city_from_place, lookup_city, resolve_place};
pub use input::{ParsedTime, parse_birth_date, parse_birth_time, resolve_birth_time};
pub use save::{reading_filename, save_reading};
