//! Boundary fallback policies.

use serde::{Deserialize, Serialize};

/// Handling of birth places missing from the geocoding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownPlace {
    /// Use the configured default location.
    #[default]
    Fallback,
    /// Fail the reading.
    Reject,
}

/// Handling of birth times that match no accepted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFallback {
    /// Use 12:00.
    #[default]
    DefaultNoon,
    /// Fail the reading.
    Reject,
}
