//! Typed engine configuration.
//!
//! Every field has a default that reproduces the historical behaviour, so
//! an empty JSON object (or no file at all) is a valid configuration.
//! The file is located by an explicit path, then the `JATAKA_CONFIG`
//! environment variable.

mod error;
mod policy;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use jataka_time::GeoLocation;
use jataka_vedic_base::{AscendantFormula, DashaOverflow, DashaPolicy, FutureBirth};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;
pub use policy::{TimeFallback, UnknownPlace};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "JATAKA_CONFIG";

/// Location used when a birth place is not in the geocoding table (New Delhi).
pub const DEFAULT_BIRTH_PLACE: GeoLocation = GeoLocation {
    latitude_deg: 28.7041,
    longitude_deg: 77.1025,
};

/// Engine-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub ascendant_formula: AscendantFormula,
    pub dasha_overflow: DashaOverflow,
    pub future_birth: FutureBirth,
    pub unknown_place: UnknownPlace,
    pub time_fallback: TimeFallback,
    pub default_location: GeoLocation,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ascendant_formula: AscendantFormula::default(),
            dasha_overflow: DashaOverflow::default(),
            future_birth: FutureBirth::default(),
            unknown_place: UnknownPlace::default(),
            time_fallback: TimeFallback::default(),
            default_location: DEFAULT_BIRTH_PLACE,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from `explicit`, else from the file named by `JATAKA_CONFIG`,
    /// else return the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR);
        match config_path(explicit, from_env) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Reject a default location outside the geographic range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_location.validate()?;
        Ok(())
    }

    pub fn dasha_policy(&self) -> DashaPolicy {
        DashaPolicy {
            overflow: self.dasha_overflow,
            future_birth: self.future_birth,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Parse)
    }
}

/// Pick the configuration file: explicit path first, then the environment
/// value. Empty environment values are ignored.
fn config_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn policies_parse_kebab_case() {
        let config = EngineConfig::from_json(
            r#"{
                "ascendant_formula": "corrected",
                "dasha_overflow": "clamp",
                "future_birth": "reject",
                "unknown_place": "reject",
                "time_fallback": "reject"
            }"#,
        )
        .unwrap();
        assert_eq!(config.ascendant_formula, AscendantFormula::Corrected);
        assert_eq!(config.dasha_overflow, DashaOverflow::Clamp);
        assert_eq!(config.future_birth, FutureBirth::Reject);
        assert_eq!(config.unknown_place, UnknownPlace::Reject);
        assert_eq!(config.time_fallback, TimeFallback::Reject);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = EngineConfig::from_json(r#"{"ayanamsa": "lahiri"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_default_location_rejected() {
        let err = EngineConfig::from_json(
            r#"{"default_location": {"latitude_deg": 95.0, "longitude_deg": 0.0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn explicit_path_wins_over_env() {
        let path = config_path(Some(Path::new("a.json")), Some(OsString::from("b.json")));
        assert_eq!(path, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn env_path_used_when_no_explicit() {
        let path = config_path(None, Some(OsString::from("b.json")));
        assert_eq!(path, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn empty_env_ignored() {
        assert_eq!(config_path(None, Some(OsString::new())), None);
        assert_eq!(config_path(None, None), None);
    }

    #[test]
    fn dasha_policy_mirrors_fields() {
        let config = EngineConfig {
            dasha_overflow: DashaOverflow::Clamp,
            ..EngineConfig::default()
        };
        assert_eq!(config.dasha_policy().overflow, DashaOverflow::Clamp);
        assert_eq!(config.dasha_policy().future_birth, FutureBirth::ClampToZero);
    }
}
