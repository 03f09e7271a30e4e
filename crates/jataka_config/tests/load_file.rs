//! Configuration file loading.

use std::io::Write;

use jataka_config::{ConfigError, EngineConfig, UnknownPlace};
use jataka_vedic_base::AscendantFormula;
use tempfile::NamedTempFile;

#[test]
fn load_partial_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"unknown_place": "reject"}}"#).unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.unknown_place, UnknownPlace::Reject);
    assert_eq!(config.ascendant_formula, AscendantFormula::Compatible);
}

#[test]
fn explicit_path_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"ascendant_formula": "corrected"}}"#).unwrap();

    let config = EngineConfig::resolve(Some(file.path())).unwrap();
    assert_eq!(config.ascendant_formula, AscendantFormula::Corrected);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_file_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let err = EngineConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn pretty_json_round_trips() {
    let config = EngineConfig::default();
    let json = config.to_json_pretty().unwrap();
    assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
}
