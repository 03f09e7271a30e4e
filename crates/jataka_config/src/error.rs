use std::io;
use std::path::PathBuf;

use jataka_time::TimeError;
use thiserror::Error;

/// Errors loading or validating configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("config JSON error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] TimeError),
}
