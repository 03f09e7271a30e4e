//! Writing a reading to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ReadingError;

/// `<name with spaces replaced by underscores>_vedic_reading.txt`.
pub fn reading_filename(name: &str) -> String {
    format!("{}_vedic_reading.txt", name.replace(' ', "_"))
}

/// Write `text` into `dir` under [`reading_filename`], replacing any
/// existing file. Returns the written path.
pub fn save_reading(dir: &Path, name: &str, text: &str) -> Result<PathBuf, ReadingError> {
    let path = dir.join(reading_filename(name));
    fs::write(&path, text).map_err(|source| ReadingError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "saved reading");
    Ok(path)
}
