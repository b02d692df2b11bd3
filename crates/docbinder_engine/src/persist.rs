use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output location not writable: {0}")]
    OutputLocation(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Atomically writes the aggregated document to `path`: temp file in the
/// target's directory, flush and sync, then rename over the target.
pub fn write_output(path: &Path, content: &str) -> Result<(), PersistError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputLocation(e.to_string()))?;
    }

    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputLocation(e.to_string()))?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace any previous run's output.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|e| PersistError::Io(e.error))?;
    Ok(())
}
