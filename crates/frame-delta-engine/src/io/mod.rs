use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::editing::Patch;
use crate::playback::FrameSequence;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read a text file (base frame, encoded payload) in full
pub fn read_text(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write text to a file, creating parent directories as needed
pub fn write_text(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Read a patch stored as a JSON array of `[low, high, data]` triples
pub fn read_patch(path: &Path) -> Result<Patch, IoError> {
    read_json(path)
}

/// Read a frame sequence stored as `{"checkpoints": {...}, "diffs": [...]}`
pub fn read_frames(path: &Path) -> Result<FrameSequence, IoError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, IoError> {
    let content = read_text(path)?;
    let value = serde_json::from_str(&content).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {}", path.display());
    Ok(value)
}
