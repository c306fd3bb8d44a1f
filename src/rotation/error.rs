use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    #[error("Failed to list backup folder {path:?}: {source}")]
    ListFolder { path: PathBuf, source: io::Error },

    #[error("Failed to read size of '{filename}': {source}")]
    FileSize { filename: String, source: io::Error },

    #[error("Failed to delete '{filename}': {source}")]
    Delete { filename: String, source: io::Error },

    #[error("Failed to write report to {path:?}: {source}")]
    WriteReport { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, RotationError>;
