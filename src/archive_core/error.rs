use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Filesystem errors
    #[error("Directory walker error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    // Resolution errors
    #[error(
        "Unable to verify that {0} is a media file, it's either not supported or not a media file"
    )]
    UnsupportedMedia(PathBuf),

    #[error("Failed to load required metadata from {0}")]
    UnresolvedDate(PathBuf),

    #[error("Date formatting error: {0}")]
    DateFormat(#[from] time::error::Format),

    // Organizer errors
    #[error("No file name in path: {0}")]
    MissingFileName(PathBuf),
}

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;
