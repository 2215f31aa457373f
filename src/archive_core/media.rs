use crate::archive_core::error::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use time::PrimitiveDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

/// Date format for destination directory names (YYYY-MM-DD).
pub const DIR_DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

/// Media file suffixes. Matched case-sensitively against the whole path.
const MEDIA_EXTENSIONS: &[&str] = &[".tiff", ".png", ".jpg", ".jpeg", ".mp4", ".avi", ".mov"];

/// A media file whose creation date has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub created_at: PrimitiveDateTime,
}

impl MediaFile {
    pub fn new(path: PathBuf, created_at: PrimitiveDateTime) -> Self {
        Self { path, created_at }
    }

    /// Base file name, independent of directory components.
    pub fn filename(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Creation date formatted as YYYY-MM-DD.
    pub fn created_date(&self) -> Result<String> {
        Ok(self.created_at.format(DIR_DATE_FORMAT)?)
    }
}

pub fn has_media_extension(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    MEDIA_EXTENSIONS.iter().any(|ext| bytes.ends_with(ext.as_bytes()))
}
