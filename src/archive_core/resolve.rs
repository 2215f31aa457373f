use crate::archive_core::error::{ArchiveError, Result};
use crate::archive_core::exif::ExifDecoder;
use crate::archive_core::media::{MediaFile, has_media_extension};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use time::PrimitiveDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

/// Date embedded in a path, e.g. `2021-03-15T14:30:00` or `20190919_053857`.
///
/// Digits and separators are ASCII only.
static FILENAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([0-9]{4})-?([0-9]{2})-?([0-9]{2})[T \t\n\f\r_]*([0-9]{2})[:-]?([0-9]{2})[:-]?([0-9]{2}):?",
    )
    .unwrap()
});

const ISO_DATE_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// One tier of the date fallback chain.
pub trait DateSource {
    fn name(&self) -> &'static str;

    /// Creation timestamp for `path`, or `None` when this source does not apply.
    fn created_at(&self, path: &Path) -> Option<PrimitiveDateTime>;
}

/// Reads the date from embedded EXIF metadata.
pub struct EmbeddedMetadata<'a> {
    decoder: &'a ExifDecoder,
}

impl<'a> EmbeddedMetadata<'a> {
    pub fn new(decoder: &'a ExifDecoder) -> Self {
        Self { decoder }
    }
}

impl DateSource for EmbeddedMetadata<'_> {
    fn name(&self) -> &'static str {
        "exif"
    }

    fn created_at(&self, path: &Path) -> Option<PrimitiveDateTime> {
        self.decoder.created_at(path)
    }
}

/// Reads the date from a timestamp written into the path.
///
/// The whole path must contain exactly one timestamp; ambiguous paths are
/// rejected. The value is taken as naive wall-clock time.
pub struct FilenamePattern;

impl DateSource for FilenamePattern {
    fn name(&self) -> &'static str {
        "filename"
    }

    fn created_at(&self, path: &Path) -> Option<PrimitiveDateTime> {
        parse_filename_date(&path.to_string_lossy())
    }
}

fn parse_filename_date(path: &str) -> Option<PrimitiveDateTime> {
    let mut matches = FILENAME_DATE.captures_iter(path);
    let caps = matches.next()?;
    if matches.next().is_some() {
        return None;
    }

    let iso = format!(
        "{}-{}-{}T{}:{}:{}",
        &caps[1], &caps[2], &caps[3], &caps[4], &caps[5], &caps[6]
    );
    PrimitiveDateTime::parse(&iso, ISO_DATE_FORMAT).ok()
}

/// Resolves media creation dates through an ordered chain of sources.
pub struct DateResolver<'a> {
    sources: Vec<Box<dyn DateSource + 'a>>,
}

impl<'a> DateResolver<'a> {
    /// Standard chain: embedded metadata first, then the filename.
    pub fn new(decoder: &'a ExifDecoder) -> Self {
        Self::with_sources(vec![
            Box::new(EmbeddedMetadata::new(decoder)),
            Box::new(FilenamePattern),
        ])
    }

    pub fn with_sources(sources: Vec<Box<dyn DateSource + 'a>>) -> Self {
        Self { sources }
    }

    /// Resolve the creation date of `path`. The first source to answer wins.
    pub fn resolve(&self, path: &Path) -> Result<MediaFile> {
        if !has_media_extension(path) {
            return Err(ArchiveError::UnsupportedMedia(path.to_path_buf()));
        }

        for source in &self.sources {
            if let Some(created_at) = source.created_at(path) {
                log::debug!(
                    "Resolved {} to {} via {}",
                    path.display(),
                    created_at,
                    source.name()
                );
                return Ok(MediaFile::new(path.to_path_buf(), created_at));
            }
        }

        Err(ArchiveError::UnresolvedDate(path.to_path_buf()))
    }
}
