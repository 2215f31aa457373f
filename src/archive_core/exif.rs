use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use time::{Date, Month, PrimitiveDateTime, Time};

/// Date tags consulted when no explicit list is given, in priority order.
pub const DEFAULT_DATE_TAGS: &[Tag] = &[Tag::DateTimeOriginal, Tag::DateTime];

/// Reads embedded EXIF metadata from media files.
///
/// Built once at startup and shared by reference with the resolver.
pub struct ExifDecoder {
    date_tags: Vec<Tag>,
}

impl ExifDecoder {
    pub fn new() -> Self {
        Self::with_tags(DEFAULT_DATE_TAGS.to_vec())
    }

    /// Decoder that consults `date_tags` in the given order.
    pub fn with_tags(date_tags: Vec<Tag>) -> Self {
        Self { date_tags }
    }

    /// Creation timestamp recorded in the file, if any.
    ///
    /// Unreadable files, unknown containers and missing or malformed tags all
    /// yield `None`.
    pub fn created_at(&self, path: &Path) -> Option<PrimitiveDateTime> {
        let file = File::open(path).ok()?;
        let exif = match Reader::new().read_from_container(&mut BufReader::new(file)) {
            Ok(exif) => exif,
            Err(e) => {
                log::debug!("No EXIF data in {}: {}", path.display(), e);
                return None;
            }
        };

        self.date_tags.iter().find_map(|tag| {
            let field = exif.get_field(*tag, In::PRIMARY)?;
            match field.value {
                Value::Ascii(ref parts) if !parts.is_empty() => parse_exif_datetime(&parts[0]),
                _ => None,
            }
        })
    }
}

impl Default for ExifDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an EXIF `YYYY:MM:DD HH:MM:SS` value into a naive timestamp.
fn parse_exif_datetime(raw: &[u8]) -> Option<PrimitiveDateTime> {
    let dt = exif::DateTime::from_ascii(raw).ok()?;
    let month = Month::try_from(dt.month).ok()?;
    let date = Date::from_calendar_date(i32::from(dt.year), month, dt.day).ok()?;
    let time = Time::from_hms(dt.hour, dt.minute, dt.second).ok()?;
    Some(PrimitiveDateTime::new(date, time))
}
