pub mod cli;
pub mod error;
pub mod exif;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod media;
pub mod organize;
pub mod resolve;
pub mod scan;

pub use cli::{Cli, LOG_FILE_NAME};
pub use error::{ArchiveError, Result};
pub use self::exif::ExifDecoder;
pub use media::{MediaFile, has_media_extension};
pub use organize::{OrganizeStats, Organizer, Outcome};
pub use resolve::{DateResolver, DateSource, EmbeddedMetadata, FilenamePattern};
pub use scan::scan_media;
