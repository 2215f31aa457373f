use crate::archive_core::error::{ArchiveError, Result};
use crate::archive_core::media::MediaFile;
use crate::archive_core::resolve::DateResolver;
use std::path::Path;
use walkdir::WalkDir;

/// Walk `root` and collect every entry whose creation date resolves.
///
/// Entries that fail resolution are skipped. A traversal error aborts the
/// whole scan.
pub fn scan_media(root: &Path, resolver: &DateResolver<'_>) -> Result<Vec<MediaFile>> {
    if !root.is_dir() {
        return Err(ArchiveError::NotADirectory(root.to_path_buf()));
    }

    log::info!("Scanning {}", root.display());

    let mut files = Vec::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(root) {
        let entry = entry?;
        match resolver.resolve(entry.path()) {
            Ok(file) => files.push(file),
            Err(e) => {
                skipped += 1;
                log::debug!("Skipping {}", e);
            }
        }
    }

    log::info!(
        "Scan complete: {} media files resolved, {} entries skipped",
        files.len(),
        skipped
    );

    Ok(files)
}
