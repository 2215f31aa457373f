use crate::archive_core::error::{ArchiveError, Result};
use crate::archive_core::media::MediaFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Moves media files into `YYYY-MM-DD` directories under a root.
pub struct Organizer {
    root: PathBuf,
}

/// Counts from one organize pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrganizeStats {
    pub moved: usize,
    pub in_place: usize,
    pub failed: usize,
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved(PathBuf),
    InPlace,
}

impl Organizer {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Directory a file belongs in: `<root>/<YYYY-MM-DD>`.
    pub fn date_dir(&self, file: &MediaFile) -> Result<PathBuf> {
        Ok(self.root.join(file.created_date()?))
    }

    /// Full destination path, keeping the original file name.
    pub fn destination(&self, file: &MediaFile) -> Result<PathBuf> {
        let filename = file
            .filename()
            .ok_or_else(|| ArchiveError::MissingFileName(file.path.clone()))?;
        Ok(self.date_dir(file)?.join(filename))
    }

    /// Move every file into its date directory, in order.
    ///
    /// Failures are counted and never stop the pass. An existing file at the
    /// destination is overwritten.
    pub fn organize(&self, files: &[MediaFile]) -> OrganizeStats {
        let mut stats = OrganizeStats::default();

        for file in files {
            match self.organize_file(file) {
                Ok(Outcome::Moved(dest)) => {
                    stats.moved += 1;
                    log::debug!("Moved {} -> {}", file.path.display(), dest.display());
                }
                Ok(Outcome::InPlace) => {
                    stats.in_place += 1;
                    log::debug!("Already in place: {}", file.path.display());
                }
                Err(e) => {
                    stats.failed += 1;
                    log::debug!("Failed to move {}: {}", file.path.display(), e);
                }
            }
        }

        log::info!(
            "Organize complete: {} moved, {} already in place, {} failed",
            stats.moved,
            stats.in_place,
            stats.failed
        );

        stats
    }

    pub fn organize_file(&self, file: &MediaFile) -> Result<Outcome> {
        let date_dir = self.date_dir(file)?;
        if !date_dir.exists() {
            if let Err(e) = fs::create_dir_all(&date_dir) {
                log::debug!("Could not create {}: {}", date_dir.display(), e);
            }
        }

        let dest = self.destination(file)?;
        if dest == file.path {
            return Ok(Outcome::InPlace);
        }

        fs::rename(&file.path, &dest)?;
        Ok(Outcome::Moved(dest))
    }
}
