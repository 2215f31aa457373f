use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;

#[path = "../../src/archive_core/fixtures.rs"]
mod fixtures;
pub use fixtures::jpeg_with_exif_datetime;

/// Write a photo with an embedded EXIF date into the temp dir.
pub fn write_exif_photo(temp_dir: &TempDir, name: &str, datetime: &str) -> ChildPath {
    let photo = temp_dir.child(name);
    photo.write_binary(&jpeg_with_exif_datetime(datetime)).unwrap();
    photo
}

/// Run the archiver with the temp dir as the working directory.
pub fn archive(temp_dir: &TempDir) -> assert_cmd::assert::Assert {
    archive_with_args(temp_dir, &[])
}

pub fn archive_with_args(temp_dir: &TempDir, args: &[&str]) -> assert_cmd::assert::Assert {
    Command::cargo_bin("archive-images")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(args)
        .assert()
}
