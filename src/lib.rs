pub mod archive_core;
