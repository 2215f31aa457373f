use clap::Parser;
use simplelog::LevelFilter;

/// File name used when file logging is enabled.
pub const LOG_FILE_NAME: &str = "archive-images.log";

/// Moves every media file under the current directory into a YYYY-MM-DD
/// subdirectory named after its creation date.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Enable file logging to archive-images.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}
