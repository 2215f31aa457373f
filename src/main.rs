use anyhow::{Context, Result};
use archive_images::archive_core::{
    Cli, DateResolver, ExifDecoder, LOG_FILE_NAME, Organizer, scan_media,
};
use clap::Parser;
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create(LOG_FILE_NAME)?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let root = std::env::current_dir().context("Unable to determine current directory")?;

    let decoder = ExifDecoder::new();
    let resolver = DateResolver::new(&decoder);
    let files = scan_media(&root, &resolver)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    println!("Found {} files to archive", files.len());

    Organizer::new(&root).organize(&files);

    Ok(())
}
