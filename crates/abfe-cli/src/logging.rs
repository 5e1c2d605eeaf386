use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Installs the global subscriber: a compact stderr layer filtered by the
/// verbosity flags and a file layer that always captures at least INFO, so
/// the log file documents the run even at the default console level.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: &Path) -> Result<()> {
    let console_filter = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .with_filter(console_filter);

    let file = File::create(log_file).map_err(CliError::Io)?;
    let file_filter = std::cmp::max(console_filter, LevelFilter::INFO);
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
