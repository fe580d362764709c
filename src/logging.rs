//! Diagnostic logging setup.
//!
//! Output goes to stderr so the report on stdout is never interleaved with
//! log lines. The filter comes from the `-v` count only.

use anyhow::Result;
use std::io;
use tracing::Level;

/// Map the number of `-v` flags to a maximum log level.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once, before any work.
pub fn init(verbose: u8) -> Result<()> {
    let level = level_for_verbosity(verbose);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
