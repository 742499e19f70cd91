use std::{
    fs::File,
    io::IsTerminal,
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Map `-v` occurrences to a level: new records at INFO, ties at DEBUG, and
/// interim foldings at TRACE.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Color codes are only written to streams attached to a terminal.
fn wants_ansi(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(wants_ansi(&std::io::stderr()))
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Could not create log file {}", path.display()))?;
        let file_layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false);
        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }

    Ok(())
}
