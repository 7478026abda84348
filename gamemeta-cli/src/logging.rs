//! Logger setup for the global `--quiet` / `--verbose` / `--logfile` flags.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` overrides the flag-derived level.
///
/// Info messages are user-facing output and are printed bare; other levels
/// carry a prefix, and a timestamp in verbose mode.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(quiet, verbose))
        .parse_default_env()
        .format(move |buf, record| {
            if verbose {
                write!(buf, "{} ", buf.timestamp_seconds())?;
            }
            match record.level() {
                Level::Info => writeln!(buf, "{}", record.args()),
                Level::Error => writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stderr, |t| t.red()),
                    record.args()
                ),
                Level::Warn => writeln!(
                    buf,
                    "{} {}",
                    "warning:".if_supports_color(Stderr, |t| t.yellow()),
                    record.args()
                ),
                level => writeln!(buf, "[{} {}] {}", level, record.target(), record.args()),
            }
        });

    match logfile {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::other(format!("Cannot create log file {}: {}", path.display(), e))
            })?;
            builder.target(Target::Pipe(Box::new(strip_ansi_escapes::Writer::new(file))));
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::other(format!("Logger already initialized: {e}")))
}
