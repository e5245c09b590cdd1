//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after `Config::bootstrap` has resolved the
//! log file path. `RUST_LOG` takes precedence; `level` is the fallback.

use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::error::AppError;

/// Install the global tracing subscriber.
///
/// With a `log_file` (normally `Config::log_file()`) output is appended to
/// that file; without one it goes to stderr. The log directory is assumed to
/// exist with write permission — a file that cannot be opened is a fatal
/// startup error.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?;

    let writer = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::Logger(format!("cannot open log file '{}': {e}", path.display()))
                })?;
            BoxMakeWriter::new(file)
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .try_init()
        .map_err(|e| AppError::Logger(format!("cannot install subscriber: {e}")))?;

    Ok(())
}

/// Parse a log level string into a [`LevelFilter`], erroring on unrecognised
/// values. Useful for validating a level before calling [`init`].
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        for l in &["error", "warn", "info", "debug", "trace"] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn invalid_level_errors() {
        assert!(parse_level("loud").is_err());
        assert!(parse_level("").is_err());
        assert!(parse_level("INFO_LEVEL").is_err());
    }

    #[test]
    fn unopenable_log_file_errors() {
        let err = init("info", Some(Path::new("/nonexistent-dir/error.log"))).unwrap_err();
        assert!(err.to_string().contains("cannot open log file"));
    }

    #[test]
    fn init_to_stderr_succeeds_or_already_init() {
        // A prior test in the same process may have installed the subscriber.
        match init("info", None) {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("install subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
