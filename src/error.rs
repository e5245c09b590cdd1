//! Application-wide error types.

use thiserror::Error;

/// Errors surfaced during configuration bootstrap.
///
/// Every variant is fatal at startup: the application must not begin serving
/// requests with an unresolved upload location, a missing secret key, or a
/// broken log sink.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("secret key error: {0}")]
    Secret(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_names_the_value() {
        let e = AppError::Config("upload folder: temp directory empty".into());
        assert!(e.to_string().contains("upload folder"));
    }

    #[test]
    fn secret_error_display() {
        let e = AppError::Secret("secure random source unavailable".into());
        assert!(e.to_string().contains("secret key error"));
    }

    #[test]
    fn logger_error_display() {
        let e = AppError::Logger("cannot open log file".into());
        assert!(e.to_string().contains("cannot open log file"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
        let _: &dyn Error = &e;
    }
}
